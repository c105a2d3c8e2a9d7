pub mod alpha;
pub mod bbox;
pub mod crop;
pub mod fit;
