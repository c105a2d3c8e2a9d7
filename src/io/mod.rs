//! Collaborator boundaries: SVG dimension extraction, the external
//! thumbnailer process, and the copy-before-mutate backup convention.
pub mod backup;
pub mod svg;
pub mod thumbnailer;

pub use svg::SvgDimensions;
pub use thumbnailer::Thumbnailer;
