//! Core processing building blocks: bounding-box detection, aspect-preserving
//! fit, content cropping, and RGBA coercion. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
