//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, and XML errors, and provides semantic variants
//! for argument validation and collaborator failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode/encode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("SVG parse error: {0}")]
    Svg(#[from] quick_xml::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Unsupported source format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Thumbnailer error: {0}")]
    Thumbnailer(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
