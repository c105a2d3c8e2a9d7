use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Expected WIDTHxHEIGHT, e.g. 512x256")]
    InvalidSize { size: String },

    #[error("Size dimensions must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logoprep error: {0}")]
    Lib(#[from] logoprep::Error),
}

/// Parse a `WIDTHxHEIGHT` size argument into positive dimensions.
pub fn parse_size(size: &str) -> Result<(u32, u32), AppError> {
    let invalid = || AppError::InvalidSize {
        size: size.to_string(),
    };

    let (w, h) = size.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(AppError::ZeroSize {
            size: size.to_string(),
        });
    }
    Ok((width, height))
}
