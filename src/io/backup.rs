use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Copy `path` into `backup_dir` under its own file name, creating the
/// directory if needed. An existing backup is never overwritten; the first
/// copy is the authoritative original. Returns whether a copy was made.
pub fn backup_original(path: &Path, backup_dir: &Path) -> Result<bool> {
    fs::create_dir_all(backup_dir)?;

    let file_name = path.file_name().ok_or_else(|| {
        crate::error::Error::Processing(format!("no file name in {:?}", path))
    })?;
    let destination = backup_dir.join(file_name);

    if destination.exists() {
        info!("Backup already exists: {:?}", destination);
        return Ok(false);
    }

    fs::copy(path, &destination)?;
    info!("Backed up {:?} to {:?}", path, destination);
    Ok(true)
}
