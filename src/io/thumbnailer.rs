use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

/// Render size used when the source dimensions are unknown.
pub const DEFAULT_RENDER_SIZE: u32 = 2000;

/// External vector-rasterization collaborator.
///
/// Wraps a qlmanage-style OS thumbnailer: invoked as
/// `<tool> -t -s <size> -o <dir> <file>`, it drops `<file-name>.png` next to
/// the source. This crate only consumes that output file; rendering quality
/// is entirely the tool's business.
#[derive(Debug, Clone)]
pub struct Thumbnailer {
    tool: String,
}

impl Default for Thumbnailer {
    fn default() -> Self {
        Self::new("qlmanage")
    }
}

impl Thumbnailer {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Resolve the tool binary on PATH.
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(&self.tool)
            .map_err(|e| Error::Thumbnailer(format!("{} not found: {}", self.tool, e)))
    }

    /// Render `input` to a PNG thumbnail with long side `size`, returning the
    /// path of the generated file. The caller owns (and usually deletes) it.
    pub fn render(&self, input: &Path, size: u32) -> Result<PathBuf> {
        let tool = self.locate()?;
        let out_dir = input.parent().unwrap_or_else(|| Path::new("."));
        let file_name = input
            .file_name()
            .ok_or_else(|| Error::Thumbnailer(format!("no file name in {:?}", input)))?;

        info!("Rendering {:?} at size {} via {:?}", input, size, tool);

        let output = Command::new(&tool)
            .arg("-t")
            .arg("-s")
            .arg(size.to_string())
            .arg("-o")
            .arg(out_dir)
            .arg(input)
            .output()?;

        if !output.status.success() {
            return Err(Error::Thumbnailer(format!(
                "{:?} exited with {}: {}",
                tool,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let expected = out_dir.join(format!("{}.png", file_name.to_string_lossy()));
        if !expected.exists() {
            return Err(Error::Thumbnailer(format!(
                "expected output {:?} was not created",
                expected
            )));
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_reported() {
        let thumbnailer = Thumbnailer::new("logoprep-no-such-renderer");
        match thumbnailer.render(Path::new("logo.svg"), 512) {
            Err(Error::Thumbnailer(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected Thumbnailer error, got {:?}", other),
        }
    }
}
