use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Alpha value above which a pixel counts as content
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,
    /// Per-axis crop padding as a fraction of the image dimension
    #[serde(default = "default_padding_fraction")]
    pub padding_fraction: f64,
    /// Target dimensions for aspect-fit; None means natural output size
    #[serde(default)]
    pub size: Option<(u32, u32)>,
    /// If true, copy originals into the backup directory before mutating
    #[serde(default = "default_backup")]
    pub backup: bool,
}

fn default_alpha_threshold() -> u8 {
    5
}

fn default_padding_fraction() -> f64 {
    0.01
}

fn default_backup() -> bool {
    true
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            alpha_threshold: default_alpha_threshold(),
            padding_fraction: default_padding_fraction(),
            size: None,
            backup: default_backup(),
        }
    }
}

impl ProcessingParams {
    /// Load parameters from a JSON preset file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| crate::error::Error::Processing(format!("invalid params file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = ProcessingParams::default();
        assert_eq!(params.alpha_threshold, 5);
        assert!((params.padding_fraction - 0.01).abs() < f64::EPSILON);
        assert_eq!(params.size, None);
        assert!(params.backup);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: ProcessingParams = serde_json::from_str(r#"{"alpha_threshold": 10}"#).unwrap();
        assert_eq!(params.alpha_threshold, 10);
        assert!((params.padding_fraction - 0.01).abs() < f64::EPSILON);
        assert!(params.backup);
    }
}
