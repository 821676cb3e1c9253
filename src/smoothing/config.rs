//! Configuration for the vertex smoother.

use serde::{Deserialize, Serialize};

/// Configuration for polygon vertex smoothing.
///
/// Doubles as the `[smoothing]` section of the application config file, so
/// missing fields fall back to the defaults below.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Vertices closer than this (Euclidean, pixels) to the previously kept
    /// vertex are dropped by the merge pass.
    /// Default: 10.0
    pub merge_threshold: f64,

    /// Neighboring vertices whose coordinates differ by less than this along
    /// an axis (pixels) are snapped onto a shared axis line.
    /// Default: 5.0
    pub align_threshold: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            merge_threshold: 10.0,
            align_threshold: 5.0,
        }
    }
}

impl SmoothingConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the merge threshold.
    pub fn with_merge_threshold(mut self, value: f64) -> Self {
        self.merge_threshold = value;
        self
    }

    /// Builder-style setter for the alignment threshold.
    pub fn with_align_threshold(mut self, value: f64) -> Self {
        self.align_threshold = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = SmoothingConfig::default();
        assert_eq!(config.merge_threshold, 10.0);
        assert_eq!(config.align_threshold, 5.0);
    }

    #[test]
    fn test_builder_setters() {
        let config = SmoothingConfig::new()
            .with_merge_threshold(4.0)
            .with_align_threshold(2.0);
        assert_eq!(config.merge_threshold, 4.0);
        assert_eq!(config.align_threshold, 2.0);
    }

    #[test]
    fn test_partial_toml_section_keeps_defaults() {
        let config: SmoothingConfig = toml::from_str("merge_threshold = 4.0").unwrap();
        assert_eq!(config.merge_threshold, 4.0);
        assert_eq!(config.align_threshold, 5.0);
    }
}
