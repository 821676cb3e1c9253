//! Application configuration.
//!
//! Loads configuration from a TOML file. Every section and every field is
//! optional; anything missing falls back to the defaults below, so an empty
//! or absent file yields a fully working demo setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::smoothing::SmoothingConfig;

/// Config file looked for when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "vipani.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[smoothing]`: vertex smoothing thresholds
    pub smoothing: SmoothingConfig,
    /// `[catalog]`: where the document collections live
    pub catalog: CatalogConfig,
    /// `[server]`: query server bind address and static files
    pub server: ServerConfig,
}

/// Catalog storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the catalog collection files.
    /// Default: "data"
    pub data_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

/// Query server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    /// Default: "127.0.0.1"
    pub address: String,
    /// Bind port.
    /// Default: 5001
    pub port: u16,
    /// Directory of static frontend files, mounted only when it exists.
    /// Default: "static"
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5001,
            static_dir: "static".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `vipani.toml` from the working directory if present, otherwise
    /// fall back to defaults. A present but invalid file is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.smoothing.merge_threshold, 10.0);
        assert_eq!(config.smoothing.align_threshold, 5.0);
        assert_eq!(config.catalog.data_dir, "data");
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.static_dir, "static");
    }

    #[test]
    fn test_full_toml_deserialization() {
        let toml_content = r#"
[smoothing]
merge_threshold = 8.0
align_threshold = 3.0

[catalog]
data_dir = "/var/lib/vipani"

[server]
address = "0.0.0.0"
port = 8080
static_dir = "www"
"#;
        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.smoothing.merge_threshold, 8.0);
        assert_eq!(config.smoothing.align_threshold, 3.0);
        assert_eq!(config.catalog.data_dir, "/var/lib/vipani");
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "www");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.smoothing.merge_threshold, 10.0);
        assert_eq!(config.catalog.data_dir, "data");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5001);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vipani.toml");
        fs::write(&path, "[smoothing]\nmerge_threshold = 6.0\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.smoothing.merge_threshold, 6.0);
        assert_eq!(config.smoothing.align_threshold, 5.0);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vipani.toml");
        fs::write(&path, "[smoothing\nmerge_threshold = ").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(dir.path().join("absent.toml")).is_err());
    }
}
