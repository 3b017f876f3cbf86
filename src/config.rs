/// Application configuration
///
/// Read once at startup from `config.json` in the platform config directory:
/// - Linux: ~/.config/photo-portfolio/config.json
/// - macOS: ~/Library/Application Support/photo-portfolio/config.json
/// - Windows: %APPDATA%\photo-portfolio\config.json
///
/// Every field has a default, so a partial file is fine and a missing file
/// means "all defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Overrides `assets_root` when set
pub const ASSETS_DIR_ENV: &str = "PORTFOLIO_ASSETS_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the asset tree (`projects/`, `images/`, `portfolio-*.jpg`)
    pub assets_root: PathBuf,
    /// Where to cache the scanned manifest as JSON (None = always scan)
    pub manifest_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            manifest_path: None,
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl Config {
    /// Load the config, falling back to defaults on any error
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                warn!("⚠️  {e}; using default config");
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Some(dir) = std::env::var_os(ASSETS_DIR_ENV) {
            config.assets_root = PathBuf::from(dir);
        }

        info!(assets = %config.assets_root.display(), "⚙️  Config loaded");
        config
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photo-portfolio");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?;
        Self::from_json(&json)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(Arc::new(e)))
    }
}
