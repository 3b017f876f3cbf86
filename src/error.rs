/// Error types for asset discovery and configuration
///
/// Errors carry their sources behind `Arc` so they stay `Clone` and can
/// travel inside UI messages.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AssetError {
    #[error("failed to read manifest {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error("failed to serialize manifest: {0}")]
    SerializeManifest(#[source] Arc<serde_json::Error>),

    #[error("failed to write manifest {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("asset scan task failed: {0}")]
    Join(String),
}

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("invalid config: {0}")]
    Parse(#[source] Arc<serde_json::Error>),
}
