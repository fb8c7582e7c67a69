use std::path::PathBuf;

use thiserror::Error;

/// Failures while storing a snapshot.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures while loading settings or rule files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to load settings: {0}")]
    Settings(#[from] confy::ConfyError),
}

#[derive(Debug, Error)]
pub enum LiveFeedError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}
