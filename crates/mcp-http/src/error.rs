//! Error types for the HTTP transport

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a tool server
#[derive(Debug, Error)]
pub enum Error {
    /// Socket or runtime IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::ServerConfig`]
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Global tracing subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}
