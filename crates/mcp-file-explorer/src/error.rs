//! Error types for filesystem operations

use std::path::Path;

use mcp_registry::ToolError;
use thiserror::Error;

/// Result type alias for file explorer operations
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors raised by [`crate::FileExplorer`]
#[derive(Debug, Error)]
pub enum FsError {
    /// An IO call failed for `path`
    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Non-recursive delete of a directory that still has entries
    #[error("Directory is not empty. Use recursive=true to delete non-empty directories.")]
    DirectoryNotEmpty { path: String },
}

impl FsError {
    /// Build a `map_err` adapter tagging an IO error with its operation and path
    pub(crate) fn io<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| FsError::Io {
            op,
            path: path.display().to_string(),
            source,
        }
    }

    /// Underlying IO error kind, if any
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FsError::Io { source, .. } => Some(source.kind()),
            FsError::DirectoryNotEmpty { .. } => None,
        }
    }
}

impl From<FsError> for ToolError {
    fn from(err: FsError) -> Self {
        ToolError::handler(err.to_string())
    }
}
