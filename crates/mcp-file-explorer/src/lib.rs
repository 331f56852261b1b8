//! File Explorer MCP server
//!
//! Tools for browsing and manipulating files on the host filesystem:
//!
//! - `list_files` - list a directory with size and timestamps per entry
//! - `read_file` - read a file as text
//! - `create_file` - write a file, creating parent directories
//! - `delete_file` - delete a file or (optionally recursively) a directory
//!
//! There is no sandboxing: relative paths resolve against the configured
//! root, absolute paths are used as given.

use std::sync::Arc;

use mcp_http::{ServerInfo, ToolServer};
use mcp_registry::ToolRegistry;

pub mod error;
pub mod explorer;
pub mod tools;

pub use error::{FsError, Result};
pub use explorer::{CreatedFile, DeletedPath, FileContents, FileEntry, FileExplorer};
pub use tools::register_tools;

/// Default port for the file explorer binary
pub const DEFAULT_PORT: u16 = 3001;

/// Server exposing `explorer`
pub fn file_server(explorer: Arc<FileExplorer>) -> ToolServer {
    let registry = ToolRegistry::new();
    register_tools(&registry, explorer);
    ToolServer::new(
        ServerInfo::new(
            "File Explorer MCP",
            "MCP server for browsing and manipulating files",
            env!("CARGO_PKG_VERSION"),
        ),
        Arc::new(registry),
    )
}
