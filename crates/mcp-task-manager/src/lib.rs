//! Task manager MCP server
//!
//! Two shapes of the same tool family:
//!
//! - [`tools`] - backed by a [`TaskStore`]; tasks are addressed by `id`
//! - [`stub`] - stateless placeholder answers; tasks are addressed by `task_id`
//!
//! The parameter names differ between the two on purpose: each shape is
//! kept as its clients already call it.

use std::sync::Arc;

use mcp_http::{ServerInfo, ToolServer};
use mcp_registry::ToolRegistry;

pub mod store;
pub mod stub;
pub mod tools;

pub use store::{Task, TaskFilter, TaskStore};
pub use stub::register_stub_tools;
pub use tools::register_tools;

/// Default port for both task manager binaries
pub const DEFAULT_PORT: u16 = 3000;

/// Server backed by `store`
pub fn task_server(store: Arc<TaskStore>) -> ToolServer {
    let registry = ToolRegistry::new();
    register_tools(&registry, store);
    ToolServer::new(
        ServerInfo::new(
            "Task Manager MCP",
            "MCP server for managing tasks",
            env!("CARGO_PKG_VERSION"),
        ),
        Arc::new(registry),
    )
}

/// Stateless placeholder server
pub fn stub_server() -> ToolServer {
    let registry = ToolRegistry::new();
    register_stub_tools(&registry);
    ToolServer::new(
        ServerInfo::new(
            "Task Manager MCP",
            "MCP server for the Task Manager application",
            env!("CARGO_PKG_VERSION"),
        ),
        Arc::new(registry),
    )
}
