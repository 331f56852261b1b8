//! Tool registry shared by the MCP example servers
//!
//! Every example server in this workspace follows the same contract: it
//! registers a handful of named tools, each with a descriptive parameter
//! schema and an async handler, and hands the registry to a transport.
//!
//! ```text
//! [ Transport (HTTP / JSON-RPC) ]
//!        | invoke(name, parameters)
//!        v
//! [ ToolRegistry ] --describe()--> discovery
//!        | handler.call(params)
//!        v
//! [ Domain handlers (tasks, files, weather) ]
//! ```
//!
//! # Failure contract
//!
//! [`ToolRegistry::invoke`] always returns a [`ToolResult`]. Unknown tool
//! names and handler failures are both values, so a transport can always
//! answer with a well-formed response.

pub mod error;
pub mod params;
pub mod registry;
pub mod schema;
pub mod tool;

pub use error::{ToolError, ToolResult, outcome_to_value};
pub use params::Params;
pub use registry::ToolRegistry;
pub use schema::{ParameterSchema, Property, PropertyType};
pub use tool::{ToolDescription, ToolDescriptor, ToolHandler};
