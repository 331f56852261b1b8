//! Tool registry storage and dispatch

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ToolError, ToolResult};
use crate::params::Params;
use crate::tool::{ToolDescription, ToolDescriptor};

#[derive(Default)]
struct Entries {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

/// Central registry of invocable tools.
///
/// Tools are kept in registration order. Registering a name that already
/// exists replaces the earlier entry in place (last write wins).
///
/// The registry holds no per-invocation state. `invoke` takes a read lock
/// only long enough to clone the handler, so concurrent invocations never
/// wait on each other here.
#[derive(Default)]
pub struct ToolRegistry {
    entries: RwLock<Entries>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a tool, returning the descriptor it replaced, if any.
    ///
    /// Re-registering a name replaces the handler, description and schema
    /// but keeps the original position in [`describe`](Self::describe).
    /// Descriptors with an empty name are ignored.
    pub fn register(&self, descriptor: ToolDescriptor) -> Option<ToolDescriptor> {
        if descriptor.name.is_empty() {
            warn!("Ignoring tool registration with an empty name");
            return None;
        }

        let mut entries = self.write();
        match entries.index.get(&descriptor.name).copied() {
            Some(slot) => {
                debug!(tool = %descriptor.name, "Replacing registered tool");
                Some(std::mem::replace(&mut entries.tools[slot], descriptor))
            }
            None => {
                debug!(tool = %descriptor.name, "Registering tool");
                let slot = entries.tools.len();
                entries.index.insert(descriptor.name.clone(), slot);
                entries.tools.push(descriptor);
                None
            }
        }
    }

    /// Invoke a tool by exact name.
    ///
    /// An unknown name resolves to [`ToolError::NotFound`]; a non-object
    /// parameter value resolves to [`ToolError::InvalidParams`]. Otherwise
    /// the handler's own result is returned unchanged.
    pub async fn invoke(&self, name: &str, parameters: Value) -> ToolResult {
        let handler = {
            let entries = self.read();
            entries
                .index
                .get(name)
                .map(|&slot| entries.tools[slot].handler.clone())
        };

        let Some(handler) = handler else {
            debug!(tool = %name, "Invocation of unknown tool");
            return Err(ToolError::NotFound(name.to_string()));
        };

        let params = Params::from_value(parameters)?;
        let outcome = handler.call(params).await;
        if let Err(e) = &outcome {
            debug!(tool = %name, kind = e.kind(), error = %e, "Tool returned a failure");
        }
        outcome
    }

    /// Discovery list of all tools in registration order
    pub fn describe(&self) -> Vec<ToolDescription> {
        self.read()
            .tools
            .iter()
            .map(ToolDescriptor::describe)
            .collect()
    }

    /// Check if a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.read().index.contains_key(name)
    }

    /// Registered tool names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.read().tools.iter().map(|t| t.name.clone()).collect()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.read().tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
