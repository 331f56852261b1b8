//! Tool descriptors and handlers

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ToolResult;
use crate::params::Params;
use crate::schema::ParameterSchema;

/// Asynchronous handler behind a registered tool.
///
/// Handlers interpret their own parameters and report every failure through
/// the returned [`ToolResult`]; the registry does not inspect either side.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, params: Params) -> ToolResult;
}

/// Adapter turning an async closure into a [`ToolHandler`]
struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> ToolHandler for FnHandler<F>
where
    F: Fn(Params) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ToolResult> + Send + 'static,
{
    async fn call(&self, params: Params) -> ToolResult {
        (self.0)(params).await
    }
}

/// A named, invocable tool
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler,
        }
    }

    /// Build a descriptor whose handler is an async closure
    pub fn from_fn<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterSchema,
        handler: F,
    ) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult> + Send + 'static,
    {
        Self::new(name, description, parameters, Arc::new(FnHandler(handler)))
    }

    /// Discovery view of this tool, without the handler
    pub fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Tool metadata as exposed for discovery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}
