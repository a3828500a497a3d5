//! Per-exchange tool routing table
//!
//! Merges the local registry with the pool's qualified namespace. Built once
//! at the start of an exchange; every call in that exchange resolves against
//! the same table even if the pool changes underneath.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::error::{ToolCallResult, ToolError};
use super::registry::{LocalHandler, LocalToolRegistry};
use crate::logging::Logger;
use crate::mcp::{ProviderPool, ToolBinding};
use crate::types::{ToolCall, ToolDescriptor};

/// Where a tool call goes
#[derive(Clone)]
pub enum ToolRoute {
    Local(LocalHandler),
    Remote {
        pool: Arc<ProviderPool>,
        binding: ToolBinding,
    },
}

impl std::fmt::Debug for ToolRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolRoute::Local(_) => write!(f, "Local"),
            ToolRoute::Remote { binding, .. } => f.debug_tuple("Remote").field(binding).finish(),
        }
    }
}

/// The merged tool surface offered to the model for one exchange
#[derive(Clone, Default)]
pub struct ToolCatalog {
    descriptors: Vec<ToolDescriptor>,
    routes: HashMap<String, ToolRoute>,
}

impl std::fmt::Debug for ToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolCatalog")
            .field("routes", &self.routes)
            .finish()
    }
}

impl ToolCatalog {
    /// Build from the local registry and, when given, the pool's current index.
    /// Local tools shadow remote tools with the same name.
    pub fn build(local: &LocalToolRegistry, pool: Option<&Arc<ProviderPool>>, logger: &dyn Logger) -> Self {
        let mut catalog = Self::default();

        for tool in local.iter() {
            catalog.descriptors.push(tool.descriptor.clone());
            catalog
                .routes
                .insert(tool.descriptor.name.clone(), ToolRoute::Local(Arc::clone(&tool.handler)));
        }

        if let Some(pool) = pool {
            for (descriptor, binding) in pool.bindings() {
                if catalog.routes.contains_key(&descriptor.name) {
                    logger.warn(&format!(
                        "[ToolCatalog] Remote tool {} shadowed by a local tool",
                        descriptor.name
                    ));
                    continue;
                }
                let route = ToolRoute::Remote {
                    pool: Arc::clone(pool),
                    binding,
                };
                catalog.routes.insert(descriptor.name.clone(), route);
                catalog.descriptors.push(descriptor);
            }
        }

        catalog
    }

    /// Tools offered to the model, local first
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    pub fn route(&self, name: &str) -> Option<&ToolRoute> {
        self.routes.get(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Parse the call's arguments and run it through its route.
    /// Arguments must be a JSON object.
    pub async fn execute(&self, call: &ToolCall) -> ToolCallResult<String> {
        let route = self
            .route(&call.name)
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;
        let arguments = call
            .parse_arguments()
            .map_err(|e| ToolError::invalid_arguments(&call.name, e.to_string()))?;
        if !arguments.is_object() {
            return Err(ToolError::invalid_arguments(
                &call.name,
                format!("expected a JSON object, got {}", json_kind(&arguments)),
            ));
        }

        match route {
            ToolRoute::Local(handler) => handler(&arguments),
            ToolRoute::Remote { pool, binding } => Ok(pool.call_remote(binding, arguments).await?),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
