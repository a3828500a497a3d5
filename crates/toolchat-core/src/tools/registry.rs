//! Local tool registry
//!
//! A fixed lookup table from tool name to a synchronous handler. Handlers
//! only derive text from their arguments; they never block on I/O.

use std::sync::Arc;

use serde_json::Value;

use super::builtin;
use super::error::{ToolError, ToolCallResult};
use crate::types::ToolDescriptor;

/// Handler signature for local tools
pub type LocalHandler = Arc<dyn Fn(&Value) -> ToolCallResult<String> + Send + Sync>;

/// A local tool: what the model sees plus the function that runs it
#[derive(Clone)]
pub struct LocalTool {
    pub descriptor: ToolDescriptor,
    pub handler: LocalHandler,
}

impl std::fmt::Debug for LocalTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalTool")
            .field("name", &self.descriptor.name)
            .finish()
    }
}

/// Registry of in-process tools, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct LocalToolRegistry {
    tools: Vec<LocalTool>,
}

impl LocalToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tools
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_builtins(&mut registry);
        registry
    }

    /// Register a tool. A tool with the same name is replaced in place.
    pub fn register<F>(&mut self, descriptor: ToolDescriptor, handler: F)
    where
        F: Fn(&Value) -> ToolCallResult<String> + Send + Sync + 'static,
    {
        let tool = LocalTool {
            descriptor,
            handler: Arc::new(handler),
        };
        match self.tools.iter_mut().find(|t| t.descriptor.name == tool.descriptor.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Descriptors of every registered tool
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor.clone()).collect()
    }

    /// Registered tools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &LocalTool> {
        self.tools.iter()
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&LocalTool> {
        self.tools.iter().find(|t| t.descriptor.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Run a tool by name
    pub fn invoke(&self, name: &str, args: &Value) -> ToolCallResult<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        (tool.handler)(args)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
