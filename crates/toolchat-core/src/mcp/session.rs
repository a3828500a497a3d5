//! The seam between the pool and a live tool-server session

use async_trait::async_trait;
use serde_json::Value;

use super::error::McpResult;
use crate::config::ServerConfig;

/// A tool as reported by a server, before qualification
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteTool {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Option<Value>,
}

impl RemoteTool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }
}

/// One segment of a tool call result
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteContent {
    Text(String),
    /// Any non-text segment, kept as its wire JSON
    Other(Value),
}

impl RemoteContent {
    pub fn text(text: impl Into<String>) -> Self {
        RemoteContent::Text(text.into())
    }

    /// Textual form fed back to the model
    pub fn render(&self) -> String {
        match self {
            RemoteContent::Text(text) => text.clone(),
            RemoteContent::Other(value) => value.to_string(),
        }
    }
}

/// Result of a remote tool call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoteCallResult {
    pub content: Vec<RemoteContent>,
    /// The server flagged the call as failed
    pub is_error: bool,
}

impl RemoteCallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![RemoteContent::text(text)],
            is_error: false,
        }
    }

    /// All segments rendered and joined with newlines
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(RemoteContent::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A live session with one tool server
#[async_trait]
pub trait ToolSession: Send + Sync {
    /// The server's tool catalog, in the order it reports them
    async fn list_tools(&self) -> McpResult<Vec<RemoteTool>>;

    /// Call a tool by its original (unqualified) name
    async fn call_tool(&self, name: &str, arguments: Value) -> McpResult<RemoteCallResult>;

    /// End the session
    async fn close(self: Box<Self>) -> McpResult<()>;
}

/// Opens sessions to tool servers
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, provider_id: &str, config: &ServerConfig) -> McpResult<Box<dyn ToolSession>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_joined_text_serializes_non_text() {
        let result = RemoteCallResult {
            content: vec![
                RemoteContent::text("first"),
                RemoteContent::Other(json!({"type": "image", "mimeType": "image/png"})),
                RemoteContent::text("last"),
            ],
            is_error: false,
        };
        let text = result.joined_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "first");
        assert!(lines[1].contains("\"type\":\"image\""));
        assert_eq!(lines[2], "last");
    }

    #[test]
    fn test_empty_result_is_empty_text() {
        assert_eq!(RemoteCallResult::default().joined_text(), "");
    }
}
