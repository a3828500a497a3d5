//! Mock tool servers for testing
//!
//! Deterministic, in-process stand-ins for MCP servers. No network involved.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::error::{McpError, McpResult};
use super::session::{Connector, RemoteCallResult, RemoteTool, ToolSession};
use crate::config::ServerConfig;

type MockToolFn = Arc<dyn Fn(&Value) -> McpResult<RemoteCallResult> + Send + Sync>;

#[derive(Clone)]
struct MockTool {
    tool: RemoteTool,
    handler: MockToolFn,
    delay: Option<Duration>,
}

/// Counters shared by every session opened against one mock server
#[derive(Debug, Default)]
pub struct MockServerStats {
    connects: AtomicUsize,
    closes: AtomicUsize,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockServerStats {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Every `(tool name, arguments)` pair received, in call order
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }
}

/// An in-memory tool server definition
#[derive(Clone, Default)]
pub struct MockToolServer {
    tools: Vec<MockTool>,
    fail_listing: bool,
    fail_close: bool,
    stats: Arc<MockServerStats>,
}

impl MockToolServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool with a custom handler
    pub fn with_tool<F>(mut self, tool: RemoteTool, handler: F) -> Self
    where
        F: Fn(&Value) -> McpResult<RemoteCallResult> + Send + Sync + 'static,
    {
        self.tools.push(MockTool {
            tool,
            handler: Arc::new(handler),
            delay: None,
        });
        self
    }

    /// Add a tool that always answers with `reply`
    pub fn with_text_tool(self, name: &str, reply: &str) -> Self {
        let reply = reply.to_string();
        self.with_tool(RemoteTool::new(name), move |_| Ok(RemoteCallResult::text(reply.clone())))
    }

    /// Make calls to `tool_name` take `delay` before answering
    pub fn with_delay(mut self, tool_name: &str, delay: Duration) -> Self {
        if let Some(tool) = self.tools.iter_mut().find(|t| t.tool.name == tool_name) {
            tool.delay = Some(delay);
        }
        self
    }

    /// Make `tools/list` fail on this server
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make closing the session fail
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn stats(&self) -> Arc<MockServerStats> {
        Arc::clone(&self.stats)
    }
}

struct MockSession {
    server: MockToolServer,
}

#[async_trait]
impl ToolSession for MockSession {
    async fn list_tools(&self) -> McpResult<Vec<RemoteTool>> {
        if self.server.fail_listing {
            return Err(McpError::Protocol("tools/list not available".to_string()));
        }
        Ok(self.server.tools.iter().map(|t| t.tool.clone()).collect())
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> McpResult<RemoteCallResult> {
        self.server.stats.calls.lock().push((name.to_string(), arguments.clone()));
        let tool = self
            .server
            .tools
            .iter()
            .find(|t| t.tool.name == name)
            .ok_or_else(|| McpError::ToolExecutionFailed(format!("Tool {} not found", name)))?;
        if let Some(delay) = tool.delay {
            tokio::time::sleep(delay).await;
        }
        (tool.handler)(&arguments)
    }

    async fn close(self: Box<Self>) -> McpResult<()> {
        self.server.stats.closes.fetch_add(1, Ordering::SeqCst);
        if self.server.fail_close {
            return Err(McpError::Protocol("session already gone".to_string()));
        }
        Ok(())
    }
}

/// Connector resolving provider ids to mock servers
#[derive(Clone, Default)]
pub struct MockConnector {
    servers: HashMap<String, MockToolServer>,
    unreachable: HashMap<String, String>,
    dial_delay: Option<Duration>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server(mut self, provider_id: &str, server: MockToolServer) -> Self {
        self.servers.insert(provider_id.to_string(), server);
        self
    }

    /// Dialing `provider_id` fails with `message`
    pub fn with_unreachable(mut self, provider_id: &str, message: &str) -> Self {
        self.unreachable.insert(provider_id.to_string(), message.to_string());
        self
    }

    /// Every dial takes `delay`
    pub fn with_dial_delay(mut self, delay: Duration) -> Self {
        self.dial_delay = Some(delay);
        self
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, provider_id: &str, _config: &ServerConfig) -> McpResult<Box<dyn ToolSession>> {
        if let Some(delay) = self.dial_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.unreachable.get(provider_id) {
            return Err(McpError::ConnectionFailed(message.clone()));
        }
        let server = self
            .servers
            .get(provider_id)
            .ok_or_else(|| McpError::ConnectionFailed(format!("no server at \"{}\"", provider_id)))?;
        server.stats.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            server: server.clone(),
        }))
    }
}
