//! MCP client using the official rmcp SDK
//!
//! Connects to tool servers over the streamable HTTP transport. The server
//! assigns a session id during the initialize handshake; every later request
//! rides on that session until the client cancels it.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::{
    model::{
        CallToolRequestParams, ClientCapabilities, ClientInfo, Content, Implementation, RawContent,
        Tool,
    },
    service::RunningService,
    transport::StreamableHttpClientTransport,
    RoleClient, ServiceExt,
};
use serde_json::Value;

use super::error::{McpError, McpResult};
use super::session::{Connector, RemoteCallResult, RemoteContent, RemoteTool, ToolSession};
use crate::config::ServerConfig;
use crate::logging::Logger;

/// MCP client session with one server
pub struct McpClient {
    /// The underlying rmcp running service
    client: RunningService<RoleClient, ClientInfo>,
    /// Server id from the config, used in log lines
    provider_id: String,
    logger: Arc<dyn Logger>,
}

impl McpClient {
    /// Connect to an MCP server over HTTP and run the initialize handshake
    pub async fn connect_http(provider_id: &str, url: &str, logger: Arc<dyn Logger>) -> McpResult<Self> {
        logger.info(&format!(
            "[McpClient] Connecting to MCP server \"{}\" at {}",
            provider_id, url
        ));

        let transport = StreamableHttpClientTransport::from_uri(url);

        let client_info = ClientInfo {
            meta: None,
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: format!("toolchat-{}", provider_id),
                title: Some("Toolchat".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
        };

        let client = client_info
            .serve(transport)
            .await
            .map_err(|e| McpError::ConnectionFailed(e.to_string()))?;

        let this = Self {
            client,
            provider_id: provider_id.to_string(),
            logger,
        };
        match this.server_info() {
            Some(info) => this.logger.info(&format!(
                "[McpClient] Connected to MCP server \"{}\" ({} {})",
                provider_id, info.name, info.version
            )),
            None => this.logger.info(&format!("[McpClient] Connected to MCP server \"{}\"", provider_id)),
        }

        Ok(this)
    }

    /// Get server info reported during the handshake
    pub fn server_info(&self) -> Option<&Implementation> {
        self.client.peer_info().map(|info| &info.server_info)
    }

    /// Close the session
    pub async fn close(self) -> McpResult<()> {
        self.logger.info(&format!(
            "[McpClient] Disconnecting from MCP server \"{}\"",
            self.provider_id
        ));
        self.client
            .cancel()
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;
        Ok(())
    }
}

fn to_remote_tool(tool: Tool) -> RemoteTool {
    RemoteTool {
        name: tool.name.to_string(),
        description: tool.description.map(|s| s.to_string()),
        input_schema: Some(Value::Object(tool.input_schema.as_ref().clone())),
    }
}

fn to_remote_content(content: &Content) -> RemoteContent {
    match &content.raw {
        RawContent::Text(t) => RemoteContent::Text(t.text.clone()),
        _ => RemoteContent::Other(
            serde_json::to_value(content).unwrap_or_else(|e| Value::String(e.to_string())),
        ),
    }
}

#[async_trait]
impl ToolSession for McpClient {
    async fn list_tools(&self) -> McpResult<Vec<RemoteTool>> {
        let result = self
            .client
            .list_tools(Default::default())
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;

        self.logger.debug(&format!(
            "[McpClient] \"{}\" listed {} tools",
            self.provider_id,
            result.tools.len()
        ));

        Ok(result.tools.into_iter().map(to_remote_tool).collect())
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> McpResult<RemoteCallResult> {
        self.logger.info(&format!(
            "[McpClient] Calling tool \"{}\" on \"{}\"",
            name, self.provider_id
        ));

        let params = CallToolRequestParams {
            meta: None,
            name: name.to_owned().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        };

        let result = self
            .client
            .call_tool(params)
            .await
            .map_err(|e| McpError::ToolExecutionFailed(e.to_string()))?;

        Ok(RemoteCallResult {
            content: result.content.iter().map(to_remote_content).collect(),
            is_error: result.is_error.unwrap_or(false),
        })
    }

    async fn close(self: Box<Self>) -> McpResult<()> {
        McpClient::close(*self).await
    }
}

/// Connector that dials servers with [`McpClient::connect_http`]
pub struct HttpConnector {
    logger: Arc<dyn Logger>,
}

impl HttpConnector {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(&self, provider_id: &str, config: &ServerConfig) -> McpResult<Box<dyn ToolSession>> {
        if config.url.is_empty() {
            return Err(McpError::ConnectionFailed("missing url".to_string()));
        }
        let client = McpClient::connect_http(provider_id, &config.url, Arc::clone(&self.logger)).await?;
        Ok(Box::new(client))
    }
}
