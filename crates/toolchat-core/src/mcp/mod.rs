//! MCP (Model Context Protocol) tool servers
//!
//! Uses the official rmcp SDK to talk to servers over streamable HTTP, and
//! merges every attached server's catalog into one qualified namespace.
//!
//! # Example
//!
//! ```rust,ignore
//! use toolchat_core::mcp::{HttpConnector, ProviderPool};
//! use toolchat_core::config::McpConfig;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new());
//! let pool = ProviderPool::new(Arc::new(HttpConnector::new(logger.clone())), logger);
//!
//! let config = McpConfig::load("servers.json")?;
//! let report = pool.attach(&config).await?;
//!
//! // Remote tools are exposed as mcp_<server>_<tool>
//! let text = pool.dispatch("mcp_local_search", json!({"q": "rust"})).await?;
//! ```

mod client;
mod error;
pub mod mock;
mod naming;
mod pool;
mod session;

pub use client::{HttpConnector, McpClient};
pub use error::{McpError, McpResult, ProviderFailure};
pub use naming::{describe, qualify, sanitize, QUALIFIED_PREFIX};
pub use pool::{AttachReport, PoolStatus, ProviderPool, ToolBinding, ToolIndex, DEFAULT_CONNECT_TIMEOUT};
pub use session::{Connector, RemoteCallResult, RemoteContent, RemoteTool, ToolSession};
