//! Tool server configuration
//!
//! The server list uses the same JSON shape users paste into the front-end:
//!
//! ```json
//! {
//!   "servers": {
//!     "local": { "type": "http", "url": "http://localhost:3001/mcp" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;

/// Transports a tool server can be reached over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Session-based HTTP transport
    Http,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Http => "http",
        }
    }
}

/// Connection settings for a single tool server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport type as written in the config (only `"http"` is supported)
    #[serde(rename = "type")]
    pub kind: String,
    /// Endpoint URL
    #[serde(default)]
    pub url: String,
}

impl ServerConfig {
    /// Create an HTTP server entry
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            kind: TransportKind::Http.as_str().to_string(),
            url: url.into(),
        }
    }

    /// The transport this entry asks for, or `None` when the type is not supported
    pub fn transport(&self) -> Option<TransportKind> {
        match self.kind.as_str() {
            "http" => Some(TransportKind::Http),
            _ => None,
        }
    }
}

/// The full set of tool servers to attach, keyed by provider id
///
/// Providers are kept sorted by id, which is also the order catalogs are
/// merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub servers: BTreeMap<String, ServerConfig>,
}

impl McpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a server entry
    pub fn with_server(mut self, provider_id: impl Into<String>, config: ServerConfig) -> Self {
        self.servers.insert(provider_id.into(), config);
        self
    }

    /// Parse the JSON form
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text.trim())?)
    }

    /// Load the JSON form from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }
}
