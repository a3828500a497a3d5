//! Provider pool
//!
//! Owns every live tool-server session and the flattened, qualified tool
//! namespace built from their catalogs.
//!
//! ## Locking
//!
//! - `state` (`tokio::sync::RwLock`): the sessions plus the routing index.
//!   `attach`/`detach` hold the write lock for their whole duration, calls
//!   hold a read lock while they are in flight.
//! - Every attach starts a new epoch. Bindings carry the epoch of the session
//!   they were listed from, so a binding never reaches a later session that
//!   reuses the same provider id.
//! - `snapshot` and `status` (`parking_lot::RwLock`): copies published after
//!   every change so front-ends can read them without awaiting.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;

use super::error::{McpError, McpResult, ProviderFailure};
use super::naming::{describe, qualify};
use super::session::{Connector, RemoteTool, ToolSession};
use crate::config::{McpConfig, ServerConfig};
use crate::logging::Logger;
use crate::types::{empty_object_schema, ToolDescriptor};

/// Default time allowed for one server's handshake
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a qualified tool name routes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBinding {
    pub provider_id: String,
    /// Tool name as the server knows it
    pub tool_name: String,
    /// Attach epoch of the owning session
    pub epoch: u64,
}

/// Flattened view of every attached catalog
#[derive(Debug, Clone, Default)]
pub struct ToolIndex {
    /// Attached provider ids, ascending
    providers: Vec<String>,
    /// Qualified descriptors in merge order
    descriptors: Vec<ToolDescriptor>,
    mapping: HashMap<String, ToolBinding>,
}

impl ToolIndex {
    /// Add one remote tool. Returns the binding it displaced, if any.
    fn insert(&mut self, provider_id: &str, epoch: u64, tool: RemoteTool) -> Option<ToolBinding> {
        let qualified = qualify(provider_id, &tool.name);
        let descriptor = ToolDescriptor::new(
            qualified.clone(),
            describe(provider_id, &tool.name, tool.description.as_deref()),
        )
        .with_schema(tool.input_schema.unwrap_or_else(empty_object_schema));
        let binding = ToolBinding {
            provider_id: provider_id.to_string(),
            tool_name: tool.name,
            epoch,
        };

        let displaced = self.mapping.insert(qualified.clone(), binding);
        match self.descriptors.iter_mut().find(|d| d.name == qualified) {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
        displaced
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    pub fn binding(&self, qualified: &str) -> Option<&ToolBinding> {
        self.mapping.get(qualified)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn tool_count(&self) -> usize {
        self.descriptors.len()
    }

    /// `"<n> tools from <m> server(s)"`
    pub fn summary(&self) -> String {
        format!(
            "{} tools from {} server(s)",
            self.descriptors.len(),
            self.providers.len()
        )
    }
}

/// Pool connection status, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PoolStatus {
    #[default]
    Disconnected,
    Connecting,
    /// Attached; carries the pool summary
    Connected(String),
    /// The last attach failed
    Error(String),
}

impl PoolStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, PoolStatus::Connected(_))
    }
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolStatus::Disconnected => write!(f, "Disconnected"),
            PoolStatus::Connecting => write!(f, "Connecting..."),
            PoolStatus::Connected(summary) => write!(f, "Connected: {}", summary),
            PoolStatus::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// What a successful attach produced
#[derive(Debug)]
pub struct AttachReport {
    /// Providers now attached, ascending
    pub connected: Vec<String>,
    /// Providers that failed; the attach still succeeded
    pub failures: Vec<ProviderFailure>,
    pub tool_count: usize,
}

struct Connection {
    session: Box<dyn ToolSession>,
    epoch: u64,
}

#[derive(Default)]
struct PoolState {
    connections: BTreeMap<String, Connection>,
    index: Arc<ToolIndex>,
    epoch: u64,
}

/// Manages the set of attached tool servers
pub struct ProviderPool {
    connector: Arc<dyn Connector>,
    logger: Arc<dyn Logger>,
    connect_timeout: Duration,
    state: tokio::sync::RwLock<PoolState>,
    snapshot: parking_lot::RwLock<Arc<ToolIndex>>,
    status: parking_lot::RwLock<PoolStatus>,
}

impl ProviderPool {
    pub fn new(connector: Arc<dyn Connector>, logger: Arc<dyn Logger>) -> Self {
        Self {
            connector,
            logger,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            state: tokio::sync::RwLock::new(PoolState::default()),
            snapshot: parking_lot::RwLock::new(Arc::new(ToolIndex::default())),
            status: parking_lot::RwLock::new(PoolStatus::Disconnected),
        }
    }

    /// Set the per-server handshake timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Replace the pool with sessions to every server in `config`.
    ///
    /// Succeeds when at least one server attaches; the others are reported in
    /// [`AttachReport::failures`]. When none attach the pool is left empty.
    pub async fn attach(&self, config: &McpConfig) -> McpResult<AttachReport> {
        let mut state = self.state.write().await;
        self.set_status(PoolStatus::Connecting);
        self.teardown(&mut state).await;

        let result = self.attach_locked(&mut state, config).await;
        self.publish(&state);
        match &result {
            Ok(_) => self.set_status(PoolStatus::Connected(state.index.summary())),
            Err(e) => {
                self.logger.error(&format!("[ProviderPool] Attach failed: {}", e));
                self.set_status(PoolStatus::Error(e.to_string()));
            }
        }
        result
    }

    async fn attach_locked(&self, state: &mut PoolState, config: &McpConfig) -> McpResult<AttachReport> {
        if config.is_empty() {
            return Err(McpError::NoServersConfigured);
        }

        self.logger.info(&format!(
            "[ProviderPool] Attaching {} server(s)",
            config.len()
        ));

        state.epoch += 1;
        let epoch = state.epoch;
        let attempts = config
            .servers
            .iter()
            .map(|(id, server)| async move { (id.clone(), self.dial(id, server).await) });
        let outcomes = join_all(attempts).await;

        let mut failures = Vec::new();
        for (provider_id, outcome) in outcomes {
            match outcome {
                Ok(session) => {
                    state.connections.insert(provider_id, Connection { session, epoch });
                }
                Err(error) => {
                    self.logger.warn(&format!(
                        "[ProviderPool] Failed to connect to \"{}\": {}",
                        provider_id, error
                    ));
                    failures.push(ProviderFailure { provider_id, error });
                }
            }
        }

        if state.connections.is_empty() {
            return Err(McpError::AllProvidersUnreachable { failures });
        }

        self.rebuild_index(state).await;

        Ok(AttachReport {
            connected: state.connections.keys().cloned().collect(),
            failures,
            tool_count: state.index.tool_count(),
        })
    }

    async fn dial(&self, provider_id: &str, server: &ServerConfig) -> McpResult<Box<dyn ToolSession>> {
        if server.transport().is_none() {
            return Err(McpError::UnsupportedProviderType {
                provider_id: provider_id.to_string(),
                kind: server.kind.clone(),
            });
        }
        match tokio::time::timeout(self.connect_timeout, self.connector.connect(provider_id, server)).await {
            Ok(result) => result,
            Err(_) => Err(McpError::ConnectionFailed(format!(
                "timed out after {}s",
                self.connect_timeout.as_secs()
            ))),
        }
    }

    /// Query every live session's catalog again and rebuild the namespace
    pub async fn refresh(&self) {
        let mut state = self.state.write().await;
        self.rebuild_index(&mut state).await;
        self.publish(&state);
        if state.index.is_empty() {
            return;
        }
        self.set_status(PoolStatus::Connected(state.index.summary()));
    }

    async fn rebuild_index(&self, state: &mut PoolState) {
        let listings = join_all(
            state
                .connections
                .iter()
                .map(|(id, conn)| async move { (id.as_str(), conn.epoch, conn.session.list_tools().await) }),
        )
        .await;

        let mut index = ToolIndex {
            providers: state.connections.keys().cloned().collect(),
            ..Default::default()
        };
        for (provider_id, epoch, listing) in listings {
            let tools = match listing {
                Ok(tools) => tools,
                Err(e) => {
                    self.logger.warn(&format!(
                        "[ProviderPool] Failed to list tools from \"{}\": {}",
                        provider_id, e
                    ));
                    continue;
                }
            };
            for tool in tools {
                let qualified = qualify(provider_id, &tool.name);
                if let Some(previous) = index.insert(provider_id, epoch, tool) {
                    self.logger.warn(&format!(
                        "[ProviderPool] Tool name collision on {}: \"{}\" replaces \"{}\"",
                        qualified, provider_id, previous.provider_id
                    ));
                }
            }
        }

        self.logger.info(&format!("[ProviderPool] {}", index.summary()));
        state.index = Arc::new(index);
    }

    /// Close every session and clear the pool
    pub async fn detach(&self) {
        let mut state = self.state.write().await;
        self.teardown(&mut state).await;
        self.publish(&state);
        self.set_status(PoolStatus::Disconnected);
    }

    async fn teardown(&self, state: &mut PoolState) {
        let connections = std::mem::take(&mut state.connections);
        state.index = Arc::new(ToolIndex::default());
        if connections.is_empty() {
            return;
        }

        self.logger.info(&format!(
            "[ProviderPool] Closing {} connection(s)",
            connections.len()
        ));
        let closes = connections
            .into_iter()
            .map(|(id, conn)| async move { (id, conn.session.close().await) });
        for (provider_id, result) in join_all(closes).await {
            if let Err(e) = result {
                self.logger.warn(&format!(
                    "[ProviderPool] Error closing \"{}\": {}",
                    provider_id, e
                ));
            }
        }
    }

    /// Call a remote tool by its qualified name
    pub async fn dispatch(&self, qualified: &str, arguments: Value) -> McpResult<String> {
        let state = self.state.read().await;
        let binding = state
            .index
            .binding(qualified)
            .cloned()
            .ok_or_else(|| McpError::UnknownQualifiedTool(qualified.to_string()))?;
        self.call_bound(&state, &binding, arguments).await
    }

    /// Call the tool a binding points at. Fails with `ProviderNotConnected`
    /// once the session the binding was listed from has been torn down.
    pub async fn call_remote(&self, binding: &ToolBinding, arguments: Value) -> McpResult<String> {
        let state = self.state.read().await;
        self.call_bound(&state, binding, arguments).await
    }

    async fn call_bound(&self, state: &PoolState, binding: &ToolBinding, arguments: Value) -> McpResult<String> {
        let connection = state
            .connections
            .get(&binding.provider_id)
            .filter(|conn| conn.epoch == binding.epoch)
            .ok_or_else(|| McpError::ProviderNotConnected(binding.provider_id.clone()))?;

        self.logger.debug(&format!(
            "[ProviderPool] Routing {} to \"{}\"",
            binding.tool_name, binding.provider_id
        ));
        let result = connection.session.call_tool(&binding.tool_name, arguments).await?;
        let text = result.joined_text();
        if result.is_error {
            return Err(McpError::ToolExecutionFailed(text));
        }
        Ok(text)
    }

    /// The current routing index
    pub fn snapshot(&self) -> Arc<ToolIndex> {
        Arc::clone(&self.snapshot.read())
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.snapshot().descriptors().to_vec()
    }

    /// Every qualified name with its binding, in merge order
    pub fn bindings(&self) -> Vec<(ToolDescriptor, ToolBinding)> {
        let index = self.snapshot();
        index
            .descriptors()
            .iter()
            .filter_map(|d| index.binding(&d.name).map(|b| (d.clone(), b.clone())))
            .collect()
    }

    pub fn is_known_tool(&self, qualified: &str) -> bool {
        self.snapshot().binding(qualified).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn connected_providers(&self) -> Vec<String> {
        self.snapshot().providers().to_vec()
    }

    pub fn tool_count(&self) -> usize {
        self.snapshot().tool_count()
    }

    pub fn summary(&self) -> String {
        self.snapshot().summary()
    }

    pub fn status(&self) -> PoolStatus {
        self.status.read().clone()
    }

    fn publish(&self, state: &PoolState) {
        *self.snapshot.write() = Arc::clone(&state.index);
    }

    fn set_status(&self, status: PoolStatus) {
        self.logger.debug(&format!("[ProviderPool] Status: {}", status));
        *self.status.write() = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use crate::mcp::mock::{MockConnector, MockToolServer};
    use crate::mcp::session::RemoteCallResult;
    use serde_json::json;

    fn pool(connector: MockConnector) -> ProviderPool {
        ProviderPool::new(Arc::new(connector), Arc::new(NoOpLogger::new()))
    }

    fn config(ids: &[&str]) -> McpConfig {
        ids.iter().fold(McpConfig::new(), |config, id| {
            config.with_server(*id, ServerConfig::http(format!("http://{}/mcp", id)))
        })
    }

    fn search_server() -> MockToolServer {
        MockToolServer::new().with_tool(
            RemoteTool::new("search").with_description("Search the index"),
            |args| Ok(RemoteCallResult::text(format!("results for {}", args["q"]))),
        )
    }

    #[tokio::test]
    async fn test_partial_attach_keeps_successful_servers() {
        let connector = MockConnector::new()
            .with_server("a", search_server())
            .with_unreachable("b", "connection refused");
        let pool = pool(connector);

        let report = pool.attach(&config(&["a", "b"])).await.unwrap();
        assert_eq!(report.connected, vec!["a".to_string()]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].provider_id, "b");
        assert_eq!(report.tool_count, 1);

        assert!(pool.is_known_tool("mcp_a_search"));
        assert!(!pool.is_known_tool("mcp_b_search"));

        let text = pool.dispatch("mcp_a_search", json!({"q": "rust"})).await.unwrap();
        assert_eq!(text, "results for \"rust\"");

        let err = pool.dispatch("mcp_b_search", json!({})).await.unwrap_err();
        assert!(matches!(err, McpError::UnknownQualifiedTool(name) if name == "mcp_b_search"));

        assert_eq!(pool.status(), PoolStatus::Connected("1 tools from 1 server(s)".to_string()));
    }

    #[tokio::test]
    async fn test_all_failing_leaves_pool_empty() {
        let connector = MockConnector::new()
            .with_unreachable("a", "connection refused")
            .with_unreachable("b", "no route to host");
        let pool = pool(connector);

        let err = pool.attach(&config(&["a", "b"])).await.unwrap_err();
        match err {
            McpError::AllProvidersUnreachable { failures } => assert_eq!(failures.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(pool.is_empty());
        assert!(pool.connected_providers().is_empty());
        assert!(matches!(pool.status(), PoolStatus::Error(_)));
    }

    #[tokio::test]
    async fn test_retry_after_failure_starts_clean() {
        let failing = pool(MockConnector::new().with_unreachable("a", "refused"));
        assert!(failing.attach(&config(&["a"])).await.is_err());

        let server = search_server();
        let stats = server.stats();
        let pool = pool(MockConnector::new().with_server("a", server));
        pool.attach(&config(&["a"])).await.unwrap();
        pool.attach(&config(&["a"])).await.unwrap();

        // the second attach closed the first session before dialing again
        assert_eq!(stats.connects(), 2);
        assert_eq!(stats.closes(), 1);
        assert_eq!(pool.connected_providers(), vec!["a".to_string()]);
        assert_eq!(pool.tool_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_config_is_rejected() {
        let pool = pool(MockConnector::new());
        let err = pool.attach(&McpConfig::new()).await.unwrap_err();
        assert!(matches!(err, McpError::NoServersConfigured));
    }

    #[tokio::test]
    async fn test_unsupported_type_fails_only_that_server() {
        let connector = MockConnector::new()
            .with_server("a", search_server())
            .with_server("b", search_server());
        let pool = pool(connector);

        let config = config(&["a"]).with_server(
            "b",
            ServerConfig {
                kind: "stdio".to_string(),
                url: String::new(),
            },
        );
        let report = pool.attach(&config).await.unwrap();
        assert_eq!(report.connected, vec!["a".to_string()]);
        assert!(matches!(
            &report.failures[0].error,
            McpError::UnsupportedProviderType { kind, .. } if kind == "stdio"
        ));
    }

    #[tokio::test]
    async fn test_collision_last_provider_wins() {
        let first = MockToolServer::new().with_text_tool("x", "from a.b");
        let second = MockToolServer::new().with_text_tool("x", "from a_b");
        let connector = MockConnector::new()
            .with_server("a.b", first)
            .with_server("a_b", second);
        let logger = Arc::new(MemoryLogger::new());
        let pool = ProviderPool::new(Arc::new(connector), logger.clone());

        let report = pool.attach(&config(&["a.b", "a_b"])).await.unwrap();
        assert_eq!(report.connected.len(), 2);
        assert_eq!(report.tool_count, 1);

        let descriptors = pool.descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "mcp_a_b_x");
        assert_eq!(descriptors[0].description, "[a_b] MCP tool: x");

        let text = pool.dispatch("mcp_a_b_x", json!({})).await.unwrap();
        assert_eq!(text, "from a_b");
        assert!(logger
            .messages_at(LogLevel::Warn)
            .iter()
            .any(|m| m.contains("collision")));
    }

    #[tokio::test]
    async fn test_descriptor_defaults() {
        let server = MockToolServer::new()
            .with_tool(
                RemoteTool::new("lookup").with_schema(json!({
                    "type": "object",
                    "properties": {"id": {"type": "string"}},
                    "required": ["id"]
                })),
                |_| Ok(RemoteCallResult::text("found")),
            )
            .with_text_tool("ping", "pong");
        let pool = pool(MockConnector::new().with_server("svc", server));
        pool.attach(&config(&["svc"])).await.unwrap();

        let descriptors = pool.descriptors();
        assert_eq!(descriptors[0].name, "mcp_svc_lookup");
        assert_eq!(descriptors[0].input_schema["required"], json!(["id"]));
        assert_eq!(descriptors[1].name, "mcp_svc_ping");
        assert_eq!(descriptors[1].input_schema, empty_object_schema());

        let bindings = pool.bindings();
        assert_eq!(bindings[1].1.tool_name, "ping");
    }

    #[tokio::test]
    async fn test_detach_closes_and_clears() {
        let server = search_server().failing_close();
        let stats = server.stats();
        let pool = pool(MockConnector::new().with_server("a", server));
        pool.attach(&config(&["a"])).await.unwrap();
        let (_, binding) = pool.bindings().remove(0);

        pool.detach().await;
        assert_eq!(stats.closes(), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.tool_count(), 0);
        assert_eq!(pool.status(), PoolStatus::Disconnected);

        let err = pool.call_remote(&binding, json!({})).await.unwrap_err();
        assert!(matches!(err, McpError::ProviderNotConnected(id) if id == "a"));
    }

    #[tokio::test]
    async fn test_reattach_invalidates_old_bindings() {
        let pool = pool(MockConnector::new().with_server("a", search_server()));
        pool.attach(&config(&["a"])).await.unwrap();
        let (_, stale) = pool.bindings().remove(0);

        pool.attach(&config(&["a"])).await.unwrap();
        let (_, fresh) = pool.bindings().remove(0);
        assert_ne!(stale.epoch, fresh.epoch);

        let err = pool.call_remote(&stale, json!({"q": "x"})).await.unwrap_err();
        assert!(matches!(err, McpError::ProviderNotConnected(id) if id == "a"));
        assert!(pool.call_remote(&fresh, json!({"q": "x"})).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_keeps_bindings_valid() {
        let pool = pool(MockConnector::new().with_server("a", search_server()));
        pool.attach(&config(&["a"])).await.unwrap();
        let (_, binding) = pool.bindings().remove(0);

        pool.refresh().await;
        assert_eq!(pool.bindings()[0].1, binding);
        assert!(pool.call_remote(&binding, json!({"q": "x"})).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_waits_for_attach_in_progress() {
        let server = search_server();
        let stats = server.stats();
        let connector = MockConnector::new()
            .with_server("a", server)
            .with_dial_delay(Duration::from_millis(500));
        let pool = Arc::new(pool(connector));
        pool.attach(&config(&["a"])).await.unwrap();
        let (_, stale) = pool.bindings().remove(0);

        let reattach = tokio::spawn({
            let pool = Arc::clone(&pool);
            async move { pool.attach(&config(&["a"])).await.map(|report| report.connected) }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(pool.status(), PoolStatus::Connecting);

        // resolved against the new session once the attach releases the pool
        let text = pool.dispatch("mcp_a_search", json!({"q": "x"})).await.unwrap();
        assert_eq!(text, "results for \"x\"");
        assert!(pool.status().is_connected());
        assert_eq!(stats.connects(), 2);
        assert_eq!(stats.closes(), 1);
        assert_eq!(reattach.await.unwrap().unwrap(), vec!["a".to_string()]);

        let err = pool.call_remote(&stale, json!({})).await.unwrap_err();
        assert!(matches!(err, McpError::ProviderNotConnected(id) if id == "a"));
    }

    #[tokio::test]
    async fn test_provider_error_result() {
        let server = MockToolServer::new().with_tool(RemoteTool::new("explode"), |_| {
            Ok(RemoteCallResult {
                is_error: true,
                ..RemoteCallResult::text("disk full")
            })
        });
        let pool = pool(MockConnector::new().with_server("a", server));
        pool.attach(&config(&["a"])).await.unwrap();

        let err = pool.dispatch("mcp_a_explode", json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "MCP tool execution failed: disk full");
    }

    #[tokio::test]
    async fn test_listing_failure_skips_provider() {
        let connector = MockConnector::new()
            .with_server("a", search_server())
            .with_server("b", search_server().failing_listing());
        let pool = pool(connector);

        let report = pool.attach(&config(&["a", "b"])).await.unwrap();
        assert_eq!(report.connected.len(), 2);
        assert!(report.failures.is_empty());
        assert_eq!(report.tool_count, 1);
        assert!(!pool.is_known_tool("mcp_b_search"));
        assert_eq!(pool.summary(), "1 tools from 2 server(s)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_servers_are_dialed_concurrently() {
        let connector = MockConnector::new()
            .with_server("a", search_server())
            .with_server("b", search_server())
            .with_server("c", search_server())
            .with_dial_delay(Duration::from_millis(500));
        let pool = pool(connector);

        let started = tokio::time::Instant::now();
        pool.attach(&config(&["a", "b", "c"])).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_handshake_times_out() {
        let connector = MockConnector::new()
            .with_server("slow", search_server())
            .with_dial_delay(Duration::from_secs(10));
        let pool = pool(connector).with_connect_timeout(Duration::from_secs(1));

        let err = pool.attach(&config(&["slow"])).await.unwrap_err();
        assert!(err.to_string().contains("timed out after 1s"));
    }
}
