//! Toolchat Core
//!
//! A conversational agent loop that offers a language model one merged tool
//! surface: in-process tools plus every tool exposed by the attached MCP
//! servers. Front-ends (the `toolchat` CLI, tests, anything implementing
//! [`app::Presenter`]) drive it through [`ChatApp`] or use the
//! [`ConversationEngine`] directly.
//!
//! ```rust,ignore
//! use toolchat_core::{ConversationEngine, EngineConfig, LocalToolRegistry, ProviderPool};
//!
//! let pool = Arc::new(ProviderPool::new(Arc::new(HttpConnector::new(logger.clone())), logger.clone()));
//! pool.attach(&McpConfig::load("servers.json")?).await?;
//!
//! let mut engine = ConversationEngine::new(
//!     create_provider("gpt-4o-mini", logger.clone()),
//!     LocalToolRegistry::with_builtins(),
//!     EngineConfig::new(ProviderModelConfig::new("gpt-4o-mini")),
//!     logger,
//! )
//! .with_pool(pool);
//!
//! engine.send_message("What day is it?").await;
//! for turn in engine.history() {
//!     println!("{}: {}", turn.role(), turn.text());
//! }
//! ```

pub mod app;
pub mod chat;
pub mod config;
pub mod logging;
pub mod mcp;
pub mod providers;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{ChatMessage, MessageRole, ToolCall, ToolDescriptor, ToolResult};

pub use logging::{ConsoleLogger, LogLevel, Logger, MemoryLogger, NoOpLogger};

pub use config::{AppConfig, ConfigError, FileConfigProvider, McpConfig, ServerConfig};

pub use providers::{
    create_provider, ChatProvider, Completion, CompletionOptions, GenaiProvider, ProviderError,
    ProviderModelConfig, ScriptedProvider,
};

pub use tools::{LocalToolRegistry, ToolCatalog, ToolError, ToolRoute};

pub use mcp::{
    AttachReport, Connector, HttpConnector, McpClient, McpError, McpResult, PoolStatus, ProviderPool,
    ToolSession,
};

pub use chat::{ChatError, ConversationEngine, EngineConfig, ExchangeOutcome};

pub use app::{ChatApp, Presenter};
