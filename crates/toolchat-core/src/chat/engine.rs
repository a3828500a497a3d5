//! Conversation engine
//!
//! Drives one exchange at a time:
//!
//! ```text
//! user turn ─► model call ─┬─► no tool calls ─► assistant turn, done
//!                          └─► tool calls ─► run them ─► model call ─► ...
//! ```
//!
//! The tool catalog is built once per exchange. Calls within a round run
//! concurrently and their results are appended in request order. Nothing
//! escapes as an error: tool failures become tool-turn text, model failures
//! become a system turn.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;

use super::error::ChatError;
use crate::config::AppConfig;
use crate::logging::Logger;
use crate::mcp::ProviderPool;
use crate::providers::{ChatProvider, Completion, CompletionOptions, ProviderError, ProviderModelConfig};
use crate::tools::{LocalToolRegistry, ToolCatalog, ToolError};
use crate::types::{ChatMessage, ToolCall, ToolResult};

pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 10;
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(60);

/// Engine settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub model: ProviderModelConfig,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub max_tool_rounds: u32,
    pub model_timeout: Duration,
    pub tool_timeout: Duration,
}

impl EngineConfig {
    pub fn new(model: ProviderModelConfig) -> Self {
        Self {
            model,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            model_timeout: DEFAULT_MODEL_TIMEOUT,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn with_max_tool_rounds(mut self, rounds: u32) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }
}

impl From<&AppConfig> for EngineConfig {
    fn from(app: &AppConfig) -> Self {
        let mut model = ProviderModelConfig::new(&app.model);
        if let Some(key) = &app.api_key {
            model = model.with_api_key(key);
        }
        if let Some(base) = &app.api_base {
            model = model.with_api_base(base);
        }

        Self {
            model,
            system_prompt: app.system_prompt.clone(),
            temperature: app.temperature,
            max_tokens: app.max_tokens,
            max_tool_rounds: app.max_tool_rounds,
            model_timeout: app.model_timeout(),
            tool_timeout: app.tool_timeout(),
        }
    }
}

/// How an exchange ended
#[derive(Debug)]
pub enum ExchangeOutcome {
    /// The model produced a final answer after `rounds` tool phases
    Completed { rounds: u32 },
    /// The exchange stopped early; a system turn records why
    Aborted(ChatError),
}

impl ExchangeOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExchangeOutcome::Completed { .. })
    }
}

/// Runs the model/tool loop over a growing history
pub struct ConversationEngine {
    provider: Arc<dyn ChatProvider>,
    local_tools: LocalToolRegistry,
    pool: Option<Arc<ProviderPool>>,
    config: EngineConfig,
    history: Vec<ChatMessage>,
    logger: Arc<dyn Logger>,
}

impl ConversationEngine {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        local_tools: LocalToolRegistry,
        config: EngineConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let mut engine = Self {
            provider,
            local_tools,
            pool: None,
            config,
            history: Vec::new(),
            logger,
        };
        engine.clear();
        engine
    }

    /// Route remote tools through `pool`
    pub fn with_pool(mut self, pool: Arc<ProviderPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Drop every turn except the system prompt
    pub fn clear(&mut self) {
        self.history.clear();
        if let Some(prompt) = &self.config.system_prompt {
            self.history.push(ChatMessage::system(prompt.clone()));
        }
    }

    /// The tool surface the next exchange would offer
    pub fn catalog(&self) -> ToolCatalog {
        ToolCatalog::build(&self.local_tools, self.pool.as_ref(), self.logger.as_ref())
    }

    /// Run one exchange for `text`
    pub async fn send_message(&mut self, text: &str) -> ExchangeOutcome {
        self.history.push(ChatMessage::user(text));

        let catalog = self.catalog();
        let mut options = CompletionOptions::new().with_tools(catalog.descriptors().to_vec());
        options.temperature = self.config.temperature;
        options.max_tokens = self.config.max_tokens;
        self.logger.info(&format!(
            "[ConversationEngine] Exchange started with {} tool(s)",
            catalog.len()
        ));

        let mut rounds = 0;
        loop {
            let completion = match self.call_model(&options).await {
                Ok(completion) => completion,
                Err(e) => return self.abort(ChatError::ModelCallFailed(e)),
            };

            if !completion.has_tool_calls() {
                self.history.push(ChatMessage::assistant(completion.content));
                self.logger.info(&format!(
                    "[ConversationEngine] Exchange completed after {} tool round(s)",
                    rounds
                ));
                return ExchangeOutcome::Completed { rounds };
            }

            if rounds >= self.config.max_tool_rounds {
                return self.abort(ChatError::ToolLoopExceeded {
                    max_rounds: self.config.max_tool_rounds,
                });
            }
            rounds += 1;

            let Completion { content, tool_calls } = completion;
            let results = self.run_tools(&catalog, &tool_calls).await;
            self.history
                .push(ChatMessage::assistant_with_tool_calls(content, tool_calls));
            self.history.extend(results.into_iter().map(ChatMessage::from));
        }
    }

    async fn call_model(&self, options: &CompletionOptions) -> Result<Completion, ProviderError> {
        let call = self.provider.complete(&self.history, &self.config.model, options);
        match timeout(self.config.model_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                secs: self.config.model_timeout.as_secs(),
            }),
        }
    }

    async fn run_tools(&self, catalog: &ToolCatalog, calls: &[ToolCall]) -> Vec<ToolResult> {
        self.logger.info(&format!(
            "[ConversationEngine] Running {} tool call(s)",
            calls.len()
        ));
        join_all(calls.iter().map(|call| self.run_tool(catalog, call))).await
    }

    async fn run_tool(&self, catalog: &ToolCatalog, call: &ToolCall) -> ToolResult {
        let outcome = match timeout(self.config.tool_timeout, catalog.execute(call)).await {
            Ok(result) => result,
            Err(_) => Err(ToolError::Timeout {
                tool: call.name.clone(),
                secs: self.config.tool_timeout.as_secs(),
            }),
        };

        match outcome {
            Ok(text) => {
                self.logger.debug(&format!(
                    "[ConversationEngine] {} ({}) returned {} chars",
                    call.name,
                    call.id,
                    text.len()
                ));
                ToolResult::success(&call.id, text)
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "[ConversationEngine] {} ({}) failed: {}",
                    call.name, call.id, e
                ));
                ToolResult::error(&call.id, format!("Error: {}", e))
            }
        }
    }

    fn abort(&mut self, error: ChatError) -> ExchangeOutcome {
        self.logger
            .error(&format!("[ConversationEngine] Exchange aborted: {}", error));
        let message = match &error {
            ChatError::ModelCallFailed(e) => e.to_string(),
            other => other.to_string(),
        };
        self.history.push(ChatMessage::system(format!("Error: {}", message)));
        ExchangeOutcome::Aborted(error)
    }
}
