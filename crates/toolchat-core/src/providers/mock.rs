//! Scripted provider for testing
//!
//! Replays a queue of canned completions without network access and records
//! every request it receives. Once the script runs out it falls back to
//! echoing the last user message, or repeating a fixed completion.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatProvider, Completion, CompletionOptions, ProviderModelConfig};
use crate::logging::Logger;
use crate::types::{ChatMessage, MessageRole, ToolCall};

/// One scripted reaction to a request
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// Answer with this completion
    Reply(Completion),
    /// Fail with an API error carrying this message
    Fail(String),
    /// Sleep before answering
    Delay(Duration, Completion),
}

/// What to do once the script is exhausted
#[derive(Debug, Clone)]
pub enum ScriptFallback {
    /// Echo back the last user message
    Echo,
    /// Return the same completion forever
    Repeat(Completion),
}

/// A request as the provider saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    /// Names of the tools offered
    pub tools: Vec<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Deterministic chat provider
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<ScriptStep>>,
    fallback: ScriptFallback,
    requests: Mutex<Vec<RecordedRequest>>,
    logger: Arc<dyn Logger>,
}

impl ScriptedProvider {
    /// Create a provider that replays `steps`, then echoes
    pub fn new(steps: Vec<ScriptStep>, logger: Arc<dyn Logger>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            fallback: ScriptFallback::Echo,
            requests: Mutex::new(Vec::new()),
            logger,
        }
    }

    /// Create an echo provider (echoes back the user message)
    pub fn echo(logger: Arc<dyn Logger>) -> Self {
        Self::new(Vec::new(), logger)
    }

    /// Create a provider that answers every request with `completion`
    pub fn repeating(completion: Completion, logger: Arc<dyn Logger>) -> Self {
        Self::new(Vec::new(), logger).with_fallback(ScriptFallback::Repeat(completion))
    }

    pub fn with_fallback(mut self, fallback: ScriptFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Queue a text reply
    pub fn then_text(self, content: impl Into<String>) -> Self {
        self.push(ScriptStep::Reply(Completion::text(content)))
    }

    /// Queue a reply requesting tool calls
    pub fn then_tool_calls(self, calls: Vec<ToolCall>) -> Self {
        self.push(ScriptStep::Reply(Completion::with_tool_calls(calls)))
    }

    /// Queue a failure
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.push(ScriptStep::Fail(message.into()))
    }

    /// Queue a delayed reply
    pub fn then_delay(self, delay: Duration, completion: Completion) -> Self {
        self.push(ScriptStep::Delay(delay, completion))
    }

    fn push(self, step: ScriptStep) -> Self {
        self.steps.lock().push_back(step);
        self
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn fallback_completion(&self, messages: &[ChatMessage]) -> Completion {
        match &self.fallback {
            ScriptFallback::Repeat(completion) => completion.clone(),
            ScriptFallback::Echo => {
                let last_user = messages
                    .iter()
                    .rev()
                    .find(|m| m.role() == MessageRole::User)
                    .map(|m| m.text().to_string())
                    .unwrap_or_default();
                Completion::text(format!("Echo: {}", last_user))
            }
        }
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &ProviderModelConfig,
        options: &CompletionOptions,
    ) -> ProviderResult<Completion> {
        self.requests.lock().push(RecordedRequest {
            messages: messages.to_vec(),
            model: model.model.clone(),
            tools: options.tools.iter().map(|t| t.name.clone()).collect(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        });

        let step = self.steps.lock().pop_front();
        self.logger.debug(&format!(
            "[ScriptedProvider] complete called with {} messages",
            messages.len()
        ));

        match step {
            Some(ScriptStep::Reply(completion)) => Ok(completion),
            Some(ScriptStep::Fail(message)) => Err(ProviderError::api_error("scripted", 500, message)),
            Some(ScriptStep::Delay(delay, completion)) => {
                tokio::time::sleep(delay).await;
                Ok(completion)
            }
            None => Ok(self.fallback_completion(messages)),
        }
    }
}
