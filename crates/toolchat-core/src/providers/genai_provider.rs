//! GenaiProvider - chat completions through the genai crate
//!
//! genai picks the wire protocol (OpenAI, Anthropic, Gemini, Ollama, ...)
//! from the model name.

use std::sync::Arc;

use async_trait::async_trait;
use genai::chat::ChatRequest;

use crate::logging::Logger;
use crate::types::ChatMessage;

use super::error::{ProviderError, ProviderResult};
use super::genai_adapter::{
    create_client, from_genai_tool_call, to_genai_messages, to_genai_options, to_genai_tools,
};
use super::traits::{ChatProvider, Completion, CompletionOptions, ProviderModelConfig};

/// Chat provider backed by genai
pub struct GenaiProvider {
    logger: Arc<dyn Logger>,
}

impl GenaiProvider {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl ChatProvider for GenaiProvider {
    fn name(&self) -> &str {
        "genai"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        model_config: &ProviderModelConfig,
        options: &CompletionOptions,
    ) -> ProviderResult<Completion> {
        self.logger.info(&format!(
            "[GenaiProvider] complete called: model={}, messages={}, tools={}",
            model_config.model,
            messages.len(),
            options.tools.len()
        ));

        let client = create_client(model_config);

        let mut chat_req = ChatRequest::new(to_genai_messages(messages)?);
        if !options.tools.is_empty() {
            chat_req = chat_req.with_tools(to_genai_tools(&options.tools));
        }
        let genai_options = to_genai_options(options);

        let response = client
            .exec_chat(&model_config.model, chat_req, Some(&genai_options))
            .await
            .map_err(|e| {
                self.logger.error(&format!("[GenaiProvider] Chat error: {}", e));
                ProviderError::api_error(&model_config.model, 500, e.to_string())
            })?;

        let completion = Completion {
            content: response.first_text().unwrap_or_default().to_string(),
            tool_calls: response.tool_calls().into_iter().map(from_genai_tool_call).collect(),
        };

        self.logger.debug(&format!(
            "[GenaiProvider] Response: {} chars, {} tool call(s)",
            completion.content.len(),
            completion.tool_calls.len()
        ));

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;

    #[test]
    fn test_name() {
        let provider = GenaiProvider::new(Arc::new(NoOpLogger::new()));
        assert_eq!(provider.name(), "genai");
    }
}
