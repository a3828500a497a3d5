//! Adapter between toolchat types and genai types
//!
//! Conversion functions between our history/tool types and genai's, plus the
//! genai client factory.

use genai::chat::{
    ChatMessage as GenaiMessage, ChatOptions as GenaiOptions, Tool as GenaiTool, ToolCall as GenaiToolCall, ToolResponse as GenaiToolResponse,
};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use serde_json::{json, Value};

use super::error::ProviderResult;
use super::traits::{CompletionOptions, ProviderModelConfig};
use crate::types::{ChatMessage, ToolCall, ToolDescriptor};

// ============================================================================
// Message Conversion: toolchat -> genai
// ============================================================================

/// Convert one of our tool calls to genai's
pub fn to_genai_tool_call(call: &ToolCall) -> ProviderResult<GenaiToolCall> {
    let arguments = call.parse_arguments().unwrap_or_else(|_| Value::String(call.arguments.clone()));
    let tool_call = serde_json::from_value(json!({
        "call_id": call.id,
        "fn_name": call.name,
        "fn_arguments": arguments,
    }))?;
    Ok(tool_call)
}

/// Convert one history turn. An assistant turn with tool calls becomes its
/// text (when non-empty) followed by the tool-call message.
pub fn to_genai_message(msg: &ChatMessage) -> ProviderResult<Vec<GenaiMessage>> {
    let converted = match msg {
        ChatMessage::System { content } => vec![GenaiMessage::system(content.as_str())],
        ChatMessage::User { content } => vec![GenaiMessage::user(content.as_str())],
        ChatMessage::Assistant { content, tool_calls } if tool_calls.is_empty() => {
            vec![GenaiMessage::assistant(content.as_str())]
        }
        ChatMessage::Assistant { content, tool_calls } => {
            let calls = tool_calls
                .iter()
                .map(to_genai_tool_call)
                .collect::<ProviderResult<Vec<_>>>()?;
            let mut messages = Vec::with_capacity(2);
            if !content.is_empty() {
                messages.push(GenaiMessage::assistant(content.as_str()));
            }
            messages.push(GenaiMessage::from(calls));
            messages
        }
        ChatMessage::Tool { tool_call_id, content } => vec![GenaiMessage::from(GenaiToolResponse::new(
            tool_call_id.clone(),
            content.clone(),
        ))],
    };
    Ok(converted)
}

/// Convert the full history
pub fn to_genai_messages(messages: &[ChatMessage]) -> ProviderResult<Vec<GenaiMessage>> {
    let mut converted = Vec::with_capacity(messages.len());
    for msg in messages {
        converted.extend(to_genai_message(msg)?);
    }
    Ok(converted)
}

// ============================================================================
// Tool Conversion: toolchat -> genai
// ============================================================================

pub fn to_genai_tool(tool: &ToolDescriptor) -> GenaiTool {
    GenaiTool::new(&tool.name)
        .with_description(&tool.description)
        .with_schema(tool.input_schema.clone())
}

pub fn to_genai_tools(tools: &[ToolDescriptor]) -> Vec<GenaiTool> {
    tools.iter().map(to_genai_tool).collect()
}

// ============================================================================
// Options Conversion: toolchat -> genai
// ============================================================================

pub fn to_genai_options(options: &CompletionOptions) -> GenaiOptions {
    let mut genai_opts = GenaiOptions::default();

    if let Some(temp) = options.temperature {
        genai_opts = genai_opts.with_temperature(temp as f64);
    }

    if let Some(max_tokens) = options.max_tokens {
        genai_opts = genai_opts.with_max_tokens(max_tokens);
    }

    genai_opts
}

// ============================================================================
// Response Conversion: genai -> toolchat
// ============================================================================

/// Convert a genai tool call, keeping the arguments as JSON text
pub fn from_genai_tool_call(tc: &GenaiToolCall) -> ToolCall {
    let arguments = match &tc.fn_arguments {
        Value::String(raw) => raw.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    ToolCall::new(tc.call_id.clone(), tc.fn_name.clone(), arguments)
}

// ============================================================================
// Client Creation
// ============================================================================

/// Create a genai client for one model config.
///
/// An explicit key wins; otherwise genai falls back to its own environment
/// lookup (`OPENAI_API_KEY` and friends). A custom `api_base` replaces the
/// adapter's default endpoint.
pub fn create_client(config: &ProviderModelConfig) -> Client {
    let explicit_api_key = config.api_key.clone();
    let api_base = config.api_base.clone();

    let mut builder = Client::builder();

    if let Some(key) = explicit_api_key {
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(key.clone())))
            },
        );
        builder = builder.with_auth_resolver(auth_resolver);
    }

    if let Some(base) = api_base {
        let target_resolver = ServiceTargetResolver::from_resolver_fn(
            move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                Ok(ServiceTarget {
                    endpoint: Endpoint::from_owned(base.clone()),
                    auth: target.auth,
                    model: target.model,
                })
            },
        );
        builder = builder.with_service_target_resolver(target_resolver);
    }

    builder.build()
}
