//! Conversation loop
//!
//! [`ConversationEngine`] owns the history and alternates between the chat
//! provider and the tool catalog until the model answers without tool calls.

mod engine;
mod error;

pub use engine::{
    ConversationEngine, EngineConfig, ExchangeOutcome, DEFAULT_MAX_TOOL_ROUNDS, DEFAULT_MODEL_TIMEOUT,
    DEFAULT_TOOL_TIMEOUT,
};
pub use error::ChatError;
