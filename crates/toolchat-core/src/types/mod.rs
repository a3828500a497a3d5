//! Core types for chat and tool interactions
//!
//! This module contains the shared types used by the engine, the tool
//! sources and the chat providers.

mod message;
mod tool;

pub use message::{ChatMessage, MessageRole};
pub use tool::{empty_object_schema, ToolCall, ToolDescriptor, ToolResult};
