//! The seam to whatever shows the conversation

use crate::config::{ConfigError, McpConfig};
use crate::mcp::PoolStatus;
use crate::types::ChatMessage;

/// A front-end: supplies input and renders turns and pool status
pub trait Presenter: Send {
    /// The message the user wants to send
    fn user_message(&mut self) -> String;

    /// The tool servers the user wants attached
    fn server_config(&mut self) -> Result<McpConfig, ConfigError>;

    /// Show one turn
    fn render_turn(&mut self, turn: &ChatMessage);

    /// Remove every rendered turn
    fn clear(&mut self);

    fn set_pool_status(&mut self, status: &PoolStatus);
}
