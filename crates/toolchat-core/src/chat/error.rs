//! Conversation errors

use thiserror::Error;

use crate::providers::ProviderError;

/// Why an exchange ended early
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Model call failed: {0}")]
    ModelCallFailed(#[from] ProviderError),

    #[error("Tool loop exceeded {max_rounds} rounds")]
    ToolLoopExceeded { max_rounds: u32 },
}
