//! Chat providers
//!
//! The [`ChatProvider`] trait is the boundary to the language model: one
//! non-streaming completion per call, full history in, text plus tool calls
//! out.
//!
//! - [`GenaiProvider`] talks to real APIs through the `genai` crate.
//! - [`ScriptedProvider`] replays canned completions for tests and demos.

mod error;
mod genai_adapter;
mod genai_provider;
mod mock;
mod traits;

pub use error::{ProviderError, ProviderResult};
pub use genai_provider::GenaiProvider;
pub use mock::{RecordedRequest, ScriptFallback, ScriptStep, ScriptedProvider};
pub use traits::{ChatProvider, Completion, CompletionOptions, ProviderModelConfig};

use crate::logging::Logger;
use std::sync::Arc;

/// Model name that selects the offline echo provider
pub const MOCK_MODEL: &str = "mock";

/// Create a provider for the given model name
///
/// `mock` gives an echoing [`ScriptedProvider`]; anything else goes through
/// genai, which resolves the backend from the model name.
pub fn create_provider(model: &str, logger: Arc<dyn Logger>) -> Arc<dyn ChatProvider> {
    match model.to_lowercase().as_str() {
        MOCK_MODEL => Arc::new(ScriptedProvider::echo(logger)),
        _ => Arc::new(GenaiProvider::new(logger)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;

    #[test]
    fn test_create_provider() {
        let logger: Arc<dyn Logger> = Arc::new(NoOpLogger::new());
        assert_eq!(create_provider("mock", Arc::clone(&logger)).name(), "scripted");
        assert_eq!(create_provider("gpt-4o-mini", logger).name(), "genai");
    }
}
