//! MCP error types

use thiserror::Error;

/// Errors from connecting to, routing to, or calling remote tool servers
#[derive(Error, Debug)]
pub enum McpError {
    #[error("No servers configured")]
    NoServersConfigured,

    #[error("Unsupported server type: {kind}")]
    UnsupportedProviderType { provider_id: String, kind: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("All servers failed to connect: {}", join_failures(.failures))]
    AllProvidersUnreachable { failures: Vec<ProviderFailure> },

    #[error("Unknown MCP tool: {0}")]
    UnknownQualifiedTool(String),

    #[error("Server \"{0}\" not connected")]
    ProviderNotConnected(String),

    #[error("MCP tool execution failed: {0}")]
    ToolExecutionFailed(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

pub type McpResult<T> = Result<T, McpError>;

/// A provider that could not be attached, and why
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider_id: String,
    pub error: McpError,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\": {}", self.provider_id, self.error)
    }
}

pub(crate) fn join_failures(failures: &[ProviderFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_lists_every_failure() {
        let err = McpError::AllProvidersUnreachable {
            failures: vec![
                ProviderFailure {
                    provider_id: "a".to_string(),
                    error: McpError::ConnectionFailed("connection refused".to_string()),
                },
                ProviderFailure {
                    provider_id: "b".to_string(),
                    error: McpError::UnsupportedProviderType {
                        provider_id: "b".to_string(),
                        kind: "stdio".to_string(),
                    },
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "All servers failed to connect: \"a\": Connection failed: connection refused, \"b\": Unsupported server type: stdio"
        );
    }
}
