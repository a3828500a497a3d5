//! Configuration
//!
//! - `McpConfig`: tool servers to attach (JSON, as typed by the user)
//! - `AppConfig` / `FileConfigProvider`: application settings (YAML file)

mod error;
mod file;
mod servers;

pub use error::{ConfigError, ConfigResult};
pub use file::{AppConfig, FileConfigProvider};
pub use servers::{McpConfig, ServerConfig, TransportKind};
