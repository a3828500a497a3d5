//! File-based application configuration (YAML)
//!
//! Lives at `~/.config/toolchat/config.yaml` by default.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::servers::{McpConfig, ServerConfig};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chat model name; `mock` selects the offline echo provider
    pub model: String,
    /// API key for the chat provider; when unset the provider's own lookup applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom API base URL for OpenAI-compatible endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// System prompt placed at the start of every conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Sampling temperature; the model's default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Cap on generated tokens per model call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Maximum tool-execution rounds per exchange
    pub max_tool_rounds: u32,
    /// Upper bound on one chat completion call
    pub model_timeout_secs: u64,
    /// Upper bound on one tool call
    pub tool_timeout_secs: u64,
    /// Tool servers to attach, keyed by provider id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub servers: BTreeMap<String, ServerConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            api_base: None,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            max_tool_rounds: 10,
            model_timeout_secs: 120,
            tool_timeout_secs: 60,
            servers: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }

    /// Reject settings that would make every call fail
    pub fn validate(&self) -> ConfigResult<()> {
        if self.model_timeout_secs == 0 {
            return Err(ConfigError::Other("model_timeout_secs must be at least 1".to_string()));
        }
        if self.tool_timeout_secs == 0 {
            return Err(ConfigError::Other("tool_timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The configured tool servers in attachable form
    pub fn mcp_config(&self) -> McpConfig {
        McpConfig {
            servers: self.servers.clone(),
        }
    }
}

/// File-based configuration provider
///
/// # Example
///
/// ```no_run
/// use toolchat_core::config::FileConfigProvider;
///
/// let config = FileConfigProvider::user().load().unwrap();
/// println!("model: {}", config.model);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<AppConfig>>,
}

impl FileConfigProvider {
    /// Create a provider for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level config (~/.config/toolchat/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("toolchat").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the cached config, reading the file on first use.
    /// A missing file yields the defaults.
    pub fn load(&self) -> ConfigResult<AppConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    /// Re-read the file, replacing the cache
    pub fn reload(&self) -> ConfigResult<AppConfig> {
        let config = if self.exists() {
            let content = fs::read_to_string(&self.path)?;
            if content.trim().is_empty() {
                AppConfig::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            AppConfig::default()
        };
        config.validate()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, config: &AppConfig) -> ConfigResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(config)?)?;
        *self.cache.write() = Some(config.clone());
        Ok(())
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        let config = provider.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_tool_rounds, 10);
        assert_eq!(config.tool_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "model: openai/gpt-4o\nmax_tool_rounds: 3\nservers:\n  local:\n    type: http\n    url: http://localhost:3001/mcp\n",
        )
        .unwrap();

        let config = FileConfigProvider::new(&path).load().unwrap();
        assert_eq!(config.model, "openai/gpt-4o");
        assert_eq!(config.max_tool_rounds, 3);
        assert_eq!(config.model_timeout_secs, 120);
        assert_eq!(
            config.mcp_config().servers["local"],
            ServerConfig::http("http://localhost:3001/mcp")
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        let config = AppConfig {
            system_prompt: Some("Be brief.".to_string()),
            ..AppConfig::default()
        };
        provider.save(&config).unwrap();
        assert!(provider.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Be brief."));
        assert!(!content.contains("api_key"));

        assert_eq!(FileConfigProvider::new(&path).load().unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "max_tool_rounds: [not a number").unwrap();

        let err = FileConfigProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "tool_timeout_secs: 0\n").unwrap();

        let err = FileConfigProvider::new(&path).load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: tool_timeout_secs must be at least 1"
        );

        let config = AppConfig {
            model_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(FileConfigProvider::new(&path).save(&config).is_err());
    }

    #[test]
    fn test_sampling_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "temperature: 0.5\nmax_tokens: 512\n").unwrap();

        let config = FileConfigProvider::new(&path).load().unwrap();
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.max_tokens, Some(512));
    }
}
