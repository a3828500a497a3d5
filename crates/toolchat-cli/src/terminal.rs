//! Line-oriented presenter for the terminal

use std::io::Write;
use std::path::PathBuf;

use toolchat_core::{ChatMessage, ConfigError, McpConfig, PoolStatus, Presenter};

/// Where `/connect` reads the server list from
#[derive(Debug, Clone)]
pub enum ServerSource {
    /// A standalone JSON file
    File(PathBuf),
    /// The `servers` table of the YAML config
    Inline(McpConfig),
}

/// Prints turns as they appear
///
/// The controller redraws the full history after every exchange; turns
/// already on screen are skipped so the terminal only grows.
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    source: ServerSource,
    input: String,
    printed: usize,
    cursor: usize,
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W, source: ServerSource) -> Self {
        Self {
            out,
            source,
            input: String::new(),
            printed: 0,
            cursor: 0,
        }
    }

    /// The next line to send
    pub fn set_input(&mut self, line: impl Into<String>) {
        self.input = line.into();
    }

    /// Forget what is on screen, after `/clear`
    pub fn reset(&mut self) {
        self.printed = 0;
        self.cursor = 0;
    }

    pub fn println(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn format_turn(turn: &ChatMessage) -> String {
    match turn {
        ChatMessage::System { content } => format!("[system] {}", content),
        ChatMessage::User { content } => format!("you> {}", content),
        ChatMessage::Assistant { content, .. } => format!("assistant> {}", content),
        ChatMessage::Tool { tool_call_id, content } => format!("  [tool {}] {}", tool_call_id, content),
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn user_message(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    fn server_config(&mut self) -> Result<McpConfig, ConfigError> {
        match &self.source {
            ServerSource::File(path) => McpConfig::load(path),
            ServerSource::Inline(config) => Ok(config.clone()),
        }
    }

    fn render_turn(&mut self, turn: &ChatMessage) {
        if self.cursor >= self.printed {
            self.println(&format_turn(turn));
            self.printed += 1;
        }
        self.cursor += 1;
    }

    fn clear(&mut self) {
        self.cursor = 0;
    }

    fn set_pool_status(&mut self, status: &PoolStatus) {
        self.println(&format!("[mcp] {}", status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use toolchat_core::mcp::mock::MockConnector;
    use toolchat_core::{
        ChatApp, ConversationEngine, EngineConfig, LocalToolRegistry, Logger, NoOpLogger, ProviderModelConfig,
        ProviderPool, ScriptedProvider,
    };

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_redraw_prints_only_new_turns() {
        let mut presenter = TerminalPresenter::new(Vec::new(), ServerSource::Inline(McpConfig::new()));
        let user = ChatMessage::user("Hello");
        presenter.render_turn(&user);

        presenter.clear();
        presenter.render_turn(&user);
        presenter.render_turn(&ChatMessage::tool("call_1", "Tuesday"));
        presenter.render_turn(&ChatMessage::assistant("It is Tuesday."));

        assert_eq!(
            output(presenter),
            "you> Hello\n  [tool call_1] Tuesday\nassistant> It is Tuesday.\n"
        );
    }

    #[tokio::test]
    async fn test_system_prompt_printed_once_before_first_message() {
        let logger: Arc<dyn Logger> = Arc::new(NoOpLogger::new());
        let pool = Arc::new(ProviderPool::new(Arc::new(MockConnector::new()), Arc::clone(&logger)));
        let engine = ConversationEngine::new(
            Arc::new(ScriptedProvider::echo(Arc::clone(&logger))),
            LocalToolRegistry::new(),
            EngineConfig::new(ProviderModelConfig::new("mock")).with_system_prompt("Be brief"),
            Arc::clone(&logger),
        )
        .with_pool(Arc::clone(&pool));
        let presenter = TerminalPresenter::new(Vec::new(), ServerSource::Inline(McpConfig::new()));
        let mut app = ChatApp::new(presenter, engine, pool, logger);

        app.presenter_mut().set_input("Hello");
        app.send().await;
        app.presenter_mut().set_input("Again");
        app.send().await;

        let printed = String::from_utf8(app.presenter().out.clone()).unwrap();
        assert_eq!(
            printed,
            "[system] Be brief\nyou> Hello\nassistant> Echo: Hello\nyou> Again\nassistant> Echo: Again\n"
        );
    }

    #[test]
    fn test_reset_reprints() {
        let mut presenter = TerminalPresenter::new(Vec::new(), ServerSource::Inline(McpConfig::new()));
        presenter.render_turn(&ChatMessage::user("one"));
        presenter.reset();
        presenter.render_turn(&ChatMessage::user("two"));
        assert_eq!(output(presenter), "you> one\nyou> two\n");
    }

    #[test]
    fn test_server_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"servers": {{"local": {{"type": "http", "url": "http://localhost:3001/mcp"}}}}}}"#).unwrap();

        let mut presenter = TerminalPresenter::new(Vec::new(), ServerSource::File(file.path().to_path_buf()));
        let config = presenter.server_config().unwrap();
        assert_eq!(config.servers["local"].url, "http://localhost:3001/mcp");
    }

    #[test]
    fn test_status_line() {
        let mut presenter = TerminalPresenter::new(Vec::new(), ServerSource::Inline(McpConfig::new()));
        presenter.set_pool_status(&PoolStatus::Connected("2 tools from 1 server(s)".to_string()));
        assert_eq!(output(presenter), "[mcp] Connected: 2 tools from 1 server(s)\n");
    }
}
