//! toolchat: terminal chat with local and MCP tools
//!
//! Commands (typed at the prompt):
//! - `/connect`: attach or detach the configured tool servers
//! - `/status`: show the pool status
//! - `/tools`: list the tools the model can call
//! - `/clear`: forget the conversation
//! - `/quit`: exit

use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use toolchat_core::{
    create_provider, ChatApp, ChatError, ConsoleLogger, ConversationEngine, EngineConfig, ExchangeOutcome,
    FileConfigProvider, HttpConnector, LocalToolRegistry, LogLevel, Logger, ProviderPool,
};

mod terminal;

use terminal::{ServerSource, TerminalPresenter};

#[derive(Parser)]
#[command(
    name = "toolchat",
    about = "Chat with a model that can call local and MCP tools",
    version
)]
struct Cli {
    /// YAML config file (defaults to ~/.config/toolchat/config.yaml)
    #[arg(short, long, env = "TOOLCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file with the MCP servers to attach
    #[arg(short, long)]
    servers: Option<PathBuf>,

    /// Chat model (`mock` runs offline)
    #[arg(short, long, env = "TOOLCHAT_MODEL")]
    model: Option<String>,

    /// Maximum tool rounds per message
    #[arg(long)]
    max_tool_rounds: Option<u32>,

    /// Log level for stderr (debug, info, warn, error)
    #[arg(long, env = "TOOLCHAT_LOG", default_value = "warn")]
    log_level: String,

    /// Enable verbose logging (same as --log-level debug)
    #[arg(short, long)]
    verbose: bool,
}

type App = ChatApp<TerminalPresenter<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::parse(&cli.log_level)
    };
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new().with_min_level(level));

    let file = cli.config.map(FileConfigProvider::new).unwrap_or_else(FileConfigProvider::user);
    let mut config = file
        .load()
        .with_context(|| format!("failed to load {}", file.path().display()))?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(rounds) = cli.max_tool_rounds {
        config.max_tool_rounds = rounds;
    }

    let source = match cli.servers {
        Some(path) => ServerSource::File(path),
        None => ServerSource::Inline(config.mcp_config()),
    };

    let pool = Arc::new(ProviderPool::new(
        Arc::new(HttpConnector::new(Arc::clone(&logger))),
        Arc::clone(&logger),
    ));
    let engine = ConversationEngine::new(
        create_provider(&config.model, Arc::clone(&logger)),
        LocalToolRegistry::with_builtins(),
        EngineConfig::from(&config),
        Arc::clone(&logger),
    )
    .with_pool(Arc::clone(&pool));

    let presenter = TerminalPresenter::new(std::io::stdout(), source);
    let mut app = ChatApp::new(presenter, engine, pool, logger);

    app.presenter_mut().println(&format!(
        "toolchat {} ({}). Type /connect to attach tool servers, /quit to exit.",
        env!("CARGO_PKG_VERSION"),
        config.model
    ));
    app.render_history();

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "/quit" | "/exit" => break,
            "/connect" => {
                app.toggle_connection().await;
            }
            "/status" => print_status(&mut app),
            "/tools" => print_tools(&mut app),
            "/clear" => {
                app.presenter_mut().reset();
                app.clear();
            }
            _ => {
                app.presenter_mut().set_input(line);
                if let Some(ExchangeOutcome::Aborted(ChatError::ToolLoopExceeded { max_rounds })) = app.send().await {
                    app.presenter_mut()
                        .println(&format!("(stopped after {} tool rounds)", max_rounds));
                }
            }
        }
    }

    if app.pool().status().is_connected() {
        app.pool().detach().await;
    }
    Ok(())
}

fn print_status(app: &mut App) {
    let status = app.pool().status();
    let providers = app.pool().connected_providers();
    let presenter = app.presenter_mut();
    presenter.println(&format!("[mcp] {}", status));
    for id in providers {
        presenter.println(&format!("  - {}", id));
    }
}

fn print_tools(app: &mut App) {
    let catalog = app.engine().catalog();
    let presenter = app.presenter_mut();
    for tool in catalog.descriptors() {
        presenter.println(&format!("{:<32} {}", tool.name, tool.description));
    }
}
