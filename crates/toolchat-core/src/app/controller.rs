//! Wires a presenter to the engine and the provider pool

use std::sync::Arc;

use super::presenter::Presenter;
use crate::chat::{ConversationEngine, ExchangeOutcome};
use crate::logging::Logger;
use crate::{log_error, log_warn};
use crate::mcp::{PoolStatus, ProviderPool};
use crate::types::ChatMessage;

/// Front-end controller: one send or connection toggle at a time
pub struct ChatApp<P: Presenter> {
    presenter: P,
    engine: ConversationEngine,
    pool: Arc<ProviderPool>,
    logger: Arc<dyn Logger>,
}

impl<P: Presenter> ChatApp<P> {
    /// `engine` should route remote tools through the same `pool`
    pub fn new(presenter: P, engine: ConversationEngine, pool: Arc<ProviderPool>, logger: Arc<dyn Logger>) -> Self {
        Self {
            presenter,
            engine,
            pool,
            logger,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    pub fn pool(&self) -> &Arc<ProviderPool> {
        &self.pool
    }

    /// Send the presenter's message. Returns `None` when it is blank.
    pub async fn send(&mut self) -> Option<ExchangeOutcome> {
        let text = self.presenter.user_message();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        // the pending turn lands where the engine will append it
        self.render_history();
        self.presenter.render_turn(&ChatMessage::user(text));
        let outcome = self.engine.send_message(text).await;
        self.render_history();
        Some(outcome)
    }

    /// Redraw the whole conversation. Tool turns always show; other turns
    /// only when they carry text.
    pub fn render_history(&mut self) {
        self.presenter.clear();
        for turn in self.engine.history() {
            if matches!(turn, ChatMessage::Tool { .. }) || !turn.text().is_empty() {
                self.presenter.render_turn(turn);
            }
        }
    }

    /// Attach when detached, detach when attached
    pub async fn toggle_connection(&mut self) -> PoolStatus {
        if self.pool.status().is_connected() {
            self.logger.info("[ChatApp] Disconnecting tool servers");
            self.pool.detach().await;
        } else {
            self.presenter.set_pool_status(&PoolStatus::Connecting);
            match self.presenter.server_config() {
                Ok(config) => {
                    if let Ok(report) = self.pool.attach(&config).await {
                        for failure in &report.failures {
                            log_warn!(self.logger, "[ChatApp] Skipped server {}", failure);
                        }
                    }
                }
                Err(e) => {
                    log_error!(self.logger, "[ChatApp] Bad server config: {}", e);
                    let status = PoolStatus::Error(e.to_string());
                    self.presenter.set_pool_status(&status);
                    return status;
                }
            }
        }

        let status = self.pool.status();
        self.presenter.set_pool_status(&status);
        status
    }

    /// Forget the conversation
    pub fn clear(&mut self) {
        self.engine.clear();
        self.render_history();
    }
}
