//! Application state shared across all handlers.

use std::sync::Arc;

use tglink_core::{clock::Clock, config::Config, messaging::port::MessagingPort};
use tglink_telegram::router::BotState;

#[derive(Clone)]
pub struct AppState {
    pub bot: BotState,
}

impl AppState {
    pub fn new(
        cfg: Arc<Config>,
        messenger: Option<Arc<dyn MessagingPort>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bot: BotState {
                cfg,
                messenger,
                clock,
            },
        }
    }

    pub fn now_ms(&self) -> i64 {
        self.bot.clock.now_ms()
    }
}
