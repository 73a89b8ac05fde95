use std::sync::Arc;

use tracing::{debug, warn};

use tglink_core::{
    clock::Clock,
    config::Config,
    messaging::port::MessagingPort,
    update::{Update, UpdateKind},
    Result,
};

use crate::handlers;

/// Everything a webhook update handler needs.
#[derive(Clone)]
pub struct BotState {
    pub cfg: Arc<Config>,
    /// `None` when no bot credential is configured.
    pub messenger: Option<Arc<dyn MessagingPort>>,
    pub clock: Arc<dyn Clock>,
}

/// Parse a raw webhook body and dispatch it.
///
/// Undecodable bodies are logged and acknowledged: the platform must not retry.
pub async fn handle_webhook_body(state: &BotState, body: &[u8]) -> Result<()> {
    match Update::from_slice(body) {
        Ok(update) => dispatch(state, &update).await,
        Err(e) => {
            warn!(error = %e, "ignoring undecodable webhook body");
            Ok(())
        }
    }
}

/// Route one update to its handler.
///
/// Only configuration errors escape; outbound failures are logged by the handlers.
pub async fn dispatch(state: &BotState, update: &Update) -> Result<()> {
    match update.kind() {
        UpdateKind::Text { chat, text } => handlers::handle_text(state, chat, text).await,
        UpdateKind::Callback { id } => {
            handlers::handle_callback(state, &id).await;
            Ok(())
        }
        UpdateKind::Ignored => {
            debug!("ignoring update without text or callback");
            Ok(())
        }
    }
}
