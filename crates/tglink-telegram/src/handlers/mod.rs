//! Webhook update handlers.
//!
//! Each handler turns one update into at most one outbound Bot API call. Outbound
//! failures are logged and swallowed so the webhook can still acknowledge the
//! update; only missing configuration on `/start` is reported to the caller.

use tracing::{error, warn};

use tglink_core::{
    domain::CallbackId,
    messaging::types::{CallbackAnswer, OutgoingMessage},
    update::Chat,
    Result,
};

use crate::router::BotState;

mod callback;
mod commands;
mod start;

pub use commands::{parse_command, BotCommand};

pub async fn handle_text(state: &BotState, chat: &Chat, text: &str) -> Result<()> {
    let Some(command) = parse_command(text) else {
        return Ok(());
    };

    match command {
        BotCommand::Start => start::issue_connection_link(state, chat).await,
        other => {
            commands::handle_command(state, chat, other).await;
            Ok(())
        }
    }
}

pub async fn handle_callback(state: &BotState, callback_id: &CallbackId) {
    callback::handle_callback(state, callback_id).await
}

/// Send a message, logging (never propagating) delivery failures.
async fn deliver(state: &BotState, msg: OutgoingMessage) {
    let Some(messenger) = &state.messenger else {
        warn!("TELEGRAM_BOT_TOKEN is not set; dropping outbound message");
        return;
    };
    if let Err(e) = messenger.send_message(msg).await {
        error!(error = %e, "failed to send telegram message");
    }
}

async fn answer(state: &BotState, callback_id: &CallbackId, reply: CallbackAnswer) {
    let Some(messenger) = &state.messenger else {
        warn!("TELEGRAM_BOT_TOKEN is not set; dropping callback answer");
        return;
    };
    if let Err(e) = messenger.answer_callback_query(callback_id, reply).await {
        error!(error = %e, "failed to answer callback query");
    }
}
