use tracing::info;

use tglink_core::{
    config::connection_link,
    errors::Error,
    formatting::escape_html,
    messaging::types::{InlineKeyboard, OutgoingMessage},
    token::ConnectionToken,
    update::Chat,
    Result,
};

use crate::router::BotState;

use super::deliver;

const CONNECT_BUTTON_LABEL: &str = "🔗 Connect Browser";

/// Issue a fresh connection token for `chat` and send it as a deep-link button.
///
/// Fails fast with a config error when the bot credential or the app URL is
/// missing: without them no useful work can be done.
pub async fn issue_connection_link(state: &BotState, chat: &Chat) -> Result<()> {
    if state.messenger.is_none() {
        return Err(Error::Config(
            "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
        ));
    }
    let app_url = state.cfg.require_app_url()?;

    let token = ConnectionToken::new(chat.id.to_string(), state.clock.now_ms()).encode();
    let link = connection_link(app_url, &token);

    info!("issuing connection link");

    let msg = OutgoingMessage::html(chat.chat_id(), welcome_html(chat.display_name()))
        .with_keyboard(InlineKeyboard::single(CONNECT_BUTTON_LABEL, link));
    deliver(state, msg).await;

    Ok(())
}

fn welcome_html(name: &str) -> String {
    format!(
        "👋 Hello {}!\n\n\
         🔐 <b>Privacy-First Trading Alerts</b>\n\n\
         Click the button below to connect your browser. \
         This generates a one-time secure token that expires in 5 minutes.\n\n\
         <b>Privacy Guarantee:</b>\n\
         • Your Chat ID NEVER leaves your device\n\
         • The token is one-time use only\n\
         • No data is stored on our servers\n\
         • All alerts go directly from your browser to Telegram",
        escape_html(name)
    )
}
