use reqwest::Url;
use tracing::debug;

use tglink_core::{formatting::escape_html, messaging::types::OutgoingMessage, update::Chat};

use crate::router::BotState;

use super::deliver;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Privacy,
    Status,
    Unknown(String),
}

/// Parse `/cmd`, `/cmd@botname` or `/cmd args`. Returns `None` for non-command text.
pub fn parse_command(text: &str) -> Option<BotCommand> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or("").to_lowercase();

    Some(match name.as_str() {
        "start" => BotCommand::Start,
        "help" => BotCommand::Help,
        "privacy" => BotCommand::Privacy,
        "status" => BotCommand::Status,
        _ => BotCommand::Unknown(name),
    })
}

pub async fn handle_command(state: &BotState, chat: &Chat, command: BotCommand) {
    let msg = match command {
        BotCommand::Help => OutgoingMessage::html(chat.chat_id(), help_html()),
        BotCommand::Privacy => {
            OutgoingMessage::html(chat.chat_id(), privacy_html(state.cfg.app_url.as_ref()))
                .without_preview()
        }
        BotCommand::Status => OutgoingMessage::html(chat.chat_id(), status_html()),
        BotCommand::Start => return,
        BotCommand::Unknown(name) => {
            debug!(command = %name, "ignoring unknown command");
            return;
        }
    };

    deliver(state, msg).await;
}

fn help_html() -> String {
    [
        "🤖 <b>Available Commands</b>",
        "",
        "/start - Start the bot and connect browser",
        "/help - Show this help message",
        "/privacy - View privacy policy",
        "/status - Check connection status",
    ]
    .join("\n")
}

fn privacy_html(app_url: Option<&Url>) -> String {
    let mut out = [
        "🔐 <b>Privacy Policy</b>",
        "",
        "We use a <b>Zero-Knowledge Architecture</b>:",
        "",
        "• Your Chat ID is stored ONLY on your device",
        "• We NEVER see your Chat ID",
        "• All alerts go directly from your browser to Telegram",
        "• No databases, no logging, no tracking",
        "• Open source - you can verify the code",
    ]
    .join("\n");

    if let Some(url) = app_url {
        out.push_str(&format!(
            "\n\n<a href=\"{}\">View Source</a>",
            escape_html(url.as_str())
        ));
    }
    out
}

fn status_html() -> String {
    [
        "📊 <b>Connection Status</b>",
        "",
        "To connect your browser:",
        "1. Click the link in the /start message",
        "2. The token will connect automatically",
        "3. Your Chat ID will be stored locally",
        "",
        "⚠️ <b>Note:</b> If the token expired, just send /start again.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tglink_core::domain::ChatId;

    use super::*;
    use crate::router::tests::{state_with, FakeMessenger};

    fn chat() -> Chat {
        Chat {
            id: 42,
            username: None,
            first_name: None,
        }
    }

    #[test]
    fn parses_commands_with_bot_suffix_and_args() {
        assert_eq!(parse_command("/start"), Some(BotCommand::Start));
        assert_eq!(parse_command("/start@AlertsBot"), Some(BotCommand::Start));
        assert_eq!(parse_command("  /HELP me"), Some(BotCommand::Help));
        assert_eq!(parse_command("/privacy"), Some(BotCommand::Privacy));
        assert_eq!(parse_command("/status"), Some(BotCommand::Status));
        assert_eq!(
            parse_command("/settings"),
            Some(BotCommand::Unknown("settings".to_string()))
        );
        assert_eq!(parse_command("hello /start"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn canned_replies_are_sent_as_html() {
        let fake = Arc::new(FakeMessenger::default());
        let state = state_with(Some(fake.clone()), Some("https://alerts.example.com"));

        handle_command(&state, &chat(), BotCommand::Help).await;
        handle_command(&state, &chat(), BotCommand::Privacy).await;
        handle_command(&state, &chat(), BotCommand::Status).await;

        let sends = fake.sends.lock().unwrap();
        assert_eq!(sends.len(), 3);
        assert!(sends.iter().all(|m| m.chat_id == ChatId(42)));
        assert!(sends[0].html.contains("/privacy - View privacy policy"));
        assert!(sends[1]
            .html
            .contains("<a href=\"https://alerts.example.com/\">View Source</a>"));
        assert!(sends[1].disable_web_page_preview);
        assert!(sends[2].html.contains("send /start again"));
        assert!(sends.iter().all(|m| m.keyboard.is_none()));
    }

    #[tokio::test]
    async fn privacy_without_app_url_omits_link() {
        let fake = Arc::new(FakeMessenger::default());
        let state = state_with(Some(fake.clone()), None);

        handle_command(&state, &chat(), BotCommand::Privacy).await;

        let sends = fake.sends.lock().unwrap();
        assert!(!sends[0].html.contains("<a href"));
    }

    #[tokio::test]
    async fn unknown_commands_send_nothing() {
        let fake = Arc::new(FakeMessenger::default());
        let state = state_with(Some(fake.clone()), None);

        handle_command(&state, &chat(), BotCommand::Unknown("x".to_string())).await;

        assert!(fake.sends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failures_are_swallowed() {
        let fake = Arc::new(FakeMessenger {
            fail: true,
            ..Default::default()
        });
        let state = state_with(Some(fake.clone()), None);

        handle_command(&state, &chat(), BotCommand::Help).await;

        assert_eq!(fake.sends.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_credential_is_not_fatal() {
        let state = state_with(None, None);
        handle_command(&state, &chat(), BotCommand::Status).await;
    }
}
