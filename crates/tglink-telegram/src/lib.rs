//! Telegram adapter (teloxide).
//!
//! This crate implements the `tglink-core` MessagingPort over the Telegram Bot API
//! and dispatches inbound webhook updates to the command handlers.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
};

pub mod handlers;
pub mod router;

use tglink_core::{
    config::Config,
    domain::{CallbackId, ChatId},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{CallbackAnswer, InlineKeyboard, OutgoingMessage},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Build a messenger from config, or `None` when no bot credential is set.
    pub fn from_config(cfg: &Config) -> Result<Option<Self>> {
        let Some(token) = cfg.telegram_bot_token.as_deref() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(cfg.telegram_timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build telegram http client: {e}")))?;

        let mut bot = Bot::with_client(token, client);
        if let Some(api_url) = &cfg.telegram_api_url {
            bot = bot.set_api_url(api_url.clone());
        }

        Ok(Some(Self::new(bot)))
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_markup(keyboard: InlineKeyboard) -> InlineKeyboardMarkup {
        let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|b| InlineKeyboardButton::url(b.label, b.url))
                    .collect()
            })
            .collect();
        InlineKeyboardMarkup::new(rows)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_message(&self, msg: OutgoingMessage) -> Result<()> {
        let mut req = self
            .bot
            .send_message(Self::tg_chat(msg.chat_id), msg.html)
            .parse_mode(ParseMode::Html);
        if msg.disable_web_page_preview {
            req = req.disable_web_page_preview(true);
        }
        if let Some(keyboard) = msg.keyboard {
            req = req.reply_markup(Self::tg_markup(keyboard));
        }

        req.await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn answer_callback_query(
        &self,
        callback_id: &CallbackId,
        answer: CallbackAnswer,
    ) -> Result<()> {
        let mut req = self
            .bot
            .answer_callback_query(callback_id.0.clone())
            .show_alert(answer.show_alert);
        if let Some(text) = answer.text {
            req = req.text(text);
        }

        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use tglink_core::messaging::types::UrlButton;

    use super::*;

    #[test]
    fn no_messenger_without_credential() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert!(TelegramMessenger::from_config(&cfg).unwrap().is_none());
    }

    #[test]
    fn builds_messenger_with_api_override() {
        let cfg = Config::from_lookup(|k| match k {
            "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
            "TELEGRAM_API_URL" => Some("http://127.0.0.1:8081/".to_string()),
            _ => None,
        })
        .unwrap();
        let messenger = TelegramMessenger::from_config(&cfg).unwrap().unwrap();
        assert_eq!(messenger.bot().token(), "123:abc");
        assert_eq!(messenger.bot().api_url().as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn keyboard_rows_map_to_url_buttons() {
        let url = Url::parse("https://alerts.example.com/?connect=abc").unwrap();
        let keyboard = InlineKeyboard {
            rows: vec![
                vec![UrlButton {
                    label: "one".to_string(),
                    url: url.clone(),
                }],
                vec![
                    UrlButton {
                        label: "two".to_string(),
                        url: url.clone(),
                    },
                    UrlButton {
                        label: "three".to_string(),
                        url,
                    },
                ],
            ],
        };
        let markup = TelegramMessenger::tg_markup(keyboard);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "one");
    }
}
