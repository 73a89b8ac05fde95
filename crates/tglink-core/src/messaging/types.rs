use reqwest::Url;

use crate::domain::ChatId;

/// An HTML message to send to one chat.
#[derive(Clone, Debug, PartialEq)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub html: String,
    pub keyboard: Option<InlineKeyboard>,
    pub disable_web_page_preview: bool,
}

impl OutgoingMessage {
    pub fn html(chat_id: ChatId, html: impl Into<String>) -> Self {
        Self {
            chat_id,
            html: html.into(),
            keyboard: None,
            disable_web_page_preview: false,
        }
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn without_preview(mut self) -> Self {
        self.disable_web_page_preview = true;
        self
    }
}

/// Inline keyboard made of URL buttons, one row per entry.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<UrlButton>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UrlButton {
    pub label: String,
    pub url: Url,
}

impl InlineKeyboard {
    /// A keyboard holding exactly one URL button.
    pub fn single(label: impl Into<String>, url: Url) -> Self {
        Self {
            rows: vec![vec![UrlButton {
                label: label.into(),
                url,
            }]],
        }
    }
}

/// Reply to a callback query (button press).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackAnswer {
    pub text: Option<String>,
    pub show_alert: bool,
}

impl CallbackAnswer {
    pub fn toast(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            show_alert: false,
        }
    }
}
