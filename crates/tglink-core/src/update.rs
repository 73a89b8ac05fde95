//! Inbound webhook update model.
//!
//! Only the fields the bot acts on are modelled, and all of them are optional so
//! that unexpected payload shapes still parse and can be acknowledged.

use serde::Deserialize;

use crate::domain::{CallbackId, ChatId};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
}

/// What an update asks the bot to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateKind<'a> {
    Text { chat: &'a Chat, text: &'a str },
    Callback { id: CallbackId },
    Ignored,
}

impl Update {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Messages take precedence over callback queries.
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(msg) = &self.message {
            if let Some(text) = msg.text.as_deref() {
                return UpdateKind::Text {
                    chat: &msg.chat,
                    text,
                };
            }
        }
        if let Some(q) = &self.callback_query {
            return UpdateKind::Callback {
                id: CallbackId(q.id.clone()),
            };
        }
        UpdateKind::Ignored
    }
}

impl Chat {
    pub fn chat_id(&self) -> ChatId {
        ChatId(self.id)
    }

    /// Name used to greet the user: username, then first name, then "User".
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.first_name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("User")
    }
}
