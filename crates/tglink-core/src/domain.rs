/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram callback query id (opaque string).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(pub String);
