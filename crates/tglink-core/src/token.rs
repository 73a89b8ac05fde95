//! Connection tokens.
//!
//! A token is the URL-safe base64 form of `"{subject_id}:{issued_at_ms}"` with the
//! padding stripped. It carries no signature: validation only checks shape and age.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};

/// How long a token stays valid after issuance.
pub const TOKEN_TTL_MS: i64 = 300_000;

/// Tokens longer than this are rejected before any decoding work.
pub const MAX_TOKEN_LEN: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionToken {
    pub subject_id: String,
    pub issued_at_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is too long")]
    TooLong,

    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not utf-8")]
    NotUtf8,

    #[error("token payload has no separator")]
    MissingSeparator,

    #[error("token payload has an empty field")]
    EmptyField,

    #[error("token timestamp is not an integer")]
    InvalidTimestamp,
}

impl ConnectionToken {
    pub fn new(subject_id: impl Into<String>, issued_at_ms: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            issued_at_ms,
        }
    }

    pub fn encode(&self) -> String {
        encode(&self.subject_id, self.issued_at_ms)
    }

    /// Milliseconds elapsed between issuance and `now_ms` (negative for future tokens).
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.issued_at_ms)
    }

    pub fn status_at(&self, now_ms: i64) -> TokenStatus {
        let age = self.age_ms(now_ms);
        let valid = age < TOKEN_TTL_MS;
        let remaining_ms = if valid {
            TOKEN_TTL_MS.saturating_sub(age).max(0)
        } else {
            0
        };
        TokenStatus {
            valid,
            expires_in: Duration::from_millis(remaining_ms as u64),
        }
    }
}

/// Expiry verdict for a decoded token. Never carries the subject id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenStatus {
    pub valid: bool,
    pub expires_in: Duration,
}

impl TokenStatus {
    /// Remaining lifetime in whole seconds, rounded down.
    pub fn expires_in_secs(&self) -> u64 {
        self.expires_in.as_secs()
    }
}

pub fn encode(subject_id: &str, issued_at_ms: i64) -> String {
    let raw = format!("{subject_id}:{issued_at_ms}");
    STANDARD
        .encode(raw.as_bytes())
        .replace('+', "-")
        .replace('/', "_")
        .trim_end_matches('=')
        .to_string()
}

pub fn decode(token: &str) -> Result<ConnectionToken, TokenError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(TokenError::TooLong);
    }

    let mut b64 = token.replace('-', "+").replace('_', "/");
    let pad = (4 - b64.len() % 4) % 4;
    b64.extend(std::iter::repeat('=').take(pad));

    let bytes = STANDARD.decode(b64.as_bytes())?;
    let text = String::from_utf8(bytes).map_err(|_| TokenError::NotUtf8)?;

    let Some((subject_id, ts)) = text.split_once(':') else {
        return Err(TokenError::MissingSeparator);
    };
    if subject_id.is_empty() || ts.is_empty() {
        return Err(TokenError::EmptyField);
    }
    let issued_at_ms = ts
        .parse::<i64>()
        .map_err(|_| TokenError::InvalidTimestamp)?;

    Ok(ConnectionToken::new(subject_id, issued_at_ms))
}

/// Decode `token` and judge it against `now_ms`.
pub fn check(token: &str, now_ms: i64) -> Result<TokenStatus, TokenError> {
    decode(token).map(|t| t.status_at(now_ms))
}
