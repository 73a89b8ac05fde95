//! Response bodies.

use serde::{Deserialize, Serialize};

use tglink_core::token::TokenStatus;

/// Acknowledgement returned to the webhook caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookAck {
    pub ok: bool,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Result of validating a connection token. Deliberately has no subject field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValidation {
    pub valid: bool,
    /// Remaining lifetime in whole seconds.
    pub expires_in: u64,
    pub message: String,
}

impl From<TokenStatus> for TokenValidation {
    fn from(status: TokenStatus) -> Self {
        let message = if status.valid {
            "Token is valid"
        } else {
            "Token has expired"
        };
        Self {
            valid: status.valid,
            expires_in: status.expires_in_secs(),
            message: message.to_string(),
        }
    }
}

/// Body for a rejected token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRejection {
    pub valid: bool,
    pub error: String,
}

/// Generic error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
