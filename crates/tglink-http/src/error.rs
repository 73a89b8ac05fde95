//! Maps handler errors to HTTP responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use tglink_core::token::TokenError;

use crate::dto::{ErrorBody, TokenRejection};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("token required")]
    TokenRequired,

    #[error("invalid token: {0}")]
    InvalidToken(TokenError),

    #[error(transparent)]
    Internal(tglink_core::Error),
}

impl From<tglink_core::Error> for ApiError {
    fn from(e: tglink_core::Error) -> Self {
        match e {
            tglink_core::Error::Token(t) => ApiError::InvalidToken(t),
            other => ApiError::Internal(other),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        ApiError::InvalidToken(e)
    }
}

/// Client-facing description of a token failure.
fn token_error_message(e: &TokenError) -> &'static str {
    match e {
        TokenError::MissingSeparator => "Invalid token format",
        TokenError::EmptyField | TokenError::InvalidTimestamp => "Invalid token data",
        TokenError::TooLong | TokenError::Base64(_) | TokenError::NotUtf8 => "Invalid token",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody {
                    error: "Method not allowed".to_string(),
                }),
            )
                .into_response(),
            ApiError::TokenRequired => rejection("Token required"),
            ApiError::InvalidToken(e) => {
                debug!(error = %e, "rejecting token");
                rejection(token_error_message(&e))
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Internal server error");
                internal_error()
            }
        }
    }
}

fn rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(TokenRejection {
            valid: false,
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

/// Response for a panicking handler. The panic payload is logged, never returned.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    error!(panic = %detail, "handler panicked");
    internal_error()
}
