//! Request handlers.

use axum::http::StatusCode;

use crate::error::ApiError;

pub mod connect;
pub mod health;
pub mod webhook;

/// `OPTIONS` short-circuit: 200 with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
