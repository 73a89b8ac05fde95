//! Connection token validation.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;

use tglink_core::token;

use crate::dto::TokenValidation;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/connect?token=…
///
/// Reports whether the token is well-formed and unexpired. The decoded chat id
/// never leaves this function.
pub async fn validate_token(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<TokenValidation>, ApiError> {
    let token = params
        .get("token")
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::TokenRequired)?;

    let status = token::check(token, state.now_ms())?;
    Ok(Json(TokenValidation::from(status)))
}
