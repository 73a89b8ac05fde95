//! Telegram webhook receiver.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use tglink_telegram::router::handle_webhook_body;

use crate::dto::WebhookAck;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/webhook
///
/// Acknowledges every update with `{ok:true}` so Telegram never redelivers. The
/// only exception is `/start` without the configuration needed to issue a link.
pub async fn receive_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    handle_webhook_body(&state.bot, &body).await?;
    Ok(Json(WebhookAck::ok()))
}
