use async_trait::async_trait;

use crate::{
    domain::CallbackId,
    messaging::types::{CallbackAnswer, OutgoingMessage},
    Result,
};

/// Outbound messaging port.
///
/// Both calls are fire-and-forget from the webhook's point of view: callers log
/// failures and never retry.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_message(&self, msg: OutgoingMessage) -> Result<()>;

    async fn answer_callback_query(
        &self,
        callback_id: &CallbackId,
        answer: CallbackAnswer,
    ) -> Result<()>;
}
