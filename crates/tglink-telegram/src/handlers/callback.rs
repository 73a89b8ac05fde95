use tglink_core::{domain::CallbackId, messaging::types::CallbackAnswer};

use crate::router::BotState;

use super::answer;

/// Button presses only need an acknowledgement; the URL button opens the link
/// client-side.
pub async fn handle_callback(state: &BotState, callback_id: &CallbackId) {
    answer(
        state,
        callback_id,
        CallbackAnswer::toast("Opening connection link..."),
    )
    .await;
}
