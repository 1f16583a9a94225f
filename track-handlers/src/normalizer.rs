//! Builds the analytics update envelope from an inbound message.

use chrono::Utc;
use telemetree_client::{TrackedChat, TrackedMessage, TrackedUpdate, TrackedUser};
use trackbot_core::Message;

/// Reshapes an inbound message into the envelope expected by the analytics backend.
/// Pure data reshaping: never fails for a structurally valid message.
///
/// The envelope's `update_id` is the current wall-clock time in milliseconds
/// (best-effort uniqueness; bursts within one millisecond collide) and the nested
/// `date` is the floor of the current wall-clock time in seconds. The recorded event
/// time is the time of processing, not the transport's send time; analytics event
/// ordering depends on this.
pub fn update_envelope(message: &Message) -> TrackedUpdate {
    let now = Utc::now();
    TrackedUpdate {
        update_id: now.timestamp_millis(),
        message: TrackedMessage {
            message_id: message.id,
            from: TrackedUser {
                id: message.user.id,
                is_bot: message.user.is_bot,
                first_name: message.user.first_name.clone(),
                last_name: message.user.last_name.clone(),
                username: message.user.username.clone(),
                language_code: message.user.language_code.clone(),
            },
            chat: TrackedChat {
                id: message.chat.id,
                chat_type: message.chat.chat_type.clone(),
                title: message.chat.title.clone(),
                username: message.chat.username.clone(),
            },
            date: now.timestamp(),
            text: message.text.clone(),
        },
    }
}
