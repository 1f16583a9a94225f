//! Catch-all message handler: tracks every inbound update, no reply.

use std::sync::Arc;

use async_trait::async_trait;
use telemetree_client::UpdateTracker;
use trackbot_core::{Handler, HandlerError, HandlerOutcome, Message, Result};
use tracing::info;

use crate::normalizer::update_envelope;

/// Relays every inbound message into a tracking call. Runs for `/start` messages too;
/// subscriptions are independent, so the command handler and this one both fire.
pub struct TrackMessageHandler {
    tracker: Arc<dyn UpdateTracker>,
}

impl TrackMessageHandler {
    pub fn new(tracker: Arc<dyn UpdateTracker>) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl Handler for TrackMessageHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerOutcome> {
        if !self.tracker.is_ready() {
            return Err(HandlerError::NotReady.into());
        }

        info!(
            message_id = message.id,
            user_id = message.user.id,
            chat_id = message.chat.id,
            text = ?message.text,
            "Processing message"
        );

        let update = update_envelope(message);
        let response = self
            .tracker
            .track_update(&update)
            .await
            .map_err(|e| HandlerError::Tracking(e.to_string()))?;

        info!(
            status = ?response.status,
            success = response.success,
            error = ?response.error,
            request_id = ?response.request_id,
            processing_time = ?response.processing_time,
            "Tracking response received"
        );

        info!(
            user_id = message.user.id,
            text = ?message.text,
            "Received message"
        );

        Ok(HandlerOutcome::Tracked)
    }
}
