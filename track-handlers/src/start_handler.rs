//! `/start` command handler: tracks the update, then greets the user.

use std::sync::Arc;

use async_trait::async_trait;
use telemetree_client::UpdateTracker;
use trackbot_core::{Bot, Handler, HandlerError, HandlerOutcome, Message, Result};
use tracing::info;

use crate::normalizer::update_envelope;

/// Fixed greeting sent after a `/start` update was tracked.
pub const GREETING: &str = "Hello! I am ready to help you.";

/// Handles the `/start` command: readiness guard, envelope normalization, tracking
/// call, response logging, then the greeting reply. Tracking failures end handling of
/// the message before the reply; every failure is returned as a contained
/// [`HandlerError`] and logged by the chain.
pub struct StartCommandHandler {
    tracker: Arc<dyn UpdateTracker>,
    bot: Arc<dyn Bot>,
}

impl StartCommandHandler {
    pub fn new(tracker: Arc<dyn UpdateTracker>, bot: Arc<dyn Bot>) -> Self {
        Self { tracker, bot }
    }
}

#[async_trait]
impl Handler for StartCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerOutcome> {
        if !message.is_command("start") {
            return Ok(HandlerOutcome::Ignored);
        }

        if !self.tracker.is_ready() {
            return Err(HandlerError::NotReady.into());
        }

        info!(
            message_id = message.id,
            user_id = message.user.id,
            chat_id = message.chat.id,
            text = ?message.text,
            "Processing /start command"
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

        self.bot
            .send_message(&message.chat, GREETING)
            .await
            .map_err(|e| HandlerError::Send(e.to_string()))?;

        Ok(HandlerOutcome::Replied(GREETING.to_string()))
    }
}
