//! # Handler chain
//!
//! Runs every registered handler for each message. Handlers are independent
//! subscriptions (a `/start` text fires both the command handler and the catch-all),
//! so there is no early stop: each handler runs, its failure is contained here, and
//! its outcome is logged at this single call site. The transport never observes a
//! handler error.

use std::sync::Arc;
use trackbot_core::{Handler, HandlerOutcome, Message};
use tracing::{debug, error, info};

/// Per-message dispatch counts, returned for observability and tests. The dispatch
/// future always resolves; failures only show up in `failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers that processed the message (tracked and/or replied).
    pub completed: usize,
    /// Handlers that did not match the message.
    pub ignored: usize,
    /// Handlers that returned a contained error.
    pub failed: usize,
}

/// Chain of independent handlers, run in registration order for every message.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler. Every handler runs for every message.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all handlers for one message. Each handler's result (ok outcome or
    /// contained error) is logged here; an error in one handler never prevents the
    /// remaining handlers from running and is never propagated to the caller.
    pub async fn dispatch(&self, message: &Message) -> DispatchReport {
        let mut report = DispatchReport::default();

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = message.id,
            handlers = self.handlers.len(),
            "step: dispatch started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            match handler.handle(message).await {
                Ok(HandlerOutcome::Ignored) => {
                    debug!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler ignored message"
                    );
                    report.ignored += 1;
                }
                Ok(outcome) => {
                    let (outcome_type, reply_len) = match &outcome {
                        HandlerOutcome::Tracked => ("Tracked", None),
                        HandlerOutcome::Replied(s) => ("Replied", Some(s.len())),
                        HandlerOutcome::Ignored => unreachable!(),
                    };
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        outcome = %outcome_type,
                        reply_len = ?reply_len,
                        "step: handler done"
                    );
                    report.completed += 1;
                }
                Err(e) => {
                    error!(
                        user_id = message.user.id,
                        chat_id = message.chat.id,
                        message_id = message.id,
                        handler = %handler_name,
                        error = %e,
                        "step: handler failed (contained)"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = message.id,
            completed = report.completed,
            ignored = report.ignored,
            failed = report.failed,
            "step: dispatch finished"
        );

        report
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
