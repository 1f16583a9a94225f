//! Core types: user, chat, message, handler outcome, and Handler trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sender identity as delivered by the transport (id plus optional metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

/// Chat (private, group, supergroup, or channel) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
    pub title: Option<String>,
    pub username: Option<String>,
}

/// A single inbound message. Created by the transport per event, consumed by exactly
/// one dispatch cycle, then dropped; no identity persists across messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub user: User,
    pub chat: Chat,
    /// Unix send time (seconds) as reported by the transport. Kept for logging only;
    /// the tracking envelope records time of processing instead.
    pub date: i64,
    /// Text body; `None` for non-text messages. Absence is preserved, never coerced
    /// to an empty string.
    pub text: Option<String>,
}

impl Message {
    /// Returns true if the text is the leading-slash command `name`: exactly `/name`,
    /// `/name@bot...`, or `/name args`. `/named` does not match.
    pub fn is_command(&self, name: &str) -> bool {
        let Some(text) = self.text.as_deref() else {
            return false;
        };
        let Some(rest) = text.strip_prefix('/').and_then(|t| t.strip_prefix(name)) else {
            return false;
        };
        rest.is_empty() || rest.starts_with(' ') || rest.starts_with('@')
    }
}

/// Outcome of one handler run, logged by the chain at a single call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Update was forwarded to the analytics client.
    Tracked,
    /// Update was forwarded and a reply was sent; carries the reply text.
    Replied(String),
    /// The handler did not match this message.
    Ignored,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A message handler. Handlers are independent subscriptions: the chain runs every
/// handler for every message and contains each handler's failures on its own.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Errors are contained and logged by the chain; they are
    /// never propagated to the transport.
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerOutcome>;
}
