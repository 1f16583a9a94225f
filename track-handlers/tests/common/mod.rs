//! Shared mocks for handler tests: a recording tracker and a recording bot. No
//! network, no Telegram.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use telemetree_client::{TelemetreeError, TrackResponse, TrackedUpdate, UpdateTracker};
use trackbot_core::{Bot, Chat, Message, TrackbotError, User};

/// Mock tracker: records calls and the last envelope; can report not-ready or fail
/// every tracking call.
pub struct MockTracker {
    ready: bool,
    fail: bool,
    pub calls: AtomicUsize,
    pub last_update: Mutex<Option<TrackedUpdate>>,
}

impl MockTracker {
    pub fn ready() -> Self {
        Self {
            ready: true,
            fail: false,
            calls: AtomicUsize::new(0),
            last_update: Mutex::new(None),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::ready()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ready()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateTracker for MockTracker {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn track_update(
        &self,
        update: &TrackedUpdate,
    ) -> Result<TrackResponse, TelemetreeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update.lock().unwrap() = Some(update.clone());
        if self.fail {
            return Err(TelemetreeError::Http {
                status: 500,
                body: "ingestion unavailable".to_string(),
            });
        }
        Ok(TrackResponse {
            status: Some("ok".to_string()),
            success: true,
            request_id: Some("req-1".to_string()),
            ..TrackResponse::default()
        })
    }
}

/// Mock bot: records (chat_id, text) sends; can fail every send.
pub struct MockBot {
    fail: bool,
    pub sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> trackbot_core::Result<()> {
        if self.fail {
            return Err(TrackbotError::Bot("telegram api error".to_string()));
        }
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

/// Inbound message matching the shape the Telegram adapter produces.
pub fn make_message(id: i64, user_id: i64, chat_id: i64, text: Option<&str>) -> Message {
    Message {
        id,
        user: User {
            id: user_id,
            is_bot: false,
            first_name: Some("Test".to_string()),
            last_name: None,
            username: Some("test_user".to_string()),
            language_code: Some("en".to_string()),
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
            title: None,
            username: None,
        },
        date: 1_706_529_600,
        text: text.map(String::from),
    }
}
