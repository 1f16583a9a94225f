//! Wire types for the Telemetree API: the update envelope sent to the events
//! endpoint, the tracking response, and the project settings returned by the
//! configuration endpoint.

use serde::{Deserialize, Serialize};

/// The canonical update envelope expected by the analytics backend.
///
/// `update_id` is generated locally from wall-clock milliseconds at normalization
/// time. Uniqueness is best-effort only: two updates normalized within the same
/// millisecond collide. The backend accepts this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedUpdate {
    pub update_id: i64,
    pub message: TrackedMessage,
}

/// Nested message record. Identity fields are copied verbatim from the inbound
/// message; `date` is the time of processing (floor of wall-clock seconds), not the
/// transport's send time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedMessage {
    pub message_id: i64,
    pub from: TrackedUser,
    pub chat: TrackedChat,
    pub date: i64,
    /// Absent for non-text messages; serialized as absent, never as `""`, so the
    /// analytics schema can distinguish the two.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedUser {
    pub id: i64,
    pub is_bot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Result of one tracking call. All fields are diagnostic: they are logged and never
/// affect control flow. Parsed leniently so schema drift on the backend does not turn
/// a delivered event into an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
    #[serde(default, rename = "processingTime")]
    pub processing_time: Option<f64>,
}

/// Project settings returned by the configuration endpoint during `initialize()`.
/// Holding these is what makes the client ready to build and deliver events.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSettings {
    /// Events ingestion URL for this project.
    pub host: String,
    #[serde(default)]
    pub auto_capture: bool,
}
