//! # telemetree-client
//!
//! Client for the Telemetree analytics API. `initialize()` fetches the project
//! settings from the configuration endpoint; after that the client is ready and
//! `track_update()` delivers update envelopes to the project's events host.
//! Retry, batching, and backoff are owned by the backend, not this client.
//!
//! Handlers depend on the [`UpdateTracker`] trait so tests can substitute a
//! recording mock for the HTTP client.

mod types;

pub use types::{
    ProjectSettings, TrackResponse, TrackedChat, TrackedMessage, TrackedUpdate, TrackedUser,
};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::info;

const TELEMETREE_CONFIG_URL: &str = "https://config.ton.solutions/v1/client/config";

#[derive(Error, Debug)]
pub enum TelemetreeError {
    /// Tracking was attempted before a successful `initialize()`.
    #[error("telemetree client not initialized")]
    NotInitialized,

    /// The API answered with a non-2xx status; body is kept for diagnostics.
    #[error("telemetree API error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Update-tracking capability consumed by the handlers. Implemented by
/// [`TelemetreeClient`]; tests provide recording mocks.
#[async_trait]
pub trait UpdateTracker: Send + Sync {
    /// True once initialization completed and the client can build and deliver
    /// events. Handlers guard on this before every tracking call.
    fn is_ready(&self) -> bool;

    /// Delivers one update envelope. The response fields are diagnostic only.
    async fn track_update(&self, update: &TrackedUpdate)
        -> Result<TrackResponse, TelemetreeError>;
}

/// Telemetree API client. Created once at startup, initialized, then shared for the
/// process lifetime; safe for concurrent `track_update` calls.
#[derive(Debug, Clone)]
pub struct TelemetreeClient {
    client: Client,
    project_id: String,
    api_key: String,
    config_url: String,
    settings: Option<ProjectSettings>,
}

impl TelemetreeClient {
    /// Creates an uninitialized client for the given project credentials. Credentials
    /// are not validated here; bad values surface when `initialize()` calls the API.
    pub fn new(project_id: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            project_id,
            api_key,
            config_url: TELEMETREE_CONFIG_URL.to_string(),
            settings: None,
        }
    }

    /// Overrides the configuration endpoint (e.g. to point tests at a mock server).
    pub fn with_config_url(mut self, config_url: String) -> Self {
        self.config_url = config_url;
        self
    }

    /// Fetches the project settings from the configuration endpoint. Must complete
    /// before any tracking call; a failure leaves the client not ready.
    pub async fn initialize(&mut self) -> Result<(), TelemetreeError> {
        let url = format!("{}?project={}", self.config_url, self.project_id);
        let response = self
            .client
            .get(&url)
            .header("x-project-id", &self.project_id)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TelemetreeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let settings: ProjectSettings = serde_json::from_str(&body)?;
        info!(
            host = %settings.host,
            auto_capture = settings.auto_capture,
            "Telemetree client initialized"
        );
        self.settings = Some(settings);
        Ok(())
    }

    /// Returns the events host, if initialized. Exposed for startup diagnostics.
    pub fn events_host(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.host.as_str())
    }
}

#[async_trait]
impl UpdateTracker for TelemetreeClient {
    fn is_ready(&self) -> bool {
        self.settings.is_some()
    }

    async fn track_update(
        &self,
        update: &TrackedUpdate,
    ) -> Result<TrackResponse, TelemetreeError> {
        let settings = self.settings.as_ref().ok_or(TelemetreeError::NotInitialized)?;

        info!(
            update_id = update.update_id,
            message_id = update.message.message_id,
            chat_id = update.message.chat.id,
            "Sending tracking request"
        );

        let response = self
            .client
            .post(&settings.host)
            .header("x-project-id", &self.project_id)
            .header("x-api-key", &self.api_key)
            .json(update)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TelemetreeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TrackResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
