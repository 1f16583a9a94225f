use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-message failure kinds. All of these are contained at the chain boundary:
/// they end handling of one message and never crash the poll loop.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Analytics client invoked before/without a completed initialization.
    #[error("analytics client not ready")]
    NotReady,

    /// Tracking call failed; the message embeds any response status/body.
    #[error("tracking failed: {0}")]
    Tracking(String),

    /// Outbound reply could not be delivered.
    #[error("send failed: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, TrackbotError>;
