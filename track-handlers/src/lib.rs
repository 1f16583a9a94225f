//! # track-handlers
//!
//! Handlers that relay inbound messages into Telemetree tracking calls: the `/start`
//! command handler (track + fixed greeting reply) and the catch-all message handler
//! (track only). Both guard on analytics readiness and normalize the message into the
//! update envelope before delivery.

mod normalizer;
mod start_handler;
mod track_handler;

pub use normalizer::update_envelope;
pub use start_handler::{StartCommandHandler, GREETING};
pub use track_handler::TrackMessageHandler;
