//! # trackbot-core
//!
//! Core types and traits for the tracking bot: [`Handler`], [`Bot`], message and user types,
//! the error taxonomy, and tracing initialization. Transport-agnostic; used by
//! trackbot-telegram, handler-chain, and track-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, Result, TrackbotError};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerOutcome, Message, ToCoreMessage, ToCoreUser, User};
