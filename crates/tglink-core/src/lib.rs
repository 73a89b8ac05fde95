//! Core logic for the Telegram connection-link service.
//!
//! This crate is intentionally framework-agnostic. The Telegram Bot API and the HTTP
//! server live in adapter crates; they meet here through the token codec, the
//! webhook update model, and the messaging port.

pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod token;
pub mod update;

pub use errors::{Error, Result};
