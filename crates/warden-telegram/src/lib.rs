//! `warden-telegram` — the teloxide channel adapter.
//!
//! Owns the long-polling dispatcher, the message handler that routes
//! commands vs. group plain text, the command handlers themselves, and the
//! [`TelegramTransport`] the moderation pipeline enforces through.

pub mod adapter;
pub mod commands;
pub mod context;
pub mod error;
pub mod handler;
pub mod send;
pub mod transport;

pub use adapter::TelegramAdapter;
pub use context::BotContext;
pub use error::TelegramError;
pub use transport::TelegramTransport;
