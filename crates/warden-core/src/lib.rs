//! `warden-core` — shared kernel for the warden bot.
//!
//! Holds the pieces every other crate needs: configuration loading
//! (`warden.toml` + `WARDEN_*` env overrides), the process-wide error
//! taxonomy, and the opaque identifier newtypes used across the
//! moderation pipeline and the Telegram adapter.

pub mod config;
pub mod error;
pub mod types;

pub use config::WardenConfig;
pub use error::{Result, WardenError};
