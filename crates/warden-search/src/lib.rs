//! `warden-search` — YouTube keyword lookup for the /search command.
//!
//! Thin client over the YouTube Data API v3. A lookup is two calls:
//! `search` for matching video ids and snippets, then `videos` to fill in
//! duration and view count for those ids.

pub mod client;
pub mod format;

pub use client::{SearchClient, SearchError, VideoResult};
