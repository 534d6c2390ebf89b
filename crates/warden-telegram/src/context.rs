//! Shared per-process context handed to every handler invocation.

use warden_moderation::ModerationPipeline;
use warden_search::SearchClient;

use crate::transport::TelegramTransport;

/// Everything the message handler needs beyond the `Bot` itself.
///
/// Built once in [`crate::adapter::TelegramAdapter::new`] and injected into
/// the dispatcher as an `Arc` dependency.
pub struct BotContext {
    pub pipeline: ModerationPipeline<TelegramTransport>,
    /// `None` when no API key is configured — /search answers with a hint.
    pub search: Option<SearchClient>,
}
