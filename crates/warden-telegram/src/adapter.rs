//! Telegram channel adapter.
//!
//! Wraps a teloxide `Bot` + `Dispatcher` and drives the long-polling event
//! loop until the process exits. Long polling — no public URL required.

use std::sync::Arc;
use std::time::Duration;

use teloxide::prelude::*;
use tracing::info;

use warden_moderation::{BannedLexicon, ModerationPipeline};
use warden_search::SearchClient;

use crate::context::BotContext;
use crate::handler::handle_message;
use crate::transport::TelegramTransport;

pub struct TelegramAdapter {
    bot: Bot,
    ctx: Arc<BotContext>,
}

impl TelegramAdapter {
    /// Assemble the bot, its transport, and the moderation pipeline.
    ///
    /// `warning_ttl` is how long a posted warning lives before retraction.
    pub fn new(
        token: &str,
        lexicon: Arc<BannedLexicon>,
        warning_ttl: Duration,
        search: Option<SearchClient>,
    ) -> Self {
        let bot = Bot::new(token);
        let transport = Arc::new(TelegramTransport::new(bot.clone()));
        let pipeline = ModerationPipeline::new(lexicon, transport, warning_ttl);
        let ctx = Arc::new(BotContext { pipeline, search });
        Self { bot, ctx }
    }

    /// Connect to Telegram and drive the long-polling loop.
    ///
    /// Never returns — runs for the lifetime of the process.
    pub async fn run(self) {
        info!("telegram: starting long-polling dispatcher");

        let handler = Update::filter_message().endpoint(handle_message);

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.ctx])
            .default_handler(|_upd| async {})
            .build()
            .dispatch()
            .await;
    }
}
