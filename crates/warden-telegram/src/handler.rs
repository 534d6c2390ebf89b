//! Message handler registered in the teloxide Dispatcher — the dispatch
//! router of the bot.
//!
//! Runs for every incoming `Message`. Performs:
//! 1. Bot-message filter
//! 2. Command interception (/start, /search, /id) — any chat
//! 3. Group plain text → moderation pipeline, spawned so the dispatcher
//!    never blocks on enforcement
//!
//! Private one-to-one plain text and unknown `/` commands are ignored; the
//! moderation pipeline only ever sees plain text from multi-party chats.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use warden_core::types::{AuthorId, ChatRef, MessageRef};
use warden_moderation::InboundMessage;

use crate::commands::{self, Command};
use crate::context::BotContext;

pub async fn handle_message(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> ResponseResult<()> {
    // Ignore messages from other bots.
    if msg.from.as_ref().map(|u| u.is_bot).unwrap_or(false) {
        return Ok(());
    }

    let text = msg.text().unwrap_or("");

    // Command interception. Unknown `/` commands are dropped entirely —
    // command-prefixed text is never moderated.
    if text.starts_with('/') {
        if let Some(command) = Command::parse(text) {
            if let Err(e) = commands::dispatch(&bot, &msg, &ctx, command).await {
                warn!(error = %e, chat = msg.chat.id.0, "command handler failed");
            }
        }
        return Ok(());
    }

    // Moderation applies to plain text inside multi-party chats only.
    if !(msg.chat.is_group() || msg.chat.is_supergroup()) {
        return Ok(());
    }
    if text.is_empty() {
        return Ok(());
    }
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };

    let inbound = InboundMessage {
        reference: MessageRef::new(ChatRef(msg.chat.id.0), msg.id.0),
        author: AuthorId(from.id.0),
        author_display_name: from.first_name.clone(),
        text: text.to_string(),
    };

    // One spawned invocation per message; invocations run concurrently and
    // share nothing mutable.
    let ctx = Arc::clone(&ctx);
    tokio::spawn(async move {
        ctx.pipeline.process(inbound).await;
    });

    Ok(())
}
