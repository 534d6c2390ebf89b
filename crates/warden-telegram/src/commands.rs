//! Command handlers: /start, /search, /id.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{Chat, InlineKeyboardButton, InlineKeyboardMarkup, User};
use tracing::warn;

use warden_search::format::{format_duration, format_views};

use crate::context::BotContext;
use crate::error::TelegramError;
use crate::send;

/// A recognized bot command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Search { query: String },
    Id,
}

impl Command {
    /// Parse command text: leading `/`, optional `@botname` suffix,
    /// case-insensitive name, remainder of the line as the argument string.
    ///
    /// Returns `None` for plain text and for unknown commands — the handler
    /// ignores both kinds of `/`-prefixed text it doesn't recognize.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, args) = match rest.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (rest, ""),
        };
        let name = head.split('@').next().unwrap_or(head).to_ascii_lowercase();
        match name.as_str() {
            "start" => Some(Self::Start),
            "search" => Some(Self::Search {
                query: args.to_string(),
            }),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

pub async fn dispatch(
    bot: &Bot,
    msg: &Message,
    ctx: &Arc<BotContext>,
    command: Command,
) -> Result<(), TelegramError> {
    match command {
        Command::Start => start(bot, msg).await,
        Command::Search { query } => search(bot, msg, ctx, &query).await,
        Command::Id => get_id(bot, msg).await,
    }
}

/// /start — welcome text plus an add-to-group button.
async fn start(bot: &Bot, msg: &Message) -> Result<(), TelegramError> {
    let name = msg
        .from
        .as_ref()
        .map(|u| u.first_name.as_str())
        .unwrap_or("there");

    let welcome = format!(
        "🎵 *Welcome, {name}!*\n\n\
         I keep group chats clean and find music for you.\n\n\
         *What I do:*\n\
         • 🔍 search YouTube for songs\n\
         • 🛡 delete messages that break the group rules\n\
         • 👤 look up user and chat IDs\n\n\
         *Commands:*\n\
         `/search <song name>` — search YouTube\n\
         `/id` — show your ID (or reply to someone for theirs)\n\n\
         Add me to your group and make me an admin!"
    );

    let me = bot.get_me().await?;
    let bot_username = me.user.username.as_deref().unwrap_or("");
    let invite = format!("https://t.me/{bot_username}?startgroup=true");
    match reqwest::Url::parse(&invite) {
        Ok(url) => {
            let keyboard = InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
                "➕ Add me to your group",
                url,
            )]]);
            send::send_markdown_with_keyboard(bot, msg.chat.id, &welcome, keyboard).await?;
        }
        Err(_) => {
            send::send_markdown(bot, msg.chat.id, &welcome).await?;
        }
    }
    Ok(())
}

/// /search <query> — transient status message, then one card per result.
async fn search(
    bot: &Bot,
    msg: &Message,
    ctx: &Arc<BotContext>,
    query: &str,
) -> Result<(), TelegramError> {
    let Some(client) = ctx.search.as_ref() else {
        bot.send_message(msg.chat.id, "Search is not configured on this bot.")
            .await?;
        return Ok(());
    };

    if query.is_empty() {
        send::send_markdown(
            bot,
            msg.chat.id,
            "*Usage:*\n`/search <song name>`\n\nExample: `/search caruso pavarotti`",
        )
        .await?;
        return Ok(());
    }

    let status = bot
        .send_message(msg.chat.id, format!("🔍 Searching for: {query}…"))
        .await?;

    let results = match client.search(query).await {
        Ok(results) => results,
        Err(e) => {
            warn!(error = %e, query, "youtube search failed");
            bot.edit_message_text(msg.chat.id, status.id, "❌ Search failed — try again later.")
                .await?;
            return Ok(());
        }
    };

    if results.is_empty() {
        bot.edit_message_text(msg.chat.id, status.id, "❌ No results found.")
            .await?;
        return Ok(());
    }

    // The status message has served its purpose.
    let _ = bot.delete_message(msg.chat.id, status.id).await;

    for (i, video) in results.iter().enumerate() {
        let card = format!(
            "*{n}. {title}*\n👤 {channel}\n⏱ {duration}\n👁 {views} views",
            n = i + 1,
            title = video.title,
            channel = video.channel,
            duration = format_duration(&video.duration),
            views = format_views(video.views),
        );
        match reqwest::Url::parse(&video.url()) {
            Ok(url) => {
                let keyboard = InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
                    "▶️ Watch on YouTube",
                    url,
                )]]);
                send::send_markdown_with_keyboard(bot, msg.chat.id, &card, keyboard).await?;
            }
            Err(_) => {
                send::send_markdown(bot, msg.chat.id, &card).await?;
            }
        }
    }
    Ok(())
}

/// /id — identifiers of the replied-to user, or of the caller.
async fn get_id(bot: &Bot, msg: &Message) -> Result<(), TelegramError> {
    let replied_user = msg.reply_to_message().and_then(|m| m.from.as_ref());

    let text = match replied_user {
        Some(user) => format!(
            "🆔 *User info:*\n\n{}\n\n💬 *This chat:*\n📛 Title: {}\n🆔 ID: `{}`",
            user_block(user),
            msg.chat.title().unwrap_or("n/a"),
            msg.chat.id.0,
        ),
        None => match msg.from.as_ref() {
            Some(user) => format!(
                "🆔 *Your info:*\n\n{}\n\n💬 *This chat:*\n📛 Type: {}\n🆔 ID: `{}`",
                user_block(user),
                chat_type_label(&msg.chat),
                msg.chat.id.0,
            ),
            None => "Could not determine who sent that.".to_string(),
        },
    };

    send::send_markdown(bot, msg.chat.id, &text).await?;
    Ok(())
}

fn user_block(user: &User) -> String {
    let username = user
        .username
        .as_deref()
        .map(|u| format!("@{u}"))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "👤 Name: `{}`\n📝 Username: {}\n🆔 ID: `{}`\n🤖 Bot: {}",
        user.first_name,
        username,
        user.id.0,
        if user.is_bot { "yes" } else { "no" },
    )
}

fn chat_type_label(chat: &Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}
