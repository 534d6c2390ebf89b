//! Message sending helpers for the Telegram adapter.
//!
//! Notices and command replies are composed with a small markup subset:
//! `*bold*` spans and `` `code` `` spans. [`escape_markdown_v2`] escapes every
//! other MarkdownV2 special so the composed text parses, and if Telegram still
//! rejects it (say, an unbalanced `*` inside a display name — names are
//! inserted verbatim) the original text is resent plain. A raw asterisk beats
//! a swallowed message.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, Message, ParseMode};
use teloxide::RequestError;

/// Escape MarkdownV2 specials, preserving the `*` and `` ` `` markup subset.
///
/// MarkdownV2 treats `_ * [ ] ( ) ~ ` # + - = | { } . !` as special; all but
/// the two we compose with are escaped.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '_' | '[' | ']' | '(' | ')' | '~' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.'
            | '!' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Send `text` as MarkdownV2; on rejection resend the original text plain.
pub async fn send_markdown(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
) -> Result<Message, RequestError> {
    let escaped = escape_markdown_v2(text);
    match bot
        .send_message(chat_id, escaped)
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        Ok(sent) => Ok(sent),
        Err(_) => bot.send_message(chat_id, text).await,
    }
}

/// [`send_markdown`] with an inline keyboard attached.
pub async fn send_markdown_with_keyboard(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    keyboard: InlineKeyboardMarkup,
) -> Result<Message, RequestError> {
    let escaped = escape_markdown_v2(text);
    match bot
        .send_message(chat_id, escaped)
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(keyboard.clone())
        .await
    {
        Ok(sent) => Ok(sent),
        Err(_) => bot.send_message(chat_id, text).reply_markup(keyboard).await,
    }
}
