//! `ChatTransport` implementation backed by the teloxide `Bot`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::MessageId;

use warden_core::types::{ChatRef, MessageRef};
use warden_moderation::{ChatTransport, NoticeFormat, TransportError};

use crate::send;

pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn delete_message(&self, msg: &MessageRef) -> Result<(), TransportError> {
        self.bot
            .delete_message(ChatId(msg.chat.0), MessageId(msg.id))
            .await
            .map(|_| ())
            .map_err(|e| TransportError::Delete(e.to_string()))
    }

    async fn send_message(
        &self,
        chat: ChatRef,
        text: &str,
        format: NoticeFormat,
    ) -> Result<MessageRef, TransportError> {
        let sent = match format {
            NoticeFormat::Markdown => send::send_markdown(&self.bot, ChatId(chat.0), text).await,
            NoticeFormat::Plain => self.bot.send_message(ChatId(chat.0), text).await,
        }
        .map_err(|e| TransportError::Send(e.to_string()))?;

        Ok(MessageRef::new(ChatRef(sent.chat.id.0), sent.id.0))
    }
}
