//! The chat-protocol capability the pipeline enforces through.

use async_trait::async_trait;

use warden_core::types::{ChatRef, MessageRef};

/// Errors surfaced by a transport implementation.
///
/// Always logged by the pipeline, never propagated out of `process` —
/// enforcement is best-effort from the chat's point of view.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("send failed: {0}")]
    Send(String),

    #[error("delete failed: {0}")]
    Delete(String),
}

/// Markup applied to an outbound notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeFormat {
    Plain,
    /// Lightweight bold/italic emphasis; the transport handles
    /// protocol-specific escaping and falls back to plain on rejection.
    Markdown,
}

/// Send/delete capability of the chat protocol.
///
/// Implemented by the Telegram adapter in production and by a recording mock
/// in the pipeline tests.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Delete one message. Fails when the bot lacks delete permission or the
    /// message is already gone.
    async fn delete_message(&self, msg: &MessageRef) -> Result<(), TransportError>;

    /// Send `text` to `chat`, returning a handle to the sent message so it
    /// can be deleted later.
    async fn send_message(
        &self,
        chat: ChatRef,
        text: &str,
        format: NoticeFormat,
    ) -> Result<MessageRef, TransportError>;
}
