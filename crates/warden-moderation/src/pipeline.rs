//! Moderation pipeline — one invocation per inbound group message.
//!
//! Per invocation: `Received → Matched? → {Ignored | Enforcing} →
//! (Deleted-Original →) Warned → (after delay) Retracted`. `Ignored` and
//! `Retracted` are terminal; no transport call is ever retried.
//!
//! Invocations for different messages may run concurrently — the lexicon is
//! read-only and the transport is shared behind an `Arc`, so there is no
//! shared mutable state. Only the delayed retraction suspends, and it runs
//! as its own spawned task so it never blocks later messages.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use warden_core::types::{AuthorId, MessageRef};

use crate::lexicon::BannedLexicon;
use crate::notice::compose_warning;
use crate::transport::{ChatTransport, NoticeFormat};

/// Immutable snapshot of one inbound group message.
///
/// Owned by the invocation that processes it; dropped afterwards.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub reference: MessageRef,
    pub author: AuthorId,
    pub author_display_name: String,
    pub text: String,
}

/// The enforcement pipeline. Cheap to share behind an `Arc`.
///
/// All configuration (lexicon, retraction delay) is injected at construction
/// and never mutated afterwards.
pub struct ModerationPipeline<T: ChatTransport + 'static> {
    lexicon: Arc<BannedLexicon>,
    transport: Arc<T>,
    retraction_delay: Duration,
}

impl<T: ChatTransport + 'static> ModerationPipeline<T> {
    pub fn new(lexicon: Arc<BannedLexicon>, transport: Arc<T>, retraction_delay: Duration) -> Self {
        Self {
            lexicon,
            transport,
            retraction_delay,
        }
    }

    /// Process one inbound plain-text group message.
    ///
    /// Never fails, whatever the input or the transport does: every failure
    /// is logged and absorbed so one bad message can never halt the stream.
    ///
    /// On a lexicon match:
    ///   1. delete the original (failure logged, sequence continues — we
    ///      warn even when we could not remove the text),
    ///   2. post the warning notice (failure logged, sequence stops —
    ///      nothing to retract),
    ///   3. spawn the retraction task for the warning.
    pub async fn process(&self, msg: InboundMessage) {
        // Guards against non-text events routed in by mistake.
        if msg.text.is_empty() {
            return;
        }
        if !self.lexicon.matches(&msg.text) {
            return;
        }

        // Delete strictly before warning: the notice must never appear
        // alongside the offending text.
        let original_deleted = match self.transport.delete_message(&msg.reference).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    error = %e,
                    author = %msg.author,
                    original = %msg.reference,
                    "could not delete violating message; warning anyway"
                );
                false
            }
        };

        let notice = compose_warning(&msg.author_display_name);
        let warning = match self
            .transport
            .send_message(msg.reference.chat, &notice.body, NoticeFormat::Markdown)
            .await
        {
            Ok(sent) => sent,
            Err(e) => {
                warn!(
                    error = %e,
                    author = %msg.author,
                    chat = %msg.reference.chat,
                    "could not send warning notice"
                );
                return;
            }
        };

        // Nothing cancels a scheduled retraction; the handle is dropped.
        let _ = self.schedule_retraction(warning);

        info!(
            author = %msg.author,
            chat = %msg.reference.chat,
            original_deleted,
            "enforced banned-content policy"
        );
    }

    /// Spawn the retraction of a sent warning after the fixed delay.
    ///
    /// The task outlives the invocation and always fires once scheduled;
    /// nothing holds the handle, so a process shutdown before the delay
    /// elapses simply drops it (accepted best-effort).
    fn schedule_retraction(&self, warning: MessageRef) -> tokio::task::JoinHandle<()> {
        let transport = Arc::clone(&self.transport);
        let delay = self.retraction_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = transport.delete_message(&warning).await {
                warn!(error = %e, warning = %warning, "could not retract warning notice");
            }
        })
    }
}
