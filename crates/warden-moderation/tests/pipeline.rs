//! End-to-end pipeline scenarios against a recording mock transport.
//!
//! Time is virtual (`start_paused`), so the 10-second retraction delay costs
//! nothing and can be stepped over precisely with `tokio::time::advance`.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use warden_core::types::{AuthorId, ChatRef, MessageRef};
use warden_moderation::{
    BannedLexicon, ChatTransport, InboundMessage, ModerationPipeline, NoticeFormat, TransportError,
};

const DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Delete(MessageRef),
    Send(ChatRef, String),
}

#[derive(Default)]
struct MockTransport {
    calls: Mutex<Vec<Call>>,
    fail_delete: AtomicBool,
    fail_send: AtomicBool,
    next_id: AtomicI32,
}

impl MockTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI32::new(1000),
            ..Default::default()
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn deletes(&self) -> Vec<MessageRef> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete(r) => Some(r),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn delete_message(&self, msg: &MessageRef) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(Call::Delete(*msg));
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(TransportError::Delete("message can't be deleted".into()));
        }
        Ok(())
    }

    async fn send_message(
        &self,
        chat: ChatRef,
        text: &str,
        _format: NoticeFormat,
    ) -> Result<MessageRef, TransportError> {
        self.calls.lock().unwrap().push(Call::Send(chat, text.to_string()));
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(TransportError::Send("not enough rights".into()));
        }
        Ok(MessageRef::new(
            chat,
            self.next_id.fetch_add(1, Ordering::SeqCst),
        ))
    }
}

fn pipeline(
    terms: &[&str],
    transport: Arc<MockTransport>,
) -> ModerationPipeline<MockTransport> {
    ModerationPipeline::new(
        Arc::new(BannedLexicon::new(terms.iter().copied())),
        transport,
        DELAY,
    )
}

fn inbound(chat: i64, id: i32, author: u64, name: &str, text: &str) -> InboundMessage {
    InboundMessage {
        reference: MessageRef::new(ChatRef(chat), id),
        author: AuthorId(author),
        author_display_name: name.to_string(),
        text: text.to_string(),
    }
}

/// Let spawned retraction tasks reach their timer / run to completion.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn scenario_a_violation_deletes_warns_then_retracts() {
    let transport = MockTransport::new();
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline
        .process(inbound(-100, 7, 42, "Mallory", "buy Spam now"))
        .await;

    // delete-then-warn, in that order, nothing else yet
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], Call::Delete(MessageRef::new(ChatRef(-100), 7)));
    match &calls[1] {
        Call::Send(chat, body) => {
            assert_eq!(*chat, ChatRef(-100));
            assert!(body.contains("Mallory"), "warning must name the author");
        }
        other => panic!("expected warning send, got {other:?}"),
    }

    // the retraction must not fire before the full delay has elapsed
    settle().await;
    tokio::time::advance(DELAY - Duration::from_secs(1)).await;
    settle().await;
    assert_eq!(transport.calls().len(), 2);

    tokio::time::advance(Duration::from_secs(1)).await;
    settle().await;

    let deletes = transport.deletes();
    assert_eq!(deletes.len(), 2, "original + warning");
    assert_eq!(deletes[1].chat, ChatRef(-100));
    assert_ne!(deletes[1].id, 7, "retraction targets the warning, not the original");
}

#[tokio::test(start_paused = true)]
async fn scenario_a_retraction_fires_exactly_once() {
    let transport = MockTransport::new();
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline.process(inbound(-100, 7, 42, "Mallory", "spam")).await;

    settle().await;
    tokio::time::advance(DELAY * 5).await;
    settle().await;
    tokio::time::advance(DELAY * 5).await;
    settle().await;

    assert_eq!(transport.deletes().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn scenario_b_clean_message_makes_no_transport_calls() {
    let transport = MockTransport::new();
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline
        .process(inbound(-100, 8, 42, "Alice", "hello world"))
        .await;

    settle().await;
    tokio::time::advance(DELAY * 2).await;
    settle().await;

    assert!(transport.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn empty_text_is_a_no_op() {
    let transport = MockTransport::new();
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline.process(inbound(-100, 9, 42, "Alice", "")).await;

    assert!(transport.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn scenario_c_delete_failure_does_not_suppress_warning() {
    let transport = MockTransport::new();
    transport.fail_delete.store(true, Ordering::SeqCst);
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline.process(inbound(-100, 7, 42, "Mallory", "spam")).await;

    // delete attempted and failed, warning still sent
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Delete(_)));
    assert!(matches!(calls[1], Call::Send(_, _)));

    // and the retraction is still scheduled
    settle().await;
    tokio::time::advance(DELAY).await;
    settle().await;
    assert_eq!(transport.deletes().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn scenario_d_send_failure_schedules_no_retraction() {
    let transport = MockTransport::new();
    transport.fail_send.store(true, Ordering::SeqCst);
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    pipeline.process(inbound(-100, 7, 42, "Mallory", "spam")).await;

    settle().await;
    tokio::time::advance(DELAY * 2).await;
    settle().await;

    // one delete (the original), one failed send, and nothing afterwards
    assert_eq!(transport.deletes().len(), 1);
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn concurrent_invocations_keep_their_own_delete_then_warn_order() {
    let transport = MockTransport::new();
    let pipeline = pipeline(&["spam"], Arc::clone(&transport));

    let a = pipeline.process(inbound(-100, 1, 42, "Mallory", "spam one"));
    let b = pipeline.process(inbound(-200, 2, 43, "Trudy", "spam two"));
    tokio::join!(a, b);

    // within each chat: the original's delete strictly precedes the warning
    for chat in [ChatRef(-100), ChatRef(-200)] {
        let per_chat: Vec<Call> = transport
            .calls()
            .into_iter()
            .filter(|c| match c {
                Call::Delete(r) => r.chat == chat,
                Call::Send(c2, _) => *c2 == chat,
            })
            .collect();
        assert_eq!(per_chat.len(), 2, "chat {chat:?}");
        assert!(matches!(per_chat[0], Call::Delete(_)));
        assert!(matches!(per_chat[1], Call::Send(_, _)));
    }

    // both warnings retract independently
    settle().await;
    tokio::time::advance(DELAY).await;
    settle().await;
    assert_eq!(transport.deletes().len(), 4);
}
