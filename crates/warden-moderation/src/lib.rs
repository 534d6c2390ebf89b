//! `warden-moderation` — the message classification and moderation pipeline.
//!
//! Every plain-text group message the Telegram handler routes in passes
//! through [`ModerationPipeline::process`]: the banned-term lexicon decides
//! violation yes/no, and on violation the pipeline deletes the original
//! message, posts a warning notice naming the author, and schedules the
//! warning's own deletion after a fixed delay.
//!
//! The pipeline talks to the chat protocol only through the [`ChatTransport`]
//! trait, so the whole enforcement sequence is testable against a mock.

pub mod lexicon;
pub mod notice;
pub mod pipeline;
pub mod transport;

pub use lexicon::BannedLexicon;
pub use notice::{compose_warning, WarningNotice};
pub use pipeline::{InboundMessage, ModerationPipeline};
pub use transport::{ChatTransport, NoticeFormat, TransportError};
