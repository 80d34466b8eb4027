//! Port traits — the hexagonal boundary between core and platform.
//!
//! The core never imports platform code; the browser transport in
//! `chat-platform` implements these traits.

use std::pin::Pin;
use futures::Stream;
use chat_types::Result;

/// Everything needed to open one streaming connection.
///
/// Produced by [`crate::session::ChatSession::submit`]. The
/// `stream_id` is a per-submission generation counter; the session
/// ignores events that carry a stale id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRequest {
    /// The user's input as submitted, whitespace-trimmed.
    pub input: String,
    /// Continuation token from the previous stream, if any.
    pub checkpoint_id: Option<String>,
    pub stream_id: u64,
}

/// One signal from an open connection.
#[derive(Debug, Clone)]
pub enum StreamSignal {
    /// Raw data payload of one server-sent event, not yet decoded.
    Data(String),
    /// Connection-level failure. The stream ends after this.
    Failed(String),
}

/// A live event stream. Dropping it closes the underlying connection.
pub type EventStream = Pin<Box<dyn Stream<Item = StreamSignal>>>;

/// Transport for the chat backend's streaming endpoint.
pub trait ChatStreamPort {
    /// Open a streaming connection for one submission.
    /// An `Err` here is the setup-failure path: no connection exists.
    fn open(&self, req: &StreamRequest) -> Result<EventStream>;
}
