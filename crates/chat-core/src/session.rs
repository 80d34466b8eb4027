//! Chat session controller.
//!
//! Folds the decoded event stream into session state. Each submission
//! runs one state machine: Idle → Submitting → Streaming →
//! {Completed | Failed}. All mutation happens on the single UI thread,
//! one signal at a time.

use std::cell::RefCell;

use futures::StreamExt;

use chat_types::event::StreamEvent;
use chat_types::message::{Message, CONNECT_ERROR_TEXT, STREAM_ERROR_TEXT};
use chat_types::search::SearchProgress;

use crate::decode::{decode_event, decode_urls};
use crate::ports::{EventStream, StreamRequest, StreamSignal};
use crate::progress;
use crate::store::MessageStore;

/// What the caller should do with the connection after applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Open,
    Closed,
}

/// Per-stream context, created on submission and discarded when the
/// stream closes. Replaces mutable state captured across callbacks:
/// the content accumulator and current search progress live here, not
/// in the message store.
#[derive(Debug)]
struct StreamContext {
    stream_id: u64,
    /// Id of the AI placeholder message this stream fills in.
    message_id: u64,
    /// Accumulated content fragments, in arrival order.
    content: String,
    progress: Option<SearchProgress>,
}

pub struct ChatSession {
    store: MessageStore,
    /// Bound to the input field by the UI.
    pub current_input: String,
    checkpoint_id: Option<String>,
    is_loading: bool,
    active: Option<StreamContext>,
    /// Generation counter; stale stream ids are ignored.
    next_stream_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            store: MessageStore::new(),
            current_input: String::new(),
            checkpoint_id: None,
            is_loading: false,
            active: None,
            next_stream_id: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn checkpoint_id(&self) -> Option<&str> {
        self.checkpoint_id.as_deref()
    }

    /// Submit the current input.
    ///
    /// Appends the user message and the AI placeholder, clears the
    /// input, and returns the request the caller must open a stream
    /// with. Returns `None` (a no-op) when the trimmed input is empty
    /// or a stream is already in flight.
    pub fn submit(&mut self) -> Option<StreamRequest> {
        let input = self.current_input.trim();
        if input.is_empty() || self.is_loading {
            return None;
        }
        let input = input.to_string();

        let user_id = self.store.next_id();
        self.store.push(Message::user(user_id, &input));

        let message_id = self.store.next_id();
        self.store.push(Message::ai_placeholder(message_id));

        self.current_input.clear();
        self.is_loading = true;

        self.next_stream_id += 1;
        let stream_id = self.next_stream_id;
        self.active = Some(StreamContext {
            stream_id,
            message_id,
            content: String::new(),
            progress: None,
        });

        log::debug!("Submitting stream {} for message {}", stream_id, message_id);
        Some(StreamRequest {
            input,
            checkpoint_id: self.checkpoint_id.clone(),
            stream_id,
        })
    }

    /// Apply one decoded event from the stream with the given id.
    ///
    /// Events from a stream that is no longer active (superseded,
    /// aborted, or cleared) are ignored and the caller is told to
    /// close the connection.
    pub fn apply(&mut self, stream_id: u64, event: StreamEvent) -> StreamStatus {
        let Some(ctx) = self.active.as_mut() else {
            log::debug!("Ignoring event from stream {} (no active stream)", stream_id);
            return StreamStatus::Closed;
        };
        if ctx.stream_id != stream_id {
            log::debug!(
                "Ignoring event from stale stream {} (active: {})",
                stream_id,
                ctx.stream_id
            );
            return StreamStatus::Closed;
        }

        match event {
            StreamEvent::Checkpoint { checkpoint_id } => {
                if let Some(id) = checkpoint_id {
                    log::debug!("Checkpoint received: {}", id);
                    self.checkpoint_id = Some(id);
                }
            }
            StreamEvent::Content { content } => {
                ctx.content.push_str(&content);
                let full = ctx.content.clone();
                self.store.update(ctx.message_id, |m| {
                    m.content = full;
                    m.is_loading = false;
                });
            }
            StreamEvent::SearchStart { query } => {
                let next = progress::begin_search(query);
                ctx.progress = Some(next.clone());
                self.store.update(ctx.message_id, |m| {
                    m.search_info = Some(next);
                    m.is_loading = false;
                });
            }
            StreamEvent::SearchResults { urls } => {
                let urls = decode_urls(urls);
                let next = progress::record_results(ctx.progress.as_ref(), urls);
                ctx.progress = Some(next.clone());
                self.store.update(ctx.message_id, |m| {
                    m.search_info = Some(next);
                    m.is_loading = false;
                });
            }
            StreamEvent::SearchError { error } => {
                let next = progress::record_error(ctx.progress.as_ref(), error);
                ctx.progress = Some(next.clone());
                self.store.update(ctx.message_id, |m| {
                    m.search_info = Some(next);
                    m.is_loading = false;
                });
            }
            StreamEvent::End => {
                if let Some(prior) = ctx.progress.as_ref() {
                    let finished = progress::finish_writing(Some(prior));
                    self.store.update(ctx.message_id, |m| {
                        m.search_info = Some(finished);
                        m.is_loading = false;
                    });
                }
                log::debug!("Stream {} completed", stream_id);
                self.active = None;
                self.is_loading = false;
                return StreamStatus::Closed;
            }
        }

        StreamStatus::Open
    }

    /// Connection-level failure while streaming.
    ///
    /// Partial content that already arrived is preserved; the fixed
    /// fallback text is shown only when nothing had streamed yet.
    pub fn connection_error(&mut self, stream_id: u64) {
        let ctx = match self.active.take() {
            Some(ctx) if ctx.stream_id == stream_id => ctx,
            other => {
                // Failure of a stream that is no longer active.
                self.active = other;
                return;
            }
        };

        log::error!("Stream {} failed", stream_id);
        self.is_loading = false;

        if ctx.content.is_empty() {
            self.store.update(ctx.message_id, |m| {
                m.content = STREAM_ERROR_TEXT.to_string();
                m.is_loading = false;
            });
        } else {
            self.store.update(ctx.message_id, |m| m.is_loading = false);
        }
    }

    /// The connection could not be opened at all.
    ///
    /// Surfaced as a distinct standalone message; the placeholder is
    /// left as appended but its spinner is stopped.
    pub fn setup_error(&mut self) {
        log::error!("Failed to open stream connection");
        if let Some(ctx) = self.active.take() {
            self.store.update(ctx.message_id, |m| m.is_loading = false);
        }
        let id = self.store.next_id();
        self.store.push(Message::standalone_error(id, CONNECT_ERROR_TEXT));
        self.is_loading = false;
    }

    /// Abort the in-flight stream, if any.
    ///
    /// Content that already streamed stays on the message. The caller's
    /// driving task observes the stale stream id and drops the
    /// connection.
    pub fn abort(&mut self) {
        if let Some(ctx) = self.active.take() {
            log::info!("Aborting stream {}", ctx.stream_id);
            self.store.update(ctx.message_id, |m| m.is_loading = false);
            self.is_loading = false;
        }
    }

    /// Reset the session to its initial state: greeting only, empty
    /// input, no checkpoint, not loading. Also invalidates any
    /// in-flight stream so its late events are ignored.
    pub fn clear(&mut self) {
        log::info!("Clearing chat session");
        self.store.reset();
        self.current_input.clear();
        self.checkpoint_id = None;
        self.is_loading = false;
        self.active = None;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Pump signals from an open stream into the session until the stream
/// closes, fails, or the session stops caring about it.
///
/// `notify` runs after every applied signal (the app uses it to
/// request a repaint). The stream is dropped on return, which closes
/// the underlying connection.
pub async fn drive_stream(
    session: &RefCell<ChatSession>,
    mut stream: EventStream,
    stream_id: u64,
    notify: impl Fn(),
) {
    while let Some(signal) = stream.next().await {
        match signal {
            StreamSignal::Data(raw) => {
                let Some(event) = decode_event(&raw) else {
                    continue;
                };
                let status = session.borrow_mut().apply(stream_id, event);
                notify();
                if status == StreamStatus::Closed {
                    break;
                }
            }
            StreamSignal::Failed(reason) => {
                log::error!("Stream {} connection error: {}", stream_id, reason);
                session.borrow_mut().connection_error(stream_id);
                notify();
                break;
            }
        }
    }
}
