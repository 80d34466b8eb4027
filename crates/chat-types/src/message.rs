use serde::{Deserialize, Serialize};
use crate::search::SearchProgress;

/// Greeting shown as the first message of every session.
pub const GREETING_TEXT: &str = "Hi there, how can I help you?";

/// Shown in place of the AI response when the stream fails before any
/// content has arrived.
pub const STREAM_ERROR_TEXT: &str = "Sorry, there was an error processing your request.";

/// Shown as a standalone message when the connection could not be opened.
pub const CONNECT_ERROR_TEXT: &str = "Sorry, there was an error connecting to the server.";

/// A single turn in the conversation.
///
/// Ids are unique and monotonically assigned by the message store.
/// Only the AI message bound to the active stream is ever mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub is_user: bool,
    #[serde(default)]
    pub is_loading: bool,
    /// Search progress for AI responses that triggered a web search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_info: Option<SearchProgress>,
}

impl Message {
    /// The fixed greeting, always message id 1.
    pub fn greeting() -> Self {
        Self {
            id: 1,
            content: GREETING_TEXT.to_string(),
            is_user: false,
            is_loading: false,
            search_info: None,
        }
    }

    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            content: text.into(),
            is_user: true,
            is_loading: false,
            search_info: None,
        }
    }

    /// Empty AI message appended on submission, filled in by the stream.
    pub fn ai_placeholder(id: u64) -> Self {
        Self {
            id,
            content: String::new(),
            is_user: false,
            is_loading: true,
            search_info: Some(SearchProgress::default()),
        }
    }

    /// Standalone error message used when the connection never opened.
    pub fn standalone_error(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            content: text.into(),
            is_user: false,
            is_loading: false,
            search_info: None,
        }
    }
}
