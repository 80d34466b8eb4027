use serde::{Deserialize, Serialize};

/// One event from the backend stream.
///
/// The tag set is closed: an unknown `type` fails deserialization
/// instead of silently passing through, so a new event kind is a
/// compile-time-visible change at every dispatch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Continuation token for the next submission; sent once, first.
    Checkpoint {
        #[serde(default)]
        checkpoint_id: Option<String>,
    },
    /// A fragment of the AI response text.
    Content {
        #[serde(default)]
        content: String,
    },
    /// The backend started a web search for `query`.
    SearchStart {
        #[serde(default)]
        query: String,
    },
    /// Search finished; the backend is reading the result URLs.
    SearchResults {
        #[serde(default)]
        urls: UrlPayload,
    },
    /// The search failed.
    SearchError {
        #[serde(default)]
        error: String,
    },
    /// Terminal event: the response is complete.
    End,
}

/// URL field of a `search_results` event.
///
/// The backend sends either a JSON array or a single string, and the
/// string form may itself be JSON-encoded (double encoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlPayload {
    Many(Vec<String>),
    One(String),
}

impl Default for UrlPayload {
    fn default() -> Self {
        UrlPayload::Many(Vec::new())
    }
}
