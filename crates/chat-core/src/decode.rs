//! Tolerant decoding of raw stream payloads.
//!
//! A malformed payload is never an error for the caller: it is logged
//! and dropped so the stream keeps flowing.

use chat_types::event::{StreamEvent, UrlPayload};

/// Decode one raw SSE data payload into a typed event.
/// Returns `None` (and logs) on any malformed or unknown payload.
pub fn decode_event(raw: &str) -> Option<StreamEvent> {
    match serde_json::from_str::<StreamEvent>(raw) {
        Ok(event) => Some(event),
        Err(e) => {
            log::warn!("Dropping malformed stream event: {} (payload: {:?})", e, raw);
            None
        }
    }
}

/// Flatten a URL payload into a list of URLs.
///
/// The backend double-encodes the list as a JSON string inside the
/// event JSON, so the string form is first tried as a serialized
/// `Vec<String>`. A string that is not valid JSON is kept as a single
/// opaque entry; an empty string yields no entries.
pub fn decode_urls(payload: UrlPayload) -> Vec<String> {
    match payload {
        UrlPayload::Many(urls) => urls,
        UrlPayload::One(raw) => {
            if raw.is_empty() {
                return Vec::new();
            }
            match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(urls) => urls,
                Err(e) => {
                    log::debug!("Search URL payload is not a JSON list ({}), keeping as-is", e);
                    vec![raw]
                }
            }
        }
    }
}
