//! Server-sent-event transport over the browser `EventSource` API.
//!
//! Uses `gloo-net`'s `EventSource` wrapper for WASM compatibility. The
//! returned stream owns the source, so dropping the stream closes the
//! connection — that is how abort/clear actually cancel a stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use gloo_net::eventsource::futures::{EventSource, EventSourceSubscription};

use chat_core::ports::{ChatStreamPort, EventStream, StreamRequest, StreamSignal};
use chat_types::config::BackendConfig;
use chat_types::{ChatError, Result};

/// Build the streaming endpoint URL:
/// `{base}/chat_stream/{input}` with an optional `checkpoint_id` query.
pub fn stream_url(config: &BackendConfig, input: &str, checkpoint_id: Option<&str>) -> String {
    let mut url = format!("{}/chat_stream/{}", config.base_url, urlencoding::encode(input));
    if let Some(checkpoint) = checkpoint_id {
        url.push_str("?checkpoint_id=");
        url.push_str(&urlencoding::encode(checkpoint));
    }
    url
}

/// `ChatStreamPort` implementation backed by a browser `EventSource`.
pub struct EventSourceTransport {
    config: BackendConfig,
}

impl EventSourceTransport {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl ChatStreamPort for EventSourceTransport {
    fn open(&self, req: &StreamRequest) -> Result<EventStream> {
        let url = stream_url(&self.config, &req.input, req.checkpoint_id.as_deref());
        log::info!("Opening event stream {}: {}", req.stream_id, url);

        let mut source =
            EventSource::new(&url).map_err(|e| ChatError::Stream(e.to_string()))?;
        let subscription = source
            .subscribe("message")
            .map_err(|e| ChatError::Stream(e.to_string()))?;

        Ok(Box::pin(SseStream {
            _source: source,
            subscription,
        }))
    }
}

/// Adapts an `EventSource` subscription into the port's signal stream.
/// Holds the source itself: gloo closes the connection on drop.
struct SseStream {
    _source: EventSource,
    subscription: EventSourceSubscription,
}

impl Stream for SseStream {
    type Item = StreamSignal;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.subscription).poll_next(cx) {
            Poll::Ready(Some(Ok((_, message)))) => {
                let data = message.data().as_string().unwrap_or_default();
                Poll::Ready(Some(StreamSignal::Data(data)))
            }
            Poll::Ready(Some(Err(e))) => {
                Poll::Ready(Some(StreamSignal::Failed(format!("{:?}", e))))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
