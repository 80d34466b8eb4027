pub mod sse;

pub use sse::EventSourceTransport;
