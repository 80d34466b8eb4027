pub mod decode;
pub mod ports;
pub mod progress;
pub mod session;
pub mod store;
