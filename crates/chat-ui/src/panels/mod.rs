pub mod chat;
pub mod search;
