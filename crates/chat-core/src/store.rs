//! Ordered message store.
//!
//! Messages are addressed by id and mutated in place as stream events
//! arrive. The store always begins with the fixed greeting and only
//! ever shrinks on a full reset.

use chat_types::message::Message;

/// Next unique message id for a sequence: one greater than the current
/// maximum, or 1 for an empty sequence.
pub fn next_message_id(messages: &[Message]) -> u64 {
    messages.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
}

pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::greeting()],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn next_id(&self) -> u64 {
        next_message_id(&self.messages)
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Apply `f` to the message with the given id, if present.
    /// Returns whether a message was updated.
    pub fn update(&mut self, id: u64, f: impl FnOnce(&mut Message)) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                f(message);
                true
            }
            None => false,
        }
    }

    /// Discard everything except the initial greeting.
    pub fn reset(&mut self) {
        self.messages = vec![Message::greeting()];
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
