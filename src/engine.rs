//! Conversation engine - decides the reply and next state for each input.

mod navigation;
mod processor;

#[cfg(test)]
mod proptests;

pub use processor::ConversationEngine;
