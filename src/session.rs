//! In-memory chat session: message history plus the caller-held state.

use log::debug;

use crate::engine::ConversationEngine;
use crate::types::{ConversationState, Message};

/// One conversation with the bot. Nothing is persisted.
pub struct ChatSession {
    engine: ConversationEngine,
    state: ConversationState,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Start in `welcome` with the welcome message already in the history.
    pub fn new(engine: ConversationEngine) -> Self {
        let welcome = engine.welcome_message();
        Self {
            engine,
            state: ConversationState::Welcome,
            messages: vec![welcome],
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    pub fn quick_replies(&self) -> &'static [&'static str] {
        self.engine.quick_replies(self.state)
    }

    /// Record `text`, run the engine and record its reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(self.engine.user_message(text));
        let response = self.engine.process_message(text, self.state);
        debug!(
            "Session state {} -> {} after {} messages",
            self.state,
            response.new_state,
            self.messages.len()
        );
        self.state = response.new_state;
        self.messages.push(response.message);
        self.messages.last()
    }

    /// Send the quick reply at `index` for the current state.
    pub fn select_quick_reply(&mut self, index: usize) -> Option<&Message> {
        let label = *self.quick_replies().get(index)?;
        self.send(label)
    }

    /// Drop the history and start over from the welcome message.
    pub fn reset(&mut self) {
        self.state = ConversationState::Welcome;
        self.messages.clear();
        self.messages.push(self.engine.welcome_message());
    }
}
