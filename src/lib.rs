pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod handoff;
pub mod intent;
pub mod markup;
pub mod session;
pub mod terminal;
pub mod types;

pub use engine::ConversationEngine;
pub use session::ChatSession;
pub use terminal::run;
