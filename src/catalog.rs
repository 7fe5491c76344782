//! Canned bot texts and quick-reply suggestions.

mod quick_replies;
pub mod replies;

pub use quick_replies::{FALLBACK_QUICK_REPLIES, quick_replies};
