//! Property-based tests for the conversation engine
//!
//! These tests verify key invariants hold across arbitrary inputs and states.

use proptest::prelude::*;
use strum::IntoEnumIterator;

use super::ConversationEngine;
use crate::catalog::quick_replies;
use crate::config::BotConfig;
use crate::intent::{Intent, IntentClassifier, KeywordTables};
use crate::types::{ConversationState, Sender};

// ============================================================================
// Test Helpers
// ============================================================================

fn engine() -> ConversationEngine {
    ConversationEngine::new(BotConfig::default()).expect("default config is valid")
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = ConversationState> {
    prop::sample::select(ConversationState::iter().collect::<Vec<_>>())
}

fn arb_escalation_keyword() -> impl Strategy<Value = String> {
    let tables = KeywordTables::default();
    let keywords: Vec<String> = tables
        .escalation
        .into_iter()
        .chain(tables.escalation_phrases)
        .collect();
    prop::sample::select(keywords)
}

/// Mixed-case text with accents, emoji and punctuation.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{0,5}",
        "[a-zA-ZáéíóúñÁÉÍÓÚÑ¿?¡! ]{0,40}",
        "[🔧💻📱🛠🏠🏢💰🔙 a-z]{0,10}",
        any::<String>(),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn process_message_is_total(text in arb_text(), state in arb_state()) {
        let response = engine().process_message(&text, state);
        prop_assert_eq!(response.message.sender, Sender::Bot);
        prop_assert!(!response.message.text.source().is_empty());
        prop_assert!(!response.message.id.is_empty());
    }

    #[test]
    fn escalation_always_reaches_contact_human(
        prefix in "[a-z ]{0,15}",
        keyword in arb_escalation_keyword(),
        suffix in "[a-z ]{0,15}",
        upper in any::<bool>(),
        state in arb_state(),
    ) {
        let mut text = format!("{prefix}{keyword}{suffix}");
        if upper {
            text = text.to_uppercase();
        }
        let response = engine().process_message(&text, state);
        prop_assert_eq!(response.new_state, ConversationState::ContactHuman);
        prop_assert_eq!(response.message.buttons.len(), 2);
    }

    #[test]
    fn hola_always_returns_to_main_menu(state in arb_state()) {
        let response = engine().process_message("Hola", state);
        prop_assert_eq!(response.new_state, ConversationState::MainMenu);
    }

    #[test]
    fn garantia_keeps_state(state in arb_state()) {
        let response = engine().process_message("garantía", state);
        prop_assert_eq!(response.new_state, state);
        prop_assert!(response.message.text.contains("POLÍTICA DE GARANTÍAS"));
    }

    #[test]
    fn classifier_is_pure(text in arb_text()) {
        let classifier = IntentClassifier::default();
        let first = classifier.analyze(&text);
        let second = classifier.analyze(&text);
        prop_assert_eq!(first.intent, second.intent);
        prop_assert_eq!(first.needs_escalation, second.needs_escalation);
        prop_assert!((first.confidence - second.confidence).abs() < f64::EPSILON);
        prop_assert!((0.0..=1.0).contains(&first.confidence));
        prop_assert_eq!(first.intent == Intent::Unknown, first.keywords.is_empty());
    }

    #[test]
    fn quick_replies_never_empty(state in arb_state()) {
        prop_assert!(!quick_replies(state).is_empty());
    }
}
