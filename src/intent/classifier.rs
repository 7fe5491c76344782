//! Substring keyword scorer.

use log::debug;
use serde::Serialize;

use super::{Intent, KeywordTables};

/// Matches needed for full confidence.
const FULL_CONFIDENCE_MATCHES: f64 = 3.0;

/// Result of classifying one input. Computed per call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentAnalysis {
    pub intent: Intent,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub needs_escalation: bool,
}

/// Scores free text against fixed keyword tables.
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    tables: KeywordTables,
}

impl IntentClassifier {
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Classify raw user text.
    ///
    /// Input is lowercased and trimmed, nothing more. Keywords match by plain
    /// substring containment. The first intent to reach the highest match
    /// count wins.
    pub fn analyze(&self, input: &str) -> IntentAnalysis {
        let normalized = normalize(input);
        let needs_escalation = self.needs_escalation(&normalized);

        let mut best = Intent::Unknown;
        let mut matched: Vec<String> = Vec::new();

        for (intent, keywords) in &self.tables.intents {
            if *intent == Intent::Unknown {
                continue;
            }
            let hits: Vec<String> = keywords
                .iter()
                .filter(|keyword| normalized.contains(keyword.as_str()))
                .cloned()
                .collect();
            if hits.len() > matched.len() {
                best = *intent;
                matched = hits;
            }
        }

        let confidence = if matched.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = matched.len() as f64;
            (count / FULL_CONFIDENCE_MATCHES).min(1.0)
        };

        debug!(
            "Intent analysis: intent={best} confidence={confidence:.2} keywords={matched:?} escalation={needs_escalation}"
        );

        IntentAnalysis {
            intent: best,
            confidence,
            keywords: matched,
            needs_escalation,
        }
    }

    fn needs_escalation(&self, normalized: &str) -> bool {
        self.tables
            .escalation
            .iter()
            .chain(&self.tables.escalation_phrases)
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

/// Lowercase and trim. No tokenization, stemming or accent folding.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::default()
    }

    #[test]
    fn greeting_is_detected() {
        let analysis = classifier().analyze("  Hola  ");
        assert_eq!(analysis.intent, Intent::Greeting);
        assert_eq!(analysis.keywords, vec!["hola".to_string()]);
        assert!(!analysis.needs_escalation);
    }

    #[test]
    fn tie_goes_to_first_declared_intent() {
        // "reparar" scores repair, "cuánto" scores sales: one each.
        let analysis = classifier().analyze("¿Cuánto cuesta reparar un celular?");
        assert_eq!(analysis.intent, Intent::Repair);
        assert!(analysis.confidence > 0.3);
    }

    #[test]
    fn confidence_saturates_at_three_matches() {
        let analysis = classifier().analyze("quiero comprar, precio y costo de la venta");
        assert_eq!(analysis.intent, Intent::Sales);
        assert_eq!(analysis.keywords.len(), 4);
        assert!((analysis.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_match_confidence_is_one_third() {
        let analysis = classifier().analyze("necesito un cargador");
        assert_eq!(analysis.intent, Intent::Accessories);
        assert!((analysis.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn no_match_is_unknown_with_zero_confidence() {
        let analysis = classifier().analyze("xyz");
        assert_eq!(analysis.intent, Intent::Unknown);
        assert!(analysis.confidence.abs() < f64::EPSILON);
        assert!(analysis.keywords.is_empty());
    }

    #[test]
    fn empty_input_is_unknown() {
        let analysis = classifier().analyze("");
        assert_eq!(analysis.intent, Intent::Unknown);
        assert!(!analysis.needs_escalation);
    }

    #[test]
    fn escalation_from_keyword_or_phrase() {
        assert!(classifier().analyze("Quiero poner una QUEJA").needs_escalation);
        assert!(classifier().analyze("quiero hablar con un agente").needs_escalation);
        assert!(classifier().analyze("necesito una persona").needs_escalation);
        assert!(!classifier().analyze("quiero un agente").needs_escalation);
    }

    #[test]
    fn matching_is_substring_not_token() {
        // "hi" hides inside "chip"
        let analysis = classifier().analyze("chip");
        assert_eq!(analysis.intent, Intent::Greeting);
    }

    #[test]
    fn substituted_tables_are_used() {
        let mut intents = BTreeMap::new();
        intents.insert(Intent::Location, vec!["where".to_string()]);
        let tables = KeywordTables {
            escalation: vec!["angry".to_string()],
            escalation_phrases: Vec::new(),
            intents,
        };
        let classifier = IntentClassifier::new(tables);

        let analysis = classifier.analyze("Where are you? I'm angry");
        assert_eq!(analysis.intent, Intent::Location);
        assert!(analysis.needs_escalation);
        assert_eq!(classifier.analyze("hola").intent, Intent::Unknown);
    }

    #[test]
    fn analysis_is_repeatable() {
        let classifier = classifier();
        let first = classifier.analyze("garantía de mi portátil");
        let second = classifier.analyze("garantía de mi portátil");
        assert_eq!(first, second);
    }
}
