//! Keyword tables driving the classifier.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

use super::Intent;

const ESCALATION: &[&str] = &[
    "queja",
    "reclamo",
    "molesto",
    "enojado",
    "furioso",
    "indignado",
    "terrible",
    "pésimo",
    "horrible",
    "desastre",
    "fraude",
    "estafa",
    "demanda",
    "abogado",
    "superintendencia",
    "defensor",
    "consumidor",
    "gerente",
    "supervisor",
    "jefe",
    "encargado",
    "responsable",
    "reembolso",
    "devolver dinero",
    "cancelar",
    "anular",
    "no funciona",
    "dañado",
    "defectuoso",
    "malo",
];

const ESCALATION_PHRASES: &[&str] = &["hablar con", "persona"];

const INTENTS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[
            "hola",
            "hi",
            "buenos días",
            "buenas tardes",
            "buenas noches",
            "buen día",
            "saludos",
        ],
    ),
    (
        Intent::Repair,
        &[
            "reparar",
            "arreglar",
            "componer",
            "dañado",
            "roto",
            "no funciona",
            "falla",
            "problema",
        ],
    ),
    (
        Intent::Sales,
        &[
            "comprar", "vender", "precio", "costo", "cuánto", "venta", "adquirir", "cotizar",
        ],
    ),
    (
        Intent::Accessories,
        &[
            "accesorio",
            "cargador",
            "cable",
            "funda",
            "protector",
            "auricular",
            "mouse",
        ],
    ),
    (
        Intent::Support,
        &[
            "ayuda",
            "soporte",
            "asistencia",
            "configurar",
            "instalar",
            "problema técnico",
        ],
    ),
    (
        Intent::HomeService,
        &["domicilio", "casa", "visita", "ir", "llevar", "recoger"],
    ),
    (
        Intent::Business,
        &[
            "empresa",
            "negocio",
            "corporativo",
            "oficina",
            "proyecto",
            "masivo",
        ],
    ),
    (
        Intent::Warranty,
        &["garantía", "garantia", "cobertura", "válida", "tiempo"],
    ),
    (
        Intent::Schedule,
        &["horario", "hora", "cuándo", "abierto", "cerrado", "atención"],
    ),
    (
        Intent::Location,
        &["dónde", "ubicación", "dirección", "llegar", "mapa"],
    ),
    (
        Intent::Human,
        &[
            "asesor",
            "agente",
            "humano",
            "persona",
            "operador",
            "hablar con",
        ],
    ),
];

/// Keyword sets used for escalation detection and intent scoring.
///
/// Intents are kept in a `BTreeMap` so iteration always follows the declared
/// order of [`Intent`], whatever order a loaded file lists them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub escalation: Vec<String>,
    pub escalation_phrases: Vec<String>,
    pub intents: BTreeMap<Intent, Vec<String>>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            escalation: to_owned(ESCALATION),
            escalation_phrases: to_owned(ESCALATION_PHRASES),
            intents: INTENTS
                .iter()
                .map(|(intent, keywords)| (*intent, to_owned(keywords)))
                .collect(),
        }
    }
}

impl KeywordTables {
    /// Load tables from a JSON file. Sections missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading keyword tables from {}", path.display());
        let raw = fs::read_to_string(path)?;
        let tables = Self::from_json(&raw)?;
        info!(
            "Loaded {} escalation keywords and {} intent tables from {}",
            tables.escalation.len(),
            tables.intents.len(),
            path.display()
        );
        Ok(tables)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let mut tables: Self = serde_json::from_str(raw)?;
        tables.normalize();
        tables.validate()?;
        Ok(tables)
    }

    /// Keywords are compared against lowercased input, so store them lowercased.
    fn normalize(&mut self) {
        let lower = |words: &mut Vec<String>| {
            for word in words.iter_mut() {
                *word = word.trim().to_lowercase();
            }
            words.retain(|word| !word.is_empty());
        };
        lower(&mut self.escalation);
        lower(&mut self.escalation_phrases);
        for words in self.intents.values_mut() {
            lower(words);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.intents.contains_key(&Intent::Unknown) {
            return Err(BotError::Config(
                "keyword tables cannot define the `unknown` intent".to_string(),
            ));
        }
        Ok(())
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_scored_intent() {
        let tables = KeywordTables::default();
        assert_eq!(tables.intents.len(), 11);
        assert!(!tables.intents.contains_key(&Intent::Unknown));
        assert!(tables.escalation.iter().any(|k| k == "reembolso"));
    }

    #[test]
    fn partial_json_keeps_default_sections() -> Result<()> {
        let tables = KeywordTables::from_json(r#"{"escalation": ["  QUEJA  ", ""]}"#)?;
        assert_eq!(tables.escalation, vec!["queja".to_string()]);
        assert_eq!(tables.escalation_phrases, vec!["hablar con", "persona"]);
        assert_eq!(tables.intents.len(), 11);
        Ok(())
    }

    #[test]
    fn json_intents_iterate_in_declared_order() -> Result<()> {
        let tables = KeywordTables::from_json(
            r#"{"intents": {"human": ["agente"], "greeting": ["hola"]}}"#,
        )?;
        let order: Vec<Intent> = tables.intents.keys().copied().collect();
        assert_eq!(order, vec![Intent::Greeting, Intent::Human]);
        Ok(())
    }

    #[test]
    fn rejects_unknown_intent_table() {
        let result = KeywordTables::from_json(r#"{"intents": {"unknown": ["x"]}}"#);
        assert!(matches!(result, Err(BotError::Config(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = KeywordTables::from_json("{not json");
        assert!(matches!(result, Err(BotError::Json(_))));
    }
}
