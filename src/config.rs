use std::env::{self, VarError};
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, error, info};

use crate::error::{BotError, Result};
use crate::intent::KeywordTables;

const DEFAULT_WHATSAPP_NUMBER: &str = "573043756405";
const DEFAULT_SUPPORT_EMAIL: &str = "soporte@conectat.com.co";
const DEFAULT_ADDRESS: &str = "Calle 127 #15-45, Bogotá";
const DEFAULT_HANDOFF_PRESET: &str = "Hola, requiero soporte";
const DEFAULT_QUOTE_PRESET: &str = "Hola, quiero una cotización por WhatsApp.";
const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

/// Immutable business configuration handed to the conversation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// International format, digits only (no `+`, no spaces)
    pub whatsapp_number: String,
    pub support_email: String,
    pub address: String,
    /// Text pre-filled in WhatsApp when the conversation is handed to a human
    pub handoff_preset: String,
    /// Text pre-filled in WhatsApp from the pricing answer
    pub quote_preset: String,
    pub keywords: KeywordTables,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            handoff_preset: DEFAULT_HANDOFF_PRESET.to_string(),
            quote_preset: DEFAULT_QUOTE_PRESET.to_string(),
            keywords: KeywordTables::default(),
        }
    }
}

impl BotConfig {
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordTables) -> Self {
        self.keywords = keywords;
        self
    }

    /// Check values the engine relies on to build contact links.
    pub fn validate(&self) -> Result<()> {
        let number = &self.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(BotError::Config(format!(
                "WhatsApp number must be digits only in international format, got '{number}'"
            )));
        }
        if self.handoff_preset.trim().is_empty() {
            return Err(BotError::Config(
                "hand-off preset message cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Runtime configuration for the terminal chat.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    /// Simulated "typing" pause before each reply; zero disables it
    pub typing_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let mut bot = BotConfig::default();

        if let Some(number) = optional_var("CONECTAT_WHATSAPP_NUMBER")? {
            bot.whatsapp_number = number.trim().trim_start_matches('+').replace(' ', "");
        }
        if let Some(email) = optional_var("CONECTAT_SUPPORT_EMAIL")? {
            bot.support_email = email;
        }
        if let Some(path) = optional_var("CONECTAT_KEYWORDS_FILE")? {
            let path = PathBuf::from(path);
            bot.keywords = KeywordTables::from_json_file(&path).map_err(|e| {
                error!("Failed to load keyword tables from {}: {}", path.display(), e);
                e
            })?;
        }

        let typing_delay_ms = match optional_var("CONECTAT_TYPING_DELAY_MS")? {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                error!("Invalid CONECTAT_TYPING_DELAY_MS '{raw}': {e}");
                BotError::Config(format!("CONECTAT_TYPING_DELAY_MS must be milliseconds: {e}"))
            })?,
            None => DEFAULT_TYPING_DELAY_MS,
        };

        bot.validate()?;

        info!("Configuration loaded successfully");
        debug!("WhatsApp number: {}", bot.whatsapp_number);
        debug!("Support email: {}", bot.support_email);
        debug!("Typing delay: {typing_delay_ms} ms");

        Ok(Self {
            bot,
            typing_delay: Duration::from_millis(typing_delay_ms),
        })
    }
}

/// Read a variable that may be absent. Present but non-unicode values are errors.
fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => {
            error!("Failed to load {name} from environment: {e}");
            Err(e.into())
        }
    }
}
