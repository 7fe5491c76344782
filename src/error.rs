use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Hand-off unavailable: {0}")]
    Handoff(String),
}

impl BotError {
    /// Returns a user-friendly error message suitable for displaying in the chat
    pub fn user_message(&self) -> String {
        match self {
            BotError::Config(_) | BotError::EnvVar(_) | BotError::Url(_) => {
                "Lo sentimos, hay un problema de configuración. Por favor contacta al administrador.".to_string()
            }
            BotError::Io(_) => {
                "Lo sentimos, no pudimos leer tu mensaje. Por favor intenta de nuevo.".to_string()
            }
            BotError::Json(_) => {
                "Lo sentimos, la configuración de palabras clave no es válida. Por favor contacta al administrador.".to_string()
            }
            BotError::Handoff(_) => {
                "No pudimos abrir WhatsApp automáticamente. Usa el enlace del mensaje para contactarnos.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
