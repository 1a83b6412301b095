//! Error handling for rollcall
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the rollcall application
#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {}", message.as_deref().unwrap_or("Unknown error"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rollcall operations
pub type Result<T> = std::result::Result<T, RollcallError>;

impl RollcallError {
    /// Check if the error is recoverable by a later re-fetch
    pub fn is_recoverable(&self) -> bool {
        match self {
            RollcallError::Http(_) => true,
            RollcallError::Api { .. } => true,
            RollcallError::Serialization(_) => false,
            RollcallError::Config(_) => false,
            RollcallError::Validation(_) => false,
            RollcallError::UrlParse(_) => false,
            RollcallError::Io(_) => true,
        }
    }

    /// Inline message shown on the affected screen instead of crashing it
    pub fn user_message(&self) -> String {
        match self {
            RollcallError::Api {
                status,
                message: Some(message),
            } => format!("서버 오류 ({}): {}", status, message),
            RollcallError::Api { status, .. } => format!("서버 오류 ({})", status),
            RollcallError::Validation(message) => message.clone(),
            _ => "데이터를 불러오는 중 오류가 발생했습니다.".to_string(),
        }
    }
}

impl From<config::ConfigError> for RollcallError {
    fn from(err: config::ConfigError) -> Self {
        RollcallError::Config(err.to_string())
    }
}
