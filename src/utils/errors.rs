//! Error handling for dc-localization
//!
//! This module defines the error types used by the translation table and
//! its loader. Lookup misses are not errors: they surface as `None`.

use thiserror::Error;

use crate::models::Language;

/// Main error type for localization operations
#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("Languages do not match: {old} vs {new}")]
    LanguageMismatch { old: Language, new: Language },

    #[error("Translation fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while downloading a translation document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    #[error("Translation request timed out")]
    Timeout,

    #[error("Invalid translation document: {0}")]
    InvalidResponse(String),

    #[error("Translation service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for localization operations
pub type Result<T> = std::result::Result<T, LocalizationError>;

impl LocalizationError {
    /// Check if retrying the operation could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            LocalizationError::LanguageMismatch { .. } => false,
            LocalizationError::Fetch(FetchError::InvalidResponse(_)) => false,
            LocalizationError::Fetch(_) => true,
            LocalizationError::Http(_) => true,
            LocalizationError::Serialization(_) => false,
            LocalizationError::UrlParse(_) => false,
            LocalizationError::Io(_) => true,
            LocalizationError::Config(_) => false,
            LocalizationError::UnsupportedLanguage(_) => false,
            LocalizationError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocalizationError::Config(_) => ErrorSeverity::Critical,
            LocalizationError::UrlParse(_) => ErrorSeverity::Critical,
            LocalizationError::Fetch(_) | LocalizationError::Http(_) => ErrorSeverity::Warning,
            LocalizationError::InvalidInput(_) => ErrorSeverity::Info,
            LocalizationError::UnsupportedLanguage(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
