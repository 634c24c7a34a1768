//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::settings::LANGUAGE_PLACEHOLDER;
use super::Settings;
use crate::utils::errors::{LocalizationError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_localization_config(&settings.localization)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate translation source configuration
fn validate_localization_config(config: &super::LocalizationConfig) -> Result<()> {
    if config.url_template.trim().is_empty() {
        return Err(LocalizationError::Config(
            "Translation URL template is required".to_string()
        ));
    }

    if !config.url_template.contains(LANGUAGE_PLACEHOLDER) {
        return Err(LocalizationError::Config(format!(
            "Translation URL template must contain {}",
            LANGUAGE_PLACEHOLDER
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(LocalizationError::Config(
            "Translation timeout must be greater than 0".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(LocalizationError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(LocalizationError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LocalizationError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LocalizationError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use assert_matches::assert_matches;

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let mut settings = Settings::default();
        settings.localization.url_template = "https://example.com/en.json".to_string();

        assert_matches!(validate_settings(&settings), Err(LocalizationError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut settings = Settings::default();
        settings.localization.timeout_seconds = 0;

        assert_matches!(validate_settings(&settings), Err(LocalizationError::Config(_)));
    }

    #[test]
    fn test_default_language_must_be_supported() {
        let mut settings = Settings::default();
        settings.localization.default_language = Language::Ja;
        settings.localization.supported_languages = vec![Language::En, Language::Es];

        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("Default language"));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();

        assert_matches!(validate_settings(&settings), Err(LocalizationError::Config(_)));
    }
}
