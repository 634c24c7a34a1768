//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::models::Language;

/// Default location of the hosted translation documents
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://sp-translations.socialpointgames.com/deploy/dc/android/prod/dc_android_{language}_prod_wetd46pWuR8J5CmS.json";

/// Placeholder replaced by the language tag in `url_template`
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}

/// Translation source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizationConfig {
    pub url_template: String,
    pub default_language: Language,
    pub supported_languages: Vec<Language>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Values missing from both sources fall back to [`Settings::default`].
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let supported: Vec<String> = defaults
            .localization
            .supported_languages
            .iter()
            .map(|l| l.as_str().to_string())
            .collect();

        let settings = config::Config::builder()
            .set_default("localization.url_template", defaults.localization.url_template)?
            .set_default(
                "localization.default_language",
                defaults.localization.default_language.as_str(),
            )?
            .set_default("localization.supported_languages", supported)?
            .set_default("localization.timeout_seconds", defaults.localization.timeout_seconds)?
            .set_default("localization.user_agent", defaults.localization.user_agent)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("DC_LOCALIZATION")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("localization.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LocalizationError> {
        super::validation::validate_settings(self)
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            default_language: Language::En,
            supported_languages: Language::ALL.to_vec(),
            timeout_seconds: 30,
            user_agent: format!("dc-localization/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            localization: LocalizationConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}
