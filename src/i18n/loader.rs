//! Translation document loader
//!
//! Downloads the hosted translation document for a language, flattens its
//! array-of-objects wire shape and builds a [`Localization`] from it.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::localization::{flatten, Localization, LocalizationArrayData};
use crate::config::settings::LANGUAGE_PLACEHOLDER;
use crate::config::LocalizationConfig;
use crate::models::Language;
use crate::utils::errors::{FetchError, LocalizationError, Result};
use crate::utils::logging;

/// HTTP loader for translation tables
#[derive(Debug, Clone)]
pub struct LocalizationLoader {
    client: Client,
    url_template: String,
    supported_languages: Vec<Language>,
}

impl LocalizationLoader {
    /// Create a new loader from configuration
    pub fn new(config: &LocalizationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(LocalizationError::Http)?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
            supported_languages: config.supported_languages.clone(),
        })
    }

    /// Build the document URL for `language` from `template`
    pub fn url_for(template: &str, language: Language) -> Result<Url> {
        let url = template.replace(LANGUAGE_PLACEHOLDER, language.as_str());
        Ok(Url::parse(&url)?)
    }

    /// Build the document URL for `language`
    pub fn build_url(&self, language: Language) -> Result<Url> {
        Self::url_for(&self.url_template, language)
    }

    /// Download the raw wire-shaped document for `language`
    pub async fn fetch(&self, language: Language) -> Result<LocalizationArrayData> {
        if !self.supported_languages.contains(&language) {
            return Err(LocalizationError::UnsupportedLanguage(language.to_string()));
        }

        let url = self.build_url(language)?;
        let started = Instant::now();

        debug!(language = %language, url = %url, "Fetching translation document");

        match self.request(url.clone()).await {
            Ok(array) => {
                logging::log_fetch(language, url.as_str(), Some(array.len()), elapsed_ms(started));
                Ok(array)
            }
            Err(e) => {
                logging::log_fetch(language, url.as_str(), None, elapsed_ms(started));
                Err(e)
            }
        }
    }

    /// Download and flatten the document for `language` into a table
    pub async fn create(&self, language: Language) -> Result<Localization> {
        let array = self.fetch(language).await?;
        Ok(Localization::new(language, flatten(array)))
    }

    async fn request(&self, url: Url) -> Result<LocalizationArrayData> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocalizationError::Fetch(FetchError::Timeout)
                } else if e.is_connect() {
                    LocalizationError::Fetch(FetchError::ServiceUnavailable)
                } else {
                    LocalizationError::Fetch(FetchError::RequestFailed(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LocalizationError::Fetch(FetchError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            ))));
        }

        let body = response.text().await.map_err(|e| {
            LocalizationError::Fetch(FetchError::RequestFailed(e.to_string()))
        })?;

        serde_json::from_str::<LocalizationArrayData>(&body)
            .map_err(|e| LocalizationError::Fetch(FetchError::InvalidResponse(e.to_string())))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
