//! Mock translation host for testing
//!
//! This module provides a mock HTTP server that serves translation documents
//! the way the hosted CDN does. It uses wiremock to create configurable
//! mock responses.

use dc_localization::config::LocalizationConfig;
use dc_localization::Language;
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock translation host
pub struct TranslationMockServer {
    pub server: MockServer,
}

impl TranslationMockServer {
    /// Start a new mock host
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// URL template pointing at this server
    pub fn url_template(&self) -> String {
        format!("{}/dc_android_{{language}}_prod.json", self.server.uri())
    }

    /// Loader configuration pointing at this server
    pub fn config(&self) -> LocalizationConfig {
        LocalizationConfig {
            url_template: self.url_template(),
            timeout_seconds: 5,
            ..LocalizationConfig::default()
        }
    }

    fn document_path(language: Language) -> String {
        format!("/dc_android_{}_prod.json", language.as_str())
    }

    /// Serve `document` for `language`
    pub async fn mock_document(&self, language: Language, document: Value) {
        Mock::given(method("GET"))
            .and(path(Self::document_path(language)))
            .respond_with(ResponseTemplate::new(200).set_body_json(document))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Serve a raw body for `language`
    pub async fn mock_raw(&self, language: Language, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(Self::document_path(language)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
