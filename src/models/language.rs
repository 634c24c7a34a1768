//! Supported translation languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::LocalizationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ca,
    Nl,
    Ru,
    Tr,
    Pl,
    Ja,
    Ko,
    Zh,
    Th,
    Id,
}

impl Language {
    pub const ALL: [Language; 16] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ca,
        Language::Nl,
        Language::Ru,
        Language::Tr,
        Language::Pl,
        Language::Ja,
        Language::Ko,
        Language::Zh,
        Language::Th,
        Language::Id,
    ];

    /// Tag used in translation document URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ca => "ca",
            Language::Nl => "nl",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Pl => "pl",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Th => "th",
            Language::Id => "id",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == tag)
            .ok_or_else(|| LocalizationError::UnsupportedLanguage(s.to_string()))
    }
}
