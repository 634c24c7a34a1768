//! Translation table module
//!
//! This module provides the translation table for a single language together
//! with its search normalization, key conventions, record translation and
//! the HTTP loader that feeds it.

pub mod keys;
pub mod loader;
pub mod localization;
pub mod normalize;
pub mod translate;

// Re-export commonly used i18n components
pub use keys::{KeyTemplate, TranslatableField};
pub use loader::LocalizationLoader;
pub use localization::{flatten, Localization, LocalizationArrayData, LocalizationData};
pub use normalize::{normalize_text, NormalizeOptions};
