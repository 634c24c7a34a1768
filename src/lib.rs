//! dc-localization
//!
//! Loads the hosted translation table of a single language and exposes
//! lookup, normalized search, snapshot comparison and record translation
//! over it.

pub mod config;
pub mod i18n;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LocalizationError, Result};

// Re-export main components for easy access
pub use i18n::{Localization, LocalizationLoader, NormalizeOptions};
pub use models::{ComparisonResult, Language};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
