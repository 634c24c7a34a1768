//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for translation loading and comparison.

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::models::{ComparisonResult, Language};
use crate::utils::errors::{LocalizationError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so callers must
/// keep it alive for as long as they log.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "dc-localization.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .try_init()
        .map_err(|e| LocalizationError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a translation download
pub fn log_fetch(language: Language, url: &str, entries: Option<usize>, duration_ms: u64) {
    match entries {
        Some(count) => info!(
            language = %language,
            url = url,
            entries = count,
            duration_ms = duration_ms,
            "Translation table loaded"
        ),
        None => error!(
            language = %language,
            url = url,
            duration_ms = duration_ms,
            "Translation table download failed"
        ),
    }
}

/// Log a summary of a table comparison
pub fn log_comparison(language: Language, result: &ComparisonResult) {
    debug!(
        language = %language,
        new_fields = result.new_fields.len(),
        edited_fields = result.edited_fields.len(),
        deleted_fields = result.deleted_fields.len(),
        "Translation tables compared"
    );
}
