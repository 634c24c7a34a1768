//! dc-localization
//!
//! Fetches the configured default language and reports what was loaded.

use tracing::{error, info};

use dc_localization::{config::Settings, utils::logging, LocalizationLoader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", dc_localization::info());

    let loader = LocalizationLoader::new(&settings.localization)?;
    let language = settings.localization.default_language;

    let localization = match loader.create(language).await {
        Ok(localization) => localization,
        Err(e) => {
            error!(language = %language, error = %e, severity = %e.severity(), "Failed to load translations");
            return Err(e.into());
        }
    };

    info!(
        language = %localization.language(),
        entries = localization.len(),
        "Translations ready"
    );

    Ok(())
}
