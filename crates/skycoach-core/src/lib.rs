pub mod config;
pub mod error;

pub use config::{Config, LoggingConfig, PreferencesConfig, ValidationResult};
pub use error::{AppError, ConfigError};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter` when set. Output goes to stderr so
/// that command output on stdout stays machine-readable.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::debug!("SkyCoach core initialized");
    Ok(())
}
