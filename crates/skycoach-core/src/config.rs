use crate::error::{AppError, ConfigError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skycoach_weather::{Activity, PhysicalCondition, SpeechSettings};
use std::path::{Path, PathBuf};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Fail with [`ConfigError::Invalid`] when any error was recorded
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self.error_summary()).into())
        }
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// What to assume when the user does not say
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Voice playback settings for spoken summaries
    #[serde(default)]
    pub speech: SpeechSettings,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Activity used when none is given
    #[serde(default)]
    pub activity: Activity,

    /// Physical condition used when none is given
    #[serde(default)]
    pub condition: PhysicalCondition,

    /// City shown before any voice or text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let missing = ConfigError::NotFound(path.display().to_string());
                return Err(AppError::from(missing).into());
            }
            Err(e) => {
                return Err(AppError::from(e))
                    .with_context(|| format!("Failed to read config file {}", path.display()));
            }
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AppError::from(ConfigError::ParseError(e.to_string())))?;

        Ok(config)
    }

    /// Load configuration from `path` (or the default location) and validate it
    ///
    /// Returns the config along with any validation warnings, which the caller
    /// logs once logging is up. Fails with [`ConfigError::Invalid`] when
    /// validation finds errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };

        let validation = config.validate();
        validation.ensure_valid()?;

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let speech = &self.speech;
        if !(0.1..=10.0).contains(&speech.rate) {
            result.add_error("speech.rate", "Speech rate must be between 0.1 and 10");
        }
        if !(0.0..=2.0).contains(&speech.pitch) {
            result.add_error("speech.pitch", "Speech pitch must be between 0 and 2");
        }
        if !(0.0..=1.0).contains(&speech.volume) {
            result.add_error("speech.volume", "Speech volume must be between 0 and 1");
        }
        if speech.lang.trim().is_empty() {
            result.add_warning(
                "speech.lang",
                "No language tag set - the playback engine default will be used",
            );
        }

        if self.logging.filter.trim().is_empty() {
            result.add_error("logging.filter", "Log filter cannot be empty");
        } else if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.filter) {
            result.add_error("logging.filter", format!("Invalid log filter: {}", e));
        }

        if let Some(city) = &self.preferences.city {
            if city.trim().is_empty() {
                result.add_warning("preferences.city", "Default city is blank and will be ignored");
            }
        }

        result
    }

    /// Default city, if one is set and not blank
    pub fn default_city(&self) -> Option<&str> {
        self.preferences
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycoach");

        Ok(config_dir.join("config.toml"))
    }
}
