//! Application-wide error types using thiserror.

use simloc_common::SimlocError;
use simloc_config::ConfigError;
use simloc_i18n::LocalizationError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Localization or parsing failed.
    #[error(transparent)]
    Localization(#[from] LocalizationError),

    /// Shared infrastructure failed.
    #[error(transparent)]
    Common(#[from] SimlocError),

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// `--strict` was given and the key has no translation.
    #[error("No translation for '{key}' in language '{language}'")]
    MissingTranslation {
        /// The requested key
        key: String,
        /// The effective language
        language: String,
    },
}

/// Result type for the command-line application.
pub type CliResult<T> = Result<T, CliError>;
