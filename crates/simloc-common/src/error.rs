//! Error types and utilities for simloc

use thiserror::Error;

/// Result type alias for simloc operations
pub type Result<T> = std::result::Result<T, SimlocError>;

/// Workspace-wide error type.
///
/// Individual crates keep their own precise error enums and convert into this
/// one at crate boundaries, so callers juggling several crates can use a
/// single error type.
#[derive(Error, Debug)]
pub enum SimlocError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Localization errors (unsupported languages, malformed templates or requests)
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        language: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging subscriber could not be installed
    #[error("Logging error: {message}")]
    Logging {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SimlocError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new serialization error with source
    pub fn serialization_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialization {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            language: None,
            source: None,
        }
    }

    /// Create a new localization error tied to a language tag
    pub fn localization_with_language(
        msg: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            language: Some(language.into()),
            source: None,
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            language: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging error with source
    pub fn logging_with_source(
        msg: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Logging {
            message: msg.into(),
            source: Some(source.into()),
        }
    }
}

/// Convert from `serde_json::Error` to `SimlocError`
impl From<serde_json::Error> for SimlocError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_with_source("JSON serialization error", err)
    }
}

/// Convert from `serde_yaml::Error` to `SimlocError`
impl From<serde_yaml::Error> for SimlocError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

/// Convert from `toml::de::Error` to `SimlocError`
impl From<toml::de::Error> for SimlocError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = SimlocError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let localization_error =
            SimlocError::localization_with_language("Language is not supported", "xx-yy");
        assert!(localization_error.to_string().contains("Localization error"));
        match localization_error {
            SimlocError::Localization { language, .. } => {
                assert_eq!(language.as_deref(), Some("xx-yy"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_with_source() {
        let config_source_error = SimlocError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.to_string().contains("Config loading failed"));
        assert!(config_source_error.source().is_some());

        let logging_error = SimlocError::logging_with_source("subscriber already set", "boom");
        assert!(logging_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let simloc_error: SimlocError = io_error.into();

        assert!(simloc_error.to_string().contains("I/O error"));
        assert!(simloc_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let simloc_error: SimlocError = serde_error.into();
        assert!(simloc_error.to_string().contains("Serialization error"));

        let yaml_error = serde_yaml::from_str::<Vec<String>>("key: [unclosed").unwrap_err();
        let simloc_error: SimlocError = yaml_error.into();
        assert!(simloc_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_display_formatting() {
        let config_error = SimlocError::config("missing field");
        assert_eq!(config_error.to_string(), "Configuration error: missing field");

        let localization_error = SimlocError::localization("bad template");
        assert_eq!(localization_error.to_string(), "Localization error: bad template");
    }
}
