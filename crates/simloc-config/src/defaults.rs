//! Default values

use crate::schema::{Config, LocalizationConfig, SourceConfig};
use simloc_common::LoggingConfig;
use std::path::PathBuf;

/// Language used when nothing is configured
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Resource directory used when nothing is configured
pub const DEFAULT_LOCALES_DIR: &str = "locales";

impl Default for Config {
    fn default() -> Self {
        Self {
            localization: LocalizationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            supported_languages: vec![DEFAULT_LANGUAGE.to_string()],
            default_language: DEFAULT_LANGUAGE.to_string(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Files {
            directory: PathBuf::from(DEFAULT_LOCALES_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ConfigValidator;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.localization.default_language, "en-us");
        assert!(config.localization.is_supported("en-us"));
        assert_eq!(
            config.localization.source,
            SourceConfig::Files {
                directory: PathBuf::from("locales")
            }
        );
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
