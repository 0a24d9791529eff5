//! Configuration loading utilities

use crate::schema::{Config, SourceConfig};
use crate::validator::ConfigValidator;
use simloc_common::{LogFormat, SimlocError};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "SIMLOC_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// The offending variable
        var: String,
        /// Why its value was rejected
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for SimlocError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from `SIMLOC_CONFIG_PATH`, `simloc.yaml` or
    /// `simloc.yml`, falling back to defaults with environment overrides
    pub fn load() -> Result<Config, ConfigError> {
        if let Some(path) = Self::discover(|var| env::var(var).ok(), Path::exists) {
            return Self::load_config(path);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse a YAML document without overrides or validation
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn discover(
        lookup: impl Fn(&str) -> Option<String>,
        exists: impl Fn(&Path) -> bool,
    ) -> Option<PathBuf> {
        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        ["simloc.yaml", "simloc.yml"]
            .into_iter()
            .map(PathBuf::from)
            .find(|candidate| exists(candidate.as_path()))
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment
    pub fn apply_overrides_from(
        config: &mut Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(languages) = lookup("SIMLOC_SUPPORTED_LANGUAGES") {
            config.localization.supported_languages = languages
                .split(',')
                .map(str::trim)
                .filter(|language| !language.is_empty())
                .map(ToString::to_string)
                .collect();
        }

        if let Some(language) = lookup("SIMLOC_DEFAULT_LANGUAGE") {
            config.localization.default_language = language.trim().to_string();
        }

        if let Some(directory) = lookup("SIMLOC_LOCALES_DIR") {
            config.localization.source = SourceConfig::Files {
                directory: PathBuf::from(directory),
            };
        }

        if let Some(level) = lookup("SIMLOC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("SIMLOC_LOG_FORMAT") {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "SIMLOC_LOG_FORMAT".to_string(),
                        source: Box::new(e),
                    })?;
        }

        Ok(())
    }

    /// Replace the log filter, e.g. from a command line flag, and validate the result
    pub fn override_log_level(config: &mut Config, level: &str) -> Result<(), ConfigError> {
        config.logging.level = level.to_string();
        ConfigValidator::validate(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simloc_common::test_utils::config_fixtures;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_parse_full_config() {
        let config = ConfigLoader::parse(config_fixtures::full_config_yaml()).unwrap();
        assert_eq!(config.localization.default_language, "en-uk");
        assert_eq!(
            config.localization.source,
            SourceConfig::Files {
                directory: PathBuf::from("locales")
            }
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.include_targets);
    }

    #[test]
    fn test_parse_inline_source() {
        let config = ConfigLoader::parse(config_fixtures::minimal_config_yaml()).unwrap();
        match &config.localization.source {
            SourceConfig::Inline { translations } => {
                assert_eq!(translations["en-uk"]["test.test"], "Test UK");
                assert_eq!(translations["en-us"].len(), 2);
            }
            other => panic!("unexpected source: {other:?}"),
        }
        // Logging section is optional
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let file = create_test_config_file("localization: [unclosed");
        assert!(matches!(
            ConfigLoader::load_config(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_unknown_source_kind() {
        let yaml = "localization:\n  supported_languages: [en-us]\n  default_language: en-us\n  source:\n    kind: database\n";
        assert!(matches!(
            ConfigLoader::parse(yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            ConfigLoader::load_config("/nonexistent/path/simloc.yaml"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = ConfigLoader::parse(config_fixtures::minimal_config_yaml()).unwrap();
        let lookup = vars(&[
            ("SIMLOC_SUPPORTED_LANGUAGES", "en-us, de-de,,"),
            ("SIMLOC_DEFAULT_LANGUAGE", " de-de "),
            ("SIMLOC_LOCALES_DIR", "/srv/locales"),
            ("SIMLOC_LOG_LEVEL", "trace"),
            ("SIMLOC_LOG_FORMAT", "compact"),
        ]);
        ConfigLoader::apply_overrides_from(&mut config, lookup).unwrap();

        assert_eq!(config.localization.supported_languages, ["en-us", "de-de"]);
        assert_eq!(config.localization.default_language, "de-de");
        assert_eq!(
            config.localization.source,
            SourceConfig::Files {
                directory: PathBuf::from("/srv/locales")
            }
        );
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_log_level_override_is_validated() {
        let mut config = Config::default();
        ConfigLoader::override_log_level(&mut config, "debug,simloc_i18n=trace").unwrap();
        assert_eq!(config.logging.level, "debug,simloc_i18n=trace");

        match ConfigLoader::override_log_level(&mut config, "loud") {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, ["unknown log level 'loud'"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = Config::default();
        let result =
            ConfigLoader::apply_overrides_from(&mut config, vars(&[("SIMLOC_LOG_FORMAT", "xml")]));
        assert!(matches!(
            result,
            Err(ConfigError::EnvParseError { var, .. }) if var == "SIMLOC_LOG_FORMAT"
        ));
    }

    #[test]
    fn test_discover_order() {
        let none = |_: &str| None::<String>;
        assert_eq!(
            ConfigLoader::discover(vars(&[(CONFIG_PATH_VAR, "/etc/simloc.yaml")]), |_| true),
            Some(PathBuf::from("/etc/simloc.yaml"))
        );
        assert_eq!(
            ConfigLoader::discover(none, |p| p == Path::new("simloc.yml")),
            Some(PathBuf::from("simloc.yml"))
        );
        assert_eq!(
            ConfigLoader::discover(none, |_| true),
            Some(PathBuf::from("simloc.yaml"))
        );
        assert_eq!(ConfigLoader::discover(none, |_| false), None);
    }

    #[test]
    fn test_error_converts_to_simloc_error() {
        let err: SimlocError = ConfigError::Validation(vec!["a".into(), "b".into()]).into();
        assert!(err.to_string().contains("a; b"));
    }
}
