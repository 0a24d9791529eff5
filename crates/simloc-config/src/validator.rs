//! Configuration validation

use crate::loader::ConfigError;
use crate::schema::{Config, SourceConfig};
use std::collections::HashSet;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration, reporting every problem at once
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        let localization = &config.localization;

        if localization.supported_languages.is_empty() {
            errors.push("supported_languages can not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for language in &localization.supported_languages {
            if language.trim().is_empty() {
                errors.push("supported_languages can not contain blank tags".to_string());
            } else if !seen.insert(language.as_str()) {
                errors.push(format!("duplicate supported language '{language}'"));
            }
        }

        if !localization.supported_languages.is_empty()
            && !localization.is_supported(&localization.default_language)
        {
            errors.push(format!(
                "default_language '{}' is not in supported_languages",
                localization.default_language
            ));
        }

        if let SourceConfig::Files { directory } = &localization.source {
            if directory.as_os_str().is_empty() {
                errors.push("source directory can not be empty".to_string());
            }
        }

        if !is_valid_level(&config.logging.level) {
            errors.push(format!("unknown log level '{}'", config.logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Accepts a bare level or a comma separated list of `target=level` directives
fn is_valid_level(filter: &str) -> bool {
    !filter.trim().is_empty()
        && filter.split(',').all(|directive| {
            let level = directive.rsplit('=').next().unwrap_or_default().trim();
            let is_target_only = !directive.contains('=') && !level.is_empty();
            LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
                || (is_target_only && level.contains(['_', ':']))
        })
}
