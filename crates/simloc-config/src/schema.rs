//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use simloc_common::LoggingConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Localization settings
    #[serde(default)]
    pub localization: LocalizationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Languages and where their translations come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Supported language tags
    pub supported_languages: Vec<String>,

    /// Language used when a caller gives none
    pub default_language: String,

    /// Translation source
    #[serde(default)]
    pub source: SourceConfig,
}

/// Translation source selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// One `<language>.toml` file per language under `directory`
    Files {
        /// Base directory of the resource files
        directory: PathBuf,
    },
    /// Translations written directly in the configuration file
    Inline {
        /// language → key → template
        #[serde(default)]
        translations: BTreeMap<String, BTreeMap<String, String>>,
    },
}

impl LocalizationConfig {
    /// Whether `language` is one of the supported languages
    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }
}
