//! Command execution

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use simloc_config::{Config, SourceConfig};
use simloc_i18n::{
    FileSource, InMemorySource, LocalizationKey, LocalizationManager, TemplateLocalizer,
};
use tracing::{debug, info};

/// Everything a command needs, built once from the configuration
#[derive(Debug, Clone)]
pub struct App {
    manager: LocalizationManager,
}

impl App {
    /// Build the translation source and localizer described by `config`
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let localization = &config.localization;
        let languages = &localization.supported_languages;

        let manager = match &localization.source {
            SourceConfig::Files { directory } => {
                debug!("Using translation files from {:?}", directory);
                let source = FileSource::load(directory, languages)?;
                LocalizationManager::new(TemplateLocalizer::new(
                    languages.iter().cloned(),
                    localization.default_language.clone(),
                    source,
                )?)
            }
            SourceConfig::Inline { translations } => {
                debug!(languages = translations.len(), "Using inline translations");
                let source = translations
                    .iter()
                    .fold(InMemorySource::new(), |source, (language, entries)| {
                        source.with_language(language.clone(), entries.clone())
                    });
                LocalizationManager::new(TemplateLocalizer::new(
                    languages.iter().cloned(),
                    localization.default_language.clone(),
                    source,
                )?)
            }
        };

        info!(default = manager.default_language(), "Localization ready");
        Ok(Self { manager })
    }

    /// The facade used by every command
    pub const fn manager(&self) -> &LocalizationManager {
        &self.manager
    }

    /// Run `command` and return what should be printed
    pub fn run(&self, command: &Command) -> CliResult<String> {
        match command {
            Command::Translate { language, text } => Ok(self
                .manager
                .translate(language.as_deref(), &text.join(" "))?),
            Command::Key {
                language,
                key,
                args,
                default,
                strict,
            } => self.resolve_key(language.as_deref(), key, args, default.as_deref(), *strict),
            Command::Parse { text, pretty } => {
                let request = self.manager.parse(text)?;
                let json = if *pretty {
                    serde_json::to_string_pretty(&request)?
                } else {
                    serde_json::to_string(&request)?
                };
                Ok(json)
            }
            Command::Languages => Ok(self.languages()),
        }
    }

    fn resolve_key(
        &self,
        language: Option<&str>,
        key: &str,
        args: &[String],
        default: Option<&str>,
        strict: bool,
    ) -> CliResult<String> {
        let key = LocalizationKey::new(key, args.iter().cloned());

        if let Some(default) = default {
            return Ok(self.manager.localize_or_default(language, &key, default)?);
        }
        if !strict {
            return Ok(self.manager.localize(language, &key)?);
        }

        self.manager
            .localize_or_none(language, &key)?
            .ok_or_else(|| CliError::MissingTranslation {
                key: key.key().unwrap_or_default().to_string(),
                language: language
                    .unwrap_or_else(|| self.manager.default_language())
                    .to_string(),
            })
    }

    fn languages(&self) -> String {
        let default = self.manager.default_language();
        self.manager
            .supported_languages()
            .iter()
            .map(|language| {
                if language == default {
                    format!("{language} (default)")
                } else {
                    language.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simloc_config::ConfigLoader;
    use simloc_common::test_utils::config_fixtures;
    use simloc_i18n::LocalizationError;

    fn app() -> App {
        let config = ConfigLoader::parse(config_fixtures::minimal_config_yaml()).unwrap();
        App::from_config(&config).unwrap()
    }

    fn key(key: &str, default: Option<&str>, strict: bool) -> Command {
        Command::Key {
            language: Some("en-uk".to_string()),
            key: key.to_string(),
            args: Vec::new(),
            default: default.map(ToString::to_string),
            strict,
        }
    }

    #[test]
    fn test_translate() {
        let output = app()
            .run(&Command::Translate {
                language: None,
                text: vec!["Test:".to_string(), "@{test.test}".to_string()],
            })
            .unwrap();
        assert_eq!(output, "Test: Test USA");
    }

    #[test]
    fn test_key_policies() {
        let app = app();
        assert_eq!(app.run(&key("test.test", None, false)).unwrap(), "Test UK");
        assert_eq!(app.run(&key("test.default", None, false)).unwrap(), "test.default");
        assert_eq!(
            app.run(&key("test.default", Some("{as is}"), false)).unwrap(),
            "{as is}"
        );
        assert!(matches!(
            app.run(&key("test.default", None, true)),
            Err(CliError::MissingTranslation { key, language }) if key == "test.default" && language == "en-uk"
        ));
    }

    #[test]
    fn test_parse_output() {
        let output = app()
            .run(&Command::Parse {
                text: "a@{b}{c}".to_string(),
                pretty: false,
            })
            .unwrap();
        assert_eq!(
            output,
            r#"[{"key":null,"arguments":["a"]},{"key":"b","arguments":["c"]}]"#
        );
    }

    #[test]
    fn test_languages() {
        assert_eq!(app().run(&Command::Languages).unwrap(), "en-us (default)\nen-uk");
    }

    #[test]
    fn test_unsupported_language() {
        let result = app().run(&Command::Translate {
            language: Some("fr-fr".to_string()),
            text: vec!["x".to_string()],
        });
        assert!(matches!(
            result,
            Err(CliError::Localization(LocalizationError::UnsupportedLanguage { .. }))
        ));
    }

    #[test]
    fn test_inline_source_must_cover_languages() {
        let mut config = ConfigLoader::parse(config_fixtures::minimal_config_yaml()).unwrap();
        config.localization.supported_languages.push("de-de".to_string());
        assert!(matches!(
            App::from_config(&config),
            Err(CliError::Localization(LocalizationError::MissingLanguageData { .. }))
        ));
    }
}
