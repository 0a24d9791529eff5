//! Template resolution
//!
//! [`TemplateLocalizer`] looks a key up in a [`TranslationSource`],
//! substitutes the arguments and unescapes the template. The three public
//! entry points differ only in what they return when no template exists,
//! which is captured by [`Fallback`].

use crate::context::LanguageContext;
use crate::error::{LocalizationError, LocalizationResult};
use crate::key::{LocalizationKey, LocalizationRequest};
use crate::prefix::PrefixedLocalizer;
use crate::source::TranslationSource;
use crate::substitute::render;
use tracing::{debug, info, trace};

/// What to return when no template exists for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback<'a> {
    /// The key name itself, or the joined arguments for literal keys
    KeyName,
    /// Nothing
    Absent,
    /// This text, returned exactly as given
    Default(&'a str),
}

impl Fallback<'_> {
    fn apply(self, key: &LocalizationKey) -> Option<String> {
        match self {
            Self::KeyName => Some(
                key.lookup_key()
                    .map_or_else(|| key.joined_arguments(), ToString::to_string),
            ),
            Self::Absent => None,
            Self::Default(text) => Some(text.to_string()),
        }
    }
}

/// Resolves keys and requests into text.
///
/// A `language` of `None` means the default language. A language outside the
/// supported set is rejected before any lookup.
pub trait Localizer: Send + Sync {
    /// Supported language tags, fixed for the localizer's lifetime
    fn supported_languages(&self) -> &[String];

    /// Language used when none is given
    fn default_language(&self) -> &str;

    /// Whether `language` is in the supported set
    fn is_supported(&self, language: &str) -> bool {
        self.supported_languages().iter().any(|l| l == language)
    }

    /// Resolve `key`, falling back to the key name when no template exists
    fn localize(&self, language: Option<&str>, key: &LocalizationKey) -> LocalizationResult<String>;

    /// Resolve `key`, returning `None` when no template exists
    fn localize_or_none(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
    ) -> LocalizationResult<Option<String>>;

    /// Resolve `key`, returning `default` verbatim when no template exists
    fn localize_or_default(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
        default: &str,
    ) -> LocalizationResult<String>;

    /// Resolve every key of `request` and concatenate the results in order
    fn localize_request(
        &self,
        language: Option<&str>,
        request: &LocalizationRequest,
    ) -> LocalizationResult<String>;
}

/// Convenience methods available on every [`Localizer`]
pub trait LocalizerExt: Localizer {
    /// A view bound to one language.
    ///
    /// Fails with [`LocalizationError::UnsupportedLanguage`] when `language`
    /// is given and not supported.
    fn context(&self, language: Option<&str>) -> LocalizationResult<LanguageContext<'_, Self>> {
        let language = match language {
            Some(language) if !self.is_supported(language) => {
                return Err(LocalizationError::UnsupportedLanguage {
                    language: language.to_string(),
                });
            }
            Some(language) => language.to_string(),
            None => self.default_language().to_string(),
        };
        Ok(LanguageContext::new(self, language))
    }

    /// Wrap this localizer so every non-literal key gets `prefix`
    fn with_prefix(self, prefix: &str) -> PrefixedLocalizer<Self>
    where
        Self: Sized,
    {
        PrefixedLocalizer::new(self, Some(prefix))
    }
}

impl<L: Localizer + ?Sized> LocalizerExt for L {}

/// The localization engine: lookup, substitution and unescaping
#[derive(Debug, Clone)]
pub struct TemplateLocalizer<S> {
    supported_languages: Vec<String>,
    default_language: String,
    source: S,
}

impl<S: TranslationSource> TemplateLocalizer<S> {
    /// Create a localizer.
    ///
    /// Fails when the supported set is empty, when the default language is
    /// not part of it, or when the source has no data for a supported language.
    pub fn new<I, T>(
        supported_languages: I,
        default_language: impl Into<String>,
        source: S,
    ) -> LocalizationResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let supported_languages: Vec<String> =
            supported_languages.into_iter().map(Into::into).collect();
        let default_language = default_language.into();

        if supported_languages.is_empty() {
            return Err(LocalizationError::NoSupportedLanguages);
        }
        if !supported_languages.contains(&default_language) {
            return Err(LocalizationError::DefaultLanguageNotSupported {
                language: default_language,
            });
        }
        if let Some(missing) = supported_languages
            .iter()
            .find(|language| !source.has_language(language))
        {
            return Err(LocalizationError::MissingLanguageData {
                language: missing.clone(),
            });
        }

        info!(
            languages = ?supported_languages,
            default = %default_language,
            "TemplateLocalizer initialized"
        );

        Ok(Self {
            supported_languages,
            default_language,
            source,
        })
    }

    /// The underlying source
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn effective_language<'a>(&'a self, language: Option<&'a str>) -> LocalizationResult<&'a str> {
        match language {
            Some(language) if !self.is_supported(language) => {
                Err(LocalizationError::UnsupportedLanguage {
                    language: language.to_string(),
                })
            }
            Some(language) => Ok(language),
            None => Ok(&self.default_language),
        }
    }

    /// Single resolution path behind every public entry point
    pub fn resolve(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
        fallback: Fallback<'_>,
    ) -> LocalizationResult<Option<String>> {
        let language = self.effective_language(language)?;

        let Some(name) = key.lookup_key() else {
            return Ok(fallback.apply(key));
        };

        match self.source.lookup(language, name) {
            Some(template) => {
                trace!(language, key = name, "Rendering template");
                Ok(Some(render(&template, key.arguments())?))
            }
            None => {
                debug!(language, key = name, ?fallback, "No translation found");
                Ok(fallback.apply(key))
            }
        }
    }
}

impl<S: TranslationSource> Localizer for TemplateLocalizer<S> {
    fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    fn default_language(&self) -> &str {
        &self.default_language
    }

    fn localize(&self, language: Option<&str>, key: &LocalizationKey) -> LocalizationResult<String> {
        Ok(self
            .resolve(language, key, Fallback::KeyName)?
            .unwrap_or_default())
    }

    fn localize_or_none(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
    ) -> LocalizationResult<Option<String>> {
        self.resolve(language, key, Fallback::Absent)
    }

    fn localize_or_default(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
        default: &str,
    ) -> LocalizationResult<String> {
        Ok(self
            .resolve(language, key, Fallback::Default(default))?
            .unwrap_or_else(|| default.to_string()))
    }

    fn localize_request(
        &self,
        language: Option<&str>,
        request: &LocalizationRequest,
    ) -> LocalizationResult<String> {
        let language = Some(self.effective_language(language)?);
        request.keys().iter().try_fold(String::new(), |mut text, key| {
            text.push_str(&self.localize(language, key)?);
            Ok(text)
        })
    }
}
