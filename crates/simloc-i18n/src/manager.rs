//! Localization facade

use crate::context::LanguageContext;
use crate::error::LocalizationResult;
use crate::key::{LocalizationKey, LocalizationRequest};
use crate::localizer::{Localizer, LocalizerExt};
use crate::parser::{DefaultRequestParser, RequestParser};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parses mixed text and resolves it with a shared [`Localizer`]
#[derive(Clone)]
pub struct LocalizationManager {
    localizer: Arc<dyn Localizer>,
    parser: DefaultRequestParser,
}

impl LocalizationManager {
    /// Create a manager owning `localizer`
    pub fn new(localizer: impl Localizer + 'static) -> Self {
        Self::from_arc(Arc::new(localizer))
    }

    /// Create a manager sharing an existing localizer
    pub fn from_arc(localizer: Arc<dyn Localizer>) -> Self {
        debug!(
            default = localizer.default_language(),
            "LocalizationManager created"
        );
        Self {
            localizer,
            parser: DefaultRequestParser::new(),
        }
    }

    /// The shared localizer
    pub fn localizer(&self) -> &Arc<dyn Localizer> {
        &self.localizer
    }

    /// Supported language tags
    pub fn supported_languages(&self) -> &[String] {
        self.localizer.supported_languages()
    }

    /// Language used when none is given
    pub fn default_language(&self) -> &str {
        self.localizer.default_language()
    }

    /// Split mixed text into a request without resolving it
    pub fn parse(&self, text: &str) -> LocalizationResult<LocalizationRequest> {
        self.parser.parse(text)
    }

    /// Parse `text` and resolve every piece in `language`
    pub fn translate(&self, language: Option<&str>, text: &str) -> LocalizationResult<String> {
        let request = self.parse(text)?;
        self.localizer.localize_request(language, &request)
    }

    /// Like [`translate`](Self::translate), but returns `text` unchanged on any error
    pub fn translate_or_raw(&self, language: Option<&str>, text: &str) -> String {
        self.translate(language, text).unwrap_or_else(|err| {
            warn!(error = %err, "Translation failed, returning input unchanged");
            text.to_string()
        })
    }

    /// Resolve a single key, falling back to its name
    pub fn localize(&self, language: Option<&str>, key: &LocalizationKey) -> LocalizationResult<String> {
        self.localizer.localize(language, key)
    }

    /// Resolve a single key, returning `None` when no template exists
    pub fn localize_or_none(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
    ) -> LocalizationResult<Option<String>> {
        self.localizer.localize_or_none(language, key)
    }

    /// Resolve a single key, returning `default` verbatim when no template exists
    pub fn localize_or_default(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
        default: &str,
    ) -> LocalizationResult<String> {
        self.localizer.localize_or_default(language, key, default)
    }

    /// Resolve an already built request
    pub fn localize_request(
        &self,
        language: Option<&str>,
        request: &LocalizationRequest,
    ) -> LocalizationResult<String> {
        self.localizer.localize_request(language, request)
    }

    /// A view bound to `language`
    pub fn context(&self, language: Option<&str>) -> LocalizationResult<LanguageContext<'_, dyn Localizer>> {
        self.localizer.as_ref().context(language)
    }
}

impl fmt::Debug for LocalizationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationManager")
            .field("supported_languages", &self.localizer.supported_languages())
            .field("default_language", &self.localizer.default_language())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LocalizationContext;
    use crate::error::LocalizationError;
    use crate::localizer::TemplateLocalizer;
    use crate::source::InMemorySource;

    fn manager() -> LocalizationManager {
        let source = InMemorySource::new()
            .with_translation("en-us", "test.test", "Test USA")
            .with_translation("en-us", "user.greeting", "Hi {}, you have {2} {}")
            .with_translation("en-uk", "test.test", "Test UK");
        LocalizationManager::new(TemplateLocalizer::new(["en-us", "en-uk"], "en-us", source).unwrap())
    }

    #[test]
    fn test_translate_mixed_text() {
        let manager = manager();
        assert_eq!(
            manager
                .translate(None, "@{user.greeting}{Ann}{3}{items} \\@ @{test.test}")
                .unwrap(),
            "Hi Ann, you have 3 3 @ Test USA"
        );
        assert_eq!(
            manager.translate(Some("en-uk"), "Test@{test.test}Testing").unwrap(),
            "TestTest UKTesting"
        );
    }

    #[test]
    fn test_translate_errors() {
        let manager = manager();
        assert!(matches!(
            manager.translate(Some("fr-fr"), "@{test.test}"),
            Err(LocalizationError::UnsupportedLanguage { .. })
        ));
        assert!(matches!(
            manager.translate(None, "50% {off}"),
            Err(LocalizationError::UnescapedDelimiter(_))
        ));
        assert_eq!(manager.translate_or_raw(None, "50% {off}"), "50% {off}");
    }

    #[test]
    fn test_shared_localizer() {
        let manager = manager();
        let copy = manager.clone();
        assert!(Arc::ptr_eq(manager.localizer(), copy.localizer()));
        assert_eq!(copy.default_language(), "en-us");
        assert_eq!(copy.supported_languages(), ["en-us", "en-uk"]);
    }

    #[test]
    fn test_context() {
        let manager = manager();
        let context = manager.context(Some("en-uk")).unwrap();
        assert_eq!(context.localize(&"test.test".into()).unwrap(), "Test UK");
    }
}
