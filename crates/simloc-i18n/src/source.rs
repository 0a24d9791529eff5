//! Translation sources: where raw templates come from

use std::collections::HashMap;
use std::sync::Arc;

/// Maps a (language, key) pair to a raw, still-escaped template.
///
/// Implementations must be safe for concurrent reads; the localizer never
/// mutates a source.
pub trait TranslationSource: Send + Sync {
    /// Look up the template for `key` in `language`
    fn lookup(&self, language: &str, key: &str) -> Option<String>;

    /// Whether the source holds any data for `language`
    fn has_language(&self, language: &str) -> bool {
        let _ = language;
        true
    }
}

impl<S: TranslationSource + ?Sized> TranslationSource for Arc<S> {
    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        (**self).lookup(language, key)
    }

    fn has_language(&self, language: &str) -> bool {
        (**self).has_language(language)
    }
}

impl<S: TranslationSource + ?Sized> TranslationSource for Box<S> {
    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        (**self).lookup(language, key)
    }

    fn has_language(&self, language: &str) -> bool {
        (**self).has_language(language)
    }
}

/// Translations held in a nested map: language → key → template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySource {
    translations: HashMap<String, HashMap<String, String>>,
}

impl InMemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from a prepared map
    pub fn from_map(translations: HashMap<String, HashMap<String, String>>) -> Self {
        Self { translations }
    }

    /// Add a single translation
    #[must_use]
    pub fn with_translation(
        mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(language, key, template);
        self
    }

    /// Add all translations of one language
    #[must_use]
    pub fn with_language<I, K, V>(mut self, language: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.translations
            .entry(language.into())
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Insert or replace a translation
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.translations
            .entry(language.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Languages present in the source
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Number of translations stored for `language`
    pub fn len_for(&self, language: &str) -> usize {
        self.translations.get(language).map_or(0, HashMap::len)
    }
}

impl TranslationSource for InMemorySource {
    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        self.translations.get(language)?.get(key).cloned()
    }

    fn has_language(&self, language: &str) -> bool {
        self.translations.contains_key(language)
    }
}

impl From<HashMap<String, HashMap<String, String>>> for InMemorySource {
    fn from(translations: HashMap<String, HashMap<String, String>>) -> Self {
        Self::from_map(translations)
    }
}
