//! Language-bound localization views
//!
//! A context fixes the language once so callers no longer pass it around.

use crate::error::LocalizationResult;
use crate::key::{LocalizationKey, LocalizationRequest};
use crate::localizer::Localizer;
use crate::prefix::PrefixedContext;
use std::fmt;

/// Localization operations with the language already chosen
pub trait LocalizationContext {
    /// The bound language tag
    fn language(&self) -> &str;

    /// Resolve `key`, falling back to the key name
    fn localize(&self, key: &LocalizationKey) -> LocalizationResult<String>;

    /// Resolve `key`, returning `None` when no template exists
    fn localize_or_none(&self, key: &LocalizationKey) -> LocalizationResult<Option<String>>;

    /// Resolve `key`, returning `default` verbatim when no template exists
    fn localize_or_default(&self, key: &LocalizationKey, default: &str) -> LocalizationResult<String>;

    /// Resolve and concatenate every key of `request`
    fn localize_request(&self, request: &LocalizationRequest) -> LocalizationResult<String>;

    /// Wrap this context so every non-literal key gets `prefix`
    fn with_prefix(self, prefix: &str) -> PrefixedContext<Self>
    where
        Self: Sized,
    {
        PrefixedContext::new(self, Some(prefix))
    }
}

/// A [`Localizer`] bound to one supported language
pub struct LanguageContext<'a, L: Localizer + ?Sized> {
    localizer: &'a L,
    language: String,
}

impl<'a, L: Localizer + ?Sized> LanguageContext<'a, L> {
    /// Bind `localizer` to `language`; the language is assumed to be supported.
    pub(crate) const fn new(localizer: &'a L, language: String) -> Self {
        Self { localizer, language }
    }

    /// The localizer behind this context
    pub const fn localizer(&self) -> &'a L {
        self.localizer
    }
}

impl<L: Localizer + ?Sized> Clone for LanguageContext<'_, L> {
    fn clone(&self) -> Self {
        Self {
            localizer: self.localizer,
            language: self.language.clone(),
        }
    }
}

impl<L: Localizer + ?Sized> fmt::Debug for LanguageContext<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl<L: Localizer + ?Sized> LocalizationContext for LanguageContext<'_, L> {
    fn language(&self) -> &str {
        &self.language
    }

    fn localize(&self, key: &LocalizationKey) -> LocalizationResult<String> {
        self.localizer.localize(Some(&self.language), key)
    }

    fn localize_or_none(&self, key: &LocalizationKey) -> LocalizationResult<Option<String>> {
        self.localizer.localize_or_none(Some(&self.language), key)
    }

    fn localize_or_default(&self, key: &LocalizationKey, default: &str) -> LocalizationResult<String> {
        self.localizer
            .localize_or_default(Some(&self.language), key, default)
    }

    fn localize_request(&self, request: &LocalizationRequest) -> LocalizationResult<String> {
        self.localizer.localize_request(Some(&self.language), request)
    }
}

/// A context that never translates.
///
/// Keys resolve to their own names, literal keys to their text, and defaults
/// are returned as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisabledContext;

impl DisabledContext {
    /// Create a new instance
    pub const fn new() -> Self {
        Self
    }

    fn passthrough(key: &LocalizationKey) -> String {
        key.lookup_key()
            .map_or_else(|| key.joined_arguments(), ToString::to_string)
    }
}

impl LocalizationContext for DisabledContext {
    fn language(&self) -> &str {
        ""
    }

    fn localize(&self, key: &LocalizationKey) -> LocalizationResult<String> {
        Ok(Self::passthrough(key))
    }

    fn localize_or_none(&self, key: &LocalizationKey) -> LocalizationResult<Option<String>> {
        Ok(Some(Self::passthrough(key)))
    }

    fn localize_or_default(&self, _key: &LocalizationKey, default: &str) -> LocalizationResult<String> {
        Ok(default.to_string())
    }

    fn localize_request(&self, request: &LocalizationRequest) -> LocalizationResult<String> {
        Ok(request.keys().iter().map(Self::passthrough).collect())
    }
}
