//! Key-prefixing decorators
//!
//! Both wrappers rewrite non-literal keys as `prefix + key` and delegate
//! everything else unchanged.

use crate::context::LocalizationContext;
use crate::error::LocalizationResult;
use crate::key::{LocalizationKey, LocalizationRequest};
use crate::localizer::Localizer;

/// Normalize a prefix: absent or blank gives `""`, otherwise it ends with `.`
pub fn normalize_prefix(prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.trim().is_empty() => {
            if p.ends_with('.') {
                p.to_string()
            } else {
                format!("{p}.")
            }
        }
        _ => String::new(),
    }
}

/// A [`Localizer`] that prefixes every key before delegating
#[derive(Debug, Clone)]
pub struct PrefixedLocalizer<L> {
    parent: L,
    prefix: String,
}

impl<L: Localizer> PrefixedLocalizer<L> {
    /// Wrap `parent`, normalizing `prefix`
    pub fn new(parent: L, prefix: Option<&str>) -> Self {
        Self {
            parent,
            prefix: normalize_prefix(prefix),
        }
    }

    /// The normalized prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The wrapped localizer
    pub const fn parent(&self) -> &L {
        &self.parent
    }

    fn prepare(&self, key: &LocalizationKey) -> LocalizationKey {
        key.with_prefix(&self.prefix)
    }
}

impl<L: Localizer> Localizer for PrefixedLocalizer<L> {
    fn supported_languages(&self) -> &[String] {
        self.parent.supported_languages()
    }

    fn default_language(&self) -> &str {
        self.parent.default_language()
    }

    fn is_supported(&self, language: &str) -> bool {
        self.parent.is_supported(language)
    }

    fn localize(&self, language: Option<&str>, key: &LocalizationKey) -> LocalizationResult<String> {
        self.parent.localize(language, &self.prepare(key))
    }

    fn localize_or_none(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
    ) -> LocalizationResult<Option<String>> {
        self.parent.localize_or_none(language, &self.prepare(key))
    }

    fn localize_or_default(
        &self,
        language: Option<&str>,
        key: &LocalizationKey,
        default: &str,
    ) -> LocalizationResult<String> {
        self.parent
            .localize_or_default(language, &self.prepare(key), default)
    }

    fn localize_request(
        &self,
        language: Option<&str>,
        request: &LocalizationRequest,
    ) -> LocalizationResult<String> {
        self.parent
            .localize_request(language, &request.with_prefix(&self.prefix))
    }
}

/// A [`LocalizationContext`] that prefixes every key before delegating
#[derive(Debug, Clone)]
pub struct PrefixedContext<C> {
    parent: C,
    prefix: String,
}

impl<C: LocalizationContext> PrefixedContext<C> {
    /// Wrap `parent`, normalizing `prefix`
    pub fn new(parent: C, prefix: Option<&str>) -> Self {
        Self {
            parent,
            prefix: normalize_prefix(prefix),
        }
    }

    /// The normalized prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<C: LocalizationContext> LocalizationContext for PrefixedContext<C> {
    fn language(&self) -> &str {
        self.parent.language()
    }

    fn localize(&self, key: &LocalizationKey) -> LocalizationResult<String> {
        self.parent.localize(&key.with_prefix(&self.prefix))
    }

    fn localize_or_none(&self, key: &LocalizationKey) -> LocalizationResult<Option<String>> {
        self.parent.localize_or_none(&key.with_prefix(&self.prefix))
    }

    fn localize_or_default(&self, key: &LocalizationKey, default: &str) -> LocalizationResult<String> {
        self.parent
            .localize_or_default(&key.with_prefix(&self.prefix), default)
    }

    fn localize_request(&self, request: &LocalizationRequest) -> LocalizationResult<String> {
        self.parent
            .localize_request(&request.with_prefix(&self.prefix))
    }
}
