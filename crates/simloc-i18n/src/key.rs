//! Localization keys and requests

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A symbolic key plus its arguments.
///
/// A key that is absent or blank stands for literal text; its value is the
/// concatenation of its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizationKey {
    key: Option<String>,
    #[serde(default)]
    arguments: Vec<String>,
}

impl LocalizationKey {
    /// Create a key with arguments
    pub fn new<K, I, A>(key: K, arguments: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            key: Some(key.into()),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a key without arguments
    pub fn simple(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            arguments: Vec::new(),
        }
    }

    /// Create a literal, non-localized piece of text
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            key: None,
            arguments: vec![text.into()],
        }
    }

    pub(crate) const fn from_parts(key: Option<String>, arguments: Vec<String>) -> Self {
        Self { key, arguments }
    }

    /// The symbolic key, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The arguments in order
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Whether this key stands for literal text
    pub fn is_literal(&self) -> bool {
        self.key.as_deref().map_or(true, |k| k.trim().is_empty())
    }

    /// The key name when present and not blank
    pub fn lookup_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// The arguments joined with `", "`.
    pub fn joined_arguments(&self) -> String {
        self.arguments.join(", ")
    }

    /// A copy of this key with `prefix` prepended; literal keys are returned unchanged.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        match self.lookup_key() {
            Some(key) if !prefix.is_empty() => Self {
                key: Some(format!("{prefix}{key}")),
                arguments: self.arguments.clone(),
            },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for LocalizationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(key={},arguments={:?})",
            self.key.as_deref().unwrap_or("null"),
            self.arguments
        )
    }
}

impl From<&str> for LocalizationKey {
    fn from(key: &str) -> Self {
        Self::simple(key)
    }
}

impl From<String> for LocalizationKey {
    fn from(key: String) -> Self {
        Self::simple(key)
    }
}

/// Build a [`LocalizationKey`] from a key and any number of arguments.
///
/// ```rust
/// use simloc_i18n::localization_key;
///
/// let key = localization_key!("greeting.hello", "World");
/// assert_eq!(key.key(), Some("greeting.hello"));
/// assert_eq!(key.arguments(), ["World"]);
/// ```
#[macro_export]
macro_rules! localization_key {
    ($key:expr) => {
        $crate::LocalizationKey::simple($key)
    };
    ($key:expr, $($arg:expr),+ $(,)?) => {
        $crate::LocalizationKey::new($key, [$(::std::string::ToString::to_string(&$arg)),+])
    };
}

/// An ordered list of keys, resolved and concatenated left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizationRequest {
    keys: Vec<LocalizationKey>,
}

impl LocalizationRequest {
    /// Create a request from keys
    pub fn new(keys: Vec<LocalizationKey>) -> Self {
        Self { keys }
    }

    /// A request with a single key
    pub fn single<K, I, A>(key: K, arguments: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self::new(vec![LocalizationKey::new(key, arguments)])
    }

    /// A request holding only literal text
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(vec![LocalizationKey::literal(text)])
    }

    /// Start building a request
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// The keys in reading order
    pub fn keys(&self) -> &[LocalizationKey] {
        &self.keys
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the request has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// A new request with `other`'s keys appended after this one's
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + other.keys.len());
        keys.extend_from_slice(&self.keys);
        keys.extend_from_slice(&other.keys);
        Self { keys }
    }

    /// A copy of this request with `prefix` applied to every non-literal key
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        self.keys.iter().map(|key| key.with_prefix(prefix)).collect()
    }
}

impl Add for LocalizationRequest {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.keys.extend(rhs.keys);
        self
    }
}

impl FromIterator<LocalizationKey> for LocalizationRequest {
    fn from_iter<T: IntoIterator<Item = LocalizationKey>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<LocalizationKey> for LocalizationRequest {
    fn extend<T: IntoIterator<Item = LocalizationKey>>(&mut self, iter: T) {
        self.keys.extend(iter);
    }
}

impl IntoIterator for LocalizationRequest {
    type Item = LocalizationKey;
    type IntoIter = std::vec::IntoIter<LocalizationKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocalizationRequest {
    type Item = &'a LocalizationKey;
    type IntoIter = std::slice::Iter<'a, LocalizationKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl From<LocalizationKey> for LocalizationRequest {
    fn from(key: LocalizationKey) -> Self {
        Self::new(vec![key])
    }
}

impl fmt::Display for LocalizationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

/// Step-by-step builder for [`LocalizationRequest`]
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    keys: Vec<LocalizationKey>,
}

impl RequestBuilder {
    /// Append a key with arguments
    #[must_use]
    pub fn add<K, I, A>(mut self, key: K, arguments: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.keys.push(LocalizationKey::new(key, arguments));
        self
    }

    /// Append a key without arguments
    #[must_use]
    pub fn add_simple(mut self, key: impl Into<String>) -> Self {
        self.keys.push(LocalizationKey::simple(key));
        self
    }

    /// Append literal text that is never looked up
    #[must_use]
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.keys.push(LocalizationKey::literal(text));
        self
    }

    /// Append an already built key
    #[must_use]
    pub fn key(mut self, key: LocalizationKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Finish the request
    pub fn build(self) -> LocalizationRequest {
        LocalizationRequest::new(self.keys)
    }
}
