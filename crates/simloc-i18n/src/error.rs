//! Error types for localization operations

use simloc_common::SimlocError;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

/// A reserved delimiter was found without its escape marker.
///
/// All ranges are half-open byte offsets into [`input`](Self::input), so a
/// caller can point a user at the exact faulty position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Found unescaped '{delimiter}' at {offending:?} while processing '{fragment}' at {fragment_range:?} of '{input}'"
)]
pub struct UnescapedDelimiter {
    /// The complete string being processed
    pub input: String,
    /// The part of `input` that was being validated
    pub fragment: String,
    /// Where `fragment` sits inside `input`
    pub fragment_range: Range<usize>,
    /// Where the first offending delimiter sits inside `input`
    pub offending: Range<usize>,
    /// The offending delimiter itself
    pub delimiter: char,
}

/// Errors that can occur during localization operations
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// The requested language tag is not in the supported set
    #[error("Language is not supported: {language}")]
    UnsupportedLanguage { language: String },

    /// A reserved delimiter is missing its escape marker
    #[error(transparent)]
    UnescapedDelimiter(#[from] UnescapedDelimiter),

    /// A `@{...}` reference was matched but names no key
    #[error("Localization key can not be empty. Match string '{}' in indexes {span:?}", span_text(.input, .span))]
    EmptyLocalizationKey { input: String, span: Range<usize> },

    /// A localizer was built without any supported language
    #[error("List of supported languages can not be empty")]
    NoSupportedLanguages,

    /// The default language is missing from the supported set
    #[error("Default language '{language}' is not in the supported languages")]
    DefaultLanguageNotSupported { language: String },

    /// A supported language has no translations in the source
    #[error("No translations available for supported language '{language}'")]
    MissingLanguageData { language: String },

    /// A translation file could not be read
    #[error("Failed to load resource file {}: {source}", .path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file is not valid TOML
    #[error("Failed to parse resource file {}: {source}", .path.display())]
    ResourceParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A translation file holds a non-string value
    #[error("Value of '{key}' in {} must be a string", .path.display())]
    InvalidResourceValue { path: PathBuf, key: String },
}

fn span_text<'a>(input: &'a str, span: &Range<usize>) -> &'a str {
    input.get(span.clone()).unwrap_or(input)
}

/// Result type for localization operations
pub type LocalizationResult<T> = Result<T, LocalizationError>;

impl From<LocalizationError> for SimlocError {
    fn from(err: LocalizationError) -> Self {
        match err {
            LocalizationError::UnsupportedLanguage { language } => {
                Self::localization_with_language("Language is not supported", language)
            }
            other => Self::localization_with_source(other.to_string(), other),
        }
    }
}
