//! Request scanner
//!
//! Splits mixed text such as `Hello @{user.name}{Ann}!` into an ordered
//! [`LocalizationRequest`]. Plain text between references becomes literal
//! keys; each `@{key}{arg}...` span becomes a keyed entry.
//!
//! The scan is a single forward pass: find the next reference span, emit the
//! gap before it, emit the span, and continue from the span's end. Whatever
//! follows the last span is flushed as one trailing literal. All reported
//! ranges are byte offsets into the original input.

use crate::error::{LocalizationError, LocalizationResult};
use crate::escape::{unescape_fragment, DelimiterSet, ESCAPE_MARKER};
use crate::key::{LocalizationKey, LocalizationRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::trace;

/// An optionally escaped `@` followed by one or more `{...}` components
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\\)?@(?:\{\}|\{.*?[^\\]\})+").expect("reference pattern is valid")
});

/// One `{...}` component of a reference; group 1 is the non-empty content
static COMPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\}|\{(.*?[^\\])\}").expect("component pattern is valid"));

/// Turns mixed text into a [`LocalizationRequest`]
pub trait RequestParser {
    /// Parse `input`, keeping the left-to-right order of its pieces
    fn parse(&self, input: &str) -> LocalizationResult<LocalizationRequest>;
}

/// The `@{key}{arg}...` scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestParser;

impl DefaultRequestParser {
    /// Create a new parser
    pub const fn new() -> Self {
        Self
    }
}

impl RequestParser for DefaultRequestParser {
    fn parse(&self, input: &str) -> LocalizationResult<LocalizationRequest> {
        let mut keys = Vec::new();
        let mut cursor = 0;

        for reference in REFERENCE.find_iter(input) {
            let span = reference.range();
            trace!(?span, cursor, "Found reference span");

            if cursor < span.start {
                keys.push(literal(input, cursor..span.start)?);
            }

            if input[span.clone()].starts_with(ESCAPE_MARKER) {
                // Checked without its leading marker
                keys.push(literal(input, span.start + ESCAPE_MARKER.len_utf8()..span.end)?);
            } else {
                keys.push(reference_key(input, span.clone())?);
            }

            cursor = span.end;
        }

        if cursor < input.len() {
            keys.push(literal(input, cursor..input.len())?);
        }

        trace!(keys = keys.len(), "Parsed request");
        Ok(LocalizationRequest::new(keys))
    }
}

/// Validate and unescape `input[range]` as plain text
fn literal(input: &str, range: Range<usize>) -> LocalizationResult<LocalizationKey> {
    let text = unescape_fragment(input, range, DelimiterSet::Request)?;
    Ok(LocalizationKey::literal(text))
}

/// Split a genuine `@{key}{arg}...` span into its key and arguments
fn reference_key(input: &str, span: Range<usize>) -> LocalizationResult<LocalizationKey> {
    // Skip the '@'
    let base = span.start + 1;
    let mut components = Vec::new();

    for component in COMPONENT.captures_iter(&input[base..span.end]) {
        let value = match component.get(1) {
            Some(content) => unescape_fragment(
                input,
                base + content.start()..base + content.end(),
                DelimiterSet::Request,
            )?,
            None => String::new(),
        };
        components.push(value);
    }

    let mut components = components.into_iter();
    let key = components.next().unwrap_or_default();
    if key.trim().is_empty() {
        return Err(LocalizationError::EmptyLocalizationKey {
            input: input.to_string(),
            span,
        });
    }

    trace!(key = %key, "Parsed reference");
    Ok(LocalizationKey::from_parts(Some(key), components.collect()))
}
