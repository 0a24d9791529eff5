//! Escape processing for reserved delimiters
//!
//! A delimiter is escaped when the character right before it is a backslash.
//! Only one level of escaping exists: `\\{` still counts as an escaped brace.

use crate::error::UnescapedDelimiter;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// The escape marker.
pub const ESCAPE_MARKER: char = '\\';

static TEMPLATE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[{}]").expect("template delimiter pattern is valid"));
static TEMPLATE_ESCAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[{}]").expect("escaped template delimiter pattern is valid"));
static REQUEST_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[@{}]").expect("request delimiter pattern is valid"));
static REQUEST_ESCAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[@{}]").expect("escaped request delimiter pattern is valid"));

/// Which characters are reserved at a given call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterSet {
    /// `{` and `}`, reserved inside translation templates
    Template,
    /// `@`, `{` and `}`, reserved inside localization requests
    Request,
}

impl DelimiterSet {
    /// The reserved characters of this set.
    pub const fn delimiters(self) -> &'static [char] {
        match self {
            Self::Template => &['{', '}'],
            Self::Request => &['@', '{', '}'],
        }
    }

    /// Whether `c` is reserved in this set.
    pub fn contains(self, c: char) -> bool {
        self.delimiters().contains(&c)
    }

    fn delimiter_pattern(self) -> &'static Regex {
        match self {
            Self::Template => &TEMPLATE_DELIMITER,
            Self::Request => &REQUEST_DELIMITER,
        }
    }

    fn escaped_pattern(self) -> &'static Regex {
        match self {
            Self::Template => &TEMPLATE_ESCAPED,
            Self::Request => &REQUEST_ESCAPED,
        }
    }
}

/// Byte range of the first delimiter in `text` not preceded by the escape marker.
pub fn find_unescaped(text: &str, set: DelimiterSet) -> Option<Range<usize>> {
    set.delimiter_pattern()
        .find_iter(text)
        .find(|m| !is_escaped_at(text, m.start()))
        .map(|m| m.range())
}

/// Whether the character starting at byte `index` is preceded by the escape marker.
pub(crate) fn is_escaped_at(text: &str, index: usize) -> bool {
    index > 0 && text.as_bytes()[index - 1] == b'\\'
}

/// Validate the whole of `text`, then collapse every escaped delimiter.
pub fn unescape(text: &str, set: DelimiterSet) -> Result<String, UnescapedDelimiter> {
    unescape_fragment(text, 0..text.len(), set)
}

/// Validate and unescape `input[range]`.
///
/// The fragment is checked in isolation, but reported ranges are relative to
/// the whole `input`. `range` must lie on character boundaries of `input`.
pub(crate) fn unescape_fragment(
    input: &str,
    range: Range<usize>,
    set: DelimiterSet,
) -> Result<String, UnescapedDelimiter> {
    let fragment = &input[range.clone()];

    if let Some(local) = find_unescaped(fragment, set) {
        let delimiter = fragment[local.clone()].chars().next().unwrap_or_default();
        return Err(UnescapedDelimiter {
            input: input.to_string(),
            fragment: fragment.to_string(),
            offending: local.start + range.start..local.end + range.start,
            fragment_range: range,
            delimiter,
        });
    }

    Ok(set
        .escaped_pattern()
        .replace_all(fragment, |caps: &regex::Captures<'_>| caps[0][1..].to_string())
        .into_owned())
}

/// Prefix every reserved delimiter in `text` with the escape marker.
///
/// This is the inverse of [`unescape`] and is mostly useful when building
/// templates or requests from arbitrary text.
pub fn escape(text: &str, set: DelimiterSet) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if set.contains(c) {
            escaped.push(ESCAPE_MARKER);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_collapses_escaped_delimiters() {
        assert_eq!(unescape(r"a \{b\} c", DelimiterSet::Template).unwrap(), "a {b} c");
        assert_eq!(unescape(r"mail\@host", DelimiterSet::Request).unwrap(), "mail@host");
    }

    #[test]
    fn test_other_escapes_are_left_alone() {
        assert_eq!(unescape(r"path\to\n", DelimiterSet::Template).unwrap(), r"path\to\n");
        // '@' is not reserved in templates
        assert_eq!(unescape(r"a\@b @c", DelimiterSet::Template).unwrap(), r"a\@b @c");
    }

    #[test]
    fn test_single_level_escaping() {
        // The brace is preceded by a backslash, so it counts as escaped
        assert_eq!(unescape(r"\\{", DelimiterSet::Template).unwrap(), r"\{");
    }

    #[test]
    fn test_unescaped_delimiter_reports_position() {
        let err = unescape("ab{c", DelimiterSet::Template).unwrap_err();
        assert_eq!(err.offending, 2..3);
        assert_eq!(err.fragment_range, 0..4);
        assert_eq!(err.delimiter, '{');
        assert_eq!(err.input, "ab{c");
    }

    #[test]
    fn test_first_offending_delimiter_wins() {
        let err = unescape(r"\{x}{", DelimiterSet::Template).unwrap_err();
        assert_eq!(err.offending, 3..4);
        assert_eq!(err.delimiter, '}');
    }

    #[test]
    fn test_fragment_ranges_are_relative_to_input() {
        let input = "Hello, @world";
        let err = unescape_fragment(input, 5..13, DelimiterSet::Request).unwrap_err();
        assert_eq!(err.fragment, ", @world");
        assert_eq!(err.fragment_range, 5..13);
        assert_eq!(err.offending, 7..8);
        assert_eq!(&input[err.offending.clone()], "@");
    }

    #[test]
    fn test_fragment_start_has_no_lookbehind() {
        // The backslash sits outside the fragment
        let err = unescape_fragment(r"\@x", 1..3, DelimiterSet::Request).unwrap_err();
        assert_eq!(err.offending, 1..2);
    }

    #[test]
    fn test_multibyte_offsets() {
        let input = "héllo {";
        let err = unescape(input, DelimiterSet::Template).unwrap_err();
        assert_eq!(&input[err.offending.clone()], "{");
        assert_eq!(err.offending, 7..8);
    }

    #[test]
    fn test_escape_round_trip() {
        let raw = "a {b} @c \\ d";
        let escaped = escape(raw, DelimiterSet::Request);
        assert_eq!(escaped, r"a \{b\} \@c \ d");
        assert_eq!(unescape(&escaped, DelimiterSet::Request).unwrap(), raw);
    }

    #[test]
    fn test_find_unescaped() {
        assert_eq!(find_unescaped(r"\{\}", DelimiterSet::Template), None);
        assert_eq!(find_unescaped(r"\{{", DelimiterSet::Template), Some(2..3));
        assert_eq!(find_unescaped("@", DelimiterSet::Template), None);
        assert_eq!(find_unescaped("@", DelimiterSet::Request), Some(0..1));
    }
}
