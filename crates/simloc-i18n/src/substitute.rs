//! Argument substitution for translation templates
//!
//! Two placeholder shapes are recognized: `{}` takes the next positional
//! argument and `{N}` takes the N-th argument (1-based). A placeholder whose
//! opening brace is escaped (`\{`) is plain text.

use crate::error::UnescapedDelimiter;
use crate::escape::{is_escaped_at, unescape_fragment, DelimiterSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Inserted for placeholders that point past the end of the argument list.
pub const MISSING_ARGUMENT: &str = "?";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([0-9]*)\}").expect("placeholder pattern is valid"));

/// A placeholder located in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placeholder {
    /// Byte range of the whole `{...}` marker
    pub range: Range<usize>,
    /// Zero-based argument index, `None` when it can not address any argument
    pub index: Option<usize>,
}

/// Iterate the placeholders of `template` in left-to-right order.
///
/// The positional counter advances on `{}` and on indices too large for
/// `usize`; explicit `{N}` markers do not move it.
pub(crate) fn placeholders(template: &str) -> impl Iterator<Item = Placeholder> + '_ {
    let mut next_positional = 0usize;
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(move |caps| {
            let marker = caps.get(0)?;
            if is_escaped_at(template, marker.start()) {
                return None;
            }
            let digits = caps.get(1).map_or("", |m| m.as_str());
            // Indices too large to parse count as `{}`
            let index = match digits.parse::<usize>() {
                Ok(n) => n.checked_sub(1),
                Err(_) => {
                    let index = next_positional;
                    next_positional += 1;
                    Some(index)
                }
            };
            Some(Placeholder {
                range: marker.range(),
                index,
            })
        })
}

fn argument<'a>(arguments: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| arguments.get(i))
        .map_or(MISSING_ARGUMENT, String::as_str)
}

/// Replace every placeholder in `template` with its argument.
///
/// Arguments are inserted verbatim. Escapes are left in place for a later
/// unescape pass.
pub fn substitute(template: &str, arguments: &[String]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;
    for placeholder in placeholders(template) {
        output.push_str(&template[cursor..placeholder.range.start]);
        output.push_str(argument(arguments, placeholder.index));
        cursor = placeholder.range.end;
    }
    output.push_str(&template[cursor..]);
    output
}

/// Substitute arguments and unescape the template text in one pass.
///
/// Only the template's own text is escape-checked and unescaped; inserted
/// arguments are never scanned. Error ranges are relative to `template`.
pub(crate) fn render(template: &str, arguments: &[String]) -> Result<String, UnescapedDelimiter> {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;
    for placeholder in placeholders(template) {
        output.push_str(&unescape_fragment(
            template,
            cursor..placeholder.range.start,
            DelimiterSet::Template,
        )?);
        output.push_str(argument(arguments, placeholder.index));
        cursor = placeholder.range.end;
    }
    output.push_str(&unescape_fragment(
        template,
        cursor..template.len(),
        DelimiterSet::Template,
    )?);
    Ok(output)
}
