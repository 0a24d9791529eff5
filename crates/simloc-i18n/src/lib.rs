//! Key-based localization for simloc
//!
//! This crate resolves human-readable strings from symbolic keys and language
//! tags. It includes:
//!
//! - Templates with positional (`{}`) and explicit (`{N}`, 1-based) arguments
//! - An escape protocol for the reserved delimiters (`\{`, `\}`, `\@`)
//! - Fallback policies for missing translations (key name, absence, default)
//! - Language-bound contexts and key-prefixing decorators
//! - A parser for mixed text with embedded `@{key}{arg}...` references
//!
//! # Example
//!
//! ```rust
//! use simloc_i18n::{InMemorySource, LocalizationManager, TemplateLocalizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = InMemorySource::new()
//!     .with_translation("en-us", "greeting.hello", "Hello, {}!")
//!     .with_translation("de-de", "greeting.hello", "Hallo, {}!");
//! let localizer = TemplateLocalizer::new(["en-us", "de-de"], "en-us", source)?;
//! let manager = LocalizationManager::new(localizer);
//!
//! let text = manager.translate(Some("de-de"), "@{greeting.hello}{Welt} \\@home")?;
//! assert_eq!(text, "Hallo, Welt! @home");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod escape;
pub mod key;
pub mod localizer;
pub mod manager;
pub mod parser;
pub mod prefix;
pub mod resource;
pub mod source;
pub mod substitute;

pub use context::{DisabledContext, LanguageContext, LocalizationContext};
pub use error::{LocalizationError, LocalizationResult, UnescapedDelimiter};
pub use escape::{escape, unescape, DelimiterSet};
pub use key::{LocalizationKey, LocalizationRequest, RequestBuilder};
pub use localizer::{Fallback, Localizer, LocalizerExt, TemplateLocalizer};
pub use manager::LocalizationManager;
pub use parser::{DefaultRequestParser, RequestParser};
pub use prefix::{PrefixedContext, PrefixedLocalizer};
pub use resource::FileSource;
pub use source::{InMemorySource, TranslationSource};
pub use substitute::{substitute, MISSING_ARGUMENT};
