//! Translation source backed by TOML resource files

use crate::error::{LocalizationError, LocalizationResult};
use crate::source::TranslationSource;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads one `<language>.toml` file per language from a base directory.
///
/// Nested tables are flattened into dotted keys, so
///
/// ```toml
/// [greeting]
/// hello = "Hello, {}!"
/// ```
///
/// provides the key `greeting.hello`. Every leaf must be a string.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
    translations: HashMap<String, HashMap<String, String>>,
}

impl FileSource {
    /// Load the resource file of every language in `languages`
    pub fn load<P, I, T>(base_dir: P, languages: I) -> LocalizationResult<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let base_dir = base_dir.as_ref().to_path_buf();
        let mut translations = HashMap::new();

        for language in languages {
            let language = language.as_ref();
            let entries = load_language_file(&Self::resource_path(&base_dir, language))?;
            translations.insert(language.to_string(), entries);
        }

        info!(
            base_dir = %base_dir.display(),
            languages = translations.len(),
            "Loaded translation resources"
        );

        Ok(Self {
            base_dir,
            translations,
        })
    }

    fn resource_path(base_dir: &Path, language: &str) -> PathBuf {
        base_dir.join(format!("{language}.toml"))
    }

    /// The directory resources were loaded from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Languages that were loaded
    pub fn loaded_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Number of keys loaded for `language`
    pub fn len_for(&self, language: &str) -> usize {
        self.translations.get(language).map_or(0, HashMap::len)
    }
}

impl TranslationSource for FileSource {
    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        self.translations.get(language)?.get(key).cloned()
    }

    fn has_language(&self, language: &str) -> bool {
        self.translations.contains_key(language)
    }
}

fn load_language_file(path: &Path) -> LocalizationResult<HashMap<String, String>> {
    debug!("Loading resource file: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| {
        warn!("Resource file could not be read: {:?}", path);
        LocalizationError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let table: toml::Table =
        toml::from_str(&content).map_err(|source| LocalizationError::ResourceParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = HashMap::new();
    flatten(path, "", &table, &mut entries)?;
    debug!(entries = entries.len(), "Parsed resource file {:?}", path);
    Ok(entries)
}

fn flatten(
    path: &Path,
    prefix: &str,
    table: &toml::Table,
    entries: &mut HashMap<String, String>,
) -> LocalizationResult<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            toml::Value::String(text) => {
                entries.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten(path, &key, nested, entries)?,
            _ => {
                return Err(LocalizationError::InvalidResourceValue {
                    path: path.to_path_buf(),
                    key,
                })
            }
        }
    }
    Ok(())
}
