//! Test utilities and shared test helpers for the simloc workspace.
//!
//! This module provides logging setup, temporary directories and text
//! fixtures shared by the unit and integration tests of every crate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `dir/name`, creating parent directories as needed.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Translation file fixtures, one TOML document per language.
pub mod translation_fixtures {
    use super::write_fixture;
    use std::path::Path;

    /// American English translations.
    pub fn en_us_toml() -> &'static str {
        r#"
[test]
test = "Test USA"
default = "Test USA"
arguments = "Test a:{}, b:{3}, f:{1}, t:{}, g:{} \\{\\}"

[greeting]
hello = "Hello, {}!"
farewell = "Goodbye, {2} and {1}"
"#
    }

    /// British English translations; intentionally sparse.
    pub fn en_uk_toml() -> &'static str {
        r#"
[test]
test = "Test UK"
"#
    }

    /// Populate `dir` with `en-us.toml` and `en-uk.toml`.
    pub fn write_locales(dir: &Path) {
        write_fixture(dir, "en-us.toml", en_us_toml());
        write_fixture(dir, "en-uk.toml", en_uk_toml());
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration backed by inline translations.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
localization:
  supported_languages: [en-us, en-uk]
  default_language: en-us
  source:
    kind: inline
    translations:
      en-us:
        test.test: "Test USA"
        test.default: "Test USA"
      en-uk:
        test.test: "Test UK"
"#
    }

    /// A full configuration backed by translation files in `locales`.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "localization:\n",
            "  supported_languages:\n",
            "    - en-us\n",
            "    - en-uk\n",
            "  default_language: en-uk\n",
            "  source:\n",
            "    kind: files\n",
            "    directory: locales\n",
            "\n",
            "logging:\n",
            "  level: debug\n",
            "  format: json\n",
            "  include_spans: true\n",
            "  include_targets: false\n",
        )
    }
}
