//! # Simloc Config
//!
//! YAML configuration for simloc.
//!
//! This crate defines the configuration schema, its defaults, a loader that
//! layers environment variables over the file, and the validation run on
//! every loaded configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::{Config, LocalizationConfig, SourceConfig};
pub use validator::ConfigValidator;
