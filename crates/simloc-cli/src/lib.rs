//! # Simloc CLI
//!
//! The `simloc` command: translate mixed text, resolve single keys and
//! inspect parsed requests from the terminal.
//!
//! The binary is a thin wrapper; argument definitions live in [`cli`] and
//! command execution in [`app`], so both can be tested without a process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::App;
pub use cli::{Args, Command};
pub use error::{CliError, CliResult};
