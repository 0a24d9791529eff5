//! # Simloc Common
//!
//! Shared error type, logging bootstrap and test helpers for the simloc
//! workspace.
//!
//! This crate provides the foundational pieces used across the other crates
//! in the workspace: the umbrella [`SimlocError`], the `tracing` subscriber
//! setup driven by [`LoggingConfig`], and (behind the `testing` feature) the
//! fixtures used by integration tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SimlocError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
