//! Utility modules
//!
//! This module contains the error types and logging setup shared by the
//! translation table, its loader and the binary.

pub mod errors;
pub mod logging;

pub use errors::{ErrorSeverity, FetchError, LocalizationError, Result};
