//! Data models module
//!
//! This module contains the data structures shared by the translation table,
//! its loader and the configuration layer

pub mod language;
pub mod comparison;

// Re-export commonly used models
pub use language::Language;
pub use comparison::{ComparisonResult, DeletedField, EditedField, EditedValues, NewField};
