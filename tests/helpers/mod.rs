//! Test helpers module
//!
//! This module provides utilities and helpers for testing the translation
//! table and its loader: a mock translation host, sample documents and
//! tracing setup.

#![allow(dead_code)]

pub mod simple_test;
pub mod test_data;
pub mod translation_mock;

pub use simple_test::*;
pub use test_data::*;
pub use translation_mock::*;
