//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector library and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for questionable input
//! - **JSON Helpers** - thin `serde_json` wrappers with a single error type

pub mod json;
pub mod warning;
