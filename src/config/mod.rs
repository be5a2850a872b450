//! Configuration module for the CQL front end
//!
//! Compile-time limits are security boundaries and cannot be changed at
//! runtime; runtime preferences cover user experience only.

pub mod constants;
pub mod runtime;

pub use runtime::{LexicalPreferences, LoggingPreferences, Preferences};
