//! Shared utilities for the CQL front end

pub mod span;

pub use span::{Position, SourceMap, Span};
