//! Consolidated error and success codes for the CQL front end
//!
//! Single source of truth for code constants and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata for a registered code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

pub mod lexical {
    use super::Code;

    pub const NO_RULE_MATCHES: Code = Code::new("L001");
    pub const INPUT_TOO_LARGE: Code = Code::new("L002");
    pub const TOO_MANY_TOKENS: Code = Code::new("L003");
    pub const UNCLOSED_LITERAL: Code = Code::new("L010");
}

pub mod splitter {
    use super::Code;

    pub const UNTERMINATED_STATEMENT: Code = Code::new("S001");
}

pub mod grammar {
    use super::Code;

    pub const MATCH_DEPTH_EXCEEDED: Code = Code::new("G001");
    pub const UNKNOWN_RULE: Code = Code::new("G002");
}

pub mod success {
    use super::Code;

    pub const TOKENIZATION_COMPLETE: Code = Code::new("OK001");
    pub const SPLIT_COMPLETE: Code = Code::new("OK002");
    pub const MATCH_COMPLETE: Code = Code::new("OK003");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("OK010");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, CodeMetadata> {
    REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata {
                code: "L001",
                category: "Lexical",
                severity: Severity::Critical,
                recoverable: false,
                description: "No lexer rule matched at the given offset",
            },
            CodeMetadata {
                code: "L002",
                category: "Lexical",
                severity: Severity::High,
                recoverable: true,
                description: "Input buffer exceeds the maximum accepted size",
            },
            CodeMetadata {
                code: "L003",
                category: "Lexical",
                severity: Severity::High,
                recoverable: true,
                description: "Token count limit exceeded",
            },
            CodeMetadata {
                code: "L010",
                category: "Lexical",
                severity: Severity::Low,
                recoverable: true,
                description: "Literal left open at end of input",
            },
            CodeMetadata {
                code: "S001",
                category: "Splitter",
                severity: Severity::Low,
                recoverable: true,
                description: "Final statement not terminated by a semicolon",
            },
            CodeMetadata {
                code: "G001",
                category: "Grammar",
                severity: Severity::Medium,
                recoverable: true,
                description: "Grammar match recursion depth exceeded",
            },
            CodeMetadata {
                code: "G002",
                category: "Grammar",
                severity: Severity::Medium,
                recoverable: true,
                description: "Referenced grammar rule is not registered",
            },
            CodeMetadata {
                code: "OK001",
                category: "Success",
                severity: Severity::Low,
                recoverable: true,
                description: "Tokenization completed",
            },
            CodeMetadata {
                code: "OK002",
                category: "Success",
                severity: Severity::Low,
                recoverable: true,
                description: "Statement split completed",
            },
            CodeMetadata {
                code: "OK003",
                category: "Success",
                severity: Severity::Low,
                recoverable: true,
                description: "Grammar match completed",
            },
            CodeMetadata {
                code: "OK010",
                category: "Success",
                severity: Severity::Low,
                recoverable: true,
                description: "Logging system initialized",
            },
        ];
        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Look up metadata for a code string
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    registry().get(code)
}

/// Human-readable description for a code, or a fixed fallback
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.description).unwrap_or("Unknown error")
}
