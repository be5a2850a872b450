//! Lexical analysis: rule table, lexer, and token stream massager

pub mod analyzer;
pub mod massage;
pub mod rules;

pub use analyzer::{lex, LexError, Lexer, LexicalMetrics};
pub use massage::{massage, massage_with};
