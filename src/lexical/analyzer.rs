//! Lexical analyzer
//!
//! Scans the buffer left to right, applying the priority-ordered rule table
//! at each position. Lexing never fails on malformed input; only the
//! security limits produce errors.

use crate::config::constants::compile_time::lexical as limits;
use crate::config::LexicalPreferences;
use crate::grammar::keywords::classify_word;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{Position, SourceMap, Span};
use crate::{log_debug, log_error, log_success};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::RULES;

/// Lexer failures. Malformed input is not an error (unclosed literals lex to
/// dedicated kinds); only resource limits and the unreachable no-match case
/// are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("input size {size} exceeds maximum {max} bytes")]
    InputTooLarge { size: usize, max: usize },

    #[error("token count {count} exceeds maximum {max}")]
    TooManyTokens { count: usize, max: usize },

    #[error("no rule matches at offset {offset} (line {line}, column {column})")]
    NoMatch {
        offset: usize,
        line: u32,
        column: u32,
    },
}

impl LexError {
    /// Logging code for this failure
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::InputTooLarge { .. } => codes::lexical::INPUT_TOO_LARGE,
            Self::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            Self::NoMatch { .. } => codes::lexical::NO_RULE_MATCHES,
        }
    }
}

/// Per-run counters, collected when `collect_detailed_metrics` is on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalMetrics {
    pub bytes_scanned: usize,
    pub tokens_emitted: usize,
    pub trivia_dropped: usize,
    pub unclosed_literals: usize,
}

/// Rule-table lexer configured by [`LexicalPreferences`].
#[derive(Debug, Clone)]
pub struct Lexer {
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl Lexer {
    pub fn new(preferences: LexicalPreferences) -> Self {
        Self {
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    /// Metrics from the most recent `lex` call. Zeroed unless
    /// `collect_detailed_metrics` is set.
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenizes `text` against the rule table.
    ///
    /// Output tokens carry true buffer offsets; when trivia is dropped the
    /// spans show gaps where whitespace and comments were.
    pub fn lex(&mut self, text: &str) -> Result<Vec<Token>, LexError> {
        if text.len() > limits::MAX_INPUT_SIZE {
            let error = LexError::InputTooLarge {
                size: text.len(),
                max: limits::MAX_INPUT_SIZE,
            };
            log_error!(
                error.error_code(),
                "Input rejected by size limit",
                "size" => text.len(),
                "max" => limits::MAX_INPUT_SIZE
            );
            return Err(error);
        }

        self.metrics = LexicalMetrics::default();
        let collect = self.preferences.collect_detailed_metrics;
        log_debug!("Lexing input", "bytes" => text.len());

        let mut tokens = Vec::new();
        let mut cursor = Position::start();

        while cursor.offset < text.len() {
            let rest = &text[cursor.offset..];
            let (kind, len) = match first_match(rest) {
                Some(hit) => hit,
                None => return Err(self.no_match_error(text, cursor.offset)),
            };
            debug_assert!(len > 0 && rest.is_char_boundary(len));

            let matched = &rest[..len];
            let kind = if kind == TokenKind::Identifier {
                classify_word(matched)
            } else {
                kind
            };
            let end = cursor.advance_str(matched);
            let span = Span::new(cursor, end);
            cursor = end;

            if collect {
                self.metrics.bytes_scanned = cursor.offset;
                if kind.is_unclosed() {
                    self.metrics.unclosed_literals += 1;
                }
            }

            if kind.is_trivia() && !self.preferences.retain_trivia {
                if collect {
                    self.metrics.trivia_dropped += 1;
                }
                continue;
            }

            tokens.push(Token::new(kind, matched, span));
            if tokens.len() > limits::MAX_TOKEN_COUNT {
                let error = LexError::TooManyTokens {
                    count: tokens.len(),
                    max: limits::MAX_TOKEN_COUNT,
                };
                log_error!(
                    error.error_code(),
                    "Input rejected by token-count limit",
                    "max" => limits::MAX_TOKEN_COUNT
                );
                return Err(error);
            }
        }

        if collect {
            self.metrics.tokens_emitted = tokens.len();
        }
        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Tokenization complete",
            "tokens" => tokens.len()
        );
        Ok(tokens)
    }

    fn no_match_error(&self, text: &str, offset: usize) -> LexError {
        let map = SourceMap::new(text.to_string());
        let position = map.position_at(offset);
        let (line, column) = if self.preferences.include_position_in_errors {
            (position.line, position.column)
        } else {
            (0, 0)
        };
        let error = LexError::NoMatch {
            offset,
            line,
            column,
        };
        log_error!(error.error_code(), "No lexical rule matched", "offset" => offset);
        error
    }
}

fn first_match(rest: &str) -> Option<(TokenKind, usize)> {
    for (kind, matcher) in RULES {
        if let Some(len) = matcher(rest) {
            return Some((*kind, len));
        }
    }
    None
}

/// One-shot tokenization with default preferences.
pub fn lex(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(LexicalPreferences::default()).lex(text)
}
