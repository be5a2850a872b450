//! Token stream massager
//!
//! Cleanup pass between raw lexing and statement splitting. The raw lexer
//! deliberately over-consumes when a `$$` literal is left open (the whole
//! tail becomes one token); interactive callers want the words after the
//! open delimiter back as ordinary tokens so completion still works. This
//! pass truncates the open `$$` token to its two-byte delimiter and re-lexes
//! the consumed tail from the original buffer, rebasing spans to true
//! offsets.
//!
//! Open `'` and `"` literals keep their whole tail as a single token; for
//! those this pass is the identity.

use crate::config::LexicalPreferences;
use crate::log_warning;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{SourceMap, Span};

use super::analyzer::Lexer;

/// Massages raw lexer output with default preferences. See [`massage_with`].
pub fn massage(text: &str, tokens: Vec<Token>) -> Vec<Token> {
    massage_with(text, tokens, &LexicalPreferences::default())
}

/// Massages raw lexer output. Pure: `text` must be the buffer `tokens` was
/// lexed from and `preferences` the settings it was lexed with, so the
/// re-lexed tail keeps or drops trivia exactly like the rest of the stream.
/// Only the final token can be an open literal (the unclosed rules consume
/// to end of input), so earlier well-formed literals are untouched.
pub fn massage_with(
    text: &str,
    mut tokens: Vec<Token>,
    preferences: &LexicalPreferences,
) -> Vec<Token> {
    let Some(last) = tokens.last() else {
        return tokens;
    };
    if last.kind != TokenKind::UnclosedPgString {
        if last.kind.is_unclosed() {
            log_warning!(
                "Open literal at end of input",
                "code" => codes::lexical::UNCLOSED_LITERAL,
                "kind" => last.kind,
                "offset" => last.span.start.offset
            );
        }
        return tokens;
    }

    let (start, end) = last.span.offsets();
    let delimiter_end = start + 2;
    log_warning!(
        "Open $$ literal truncated to delimiter",
        "code" => codes::lexical::UNCLOSED_LITERAL,
        "offset" => start
    );

    let map = SourceMap::new(text.to_string());
    let delimiter_span = Span::new(map.position_at(start), map.position_at(delimiter_end));
    if let Some(slot) = tokens.last_mut() {
        *slot = Token::new(TokenKind::UnclosedPgString, "$$", delimiter_span);
    }

    // Re-lex the consumed tail at its true buffer offsets.
    let tail = &text[delimiter_end..end];
    let mut lexer = Lexer::new(preferences.clone());
    match lexer.lex(tail) {
        Ok(relexed) => {
            for token in relexed {
                let (ts, te) = token.span.offsets();
                let span = Span::new(
                    map.position_at(delimiter_end + ts),
                    map.position_at(delimiter_end + te),
                );
                tokens.push(Token::new(token.kind, token.text, span));
            }
        }
        Err(error) => {
            // Tail is a substring of an already-accepted buffer, so the
            // limits cannot trip; log and keep the bare delimiter.
            log_warning!(
                "Tail re-lex failed after $$ truncation",
                "code" => error.error_code(),
                "error" => error
            );
        }
    }
    tokens
}
