//! Token model for the CQL front end
//!
//! Tokens are immutable values: a closed kind, the exact matched substring
//! (delimiters included for quoted forms), and a span into the original
//! buffer. Concatenating token texts in order reproduces the buffer when
//! trivia is retained.

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification for lexed fragments.
///
/// Extend only by adding variants; stringly-typed tags would defeat
/// exhaustiveness checks in downstream match arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unreserved word: column names, table names, non-reserved keywords
    Identifier,
    /// Word in the reserved CQL keyword set (case-insensitive)
    ReservedIdentifier,
    /// Double-quoted case-sensitive name, quotes included
    QuotedName,
    /// Single-quoted string literal, quotes included, may span lines
    QuotedStringLiteral,
    /// Dollar-quoted ($$...$$) literal, delimiters included, no escaping
    PgStringLiteral,
    /// Single-quoted literal left open at end of input
    UnclosedString,
    /// Dollar-quoted literal left open at end of input
    UnclosedPgString,
    /// Double-quoted name left open at end of input
    UnclosedName,
    /// Run of decimal digits
    Wholenumber,
    /// Decimal number with a fractional part
    Float,
    /// 8-4-4-4-12 hex-grouped UUID
    Uuid,
    /// 0x-prefixed hex blob literal
    Blob,
    /// General operator/punctuation: - + = % / , ( ) .
    Op,
    /// Comparison operator: < > ! <= >= !=
    Cmp,
    /// Map-literal / type separator
    Colon,
    /// Select-list wildcard
    Star,
    /// Bind-variable marker
    Qmark,
    /// Grouping character: [ ] { }
    Brackets,
    /// Statement-terminating semicolon
    Endtoken,
    /// Spaces, tabs, newlines (emitted only when trivia is retained)
    Whitespace,
    /// Line or block comment (emitted only when trivia is retained)
    Comment,
    /// Block comment left open at end of input
    UnclosedComment,
    /// Catch-all for characters no other rule claims
    Unknown,
}

impl TokenKind {
    /// Wire-style name, matching what shell layers historically keyed off
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::ReservedIdentifier => "reserved_identifier",
            Self::QuotedName => "quotedName",
            Self::QuotedStringLiteral => "quotedStringLiteral",
            Self::PgStringLiteral => "pgStringLiteral",
            Self::UnclosedString => "unclosedString",
            Self::UnclosedPgString => "unclosedPgString",
            Self::UnclosedName => "unclosedName",
            Self::Wholenumber => "wholenumber",
            Self::Float => "float",
            Self::Uuid => "uuid",
            Self::Blob => "blobLiteral",
            Self::Op => "op",
            Self::Cmp => "cmp",
            Self::Colon => "colon",
            Self::Star => "star",
            Self::Qmark => "qmark",
            Self::Brackets => "brackets",
            Self::Endtoken => "endtoken",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::UnclosedComment => "unclosedComment",
            Self::Unknown => "unknown",
        }
    }

    /// Whitespace and comments: skipped by the parser layers
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Literal left open at end of input
    pub fn is_unclosed(self) -> bool {
        matches!(
            self,
            Self::UnclosedString | Self::UnclosedPgString | Self::UnclosedName | Self::UnclosedComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lexed token: kind, exact matched text, and buffer span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is_significant(&self) -> bool {
        !self.kind.is_trivia()
    }

    pub fn is_endtoken(&self) -> bool {
        self.kind == TokenKind::Endtoken
    }

    /// Case-insensitive text comparison, used for keyword literals
    pub fn text_eq_ignore_case(&self, other: &str) -> bool {
        self.text.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.text, self.kind)
    }
}
