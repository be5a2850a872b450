//! Cursor over a lexed token sequence
//!
//! The grammar matcher works on significant tokens only, so the stream
//! pre-filters trivia at construction and exposes a saved/restored cursor
//! for backtracking across choice branches.

use super::token::{Token, TokenKind};

/// Forward cursor over significant tokens, with checkpoint support.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Builds a stream from raw lexer output, dropping trivia.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens.into_iter().filter(Token::is_significant).collect();
        Self { tokens, position: 0 }
    }

    /// Builds a stream that keeps every token, trivia included.
    pub fn with_trivia(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Checkpoint for backtracking. Restore with [`TokenStream::restore`].
    pub fn save(&self) -> usize {
        self.position
    }

    pub fn restore(&mut self, checkpoint: usize) {
        debug_assert!(checkpoint <= self.tokens.len());
        self.position = checkpoint;
    }

    /// Tokens not yet consumed, in order.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
