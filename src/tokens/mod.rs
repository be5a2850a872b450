//! Token types and streams shared by the lexer, splitter, and grammar

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;
