// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod splitter;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{default_shell_grammar, parse_partial, Parsed, RuleSet};
pub use lexical::{lex, massage, massage_with, LexError, Lexer};
pub use splitter::{split_statements, SplitOutcome, Statement};
pub use tokens::{Token, TokenKind, TokenStream};
pub use utils::{Position, Span};
