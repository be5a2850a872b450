//! Grammar: keyword tables, expression trees, rule registry, and the
//! partial matcher

pub mod builders;
pub mod expr;
pub mod keywords;
pub mod matcher;
pub mod registry;

pub use builders::{default_shell_grammar, SHELL_START_RULE};
pub use expr::GrammarExpr;
pub use keywords::{classify_word, is_reserved_keyword};
pub use matcher::Parsed;
pub use registry::{parse_partial, RuleSet};
