//! Grammar expression tree
//!
//! Rules are plain data: a tree of sequencing, alternation, and repetition
//! nodes over two terminal forms (token kind, literal text). The matcher
//! walks the tree; nothing here executes.

use crate::tokens::TokenKind;

/// One grammar production body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarExpr {
    /// All children in order
    Seq(Vec<GrammarExpr>),
    /// First child that matches, tried in declared order
    Choice(Vec<GrammarExpr>),
    /// Zero or one, maximal-munch
    Opt(Box<GrammarExpr>),
    /// Zero or more, maximal-munch
    Repeat(Box<GrammarExpr>),
    /// Any token of this kind
    Kind(TokenKind),
    /// Token text compared case-insensitively
    Lit(String),
    /// Reference to a named rule in the registry
    Rule(String),
}

pub fn seq(items: impl IntoIterator<Item = GrammarExpr>) -> GrammarExpr {
    GrammarExpr::Seq(items.into_iter().collect())
}

pub fn choice(items: impl IntoIterator<Item = GrammarExpr>) -> GrammarExpr {
    GrammarExpr::Choice(items.into_iter().collect())
}

pub fn opt(item: GrammarExpr) -> GrammarExpr {
    GrammarExpr::Opt(Box::new(item))
}

pub fn repeat(item: GrammarExpr) -> GrammarExpr {
    GrammarExpr::Repeat(Box::new(item))
}

pub fn kind(kind: TokenKind) -> GrammarExpr {
    GrammarExpr::Kind(kind)
}

pub fn lit(text: impl Into<String>) -> GrammarExpr {
    GrammarExpr::Lit(text.into())
}

pub fn rule(name: impl Into<String>) -> GrammarExpr {
    GrammarExpr::Rule(name.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_build_expected_shapes() {
        let expr = seq([lit("SHOW"), opt(kind(TokenKind::Identifier))]);
        match expr {
            GrammarExpr::Seq(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], GrammarExpr::Lit("SHOW".into()));
                assert!(matches!(items[1], GrammarExpr::Opt(_)));
            }
            other => panic!("expected Seq, got {other:?}"),
        }
    }
}
