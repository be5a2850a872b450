//! Partial grammar matcher
//!
//! Greedy depth-first walk of a rule's expression tree over a token stream.
//! Alternatives are tried in declared order and the first success wins;
//! `Opt` and `Repeat` are maximal-munch and are not backtracked into after
//! they commit. That policy is the public contract: callers get one
//! deterministic candidate parse, never an exhaustive set.
//!
//! Non-match is a normal value, not an error. Completion callers rely on
//! the `matched`/`remainder` pair to decide between shell-local dispatch
//! and passing the statement through to the query engine untouched.

use crate::config::constants::compile_time::grammar as limits;
use crate::logging::codes;
use crate::log_warning;
use crate::tokens::{Token, TokenStream};

use super::expr::GrammarExpr;
use super::registry::RuleSet;

/// One candidate parse.
///
/// `matched` lists rule names in the order their productions were entered;
/// `remainder` holds the unconsumed tokens unchanged, spans included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parsed {
    pub matched: Vec<String>,
    pub remainder: Vec<Token>,
}

impl Parsed {
    /// Full match of a recognized rule: something matched, nothing left.
    pub fn is_full_match(&self) -> bool {
        !self.matched.is_empty() && self.remainder.is_empty()
    }

    /// Passthrough outcome: nothing recognized, input untouched.
    pub fn is_passthrough(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Matches `tokens` against `rule_name` in `rules`.
pub fn match_rule(rules: &RuleSet, tokens: &[Token], rule_name: &str) -> Parsed {
    let mut stream = TokenStream::new(tokens.to_vec());
    let mut matched = Vec::new();
    let ok = match_expr(
        rules,
        &GrammarExpr::Rule(rule_name.to_string()),
        &mut stream,
        &mut matched,
        0,
    );
    if !ok {
        return Parsed {
            matched: Vec::new(),
            remainder: tokens.to_vec(),
        };
    }
    Parsed {
        matched,
        remainder: stream.remaining().to_vec(),
    }
}

fn match_expr(
    rules: &RuleSet,
    expr: &GrammarExpr,
    stream: &mut TokenStream,
    matched: &mut Vec<String>,
    depth: usize,
) -> bool {
    if depth > limits::MAX_MATCH_DEPTH {
        log_warning!(
            "Match depth limit exceeded, treating as non-match",
            "code" => codes::grammar::MATCH_DEPTH_EXCEEDED,
            "max" => limits::MAX_MATCH_DEPTH
        );
        return false;
    }

    match expr {
        GrammarExpr::Seq(items) => {
            let checkpoint = stream.save();
            let matched_mark = matched.len();
            for item in items {
                if !match_expr(rules, item, stream, matched, depth + 1) {
                    stream.restore(checkpoint);
                    matched.truncate(matched_mark);
                    return false;
                }
            }
            true
        }
        GrammarExpr::Choice(items) => {
            for item in items {
                let checkpoint = stream.save();
                let matched_mark = matched.len();
                if match_expr(rules, item, stream, matched, depth + 1) {
                    return true;
                }
                stream.restore(checkpoint);
                matched.truncate(matched_mark);
            }
            false
        }
        GrammarExpr::Opt(item) => {
            let checkpoint = stream.save();
            let matched_mark = matched.len();
            if !match_expr(rules, item, stream, matched, depth + 1) {
                stream.restore(checkpoint);
                matched.truncate(matched_mark);
            }
            true
        }
        GrammarExpr::Repeat(item) => {
            loop {
                let checkpoint = stream.save();
                let matched_mark = matched.len();
                if !match_expr(rules, item, stream, matched, depth + 1)
                    || stream.position() == checkpoint
                {
                    stream.restore(checkpoint);
                    matched.truncate(matched_mark);
                    break;
                }
            }
            true
        }
        GrammarExpr::Kind(kind) => match stream.peek_kind() {
            Some(k) if k == *kind => {
                stream.advance();
                true
            }
            _ => false,
        },
        GrammarExpr::Lit(text) => match stream.peek() {
            Some(token) if token.text_eq_ignore_case(text) => {
                stream.advance();
                true
            }
            _ => false,
        },
        GrammarExpr::Rule(name) => {
            let Some(body) = rules.rule(name) else {
                log_warning!(
                    "Reference to unknown grammar rule",
                    "code" => codes::grammar::UNKNOWN_RULE,
                    "rule" => name
                );
                return false;
            };
            // Preorder recording: the rule name goes in before its body is
            // tried, and comes back out if the body fails.
            matched.push(name.clone());
            let checkpoint = stream.save();
            let matched_mark = matched.len();
            if match_expr(rules, body, stream, matched, depth + 1) {
                true
            } else {
                stream.restore(checkpoint);
                matched.truncate(matched_mark - 1);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::expr::{choice, kind, lit, opt, repeat, rule, seq};
    use crate::lexical::lex;
    use crate::tokens::TokenKind;

    fn toks(text: &str) -> Vec<Token> {
        lex(text).unwrap()
    }

    fn demo_rules() -> RuleSet {
        let mut rules = RuleSet::new("top");
        rules.define("top", choice([rule("showCmd"), rule("exitCmd")]));
        rules.define(
            "showCmd",
            seq([lit("SHOW"), opt(kind(TokenKind::Identifier))]),
        );
        rules.define("exitCmd", choice([lit("EXIT"), lit("QUIT")]));
        rules
    }

    #[test]
    fn test_full_match_records_rule_path_preorder() {
        let parsed = demo_rules().parse(&toks("SHOW version"), "top");
        assert_eq!(parsed.matched, vec!["top", "showCmd"]);
        assert!(parsed.remainder.is_empty());
        assert!(parsed.is_full_match());
    }

    #[test]
    fn test_choice_tries_alternatives_in_order() {
        let parsed = demo_rules().parse(&toks("quit"), "top");
        assert_eq!(parsed.matched, vec!["top", "exitCmd"]);
    }

    #[test]
    fn test_non_match_returns_full_remainder() {
        let input = toks("INSERT INTO ks.test");
        let parsed = demo_rules().parse(&input, "top");
        assert!(parsed.is_passthrough());
        assert_eq!(parsed.remainder, input);
        let kinds: Vec<TokenKind> = parsed.remainder.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ReservedIdentifier,
                TokenKind::ReservedIdentifier,
                TokenKind::Identifier,
                TokenKind::Op,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_partial_match_leaves_remainder() {
        let parsed = demo_rules().parse(&toks("SHOW version extra"), "top");
        assert_eq!(parsed.matched, vec!["top", "showCmd"]);
        assert_eq!(parsed.remainder.len(), 1);
        assert_eq!(parsed.remainder[0].text, "extra");
    }

    #[test]
    fn test_literal_match_is_case_insensitive() {
        let parsed = demo_rules().parse(&toks("sHoW"), "top");
        assert_eq!(parsed.matched, vec!["top", "showCmd"]);
    }

    #[test]
    fn test_repeat_is_maximal_munch() {
        let mut rules = RuleSet::new("list");
        rules.define("list", repeat(kind(TokenKind::Identifier)));
        let parsed = rules.parse(&toks("a b c 1"), "list");
        assert_eq!(parsed.matched, vec!["list"]);
        assert_eq!(parsed.remainder.len(), 1);
        assert_eq!(parsed.remainder[0].kind, TokenKind::Wholenumber);
    }

    #[test]
    fn test_failed_rule_rolls_back_recorded_names() {
        let mut rules = RuleSet::new("top");
        rules.define("top", choice([rule("ab"), rule("a")]));
        rules.define("ab", seq([lit("a"), lit("b")]));
        rules.define("a", lit("a"));
        let parsed = rules.parse(&toks("a c"), "top");
        // "ab" was entered and failed; its name must not leak into matched.
        assert_eq!(parsed.matched, vec!["top", "a"]);
    }

    #[test]
    fn test_unknown_rule_is_non_match() {
        let rules = RuleSet::new("top");
        let input = toks("SHOW");
        let parsed = rules.parse(&input, "top");
        assert!(parsed.is_passthrough());
        assert_eq!(parsed.remainder, input);
    }

    #[test]
    fn test_left_recursion_is_bounded() {
        let mut rules = RuleSet::new("loop");
        rules.define("loop", rule("loop"));
        let input = toks("a");
        let parsed = rules.parse(&input, "loop");
        assert!(parsed.is_passthrough());
        assert_eq!(parsed.remainder, input);
    }

    #[test]
    fn test_empty_input_against_optional_rule() {
        let mut rules = RuleSet::new("maybe");
        rules.define("maybe", opt(lit("SHOW")));
        let parsed = rules.parse(&[], "maybe");
        assert_eq!(parsed.matched, vec!["maybe"]);
        assert!(parsed.remainder.is_empty());
    }
}
