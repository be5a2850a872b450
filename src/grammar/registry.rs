//! Rule registry
//!
//! Named productions built once at startup and shared read-only afterwards.
//! Callers that need concurrent matching can hold the registry behind an
//! `Arc`; nothing mutates after construction.

use std::collections::HashMap;

use crate::config::LexicalPreferences;
use crate::lexical::{massage_with, LexError, Lexer};
use crate::log_success;
use crate::logging::codes;
use crate::tokens::Token;

use super::expr::GrammarExpr;
use super::matcher::{match_rule, Parsed};

/// A named-rule grammar with a designated start rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: HashMap<String, GrammarExpr>,
    start_rule: String,
}

impl RuleSet {
    pub fn new(start_rule: impl Into<String>) -> Self {
        Self {
            rules: HashMap::new(),
            start_rule: start_rule.into(),
        }
    }

    /// Registers a production; redefining a name replaces the old body.
    pub fn define(&mut self, name: impl Into<String>, body: GrammarExpr) -> &mut Self {
        self.rules.insert(name.into(), body);
        self
    }

    pub fn start_rule(&self) -> &str {
        &self.start_rule
    }

    pub fn rule(&self, name: &str) -> Option<&GrammarExpr> {
        self.rules.get(name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Matches `tokens` against a named rule. Non-match is a normal value
    /// with empty `matched` and the full input as `remainder`.
    pub fn parse(&self, tokens: &[Token], rule_name: &str) -> Parsed {
        match_rule(self, tokens, rule_name)
    }

    /// Matches against the start rule.
    pub fn parse_start(&self, tokens: &[Token]) -> Parsed {
        self.parse(tokens, &self.start_rule)
    }
}

/// Lexes, massages, and splits `text`, then matches the first statement's
/// significant tokens against the registry's start rule.
pub fn parse_partial(text: &str, rule_set: &RuleSet) -> Result<Parsed, LexError> {
    let preferences = LexicalPreferences::default();
    let raw = Lexer::new(preferences.clone()).lex(text)?;
    let tokens = massage_with(text, raw, &preferences);
    let outcome = crate::splitter::split_tokens(tokens);
    let first: Vec<Token> = outcome
        .statements
        .first()
        .map(|s| s.significant().cloned().collect())
        .unwrap_or_default();
    let parsed = rule_set.parse_start(&first);
    if parsed.is_full_match() {
        log_success!(
            codes::success::MATCH_COMPLETE,
            "Statement matched a shell rule",
            "rules" => parsed.matched.join(" ")
        );
    }
    Ok(parsed)
}
