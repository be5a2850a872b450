//! Statement splitter
//!
//! Groups massaged tokens into statements at `;` boundaries. Because the
//! split runs after lexing, semicolons inside string literals and comments
//! are ordinary token text and never split. The shell uses the `terminated`
//! flag to decide whether the buffer is complete or more lines are needed.

use crate::config::LexicalPreferences;
use crate::lexical::{massage_with, LexError, Lexer};
use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_info, log_success};

/// One statement's tokens, including its trailing `Endtoken` when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub tokens: Vec<Token>,
}

impl Statement {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Tokens with trivia filtered out.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_significant())
    }

    /// A statement is empty when it has no significant tokens; a bare `;`
    /// still counts as non-empty.
    pub fn is_empty(&self) -> bool {
        self.significant().next().is_none()
    }

    pub fn ends_with_endtoken(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_endtoken)
    }

    /// Source text reassembled from token texts, for echo and history.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Split result. `terminated` is true when the final retained statement ends
/// with a semicolon and no open literal is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub statements: Vec<Statement>,
    pub terminated: bool,
}

/// Lexes, massages, and splits `text` into statements.
pub fn split_statements(text: &str) -> Result<SplitOutcome, LexError> {
    split_statements_with(text, &LexicalPreferences::default())
}

/// As [`split_statements`], with explicit preferences (retained trivia ends
/// up inside the statement token lists).
pub fn split_statements_with(
    text: &str,
    preferences: &LexicalPreferences,
) -> Result<SplitOutcome, LexError> {
    log_debug!("Splitting input", "bytes" => text.len());
    let raw = Lexer::new(preferences.clone()).lex(text)?;
    let tokens = massage_with(text, raw, preferences);
    let outcome = split_tokens(tokens);
    if outcome.terminated {
        log_success!(
            codes::success::SPLIT_COMPLETE,
            "Split complete",
            "statements" => outcome.statements.len()
        );
    } else {
        log_info!(
            "Split found unterminated final statement",
            "code" => codes::splitter::UNTERMINATED_STATEMENT,
            "statements" => outcome.statements.len()
        );
    }
    Ok(outcome)
}

/// Groups already-massaged tokens into statements and trims the trailing run
/// of empty statements. Embedded empty statements (bare `;;`) survive.
pub fn split_tokens(tokens: Vec<Token>) -> SplitOutcome {
    // Massage can re-lex tokens in after a truncated `$$`, so the open
    // literal is not necessarily the last token.
    let pending_open_literal = tokens.iter().any(|t| t.kind.is_unclosed());

    let mut statements = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        let ends = token.is_endtoken();
        current.push(token);
        if ends {
            statements.push(Statement::new(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        statements.push(Statement::new(current));
    }

    // Drop the trailing empty run only; `a;;b;` keeps its middle empty.
    while statements.last().is_some_and(Statement::is_empty) {
        statements.pop();
    }

    let terminated = !pending_open_literal
        && statements
            .last()
            .map_or(true, Statement::ends_with_endtoken);
    SplitOutcome {
        statements,
        terminated,
    }
}


/// Full-statement classification fixtures, mirroring what the interactive
/// shell runs through split-then-dispatch for each statement family.
#[cfg(test)]
mod statement_fixtures {
    use super::split_statements;

    /// (text, kind name) pairs of the first statement's tokens.
    fn first_statement(text: &str) -> Vec<(String, &'static str)> {
        let outcome = split_statements(text).unwrap();
        let first = outcome.statements.first().cloned().unwrap_or_else(|| {
            panic!("no statements in {text:?}");
        });
        first
            .tokens
            .iter()
            .map(|t| (t.text.clone(), t.kind.as_str()))
            .collect()
    }

    fn check(text: &str, expected: &[(&str, &str)]) {
        let actual = first_statement(text);
        let view: Vec<(&str, &str)> = actual.iter().map(|(t, k)| (t.as_str(), *k)).collect();
        assert_eq!(view, expected, "input: {text:?}");
    }

    #[test]
    fn test_select_statements() {
        check(
            "SELECT FROM \"MyTable\";",
            &[
                ("SELECT", "reserved_identifier"),
                ("FROM", "reserved_identifier"),
                ("\"MyTable\"", "quotedName"),
                (";", "endtoken"),
            ],
        );
        check(
            "SELECT FROM tab WHERE foo = 3;",
            &[
                ("SELECT", "reserved_identifier"),
                ("FROM", "reserved_identifier"),
                ("tab", "identifier"),
                ("WHERE", "reserved_identifier"),
                ("foo", "identifier"),
                ("=", "op"),
                ("3", "wholenumber"),
                (";", "endtoken"),
            ],
        );
        check(
            "SELECT FROM tab ORDER BY event_id DESC LIMIT 1000",
            &[
                ("SELECT", "reserved_identifier"),
                ("FROM", "reserved_identifier"),
                ("tab", "identifier"),
                ("ORDER", "reserved_identifier"),
                ("BY", "reserved_identifier"),
                ("event_id", "identifier"),
                ("DESC", "reserved_identifier"),
                ("LIMIT", "reserved_identifier"),
                ("1000", "wholenumber"),
            ],
        );
        check(
            "SELECT FROM tab WHERE clustering_column > 200 \
             AND clustering_column < 400 ALLOW FILTERING",
            &[
                ("SELECT", "reserved_identifier"),
                ("FROM", "reserved_identifier"),
                ("tab", "identifier"),
                ("WHERE", "reserved_identifier"),
                ("clustering_column", "identifier"),
                (">", "cmp"),
                ("200", "wholenumber"),
                ("AND", "reserved_identifier"),
                ("clustering_column", "identifier"),
                ("<", "cmp"),
                ("400", "wholenumber"),
                ("ALLOW", "reserved_identifier"),
                ("FILTERING", "identifier"),
            ],
        );
    }

    #[test]
    fn test_insert_statements() {
        check(
            "INSERT INTO mytable (x, y) VALUES (2, 'eggs');",
            &[
                ("INSERT", "reserved_identifier"),
                ("INTO", "reserved_identifier"),
                ("mytable", "identifier"),
                ("(", "op"),
                ("x", "identifier"),
                (",", "op"),
                ("y", "identifier"),
                (")", "op"),
                ("VALUES", "identifier"),
                ("(", "op"),
                ("2", "wholenumber"),
                (",", "op"),
                ("'eggs'", "quotedStringLiteral"),
                (")", "op"),
                (";", "endtoken"),
            ],
        );
        check(
            "INSERT INTO mytable (ids) VALUES \
             (7ee251da-af52-49a4-97f4-3f07e406c7a7) USING TTL 86400;",
            &[
                ("INSERT", "reserved_identifier"),
                ("INTO", "reserved_identifier"),
                ("mytable", "identifier"),
                ("(", "op"),
                ("ids", "identifier"),
                (")", "op"),
                ("VALUES", "identifier"),
                ("(", "op"),
                ("7ee251da-af52-49a4-97f4-3f07e406c7a7", "uuid"),
                (")", "op"),
                ("USING", "reserved_identifier"),
                ("TTL", "identifier"),
                ("86400", "wholenumber"),
                (";", "endtoken"),
            ],
        );
        check(
            "INSERT INTO test_table (username) VALUES ('Albert') \
             USING TIMESTAMP 1240003134 AND TTL 600;",
            &[
                ("INSERT", "reserved_identifier"),
                ("INTO", "reserved_identifier"),
                ("test_table", "identifier"),
                ("(", "op"),
                ("username", "identifier"),
                (")", "op"),
                ("VALUES", "identifier"),
                ("(", "op"),
                ("'Albert'", "quotedStringLiteral"),
                (")", "op"),
                ("USING", "reserved_identifier"),
                ("TIMESTAMP", "identifier"),
                ("1240003134", "wholenumber"),
                ("AND", "reserved_identifier"),
                ("TTL", "identifier"),
                ("600", "wholenumber"),
                (";", "endtoken"),
            ],
        );
    }

    #[test]
    fn test_update_statements() {
        check(
            "UPDATE tab USING TTL 432000 SET x = 15 WHERE y = 'eggs';",
            &[
                ("UPDATE", "reserved_identifier"),
                ("tab", "identifier"),
                ("USING", "reserved_identifier"),
                ("TTL", "identifier"),
                ("432000", "wholenumber"),
                ("SET", "reserved_identifier"),
                ("x", "identifier"),
                ("=", "op"),
                ("15", "wholenumber"),
                ("WHERE", "reserved_identifier"),
                ("y", "identifier"),
                ("=", "op"),
                ("'eggs'", "quotedStringLiteral"),
                (";", "endtoken"),
            ],
        );
        check(
            "UPDATE tab SET x = 15 WHERE y IN ('eggs', 'sausage', 'spam');",
            &[
                ("UPDATE", "reserved_identifier"),
                ("tab", "identifier"),
                ("SET", "reserved_identifier"),
                ("x", "identifier"),
                ("=", "op"),
                ("15", "wholenumber"),
                ("WHERE", "reserved_identifier"),
                ("y", "identifier"),
                ("IN", "reserved_identifier"),
                ("(", "op"),
                ("'eggs'", "quotedStringLiteral"),
                (",", "op"),
                ("'sausage'", "quotedStringLiteral"),
                (",", "op"),
                ("'spam'", "quotedStringLiteral"),
                (")", "op"),
                (";", "endtoken"),
            ],
        );
        check(
            "UPDATE tab SET x = 15 WHERE y = 'spam' IF EXISTS",
            &[
                ("UPDATE", "reserved_identifier"),
                ("tab", "identifier"),
                ("SET", "reserved_identifier"),
                ("x", "identifier"),
                ("=", "op"),
                ("15", "wholenumber"),
                ("WHERE", "reserved_identifier"),
                ("y", "identifier"),
                ("=", "op"),
                ("'spam'", "quotedStringLiteral"),
                ("IF", "reserved_identifier"),
                ("EXISTS", "identifier"),
            ],
        );
    }

    #[test]
    fn test_delete_statements() {
        check(
            "DELETE task_map ['2014-12-25'] FROM tasks WHERE user_id = 'Santa';",
            &[
                ("DELETE", "reserved_identifier"),
                ("task_map", "identifier"),
                ("[", "brackets"),
                ("'2014-12-25'", "quotedStringLiteral"),
                ("]", "brackets"),
                ("FROM", "reserved_identifier"),
                ("tasks", "identifier"),
                ("WHERE", "reserved_identifier"),
                ("user_id", "identifier"),
                ("=", "op"),
                ("'Santa'", "quotedStringLiteral"),
                (";", "endtoken"),
            ],
        );
        check(
            "DELETE my_list[0] FROM lists WHERE user_id = 'Jim';",
            &[
                ("DELETE", "reserved_identifier"),
                ("my_list", "identifier"),
                ("[", "brackets"),
                ("0", "wholenumber"),
                ("]", "brackets"),
                ("FROM", "reserved_identifier"),
                ("lists", "identifier"),
                ("WHERE", "reserved_identifier"),
                ("user_id", "identifier"),
                ("=", "op"),
                ("'Jim'", "quotedStringLiteral"),
                (";", "endtoken"),
            ],
        );
    }

    #[test]
    fn test_create_keyspace_statements() {
        check(
            "CREATE KEYSPACE ks WITH REPLICATION = \
             {'class': 'SimpleStrategy', 'replication_factor': 1};",
            &[
                ("CREATE", "reserved_identifier"),
                ("KEYSPACE", "reserved_identifier"),
                ("ks", "identifier"),
                ("WITH", "reserved_identifier"),
                ("REPLICATION", "identifier"),
                ("=", "op"),
                ("{", "brackets"),
                ("'class'", "quotedStringLiteral"),
                (":", "colon"),
                ("'SimpleStrategy'", "quotedStringLiteral"),
                (",", "op"),
                ("'replication_factor'", "quotedStringLiteral"),
                (":", "colon"),
                ("1", "wholenumber"),
                ("}", "brackets"),
                (";", "endtoken"),
            ],
        );
        check(
            "CREATE KEYSPACE ks WITH REPLICATION = \
             {'class': 'NetworkTopologyStrategy', 'dc1': 3} AND \
             DURABLE_WRITES = false;",
            &[
                ("CREATE", "reserved_identifier"),
                ("KEYSPACE", "reserved_identifier"),
                ("ks", "identifier"),
                ("WITH", "reserved_identifier"),
                ("REPLICATION", "identifier"),
                ("=", "op"),
                ("{", "brackets"),
                ("'class'", "quotedStringLiteral"),
                (":", "colon"),
                ("'NetworkTopologyStrategy'", "quotedStringLiteral"),
                (",", "op"),
                ("'dc1'", "quotedStringLiteral"),
                (":", "colon"),
                ("3", "wholenumber"),
                ("}", "brackets"),
                ("AND", "reserved_identifier"),
                ("DURABLE_WRITES", "identifier"),
                ("=", "op"),
                ("false", "identifier"),
                (";", "endtoken"),
            ],
        );
    }

    #[test]
    fn test_drop_keyspace_statements() {
        check(
            "DROP SCHEMA ks;",
            &[
                ("DROP", "reserved_identifier"),
                ("SCHEMA", "reserved_identifier"),
                ("ks", "identifier"),
                (";", "endtoken"),
            ],
        );
        check(
            "DROP KEYSPACE IF EXISTS \"My_ks\";",
            &[
                ("DROP", "reserved_identifier"),
                ("KEYSPACE", "reserved_identifier"),
                ("IF", "reserved_identifier"),
                ("EXISTS", "identifier"),
                ("\"My_ks\"", "quotedName"),
                (";", "endtoken"),
            ],
        );
    }

    #[test]
    fn test_create_index_statements() {
        check(
            "CREATE INDEX idx ON ks.tab (i) IF NOT EXISTS;",
            &[
                ("CREATE", "reserved_identifier"),
                ("INDEX", "reserved_identifier"),
                ("idx", "identifier"),
                ("ON", "reserved_identifier"),
                ("ks", "identifier"),
                (".", "op"),
                ("tab", "identifier"),
                ("(", "op"),
                ("i", "identifier"),
                (")", "op"),
                ("IF", "reserved_identifier"),
                ("NOT", "reserved_identifier"),
                ("EXISTS", "identifier"),
                (";", "endtoken"),
            ],
        );
        check(
            "CREATE INDEX idx ON tab (KEYS(i));",
            &[
                ("CREATE", "reserved_identifier"),
                ("INDEX", "reserved_identifier"),
                ("idx", "identifier"),
                ("ON", "reserved_identifier"),
                ("tab", "identifier"),
                ("(", "op"),
                ("KEYS", "identifier"),
                ("(", "op"),
                ("i", "identifier"),
                (")", "op"),
                (")", "op"),
                (";", "endtoken"),
            ],
        );
        check(
            "CREATE INDEX idx ON ks.tab FULL(i);",
            &[
                ("CREATE", "reserved_identifier"),
                ("INDEX", "reserved_identifier"),
                ("idx", "identifier"),
                ("ON", "reserved_identifier"),
                ("ks", "identifier"),
                (".", "op"),
                ("tab", "identifier"),
                ("FULL", "reserved_identifier"),
                ("(", "op"),
                ("i", "identifier"),
                (")", "op"),
                (";", "endtoken"),
            ],
        );
        check(
            "CREATE CUSTOM INDEX idx ON ks.tab (i);",
            &[
                ("CREATE", "reserved_identifier"),
                ("CUSTOM", "identifier"),
                ("INDEX", "reserved_identifier"),
                ("idx", "identifier"),
                ("ON", "reserved_identifier"),
                ("ks", "identifier"),
                (".", "op"),
                ("tab", "identifier"),
                ("(", "op"),
                ("i", "identifier"),
                (")", "op"),
                (";", "endtoken"),
            ],
        );
        check(
            "CREATE INDEX idx ON ks.tab (i) WITH OPTIONS = \
             {'storage': '/mnt/ssd/indexes/'};",
            &[
                ("CREATE", "reserved_identifier"),
                ("INDEX", "reserved_identifier"),
                ("idx", "identifier"),
                ("ON", "reserved_identifier"),
                ("ks", "identifier"),
                (".", "op"),
                ("tab", "identifier"),
                ("(", "op"),
                ("i", "identifier"),
                (")", "op"),
                ("WITH", "reserved_identifier"),
                ("OPTIONS", "identifier"),
                ("=", "op"),
                ("{", "brackets"),
                ("'storage'", "quotedStringLiteral"),
                (":", "colon"),
                ("'/mnt/ssd/indexes/'", "quotedStringLiteral"),
                ("}", "brackets"),
                (";", "endtoken"),
            ],
        );
    }
}
