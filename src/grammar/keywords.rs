//! CQL keyword tables
//!
//! Reserved words lex as `reserved_identifier`; everything else a word rule
//! matches is a plain `identifier`, including the unreserved keywords listed
//! here for completeness (type names, SELECT modifiers, and so on). Lookups
//! are case-insensitive.

use crate::tokens::TokenKind;

/// Words the grammar reserves; these can never be used as bare names.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "add",
    "allow",
    "alter",
    "and",
    "apply",
    "asc",
    "authorize",
    "batch",
    "begin",
    "by",
    "columnfamily",
    "create",
    "delete",
    "desc",
    "describe",
    "drop",
    "entries",
    "execute",
    "from",
    "full",
    "grant",
    "if",
    "in",
    "index",
    "infinity",
    "insert",
    "into",
    "is",
    "keyspace",
    "limit",
    "materialized",
    "mbean",
    "mbeans",
    "modify",
    "nan",
    "norecursive",
    "not",
    "null",
    "of",
    "on",
    "or",
    "order",
    "primary",
    "rename",
    "replace",
    "revoke",
    "schema",
    "select",
    "set",
    "table",
    "to",
    "token",
    "truncate",
    "unlogged",
    "unset",
    "update",
    "use",
    "using",
    "view",
    "where",
    "with",
];

/// Keywords the grammar treats as ordinary identifiers.
pub const UNRESERVED_KEYWORDS: &[&str] = &[
    "aggregate",
    "all",
    "as",
    "ascii",
    "bigint",
    "blob",
    "boolean",
    "called",
    "cast",
    "clustering",
    "compact",
    "contains",
    "count",
    "counter",
    "custom",
    "date",
    "decimal",
    "distinct",
    "double",
    "duration",
    "durable_writes",
    "exists",
    "filtering",
    "finalfunc",
    "float",
    "frozen",
    "function",
    "functions",
    "group",
    "inet",
    "initcond",
    "input",
    "int",
    "json",
    "key",
    "keys",
    "keyspaces",
    "language",
    "list",
    "login",
    "map",
    "nologin",
    "nosuperuser",
    "options",
    "password",
    "per",
    "partition",
    "permission",
    "permissions",
    "replication",
    "returns",
    "role",
    "roles",
    "sfunc",
    "smallint",
    "static",
    "storage",
    "stype",
    "superuser",
    "text",
    "time",
    "timestamp",
    "timeuuid",
    "tinyint",
    "trigger",
    "ttl",
    "tuple",
    "type",
    "user",
    "users",
    "uuid",
    "values",
    "varchar",
    "varint",
    "writetime",
];

/// Reserved-word membership test, case-insensitive.
pub fn is_reserved_keyword(word: &str) -> bool {
    let lowered = word.to_ascii_lowercase();
    RESERVED_KEYWORDS.binary_search(&lowered.as_str()).is_ok()
}

/// Kind for a word the identifier rule matched.
pub fn classify_word(word: &str) -> TokenKind {
    if is_reserved_keyword(word) {
        TokenKind::ReservedIdentifier
    } else {
        TokenKind::Identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_table_is_sorted() {
        let mut sorted = RESERVED_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_KEYWORDS);
    }

    #[test]
    fn test_reserved_lookup_is_case_insensitive() {
        assert!(is_reserved_keyword("select"));
        assert!(is_reserved_keyword("SELECT"));
        assert!(is_reserved_keyword("SeLeCt"));
        assert!(is_reserved_keyword("materialized"));
    }

    #[test]
    fn test_unreserved_words_classify_as_identifiers() {
        for word in ["filtering", "values", "exists", "ttl", "timestamp", "custom"] {
            assert_eq!(classify_word(word), TokenKind::Identifier, "{word}");
        }
    }

    #[test]
    fn test_reserved_words_classify_as_reserved() {
        for word in ["insert", "INTO", "primary", "token", "describe"] {
            assert_eq!(classify_word(word), TokenKind::ReservedIdentifier, "{word}");
        }
    }
}
