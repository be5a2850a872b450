//! Default shell-command grammar
//!
//! Productions for the commands the shell handles locally. Anything that
//! matches none of them is plain CQL and comes back as the passthrough
//! outcome for the query engine.

use crate::tokens::TokenKind;

use super::expr::{choice, kind, lit, opt, repeat, rule, seq, GrammarExpr};
use super::registry::RuleSet;

/// Start rule name for the shell grammar.
pub const SHELL_START_RULE: &str = "shellCommand";

/// Builds the rule set for shell-local commands.
pub fn default_shell_grammar() -> RuleSet {
    let mut rules = RuleSet::new(SHELL_START_RULE);

    rules.define(
        SHELL_START_RULE,
        seq([
            choice([
                rule("showCommand"),
                rule("helpCommand"),
                rule("exitCommand"),
                rule("consistencyCommand"),
                rule("tracingCommand"),
                rule("pagingCommand"),
                rule("expandCommand"),
                rule("sourceCommand"),
                rule("captureCommand"),
                rule("describeCommand"),
                rule("clearCommand"),
            ]),
            opt(kind(TokenKind::Endtoken)),
        ]),
    );

    rules.define(
        "showCommand",
        seq([
            lit("SHOW"),
            choice([
                lit("VERSION"),
                lit("HOST"),
                seq([lit("SESSION"), kind(TokenKind::Uuid)]),
            ]),
        ]),
    );

    // HELP with optional topic words; bare `?` is the short form.
    rules.define(
        "helpCommand",
        seq([
            choice([lit("HELP"), lit("?")]),
            repeat(choice([
                kind(TokenKind::Identifier),
                kind(TokenKind::ReservedIdentifier),
            ])),
        ]),
    );

    rules.define("exitCommand", choice([lit("EXIT"), lit("QUIT")]));

    rules.define(
        "consistencyCommand",
        seq([lit("CONSISTENCY"), opt(kind(TokenKind::Identifier))]),
    );

    rules.define("tracingCommand", seq([lit("TRACING"), on_off()]));
    rules.define("expandCommand", seq([lit("EXPAND"), on_off()]));

    rules.define(
        "pagingCommand",
        seq([
            lit("PAGING"),
            opt(choice([
                lit("ON"),
                lit("OFF"),
                kind(TokenKind::Wholenumber),
            ])),
        ]),
    );

    rules.define(
        "sourceCommand",
        seq([lit("SOURCE"), kind(TokenKind::QuotedStringLiteral)]),
    );

    rules.define(
        "captureCommand",
        seq([
            lit("CAPTURE"),
            opt(choice([lit("OFF"), kind(TokenKind::QuotedStringLiteral)])),
        ]),
    );

    // DESC/DESCRIBE takes a free-form target: keywords, names, dotted paths.
    rules.define(
        "describeCommand",
        seq([
            choice([lit("DESC"), lit("DESCRIBE")]),
            repeat(choice([
                kind(TokenKind::Identifier),
                kind(TokenKind::ReservedIdentifier),
                kind(TokenKind::QuotedName),
                kind(TokenKind::Op),
            ])),
        ]),
    );

    rules.define("clearCommand", choice([lit("CLEAR"), lit("CLS")]));

    rules
}

fn on_off() -> GrammarExpr {
    opt(choice([lit("ON"), lit("OFF")]))
}
