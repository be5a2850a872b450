//! Priority-ordered token rule table
//!
//! Each rule is a pure function inspecting the head of the remaining input
//! and returning the matched byte length. The lexer tries rules strictly in
//! table order at every scan position; first match wins, which is what makes
//! the unclosed-literal fallbacks and the trailing catch-all safe.

use crate::tokens::TokenKind;

/// Matcher signature: byte length of the match at the head of `rest`, if any.
/// Returned lengths are always char-boundary aligned.
pub type MatchFn = fn(rest: &str) -> Option<usize>;

/// The rule table, highest priority first. The catch-all last entry matches
/// any single character, so the table as a whole can never fail to match
/// non-empty input.
pub const RULES: &[(TokenKind, MatchFn)] = &[
    (TokenKind::Whitespace, match_whitespace),
    (TokenKind::Comment, match_line_comment),
    (TokenKind::Comment, match_block_comment),
    (TokenKind::UnclosedComment, match_unclosed_comment),
    (TokenKind::QuotedStringLiteral, match_string),
    (TokenKind::UnclosedString, match_unclosed_string),
    (TokenKind::PgStringLiteral, match_pg_string),
    (TokenKind::UnclosedPgString, match_unclosed_pg_string),
    (TokenKind::QuotedName, match_quoted_name),
    (TokenKind::UnclosedName, match_unclosed_name),
    (TokenKind::Uuid, match_uuid),
    (TokenKind::Blob, match_blob),
    (TokenKind::Float, match_float),
    (TokenKind::Wholenumber, match_wholenumber),
    (TokenKind::Identifier, match_identifier),
    (TokenKind::Endtoken, match_endtoken),
    (TokenKind::Colon, match_colon),
    (TokenKind::Star, match_star),
    (TokenKind::Qmark, match_qmark),
    (TokenKind::Brackets, match_brackets),
    (TokenKind::Cmp, match_cmp),
    (TokenKind::Op, match_op),
    (TokenKind::Unknown, match_any_char),
];

fn match_whitespace(rest: &str) -> Option<usize> {
    let len = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    (len > 0).then_some(len)
}

/// `--` or `//` to end of line; the newline itself stays in the input and
/// lexes as whitespace.
fn match_line_comment(rest: &str) -> Option<usize> {
    if !(rest.starts_with("--") || rest.starts_with("//")) {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}

/// Non-nesting `/* ... */`.
fn match_block_comment(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix("/*")?;
    let close = body.find("*/")?;
    Some(2 + close + 2)
}

fn match_unclosed_comment(rest: &str) -> Option<usize> {
    rest.starts_with("/*").then_some(rest.len())
}

/// `'...'` with `''` as the escaped quote; may span lines.
fn match_string(rest: &str) -> Option<usize> {
    delimited_with_doubling(rest, '\'')
}

fn match_unclosed_string(rest: &str) -> Option<usize> {
    rest.starts_with('\'').then_some(rest.len())
}

/// `$$...$$`, taken verbatim with no escape sequences.
fn match_pg_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix("$$")?;
    let close = body.find("$$")?;
    Some(2 + close + 2)
}

fn match_unclosed_pg_string(rest: &str) -> Option<usize> {
    rest.starts_with("$$").then_some(rest.len())
}

/// `"..."` with `""` as the escaped quote.
fn match_quoted_name(rest: &str) -> Option<usize> {
    delimited_with_doubling(rest, '"')
}

fn match_unclosed_name(rest: &str) -> Option<usize> {
    rest.starts_with('"').then_some(rest.len())
}

/// Shared scanner for quote characters escaped by doubling. Returns the
/// full length including both delimiters, or None when the close is missing.
fn delimited_with_doubling(rest: &str, quote: char) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == quote => {}
        _ => return None,
    }
    while let Some((i, c)) = chars.next() {
        if c == quote {
            // A doubled quote is an escaped quote, not a close.
            if rest[i + quote.len_utf8()..].starts_with(quote) {
                chars.next();
                continue;
            }
            return Some(i + quote.len_utf8());
        }
    }
    None
}

/// Canonical 8-4-4-4-12 hex UUID, case-insensitive.
fn match_uuid(rest: &str) -> Option<usize> {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let bytes = rest.as_bytes();
    let mut pos = 0;
    for (gi, &width) in GROUPS.iter().enumerate() {
        if gi > 0 {
            if bytes.get(pos) != Some(&b'-') {
                return None;
            }
            pos += 1;
        }
        for _ in 0..width {
            if !bytes.get(pos).is_some_and(u8::is_ascii_hexdigit) {
                return None;
            }
            pos += 1;
        }
    }
    Some(pos)
}

/// `0x` followed by a hex run.
fn match_blob(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    let digits = body
        .bytes()
        .take_while(u8::is_ascii_hexdigit)
        .count();
    (digits > 0).then_some(2 + digits)
}

/// Optional minus, digits, dot, digits.
fn match_float(rest: &str) -> Option<usize> {
    let signed = rest.strip_prefix('-');
    let body = signed.unwrap_or(rest);
    let sign_len = rest.len() - body.len();
    let int_len = leading_digits(body);
    if int_len == 0 || !body[int_len..].starts_with('.') {
        return None;
    }
    let frac_len = leading_digits(&body[int_len + 1..]);
    (frac_len > 0).then_some(sign_len + int_len + 1 + frac_len)
}

fn match_wholenumber(rest: &str) -> Option<usize> {
    let len = leading_digits(rest);
    (len > 0).then_some(len)
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// `[A-Za-z_][A-Za-z0-9_]*`. Reserved-word classification happens in the
/// lexer after the match, so the table stays purely positional.
fn match_identifier(rest: &str) -> Option<usize> {
    let mut bytes = rest.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return None,
    }
    let tail = rest[1..]
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    Some(1 + tail)
}

fn match_endtoken(rest: &str) -> Option<usize> {
    rest.starts_with(';').then_some(1)
}

fn match_colon(rest: &str) -> Option<usize> {
    rest.starts_with(':').then_some(1)
}

fn match_star(rest: &str) -> Option<usize> {
    rest.starts_with('*').then_some(1)
}

fn match_qmark(rest: &str) -> Option<usize> {
    rest.starts_with('?').then_some(1)
}

fn match_brackets(rest: &str) -> Option<usize> {
    matches!(rest.as_bytes().first(), Some(b'[' | b']' | b'{' | b'}')).then_some(1)
}

/// `<`, `>`, `!`, optionally followed by `=`.
fn match_cmp(rest: &str) -> Option<usize> {
    match rest.as_bytes().first() {
        Some(b'<' | b'>' | b'!') => {
            if rest.as_bytes().get(1) == Some(&b'=') {
                Some(2)
            } else {
                Some(1)
            }
        }
        _ => None,
    }
}

fn match_op(rest: &str) -> Option<usize> {
    matches!(
        rest.as_bytes().first(),
        Some(b'-' | b'+' | b'=' | b'%' | b'/' | b',' | b'(' | b')' | b'.')
    )
    .then_some(1)
}

/// Catch-all so the table never fails on non-empty input.
fn match_any_char(rest: &str) -> Option<usize> {
    rest.chars().next().map(char::len_utf8)
}
