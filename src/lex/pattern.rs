//! Fixed table of token patterns.
//!
//! Patterns are tried in table order at every position of a left to right
//! scan, the first one accepting at the leftmost position wins. No two
//! patterns accept the same first character, so this is also the longest
//! match.

use super::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Char(char),
    /// Everything up to the first closing quote on the line. Escapes are
    /// not recognized, `"a\"b"` ends right after the backslash.
    String,
    /// `digits ('.' digits)? ([eE] [+-]? digits)?`, without a sign.
    Number,
    /// Either the lowercase or the uppercase spelling.
    Keyword { lower: &'static str, upper: &'static str },
}

pub const PATTERNS: [(TokenKind, Pattern); 11] = [
    (TokenKind::LeftBracket, Pattern::Char('[')),
    (TokenKind::RightBracket, Pattern::Char(']')),
    (TokenKind::LeftBrace, Pattern::Char('{')),
    (TokenKind::RightBrace, Pattern::Char('}')),
    (TokenKind::Comma, Pattern::Char(',')),
    (TokenKind::Colon, Pattern::Char(':')),
    (TokenKind::StringLiteral, Pattern::String),
    (TokenKind::NumberLiteral, Pattern::Number),
    (
        TokenKind::True,
        Pattern::Keyword {
            lower: "true",
            upper: "TRUE",
        },
    ),
    (
        TokenKind::False,
        Pattern::Keyword {
            lower: "false",
            upper: "FALSE",
        },
    ),
    (
        TokenKind::Null,
        Pattern::Keyword {
            lower: "null",
            upper: "NULL",
        },
    ),
];

impl Pattern {
    /// Length in bytes of the match at the start of `text`.
    #[must_use]
    pub fn match_len(self, text: &str) -> Option<usize> {
        match self {
            Pattern::Char(expected) => text.starts_with(expected).then_some(expected.len_utf8()),
            Pattern::String => {
                let closing = text.strip_prefix('"')?.find('"')?;
                Some(closing + 2)
            }
            Pattern::Number => number_len(text.as_bytes()),
            Pattern::Keyword { lower, upper } => {
                (text.starts_with(lower) || text.starts_with(upper)).then_some(lower.len())
            }
        }
    }
}

fn number_len(bytes: &[u8]) -> Option<usize> {
    let mut len = digits_len(bytes);
    if len == 0 {
        return None;
    }

    if bytes.get(len) == Some(&b'.') {
        let fraction = digits_len(&bytes[len + 1..]);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exponent = len + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }

        let digits = digits_len(&bytes[exponent..]);
        if digits > 0 {
            len = exponent + digits;
        }
    }

    Some(len)
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Token matching at the very start of `text`, if any.
#[must_use]
pub fn match_at(text: &str) -> Option<(TokenKind, usize)> {
    PATTERNS
        .iter()
        .find_map(|&(kind, pattern)| pattern.match_len(text).map(|len| (kind, len)))
}

/// Leftmost token match in `line` at or after byte offset `from`.
#[must_use]
pub fn find(line: &str, from: usize) -> Option<PatternMatch> {
    line[from..].char_indices().find_map(|(index, _)| {
        let start = from + index;
        match_at(&line[start..]).map(|(kind, len)| PatternMatch {
            kind,
            start,
            end: start + len,
        })
    })
}
