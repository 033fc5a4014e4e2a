use ecow::EcoString;
use strum::{Display, EnumIter};

use super::location::Location;

/// Token classes recognized by the lexer.
///
/// The serialized names are the ones written by the batch tokenizer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter)]
pub enum TokenKind {
    #[strum(serialize = "L_LLAVE")]
    LeftBrace, // '{'
    #[strum(serialize = "R_LLAVE")]
    RightBrace, // '}'
    #[strum(serialize = "L_CORCHETE")]
    LeftBracket, // '['
    #[strum(serialize = "R_CORCHETE")]
    RightBracket, // ']'
    #[strum(serialize = "COMA")]
    Comma, // ','
    #[strum(serialize = "DOS_PUNTOS")]
    Colon, // ':'
    #[strum(serialize = "LITERAL_CADENA")]
    StringLiteral,
    #[strum(serialize = "LITERAL_NUM")]
    NumberLiteral,
    #[strum(serialize = "PR_TRUE")]
    True,
    #[strum(serialize = "PR_FALSE")]
    False,
    #[strum(serialize = "PR_NULL")]
    Null,
    #[strum(serialize = "EOF")]
    Eof,
    // Never handed to the parser, unmatched text is a `LexicalError`.
    #[strum(serialize = "ERROR_LEXICO")]
    Invalid,
}

impl TokenKind {
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral | Self::NumberLiteral | Self::True | Self::False | Self::Null
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: EcoString,
    /// 1-based line number, `0` only for the end of an empty input.
    pub line: u32,
    /// Byte span of the lexeme within its line.
    pub location: Location,
}
