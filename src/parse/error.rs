use std::fmt;

use ecow::EcoString;

use crate::lex::{error::LexicalError, location::Location, token::TokenKind};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParsingError {
    pub error: Type,
    pub line: u32,
    pub location: Location,
}

impl ParsingError {
    #[must_use]
    pub fn get_description(&self) -> String {
        match &self.error {
            Type::LexicalError { error } => format!("lexical error: {}", error.get_description()),
            Type::UnexpectedToken { token } => format!("Unexpected token: {token}"),
            Type::ExpectedKey { token } => format!("Expected key as string, found: {token}"),
            Type::ExpectedColon { token } => format!("Expected ':' after key, found: {token}"),
            Type::ExpectedDelimiter { token, container } => format!(
                "Expected ',' or '{}' in {container}, found: {token}",
                container.closing_symbol()
            ),
            Type::ExtraData { token } => format!("Extra data after JSON value, found: {token}"),
            Type::UnexpectedEof { expected } => {
                format!("Unexpected end of input, expected {expected}")
            }
            Type::NestingTooDeep { limit } => {
                format!("Nesting deeper than {limit} levels")
            }
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Type::LexicalError { error } => write!(formatter, "{error}"),
            _ => write!(
                formatter,
                "Syntax error at line {}: {}",
                self.line,
                self.get_description()
            ),
        }
    }
}

impl std::error::Error for ParsingError {}

impl From<LexicalError> for ParsingError {
    fn from(error: LexicalError) -> Self {
        ParsingError {
            line: error.line,
            location: error.location,
            error: Type::LexicalError { error },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Type {
    LexicalError { error: LexicalError },
    UnexpectedToken { token: TokenKind },
    ExpectedKey { token: TokenKind },
    ExpectedColon { token: TokenKind },
    ExpectedDelimiter { token: TokenKind, container: Container },
    ExtraData { token: TokenKind },
    UnexpectedEof { expected: EcoString },
    NestingTooDeep { limit: u32 },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Container {
    Object,
    Array,
}

impl Container {
    #[must_use]
    pub fn closer(self) -> TokenKind {
        match self {
            Container::Object => TokenKind::RightBrace,
            Container::Array => TokenKind::RightBracket,
        }
    }

    #[must_use]
    pub fn closing_symbol(self) -> char {
        match self {
            Container::Object => '}',
            Container::Array => ']',
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Object => write!(formatter, "object"),
            Container::Array => write!(formatter, "array"),
        }
    }
}
