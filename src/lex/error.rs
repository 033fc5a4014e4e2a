use std::{fmt, io};

use ecow::EcoString;

use super::location::Location;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexicalError {
    pub error: Type,
    pub line: u32,
    pub location: Location,
}

impl LexicalError {
    #[must_use]
    pub fn get_description(&self) -> String {
        match &self.error {
            Type::UnrecognizedText { text } => format!("unrecognized text '{text}'"),
            Type::Read { kind } => format!("failed to read input: {kind}"),
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Type::UnrecognizedText { text } => {
                write!(formatter, "Lexical error at line {}: '{text}'", self.line)
            }
            Type::Read { kind } => write!(formatter, "Read error at line {}: {kind}", self.line),
        }
    }
}

impl std::error::Error for LexicalError {}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Type {
    /// Non-whitespace text between two tokens, trimmed.
    UnrecognizedText { text: EcoString },
    Read { kind: io::ErrorKind },
}
