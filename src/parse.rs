pub mod error;
pub mod limits;

#[cfg(test)]
mod tests;

use std::io::BufRead;

use ecow::{eco_format, EcoString};
use error::{Container, ParsingError, Type};
use limits::Limits;

use crate::lex::{
    lexer::{self, Lexer, LineResult},
    token::{Token, TokenKind},
};

/// Checks that `input` holds exactly one JSON value.
///
/// # Errors
///
/// Returns the first lexical or syntax error of the document.
pub fn parse_document(input: &str) -> Result<(), ParsingError> {
    Parser::new(lexer::lex(input))?.parse()
}

/// Same as [`parse_document`], reading lines from `reader` as they are needed.
///
/// # Errors
///
/// Returns the first lexical or syntax error of the document, or the read
/// failure of `reader` as a lexical error.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<(), ParsingError> {
    Parser::new(lexer::lex_reader(reader))?.parse()
}

/// LL(1) recursive descent over the token stream of a [`Lexer`].
///
/// Recursion depth follows the nesting depth of the document and is capped
/// by [`Limits::max_nesting_depth`].
pub struct Parser<T: Iterator<Item = LineResult>> {
    lexer: Lexer<T>,
    current_token: Token,
    limits: Limits,
    depth: u32,
}

impl<T: Iterator<Item = LineResult>> Parser<T> {
    /// Creates a parser with default limits and pulls the first token.
    ///
    /// # Errors
    ///
    /// Fails when the first token cannot be lexed.
    pub fn new(lexer: Lexer<T>) -> Result<Self, ParsingError> {
        Self::with_limits(lexer, Limits::default())
    }

    /// # Errors
    ///
    /// Fails when the first token cannot be lexed.
    pub fn with_limits(mut lexer: Lexer<T>, limits: Limits) -> Result<Self, ParsingError> {
        let current_token = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current_token,
            limits,
            depth: 0,
        })
    }

    /// Parses a single value followed by the end of input.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation, or the first lexical error met
    /// while pulling tokens. Parsing never continues past an error.
    pub fn parse(mut self) -> Result<(), ParsingError> {
        self.parse_value()?;

        match self.current_token.kind {
            TokenKind::Eof => Ok(()),
            token => Err(self.error_at_current(Type::ExtraData { token })),
        }
    }

    fn parse_value(&mut self) -> Result<(), ParsingError> {
        match self.current_token.kind {
            TokenKind::LeftBrace => self.parse_series(Container::Object, &Self::parse_member),
            TokenKind::LeftBracket => self.parse_series(Container::Array, &Self::parse_value),
            kind if kind.is_literal() => {
                let _ = self.advance_token()?;
                Ok(())
            }
            TokenKind::Eof => Err(self.unexpected_eof("value".into())),
            token => Err(self.error_at_current(Type::UnexpectedToken { token })),
        }
    }

    fn parse_member(&mut self) -> Result<(), ParsingError> {
        let _ = self.expect_token(
            TokenKind::StringLiteral,
            |token| Type::ExpectedKey { token },
            "key as string",
        )?;
        let _ = self.expect_token(
            TokenKind::Colon,
            |token| Type::ExpectedColon { token },
            "':' after key",
        )?;

        self.parse_value()
    }

    /// Parses an object or an array, the current token being its opener:
    /// either the closer right away, or items separated by commas and then
    /// the closer.
    fn parse_series(
        &mut self,
        container: Container,
        parser: &impl Fn(&mut Self) -> Result<(), ParsingError>,
    ) -> Result<(), ParsingError> {
        self.enter_nested()?;
        let _ = self.advance_token()?;

        let closer = container.closer();
        if self.maybe_token(closer)?.is_none() {
            loop {
                parser(self)?;

                if self.maybe_token(TokenKind::Comma)?.is_none() {
                    let _ = self.expect_token(
                        closer,
                        |token| Type::ExpectedDelimiter { token, container },
                        &eco_format!("',' or '{}'", container.closing_symbol()),
                    )?;
                    break;
                }
            }
        }

        self.depth -= 1;

        Ok(())
    }

    fn enter_nested(&mut self) -> Result<(), ParsingError> {
        if self.depth >= self.limits.max_nesting_depth {
            return Err(self.error_at_current(Type::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            }));
        }

        self.depth += 1;

        Ok(())
    }

    fn expect_token(
        &mut self,
        kind: TokenKind,
        mismatch: impl FnOnce(TokenKind) -> Type,
        expected: &str,
    ) -> Result<Token, ParsingError> {
        match self.maybe_token(kind)? {
            Some(token) => Ok(token),
            None if self.current_token.kind == TokenKind::Eof => {
                Err(self.unexpected_eof(expected.into()))
            }
            None => Err(self.error_at_current(mismatch(self.current_token.kind))),
        }
    }

    fn maybe_token(&mut self, kind: TokenKind) -> Result<Option<Token>, ParsingError> {
        if self.current_token.kind == kind {
            self.advance_token().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Moves to the next token and returns the one just consumed.
    fn advance_token(&mut self) -> Result<Token, ParsingError> {
        let next_token = self.lexer.next_token()?;

        Ok(std::mem::replace(&mut self.current_token, next_token))
    }

    fn unexpected_eof(&self, expected: EcoString) -> ParsingError {
        self.error_at_current(Type::UnexpectedEof { expected })
    }

    fn error_at_current(&self, error: Type) -> ParsingError {
        ParsingError {
            error,
            line: self.current_token.line,
            location: self.current_token.location,
        }
    }
}
