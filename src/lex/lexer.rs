use std::io::{self, BufRead};

use ecow::EcoString;

use crate::lex::error::{LexicalError, Type};
use crate::lex::token::{Token, TokenKind};

use super::lines::Lines;
use super::location::Location;
use super::pattern;

pub type LineResult = io::Result<String>;

pub type LexResult = Result<Token, LexicalError>;

/// Lexes an in-memory document.
pub fn lex(input: &str) -> Lexer<impl Iterator<Item = LineResult> + '_> {
    Lexer::new(Lines::new(input).map(|line| Ok(line.to_owned())))
}

/// Lexes lines read on demand from `reader`.
pub fn lex_reader<R: BufRead>(reader: R) -> Lexer<io::Lines<R>> {
    Lexer::new(reader.lines())
}

/// Pull-based lexer over a source of lines.
///
/// The lexer owns its line source and reads a new line only once the
/// current one holds nothing but whitespace. It is consumed exactly once:
/// after the source is exhausted every call to [`Lexer::next_token`]
/// returns an `Eof` token.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = LineResult>> {
    input_lines: T,
    current_line: String,
    current_offset: usize,
    line_number: u32,
    line_pending: bool,
    exhausted: bool,
}

/// Every token and error span of one line, in line order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineScan {
    pub line: u32,
    pub results: Vec<LexResult>,
}

impl LineScan {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(Result::is_err)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.results.iter().filter_map(|result| result.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &LexicalError> {
        self.results.iter().filter_map(|result| result.as_ref().err())
    }
}

impl<T> Lexer<T>
where
    T: Iterator<Item = LineResult>,
{
    pub fn new(input: T) -> Self {
        Lexer {
            input_lines: input,
            current_line: String::new(),
            current_offset: 0,
            line_number: 0,
            line_pending: false,
            exhausted: false,
        }
    }

    /// Returns the next token of the stream.
    ///
    /// # Errors
    ///
    /// Returns `LexicalError` for non-whitespace text that matches no token
    /// pattern, or when the line source fails. The offending span is skipped,
    /// so a later call resumes after it.
    pub fn next_token(&mut self) -> LexResult {
        loop {
            if self.line_pending {
                if let Some(result) = self.consume() {
                    return result;
                }
                self.line_pending = false;
            }

            if self.exhausted || !self.advance_line()? {
                return Ok(self.end_of_file());
            }
        }
    }

    /// Scans what is left of the current line, or the next line from the
    /// source, in one go. Returns `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Only fails when the line source fails; unmatched text is reported
    /// inside the returned `LineScan`.
    pub fn scan_line(&mut self) -> Result<Option<LineScan>, LexicalError> {
        if !self.line_pending && (self.exhausted || !self.advance_line()?) {
            return Ok(None);
        }

        let mut results = vec![];
        while let Some(result) = self.consume() {
            results.push(result);
        }
        self.line_pending = false;

        Ok(Some(LineScan {
            line: self.line_number,
            results,
        }))
    }

    fn advance_line(&mut self) -> Result<bool, LexicalError> {
        match self.input_lines.next() {
            Some(Ok(line)) => {
                self.current_line = line;
                self.current_offset = 0;
                self.line_number += 1;
                self.line_pending = true;

                Ok(true)
            }
            Some(Err(error)) => {
                self.exhausted = true;

                Err(LexicalError {
                    error: Type::Read { kind: error.kind() },
                    line: self.line_number + 1,
                    location: Location::default(),
                })
            }
            None => {
                self.exhausted = true;

                Ok(false)
            }
        }
    }

    /// Consumes one token or one error span of the current line, `None` when
    /// only whitespace is left.
    fn consume(&mut self) -> Option<LexResult> {
        let gap_start = self.current_offset;
        let found = pattern::find(&self.current_line, gap_start);
        let gap_end = found.map_or(self.current_line.len(), |found| found.start);

        let gap = &self.current_line[gap_start..gap_end];
        let text = gap.trim_matches(is_blank);
        if !text.is_empty() {
            let start = gap_start + (gap.len() - gap.trim_start_matches(is_blank).len());
            let error = LexicalError {
                error: Type::UnrecognizedText { text: text.into() },
                line: self.line_number,
                location: Location::new(start, start + text.len()),
            };
            self.current_offset = gap_end;

            return Some(Err(error));
        }

        let found = found?;
        self.current_offset = found.end;

        Some(Ok(Token {
            kind: found.kind,
            lexeme: EcoString::from(&self.current_line[found.start..found.end]),
            line: self.line_number,
            location: Location::new(found.start, found.end),
        }))
    }

    fn end_of_file(&self) -> Token {
        let end = self.current_line.len();

        Token {
            kind: TokenKind::Eof,
            lexeme: EcoString::new(),
            line: self.line_number,
            location: Location::new(end, end),
        }
    }
}

/// Space and every control character below it separate tokens; anything
/// else, including Unicode spaces such as U+00A0, is unmatched text.
fn is_blank(ch: char) -> bool {
    ch <= ' '
}

impl<T> Iterator for Lexer<T>
where
    T: Iterator<Item = LineResult>,
{
    type Item = LexResult;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            result => Some(result),
        }
    }
}
