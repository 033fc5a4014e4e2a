//! Whole-input tokenizing, one output record per line.

use std::fmt;

use itertools::Itertools;

use super::error::LexicalError;
use super::lexer::{Lexer, LineResult};
use super::token::TokenKind;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Record {
    /// Kinds of an error-free line, possibly none.
    Tokens { line: u32, kinds: Vec<TokenKind> },
    LexicalError(LexicalError),
    EndOfFile,
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Tokens { kinds, .. } => write!(formatter, "{}", kinds.iter().join(" ")),
            Record::LexicalError(error) => write!(formatter, "{error}"),
            Record::EndOfFile => write!(formatter, "{}", TokenKind::Eof),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Report {
    records: Vec<Record>,
}

impl Report {
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.records
            .iter()
            .any(|record| matches!(record, Record::LexicalError(_)))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(formatter, "{record}")?;
        }

        Ok(())
    }
}

/// Tokenizes every remaining line of `lexer`.
///
/// A line with lexical errors contributes one record per error span and no
/// token record; other lines are unaffected. A failing line source ends the
/// report with its read error, keeping the records of the lines before it.
#[must_use]
pub fn tokenize<T>(mut lexer: Lexer<T>) -> Report
where
    T: Iterator<Item = LineResult>,
{
    let mut records = vec![];

    loop {
        let scan = match lexer.scan_line() {
            Ok(Some(scan)) => scan,
            Ok(None) => break,
            Err(error) => {
                records.push(Record::LexicalError(error));
                break;
            }
        };

        if scan.has_errors() {
            records.extend(scan.errors().cloned().map(Record::LexicalError));
        } else {
            records.push(Record::Tokens {
                line: scan.line,
                kinds: scan.tokens().map(|token| token.kind).collect(),
            });
        }
    }

    records.push(Record::EndOfFile);

    Report { records }
}
