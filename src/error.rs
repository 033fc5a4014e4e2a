use std::{fmt, io::Write};

use camino::Utf8PathBuf;
use codespan_reporting::files;
use ecow::EcoString;
use termcolor::Buffer;

use crate::{
    diagnostic::{Diagnostic, Location},
    lex::error::LexicalError,
    parse::error::{self as parse_error, ParsingError},
};

/// A lexical or syntax error together with the source it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lexical {
        src: EcoString,
        path: Utf8PathBuf,
        error: LexicalError,
    },
    Parsing {
        src: EcoString,
        path: Utf8PathBuf,
        error: ParsingError,
    },
}

impl Error {
    pub fn lexical(src: &str, path: impl Into<Utf8PathBuf>, error: LexicalError) -> Self {
        Error::Lexical {
            src: src.into(),
            path: path.into(),
            error,
        }
    }

    /// Lexical errors met by the parser are reported as `Error::Lexical`.
    pub fn parsing(src: &str, path: impl Into<Utf8PathBuf>, error: ParsingError) -> Self {
        match error.error {
            parse_error::Type::LexicalError { error } => Self::lexical(src, path, error),
            _ => Error::Parsing {
                src: src.into(),
                path: path.into(),
                error,
            },
        }
    }

    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();

        match self.pretty(&mut nocolor) {
            Ok(()) => String::from_utf8_lossy(nocolor.as_slice()).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    /// # Errors
    ///
    /// Fails when a diagnostic cannot be rendered into `buffer`.
    pub fn pretty(&self, buffer: &mut Buffer) -> Result<(), files::Error> {
        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buffer)?;
            writeln!(buffer)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lexical { src, path, error } => vec![Diagnostic {
                text: error.get_description(),
                location: Location {
                    src: src.clone(),
                    path: path.clone(),
                    line: error.line,
                    location: error.location,
                },
            }],
            Error::Parsing { src, path, error } => vec![Diagnostic {
                text: error.get_description(),
                location: Location {
                    src: src.clone(),
                    path: path.clone(),
                    line: error.line,
                    location: error.location,
                },
            }],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexical { path, error, .. } => write!(formatter, "{path}: {error}"),
            Error::Parsing { path, error, .. } => write!(formatter, "{path}: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lexical { error, .. } => Some(error),
            Error::Parsing { error, .. } => Some(error),
        }
    }
}
