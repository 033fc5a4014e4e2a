pub mod diagnostic;
pub mod error;
pub mod lex;
pub mod parse;

use camino::Utf8PathBuf;

use crate::error::Error;

/// Parses `src`, attaching `path` and the source text to any error so it can
/// be rendered as a diagnostic.
///
/// # Errors
///
/// Returns the first lexical or syntax error of the document.
pub fn check(path: impl Into<Utf8PathBuf>, src: &str) -> Result<(), Error> {
    parse::parse_document(src).map_err(|error| Error::parsing(src, path, error))
}
