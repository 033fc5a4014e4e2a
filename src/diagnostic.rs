use std::ops::Range;

use camino::Utf8PathBuf;
use codespan_reporting::{
    diagnostic::{Label, LabelStyle, Severity},
    files::{self, Files, SimpleFiles},
    term,
};
use ecow::EcoString;
use termcolor::Buffer;

use crate::lex::location::Location as LineLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub src: EcoString,
    pub path: Utf8PathBuf,
    /// 1-based, as carried by tokens.
    pub line: u32,
    pub location: LineLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub text: String,
}

impl Diagnostic {
    /// # Errors
    ///
    /// Fails when `buffer` cannot be written or the line lies outside of the
    /// source text.
    pub fn write(&self, buffer: &mut Buffer) -> Result<(), files::Error> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(self.location.path.as_str(), self.location.src.as_str());

        let labels = vec![Label {
            style: LabelStyle::Primary,
            file_id,
            range: self.byte_range(&files, file_id)?,
            message: self.text.clone(),
        }];

        let diagnostic = codespan_reporting::diagnostic::Diagnostic::new(Severity::Error)
            .with_labels(labels)
            .with_message(&self.text);
        let config = term::Config::default();

        term::emit(buffer, &config, &files, &diagnostic)
    }

    // Turns the line-relative span into a span of the whole source, clamped
    // to the line.
    fn byte_range(
        &self,
        files: &SimpleFiles<&str, &str>,
        file_id: usize,
    ) -> Result<Range<usize>, files::Error> {
        let line_index = self.location.line.saturating_sub(1) as usize;
        let line_range = files.line_range(file_id, line_index)?;

        let start = (line_range.start + self.location.location.start).min(line_range.end);
        let end = (line_range.start + self.location.location.end)
            .min(line_range.end)
            .max(start);

        Ok(start..end)
    }
}
