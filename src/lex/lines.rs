/// Splits text into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators. A trailing terminator does not start an extra empty line.
#[derive(Debug)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a str) -> Self {
        Lines { rest: input }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        const CARRIAGE_RETURN: char = '\r';
        const LINE_FEED: char = '\n';

        if self.rest.is_empty() {
            return None;
        }

        let Some(terminator) = self
            .rest
            .find(|ch| ch == CARRIAGE_RETURN || ch == LINE_FEED)
        else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..terminator];
        let skip = if self.rest[terminator..].starts_with("\r\n") {
            2
        } else {
            1
        };
        self.rest = &self.rest[terminator + skip..];

        Some(line)
    }
}
