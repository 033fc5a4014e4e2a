/// Byte span inside a single line, `end` exclusive.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

impl Location {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
