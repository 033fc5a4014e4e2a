/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of objects and arrays open at the same time.
    pub max_nesting_depth: u32,
}

impl Limits {
    pub const DEFAULT_NESTING_DEPTH: u32 = 128;

    #[must_use]
    pub const fn new(max_nesting_depth: u32) -> Self {
        Self { max_nesting_depth }
    }

    /// No explicit limit; deep enough documents exhaust the call stack.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(u32::MAX)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NESTING_DEPTH)
    }
}
