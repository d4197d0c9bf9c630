use std::fmt;

/// A colour literal that could not be parsed by [`Color::from_hex`](super::Color::from_hex).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    /// The literal as given, including any leading `#`.
    pub input: String,
    pub reason: String,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { input: input.into(), reason: reason.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color literal {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}
