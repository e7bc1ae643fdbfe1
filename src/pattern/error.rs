// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid character {ch:?} at position {position} in pattern \"{pattern}\"")]
    InvalidCharacter {
        pattern: String,
        position: usize,
        ch: char,
    },
    #[error("Dangling hex digit at end of pattern \"{0}\"")]
    DanglingNibble(String),
    #[error("Pattern \"{0}\" is empty")]
    EmptyPattern(String),
    #[error("Character {ch:?} in narrow string \"{text}\" does not fit in one byte")]
    NarrowOutOfRange { text: String, ch: char },
    #[error("String value is empty")]
    EmptyString,
}

impl PatternError {
    /// Errors raised by the string encodings are argument mistakes rather
    /// than hex syntax mistakes.
    pub fn is_string_error(&self) -> bool {
        matches!(self, Self::NarrowOutOfRange { .. } | Self::EmptyString)
    }
}
