// Thu Oct 15 2026 - Alex

use crate::memory::MemoryError;
use crate::pattern::PatternError;
use thiserror::Error;

pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FILE: i32 = 2;

#[derive(Error, Debug)]
pub enum SiggrepError {
    #[error("{0}")]
    Argument(String),
    #[error("{0}")]
    PatternSyntax(PatternError),
    #[error(transparent)]
    FileIo(#[from] MemoryError),
    #[error("Failed writing results: {0}")]
    Output(#[source] std::io::Error),
}

impl SiggrepError {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(_) | Self::PatternSyntax(_) => EXIT_USAGE,
            Self::FileIo(_) | Self::Output(_) => EXIT_FILE,
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}

impl From<PatternError> for SiggrepError {
    fn from(error: PatternError) -> Self {
        if error.is_string_error() {
            Self::Argument(error.to_string())
        } else {
            Self::PatternSyntax(error)
        }
    }
}

pub type Result<T> = std::result::Result<T, SiggrepError>;
