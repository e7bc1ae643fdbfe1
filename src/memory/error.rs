// Thu Oct 15 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Failed opening file {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed reading file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Short read on {}: expected {} bytes, got {}", .path.display(), .expected, .actual)]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

impl MemoryError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } | Self::ShortRead { path, .. } => path,
        }
    }
}
