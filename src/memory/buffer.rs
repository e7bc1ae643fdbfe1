// Thu Oct 15 2026 - Alex

use crate::memory::MemoryError;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};

enum Storage {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

/// The whole contents of a target file, held in memory for scanning.
pub struct FileBuffer {
    path: PathBuf,
    storage: Storage,
}

impl FileBuffer {
    /// Loads `path` completely. Files of at least `mmap_threshold` bytes are
    /// memory-mapped instead of copied; a threshold of 0 never maps.
    pub fn load<P: AsRef<Path>>(path: P, mmap_threshold: u64) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::open(&path).map_err(|source| MemoryError::Open {
            path: path.clone(),
            source,
        })?;
        let expected = file.metadata()
            .map_err(|source| MemoryError::Read {
                path: path.clone(),
                source,
            })?
            .len();

        if mmap_threshold > 0 && expected > 0 && expected >= mmap_threshold {
            // SAFETY: the map is read-only and lives no longer than the buffer.
            // Concurrent truncation by another process is outside our control.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|source| MemoryError::Read {
                path: path.clone(),
                source,
            })?;
            log::debug!("Mapped {} ({} bytes)", path.display(), mmap.len());
            return Ok(Self {
                path,
                storage: Storage::Mapped(mmap),
            });
        }

        let mut data = Vec::with_capacity(expected as usize);
        file.read_to_end(&mut data).map_err(|source| MemoryError::Read {
            path: path.clone(),
            source,
        })?;

        if (data.len() as u64) < expected {
            return Err(MemoryError::ShortRead {
                path,
                expected,
                actual: data.len() as u64,
            });
        }

        log::debug!("Read {} ({} bytes)", path.display(), data.len());
        Ok(Self {
            path,
            storage: Storage::Owned(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.storage, Storage::Mapped(_))
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(data) => data.as_slice(),
            Storage::Mapped(mmap) => &mmap[..],
        }
    }
}

impl Deref for FileBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for FileBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
