// Thu Oct 15 2026 - Alex

pub mod buffer;
pub mod error;

pub use buffer::FileBuffer;
pub use error::MemoryError;
