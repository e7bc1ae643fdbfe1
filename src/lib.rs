// Thu Oct 15 2026 - Alex

pub mod config;
pub mod error;
pub mod memory;
pub mod output;
pub mod pattern;
pub mod ui;
pub mod utils;

pub use config::ScanConfig;
pub use error::SiggrepError;
pub use memory::FileBuffer;
pub use pattern::{compile, count, Element, Encoding, PatternScanner, Signature, Specification};
