// Thu Oct 15 2026 - Alex

pub mod signature;
pub mod compiler;
pub mod matcher;
pub mod scanner;
pub mod error;

pub use signature::{Element, Signature};
pub use compiler::{compile, nibble, Encoding, Specification};
pub use matcher::{count, find_next, Matches};
pub use scanner::PatternScanner;
pub use error::PatternError;
