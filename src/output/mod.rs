// Thu Oct 15 2026 - Alex

pub mod formatter;
pub mod report;

pub use formatter::{format_counts, OutputFormat, OutputFormatter};
pub use report::{ScanReport, SignatureCount};
