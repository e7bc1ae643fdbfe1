// Thu Oct 15 2026 - Alex

use super::args::Args;
use crate::config::ScanConfig;
use crate::error::{Result, SiggrepError};
use crate::memory::FileBuffer;
use crate::output::{format_counts, OutputFormatter, ScanReport};
use crate::pattern::PatternScanner;
use std::io::Write;

pub struct CommandHandler {
    config: ScanConfig,
}

impl CommandHandler {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Loads the target, counts every signature and renders the result text.
    pub fn scan(&self, args: &Args) -> Result<String> {
        for (spec, sig) in args.specs.iter().zip(&args.signatures) {
            log::debug!("{} {:?} -> [{}] ({} bytes)", spec.encoding, spec.text, sig, sig.len());
        }

        let buffer = FileBuffer::load(&args.file, self.config.mmap_threshold)?;
        log::debug!(
            "Loaded {} bytes from {} (mapped: {})",
            buffer.len(),
            buffer.path().display(),
            buffer.is_mapped()
        );

        let counts = PatternScanner::from_config(&self.config).count_all(&buffer, &args.signatures);
        for (sig, count) in args.signatures.iter().zip(&counts) {
            log::debug!("[{}] matched {} times", sig, count);
        }

        let report = ScanReport::new(buffer.path(), buffer.len(), &args.signatures, &counts);
        let text = OutputFormatter::new()
            .with_json(self.config.json || args.json)
            .format(&report)
            .unwrap_or_else(|e| {
                log::error!("Failed to encode report, printing plain counts: {}", e);
                format_counts(&counts)
            });

        Ok(text)
    }

    pub fn execute(&self, args: &Args) -> Result<()> {
        self.execute_to(args, &mut std::io::stdout().lock())
    }

    /// Scans and writes the result to `out`. A failed write (closed pipe,
    /// full disk) is an I/O failure and exits with code 2, since the caller
    /// never received the counts.
    pub fn execute_to<W: Write>(&self, args: &Args, out: &mut W) -> Result<()> {
        let text = self.scan(args)?;
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(SiggrepError::Output)
    }
}
