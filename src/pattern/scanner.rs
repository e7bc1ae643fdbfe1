// Thu Oct 15 2026 - Alex

use crate::config::ScanConfig;
use crate::pattern::{matcher, Signature};
use rayon::prelude::*;

pub struct PatternScanner {
    max_threads: usize,
    use_parallel: bool,
}

impl PatternScanner {
    pub fn new() -> Self {
        Self {
            max_threads: num_cpus::get(),
            use_parallel: true,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            max_threads: config.max_threads,
            use_parallel: config.parallel,
        }
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads.max(1);
        self
    }

    pub fn use_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    fn should_parallelize(&self, signatures: &[Signature]) -> bool {
        self.use_parallel && self.max_threads > 1 && signatures.len() > 1
    }

    /// Counts each signature against `buffer`. The result has one entry per
    /// signature, in the same order.
    pub fn count_all(&self, buffer: &[u8], signatures: &[Signature]) -> Vec<usize> {
        if self.should_parallelize(signatures) {
            log::debug!(
                "Scanning {} signatures in parallel on up to {} threads",
                signatures.len(),
                self.max_threads
            );
            match self.scan_parallel(buffer, signatures) {
                Ok(counts) => return counts,
                Err(e) => log::warn!("Falling back to sequential scan: {}", e),
            }
        } else {
            log::debug!("Scanning {} signatures sequentially", signatures.len());
        }

        self.scan_sequential(buffer, signatures)
    }

    fn scan_sequential(&self, buffer: &[u8], signatures: &[Signature]) -> Vec<usize> {
        signatures.iter()
            .map(|sig| matcher::count(buffer, sig))
            .collect()
    }

    fn scan_parallel(
        &self,
        buffer: &[u8],
        signatures: &[Signature],
    ) -> Result<Vec<usize>, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_threads.min(signatures.len()))
            .build()?;

        Ok(pool.install(|| {
            signatures.par_iter()
                .map(|sig| matcher::count(buffer, sig))
                .collect()
        }))
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new()
    }
}
