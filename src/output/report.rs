// Thu Oct 15 2026 - Alex

use crate::pattern::Signature;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureCount {
    pub signature: String,
    pub length: usize,
    pub count: usize,
}

/// Per-signature results of one scan, in the order signatures were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub file: String,
    pub size: usize,
    pub signatures: Vec<SignatureCount>,
}

impl ScanReport {
    pub fn new(file: &Path, size: usize, signatures: &[Signature], counts: &[usize]) -> Self {
        let signatures = signatures.iter()
            .zip(counts.iter())
            .map(|(sig, &count)| SignatureCount {
                signature: sig.to_ida_string(),
                length: sig.len(),
                count,
            })
            .collect();

        Self {
            file: file.display().to_string(),
            size,
            signatures,
        }
    }

    pub fn counts(&self) -> Vec<usize> {
        self.signatures.iter().map(|s| s.count).collect()
    }
}
