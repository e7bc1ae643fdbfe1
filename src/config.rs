// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};

pub const DEFAULT_MMAP_THRESHOLD: u64 = 64 * 1024 * 1024;

pub const ENV_THREADS: &str = "SIGGREP_THREADS";
pub const ENV_PARALLEL: &str = "SIGGREP_PARALLEL";
pub const ENV_MMAP_THRESHOLD: &str = "SIGGREP_MMAP_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub max_threads: usize,
    pub parallel: bool,
    pub mmap_threshold: u64,
    pub json: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_threads: num_cpus::get(),
            parallel: true,
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
            json: false,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the `SIGGREP_*` environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_THREADS) {
            config.max_threads = value.trim().parse()
                .map_err(|_| format!("{} must be a positive integer, got {:?}", ENV_THREADS, value))?;
        }
        if let Some(value) = lookup(ENV_PARALLEL) {
            config.parallel = parse_bool(&value)
                .ok_or_else(|| format!("{} must be 0, 1, true or false, got {:?}", ENV_PARALLEL, value))?;
        }
        if let Some(value) = lookup(ENV_MMAP_THRESHOLD) {
            config.mmap_threshold = value.trim().parse()
                .map_err(|_| format!("{} must be a byte count, got {:?}", ENV_MMAP_THRESHOLD, value))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
