// Thu Oct 15 2026 - Alex

use env_logger::Env;
use log::LevelFilter;

pub const ENV_LOG: &str = "SIGGREP_LOG";

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs env_logger on stderr. `SIGGREP_LOG` sets the filter (default
    /// `warn`); `verbose` forces debug output regardless.
    pub fn init_logger(verbose: bool) {
        let mut builder = env_logger::Builder::from_env(Env::default().filter_or(ENV_LOG, "warn"));
        if verbose {
            builder.filter_level(LevelFilter::Debug);
        }
        builder
            .format_timestamp(None)
            .target(env_logger::Target::Stderr);

        // Only fails when a logger is already installed, which keeps logging.
        if let Err(e) = builder.try_init() {
            log::debug!("Logger already initialized: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice() {
        LoggingUtils::init_logger(false);
        LoggingUtils::init_logger(true);
        log::debug!("still logging");
    }
}
