// Thu Oct 15 2026 - Alex

use crate::error::SiggrepError;
use colored::Colorize;
use std::io::IsTerminal;

pub struct ErrorDisplay {
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            color_enabled: std::io::stderr().is_terminal(),
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    /// One line describing the failure, without a trailing newline.
    pub fn format(&self, error: &SiggrepError) -> String {
        let header = if self.color_enabled {
            "error:".red().bold().to_string()
        } else {
            "error:".to_string()
        };

        format!("{} {}", header, error)
    }

    pub fn print(&self, error: &SiggrepError) {
        eprintln!("{}", self.format(error));
        if error.wants_usage() {
            eprint!("{}", crate::ui::usage::usage());
        }
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryError;
    use std::path::PathBuf;

    #[test]
    fn test_plain_format() {
        let display = ErrorDisplay::new().without_colors();
        let err = SiggrepError::argument("Missing file path");
        assert_eq!(display.format(&err), "error: Missing file path");
    }

    #[test]
    fn test_file_error_names_path() {
        let display = ErrorDisplay::new().without_colors();
        let err = SiggrepError::from(MemoryError::Open {
            path: PathBuf::from("/nowhere/target.bin"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let line = display.format(&err);
        assert!(line.starts_with("error: Failed opening file /nowhere/target.bin"));
        assert!(!line.contains('\n'));
    }
}
