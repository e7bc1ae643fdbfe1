// Thu Oct 15 2026 - Alex

use crate::output::ScanReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Plain,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_json(self, json: bool) -> Self {
        self.with_format(if json { OutputFormat::Json } else { OutputFormat::Plain })
    }

    /// The complete stdout text for a report, including the final newline.
    pub fn format(&self, report: &ScanReport) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Plain => Ok(format_counts(&report.counts())),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(report)?)),
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_counts(counts: &[usize]) -> String {
    let mut line = counts.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{compile, Encoding};
    use std::path::Path;

    fn report() -> ScanReport {
        let sigs = vec![
            compile(Encoding::HexPattern, "41 ? 43").unwrap(),
            compile(Encoding::WideBe, "A").unwrap(),
        ];
        ScanReport::new(Path::new("target.bin"), 16, &sigs, &[2, 1])
    }

    #[test]
    fn test_plain_counts() {
        assert_eq!(format_counts(&[2, 1]), "2,1\n");
        assert_eq!(format_counts(&[0]), "0\n");
        let text = OutputFormatter::new().format(&report()).unwrap();
        assert_eq!(text, "2,1\n");
    }

    #[test]
    fn test_json_report() {
        let text = OutputFormatter::new().with_json(true).format(&report()).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["file"], "target.bin");
        assert_eq!(value["size"], 16);
        assert_eq!(value["signatures"][0]["signature"], "41 ? 43");
        assert_eq!(value["signatures"][0]["length"], 3);
        assert_eq!(value["signatures"][0]["count"], 2);
        assert_eq!(value["signatures"][1]["signature"], "00 41");
        assert_eq!(value["signatures"][1]["count"], 1);
    }
}
