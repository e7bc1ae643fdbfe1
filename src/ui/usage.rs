// Thu Oct 15 2026 - Alex

pub const PROGRAM: &str = "siggrep";

pub fn usage() -> String {
    format!(
        "\
Usage: {program} [--(pattern|narrow|wide|widebe) <value>]+ [--json] [-v] [--] <file>
Options:
  --pattern <pattern>     IDA style pattern, like \"12 34 ? 78\"
  --narrow <string>       narrow / ascii string
  --wide <string>         wide / ucs2 little endian string
  --widebe <string>       wide / ucs2 big endian string
  --json                  print a JSON report instead of plain counts
  -v, --verbose           log compiled signatures and scan details to stderr
  -h, --help              print this help
  -V, --version           print the version
Output:
  Comma separated values of count of each signature found
",
        program = PROGRAM
    )
}

pub fn version() -> String {
    format!("{} {}", PROGRAM, env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_describes_every_mode() {
        let text = usage();
        for flag in ["--pattern", "--narrow", "--wide", "--widebe"] {
            assert!(text.contains(flag), "usage is missing {}", flag);
        }
        assert!(text.contains("\"12 34 ? 78\""));
    }
}
