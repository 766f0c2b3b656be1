pub mod report;

use crate::error::Result;
use crate::types::ExtractorConfig;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Command-line arguments for labextract
#[derive(Parser, Debug)]
#[command(name = "labextract")]
#[command(about = "Extract lab values from OCR text of Japanese lab reports")]
#[command(version)]
pub struct Cli {
    /// Path to OCR text file, or "-" for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip the whole-text regex fallback
    #[arg(long)]
    pub no_fallback: bool,

    /// Do not read values from the line after a bare label
    #[arg(long)]
    pub no_next_line: bool,

    /// Only redact PII and print the redacted text
    #[arg(long)]
    pub redact_only: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extractor config selected by the flags
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::default()
            .with_fallback(!self.no_fallback)
            .with_next_line_values(!self.no_next_line)
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Reads the whole input, from stdin when the path is "-"
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabExtractError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["labextract", "report.txt"]);
        assert_eq!(cli.file, PathBuf::from("report.txt"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.extractor_config(), ExtractorConfig::default());
        assert!(!cli.redact_only);
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::parse_from([
            "labextract",
            "-",
            "--format",
            "json",
            "--no-fallback",
            "--no-next-line",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        let config = cli.extractor_config();
        assert!(config.line_scan);
        assert!(!config.fallback);
        assert!(!config.next_line_values);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AST 64").unwrap();
        writeln!(file, "ＣＲＰ 0.3").unwrap();

        let text = read_input(file.path()).unwrap();
        assert_eq!(text, "AST 64\nＣＲＰ 0.3\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LabExtractError::Io(_)));
    }
}
