use crate::api::LabReport;
use std::fmt;

/// Text report formatter for extracted lab values
pub struct TextReport<'a> {
    report: &'a LabReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a LabReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lab Measurements")?;
        writeln!(f, "================")?;
        writeln!(f)?;

        if self.report.is_empty() {
            writeln!(f, "(none found)")?;
            return Ok(());
        }

        let width = self
            .report
            .measurements
            .iter()
            .map(|m| m.item.chars().count())
            .max()
            .unwrap_or(0);

        for m in &self.report.measurements {
            let pad = " ".repeat(width - m.item.chars().count());
            if m.is_dimensionless() {
                writeln!(f, "{}{}  {}", m.item, pad, m.value)?;
            } else {
                writeln!(f, "{}{}  {} {}", m.item, pad, m.value, m.unit)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Total: {}", self.report.len())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Measurement;

    #[test]
    fn test_text_report_format() {
        let report = LabReport {
            redacted_text: String::new(),
            measurements: vec![
                Measurement::new("AST", 64.0, "U/L"),
                Measurement::new("γ-GTP", 35.0, "U/L"),
                Measurement::new("pH", 7.41, ""),
            ],
        };

        let output = format!("{}", TextReport::new(&report));

        assert!(output.contains("Lab Measurements"));
        assert!(output.contains("AST    64 U/L"));
        assert!(output.contains("γ-GTP  35 U/L"));
        assert!(output.contains("pH     7.41"));
        assert!(output.contains("Total: 3"));
    }

    #[test]
    fn test_empty_report() {
        let output = TextReport::new(&LabReport::default()).to_string();
        assert!(output.contains("(none found)"));
        assert!(!output.contains("Total"));
    }
}
