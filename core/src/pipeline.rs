//! Report processing pipeline
//!
//! Wires the external collaborators (OCR and the summary-structuring LLM)
//! around the redaction and extraction core. Raw OCR text is redacted before
//! it reaches extraction, logging or the LLM.

use crate::api::LabReport;
use crate::error::Result;
use crate::extraction::{LabExtractor, Normalizer};
use crate::redaction::PiiRedactor;
use crate::summary::{build_summary_prompt, parse_summary_response, ClinicalSummary};
use log::{info, warn};

/// Image-to-text collaborator
pub trait OcrEngine {
    /// Recognizes text in an image; `None` when nothing was detected
    fn recognize(&self, image: &[u8]) -> Result<Option<String>>;
}

/// Summary-structuring collaborator
pub trait SummaryStructurer {
    /// Sends a prompt and returns the free-text reply
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Redaction, extraction and summary structuring for one report at a time
///
/// # Example
///
/// ```
/// use labextract_core::LabReportPipeline;
///
/// let pipeline = LabReportPipeline::standard();
/// let report = pipeline.process_text("氏名: 山田太郎\nCRP 2.5");
///
/// assert!(!report.redacted_text.contains("山田太郎"));
/// assert_eq!(report.measurements[0].item, "CRP");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabReportPipeline<'a> {
    redactor: &'a PiiRedactor,
    extractor: &'a LabExtractor<'a>,
    normalizer: &'a Normalizer<'a>,
}

impl LabReportPipeline<'static> {
    /// Pipeline over the built-in tables
    pub fn standard() -> Self {
        Self::new(
            PiiRedactor::standard(),
            LabExtractor::standard(),
            Normalizer::standard(),
        )
    }
}

impl<'a> LabReportPipeline<'a> {
    /// Creates a pipeline from its parts
    pub fn new(
        redactor: &'a PiiRedactor,
        extractor: &'a LabExtractor<'a>,
        normalizer: &'a Normalizer<'a>,
    ) -> Self {
        Self {
            redactor,
            extractor,
            normalizer,
        }
    }

    /// Redacts raw text, then extracts measurements from the redacted text
    pub fn process_text(&self, raw_text: &str) -> LabReport {
        let redacted_text = self.redactor.redact(raw_text);
        let measurements = self.extractor.extract(&redacted_text);
        info!("Extracted {} measurements", measurements.len());
        LabReport {
            redacted_text,
            measurements,
        }
    }

    /// Runs OCR on an image, then processes the recognized text
    ///
    /// An image with no detected text yields an empty report.
    ///
    /// # Errors
    ///
    /// Returns the OCR collaborator's error unchanged.
    pub fn process_image(&self, ocr: &dyn OcrEngine, image: &[u8]) -> Result<LabReport> {
        info!("Running OCR on {} bytes", image.len());
        let text = ocr.recognize(image).map_err(|e| {
            warn!("OCR failed: {}", e);
            e
        })?;

        match text {
            Some(text) => Ok(self.process_text(&text)),
            None => {
                info!("OCR returned no detections");
                Ok(LabReport::default())
            }
        }
    }

    /// Redacts raw text and asks the LLM for a structured summary
    ///
    /// Lab labels in the reply are rewritten to canonical items.
    ///
    /// # Errors
    ///
    /// Returns the LLM collaborator's error, or a parse error when the
    /// reply carries no usable JSON block.
    pub fn summarize(&self, llm: &dyn SummaryStructurer, raw_text: &str) -> Result<ClinicalSummary> {
        let redacted = self.redactor.redact(raw_text);
        let prompt = build_summary_prompt(&redacted);

        info!("Requesting structured summary");
        let reply = llm.complete(&prompt).map_err(|e| {
            warn!("Summary request failed: {}", e);
            e
        })?;

        let mut summary = parse_summary_response(&reply).map_err(|e| {
            warn!("Summary reply rejected: {}", e);
            e
        })?;
        summary.canonicalize_labels(self.normalizer);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabExtractError;
    use crate::types::Measurement;
    use std::cell::RefCell;

    struct FixedOcr(Option<&'static str>);

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _image: &[u8]) -> Result<Option<String>> {
            Ok(self.0.map(str::to_string))
        }
    }

    struct BrokenOcr;

    impl OcrEngine for BrokenOcr {
        fn recognize(&self, _image: &[u8]) -> Result<Option<String>> {
            Err(LabExtractError::Ocr("service unavailable".to_string()))
        }
    }

    struct RecordingLlm {
        reply: &'static str,
        prompts: RefCell<Vec<String>>,
    }

    impl SummaryStructurer for RecordingLlm {
        fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    #[test]
    fn test_process_image() {
        let ocr = FixedOcr(Some("患者名: 山田太郎\nAST (GOT) 64"));
        let report = LabReportPipeline::standard()
            .process_image(&ocr, b"png")
            .unwrap();
        assert!(!report.redacted_text.contains("山田太郎"));
        assert_eq!(report.measurements, vec![Measurement::new("AST", 64.0, "U/L")]);
    }

    #[test]
    fn test_no_detections_gives_empty_report() {
        let report = LabReportPipeline::standard()
            .process_image(&FixedOcr(None), b"png")
            .unwrap();
        assert!(report.is_empty());
        assert!(report.redacted_text.is_empty());
    }

    #[test]
    fn test_ocr_error_is_propagated() {
        let err = LabReportPipeline::standard()
            .process_image(&BrokenOcr, b"png")
            .unwrap_err();
        assert!(matches!(err, LabExtractError::Ocr(_)));
    }

    #[test]
    fn test_summarize_sends_only_redacted_text() {
        let llm = RecordingLlm {
            reply: "```json\n{\"lab_results\": [{\"results\": [{\"item\": \"白血球数\", \"value\": 9000}]}]}\n```",
            prompts: RefCell::new(Vec::new()),
        };
        let summary = LabReportPipeline::standard()
            .summarize(&llm, "患者名: 山田太郎\n白血球数 9000")
            .unwrap();

        let prompts = llm.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(!prompts[0].contains("山田太郎"));
        assert!(prompts[0].contains("白血球数 9000"));

        let entry = &summary.lab_results[0].results[0];
        assert_eq!(entry.item, "WBC");
        assert_eq!(entry.unit.as_deref(), Some("/μL"));
    }

    #[test]
    fn test_summary_without_json_fails() {
        let llm = RecordingLlm {
            reply: "申し訳ありませんが対応できません。",
            prompts: RefCell::new(Vec::new()),
        };
        let err = LabReportPipeline::standard()
            .summarize(&llm, "CRP 2.5")
            .unwrap_err();
        assert!(matches!(err, LabExtractError::MissingJsonBlock));
    }
}
