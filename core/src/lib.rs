pub mod api;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod extraction;
pub mod pipeline;
pub mod redaction;
pub mod summary;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::{extract_lab_measurements, normalize_label, redact_pii, LabReport};
pub use cli::report::TextReport;
pub use dictionary::{AliasDictionary, DictionaryEntry};
pub use error::{LabExtractError, Result};
pub use extraction::{LabExtractor, Normalizer};
pub use pipeline::{LabReportPipeline, OcrEngine, SummaryStructurer};
pub use redaction::{PiiRedactor, PII_MARKER};
pub use types::*;
