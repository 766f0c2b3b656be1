use thiserror::Error;

/// Result type for labextract operations
pub type Result<T> = std::result::Result<T, LabExtractError>;

/// Error types for labextract operations
///
/// Request-time extraction never produces these: a missing measurement is the
/// only failure signal there. Errors come from table loading and from the
/// OCR/LLM collaborators at the boundary.
#[derive(Error, Debug)]
pub enum LabExtractError {
    /// Two canonical items claim the same alias
    #[error("alias '{alias}' is claimed by both '{first}' and '{second}'")]
    DictionaryIntegrity {
        alias: String,
        first: String,
        second: String,
    },

    /// The same canonical item is defined twice
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    /// An item carries an empty alias string
    #[error("Empty alias for item: {0}")]
    EmptyAlias(String),

    /// A table references an item the dictionary does not define
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// A table pattern failed to compile
    #[error("Invalid pattern for '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// LLM response carried no fenced JSON block
    #[error("LLM response contains no JSON block")]
    MissingJsonBlock,

    /// LLM response JSON did not match the summary schema
    #[error("Summary JSON error: {0}")]
    SummaryJson(#[from] serde_json::Error),

    /// OCR collaborator failure
    #[error("OCR error: {0}")]
    Ocr(String),

    /// LLM collaborator failure
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generic extraction error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for LabExtractError {
    fn from(s: String) -> Self {
        LabExtractError::Extraction(s)
    }
}

impl From<&str> for LabExtractError {
    fn from(s: &str) -> Self {
        LabExtractError::Extraction(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_message_names_both_items() {
        let err = LabExtractError::DictionaryIntegrity {
            alias: "ALB".to_string(),
            first: "Alb".to_string(),
            second: "U-Alb".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ALB"));
        assert!(msg.contains("'Alb'"));
        assert!(msg.contains("'U-Alb'"));
    }

    #[test]
    fn test_string_conversion() {
        let err: LabExtractError = "boom".into();
        assert!(matches!(err, LabExtractError::Extraction(ref m) if m == "boom"));
    }
}
