pub mod fallback;
pub mod line_scan;
pub mod normalize;
pub mod numeric;

pub use fallback::{FallbackSpec, FallbackTable, STANDARD_FALLBACKS};
pub use line_scan::{alias_pattern, alias_value_pattern, LineScanner};
pub use normalize::{clean_label, Normalizer};

use crate::dictionary::AliasDictionary;
use crate::error::{LabExtractError, Result};
use crate::types::{ExtractorConfig, Measurement};
use log::debug;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Items already measured during one extraction
///
/// Lives for a single `extract` call; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct FoundSet {
    items: HashSet<String>,
}

impl FoundSet {
    /// Marks an item as measured, returning false if it already was
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    /// Whether the item has been measured
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Number of measured items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been measured yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits text into trimmed, non-empty lines
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Two-strategy lab-value extractor
///
/// The line scan runs first. The whole-text fallback then fills only items
/// the line scan did not find. Each item appears at most once in the result,
/// with the value from the first successful match.
///
/// # Example
///
/// ```
/// use labextract_core::{LabExtractor, Measurement};
///
/// let extractor = LabExtractor::standard();
/// let measurements = extractor.extract("AST (GOT) 64\nWBC\n8500 H");
///
/// assert_eq!(
///     measurements,
///     vec![
///         Measurement::new("AST", 64.0, "U/L"),
///         Measurement::new("WBC", 8500.0, "/μL"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LabExtractor<'d> {
    dictionary: &'d AliasDictionary,
    scanner: LineScanner,
    fallback: &'d FallbackTable,
    config: ExtractorConfig,
}

impl<'d> LabExtractor<'d> {
    /// Creates an extractor over a dictionary and fallback table
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback table covers an item the dictionary
    /// does not define, or if an alias pattern fails to compile.
    pub fn new(
        dictionary: &'d AliasDictionary,
        fallback: &'d FallbackTable,
        config: ExtractorConfig,
    ) -> Result<Self> {
        if let Some(item) = fallback.items().find(|item| !dictionary.contains(item)) {
            return Err(LabExtractError::UnknownItem(item.to_string()));
        }

        Ok(Self {
            dictionary,
            scanner: LineScanner::new(dictionary)?,
            fallback,
            config,
        })
    }

    /// Returns the extractor over the built-in tables with default config
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in tables fail validation.
    pub fn standard() -> &'static LabExtractor<'static> {
        static EXTRACTOR: OnceLock<LabExtractor<'static>> = OnceLock::new();
        EXTRACTOR.get_or_init(|| {
            LabExtractor::new(
                AliasDictionary::standard(),
                FallbackTable::standard(),
                ExtractorConfig::default(),
            )
            .expect("Built-in extractor tables failed validation")
        })
    }

    /// Builder: Replace the config
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active config
    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// The dictionary this extractor resolves against
    pub fn dictionary(&self) -> &'d AliasDictionary {
        self.dictionary
    }

    /// Extracts measurements with the extractor's config
    pub fn extract(&self, text: &str) -> Vec<Measurement> {
        self.extract_with(text, self.config)
    }

    /// Extracts measurements with an explicit config
    ///
    /// Never fails: text with no recognizable item yields an empty list.
    pub fn extract_with(&self, text: &str, config: ExtractorConfig) -> Vec<Measurement> {
        let lines = split_lines(text);
        let mut found = FoundSet::default();
        let mut measurements = Vec::new();

        if config.line_scan {
            self.scanner
                .scan(&lines, config.next_line_values, &mut found, &mut measurements);
        }
        let from_lines = measurements.len();

        if config.fallback && !self.fallback.is_empty() {
            let flat = lines.join(" ");
            self.fallback.scan(&flat, &mut found, &mut measurements);
        }

        debug!(
            "Extracted {} measurements ({} line scan, {} fallback) from {} lines",
            measurements.len(),
            from_lines,
            measurements.len() - from_lines,
            lines.len()
        );

        measurements
    }
}
