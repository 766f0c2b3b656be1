//! PII redaction
//!
//! An ordered list of patterns applied one after another to the raw OCR
//! text. Every match is replaced in full by [`PII_MARKER`].
//!
//! This is a best-effort filter, not a compliance guarantee. It only removes
//! PII shapes it has a pattern for. Known gaps:
//!
//! - names without a header label or honorific
//! - romanized names beyond two tokens
//! - addresses that omit the prefecture
//! - free-form dates of birth without a label
//!
//! Redaction is idempotent: the marker itself never matches a pattern.

use crate::error::{LabExtractError, Result};
use log::debug;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Replacement for every redacted span
pub const PII_MARKER: &str = "[REDACTED]";

/// Kind of PII a pattern targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiiCategory {
    /// Name following a header label (氏名, 患者名, Name)
    Name,
    /// Patient or chart number following a header label
    PatientId,
    /// Date of birth following a label, or a "生まれ" phrase
    BirthDate,
    /// Email address
    Email,
    /// Telephone number
    Phone,
    /// Postal code
    PostalCode,
    /// Street address starting with a prefecture
    Address,
    /// Name followed by an honorific suffix (様, さん, 先生)
    Honorific,
}

impl PiiCategory {
    /// Stable lowercase name
    pub fn simple_name(&self) -> &'static str {
        match self {
            PiiCategory::Name => "name",
            PiiCategory::PatientId => "patient_id",
            PiiCategory::BirthDate => "birth_date",
            PiiCategory::Email => "email",
            PiiCategory::Phone => "phone",
            PiiCategory::PostalCode => "postal_code",
            PiiCategory::Address => "address",
            PiiCategory::Honorific => "honorific",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// One redaction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiiPatternSpec {
    pub category: PiiCategory,
    pub pattern: &'static str,
}

/// Built-in redaction rules, applied in order
pub const STANDARD_PII_PATTERNS: &[PiiPatternSpec] = &[
    PiiPatternSpec {
        category: PiiCategory::Name,
        pattern: r"(?:(?:患者氏名|患者名|カナ氏名|氏名|名前|フリガナ)(?:\s*[:：]\s*|[ 　]*)|\b(?i:patient\s*name|name)(?:\s*[:：]\s*|[ 　]+))(?:[\p{Han}\p{Hiragana}\p{Katakana}ー々]+(?:[ 　][\p{Han}\p{Hiragana}\p{Katakana}ー々]+)?|[A-Za-z][A-Za-z.'\-]*(?: [A-Z][a-z]+)?)",
    },
    PiiPatternSpec {
        category: PiiCategory::PatientId,
        pattern: r"(?:(?:患者ID|患者番号|カルテ番号|カルテNo\.?|診察券番号|受付番号|登録番号)(?:\s*[:：]\s*|[ 　]*)|\b(?:MRN|ID|(?i:patient\s*id))(?:\s*[:：]\s*|[ 　]+))[A-Za-z0-9][A-Za-z0-9\-]*",
    },
    PiiPatternSpec {
        category: PiiCategory::BirthDate,
        pattern: r"(?:生年月日|誕生日|(?i:DOB|date\s+of\s+birth|birth\s*date))\s*[:：]?\s*(?:(?:明治|大正|昭和|平成|令和|[MTSHR]\.?)\s*\d{1,2}|\d{4})\s*[年./\-]\s*\d{1,2}\s*[月./\-]\s*\d{1,2}\s*日?(?:\s*生まれ|生)?",
    },
    PiiPatternSpec {
        category: PiiCategory::BirthDate,
        pattern: r"(?:(?:明治|大正|昭和|平成|令和)\d{1,2}|\d{4})年\d{1,2}月\d{1,2}日生(?:まれ)?",
    },
    PiiPatternSpec {
        category: PiiCategory::Email,
        pattern: r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}",
    },
    PiiPatternSpec {
        category: PiiCategory::Phone,
        pattern: r"\b0\d{1,4}[-－]\d{1,4}[-－]\d{3,4}\b|\b0[5-9]0\d{8}\b|\b0\d{9}\b",
    },
    PiiPatternSpec {
        category: PiiCategory::PostalCode,
        pattern: r"〒\s*\d{3}[-－]?\d{4}|\b\d{3}[-－]\d{4}\b",
    },
    PiiPatternSpec {
        category: PiiCategory::Address,
        pattern: r"(?:東京都|北海道|京都府|大阪府|\p{Han}{2,3}県)\p{Han}{1,6}?[市区町村郡][^\s、。,，]*",
    },
    PiiPatternSpec {
        category: PiiCategory::Honorific,
        pattern: r"[\p{Han}\p{Katakana}ー々]{1,8}(?:様|さん|殿|くん|ちゃん|先生)",
    },
];

/// A compiled redaction rule
#[derive(Debug, Clone)]
pub struct PiiPattern {
    category: PiiCategory,
    regex: Regex,
}

impl PiiPattern {
    /// Compiles a rule
    pub fn compile(spec: &PiiPatternSpec) -> Result<Self> {
        let regex =
            Regex::new(spec.pattern).map_err(|source| LabExtractError::InvalidPattern {
                name: spec.category.to_string(),
                source,
            })?;
        Ok(Self {
            category: spec.category,
            regex,
        })
    }

    /// Category this rule targets
    pub fn category(&self) -> PiiCategory {
        self.category
    }
}

/// Ordered PII redactor
///
/// # Example
///
/// ```
/// use labextract_core::redaction::{PiiRedactor, PII_MARKER};
///
/// let redacted = PiiRedactor::standard().redact("患者名: 山田太郎\nAST 64");
///
/// assert!(!redacted.contains("山田太郎"));
/// assert!(redacted.contains(PII_MARKER));
/// assert!(redacted.contains("AST 64"));
/// ```
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    patterns: Vec<PiiPattern>,
}

impl PiiRedactor {
    /// Returns the redactor with the built-in rules
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in pattern fails to compile.
    pub fn standard() -> &'static PiiRedactor {
        static REDACTOR: OnceLock<PiiRedactor> = OnceLock::new();
        REDACTOR.get_or_init(|| {
            PiiRedactor::compile(STANDARD_PII_PATTERNS)
                .expect("Built-in PII patterns failed validation")
        })
    }

    /// Creates a redactor from compiled rules
    pub fn new(patterns: Vec<PiiPattern>) -> Self {
        Self { patterns }
    }

    /// Compiles rules, keeping their order
    pub fn compile(specs: &[PiiPatternSpec]) -> Result<Self> {
        let patterns = specs
            .iter()
            .map(PiiPattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(patterns))
    }

    /// Compiled rules in application order
    pub fn patterns(&self) -> &[PiiPattern] {
        &self.patterns
    }

    /// Replaces every PII match with [`PII_MARKER`]
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();
        for pattern in &self.patterns {
            let hits = pattern.regex.find_iter(&redacted).count();
            if hits == 0 {
                continue;
            }
            debug!("Redacting {} {} span(s)", hits, pattern.category);
            redacted = pattern
                .regex
                .replace_all(&redacted, PII_MARKER)
                .into_owned();
        }
        redacted
    }

    /// Categories that would be redacted from the text, in rule order
    pub fn detect(&self, text: &str) -> Vec<PiiCategory> {
        let mut categories: Vec<PiiCategory> = Vec::new();
        for pattern in &self.patterns {
            if pattern.regex.is_match(text) && !categories.contains(&pattern.category) {
                categories.push(pattern.category);
            }
        }
        categories
    }
}
