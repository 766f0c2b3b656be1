//! Whole-text regex fallback
//!
//! A declarative list of (item, pattern) pairs applied to the flattened text
//! (all lines joined with a space). It catches values the line scan misses
//! when OCR splits a label and its value apart. Patterns are matched
//! case-insensitively and capture the value in group 1.

use super::numeric::parse_value;
use super::FoundSet;
use crate::dictionary::AliasDictionary;
use crate::error::{LabExtractError, Result};
use crate::types::Measurement;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Label alternation followed by the first unsigned number
macro_rules! labeled {
    ($labels:literal) => {
        concat!(
            r"(?:^|[^a-z\d])(?:",
            $labels,
            r")(?:[^a-z\d][^\d]*)?(\d+(?:\.\d+)?)"
        )
    };
}

/// Label alternation followed by the first, possibly negative, number
macro_rules! labeled_signed {
    ($labels:literal) => {
        concat!(
            r"(?:^|[^a-z\d])(?:",
            $labels,
            r")(?:[^a-z\d\-－−][^\d\-－−]*)?([-－−]?\d+(?:\.\d+)?)"
        )
    };
}

/// One fallback rule: the item it fills and its pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSpec {
    pub item: &'static str,
    pub pattern: &'static str,
}

const fn spec(item: &'static str, pattern: &'static str) -> FallbackSpec {
    FallbackSpec { item, pattern }
}

/// Built-in fallback rules, applied in order
pub const STANDARD_FALLBACKS: &[FallbackSpec] = &[
    spec("WBC", labeled!(r"WBC|白血球数?")),
    spec("RBC", labeled!(r"RBC|赤血球数")),
    spec("Hb", labeled!(r"Hb|Hgb|ヘモグロビン|血色素量?")),
    spec("Ht", labeled!(r"Ht|Hct|ヘマトクリット")),
    spec("PLT", labeled!(r"PLT|血小板数?")),
    spec("TP", labeled!(r"TP|総蛋白")),
    spec("Alb", labeled!(r"Alb")),
    spec("BUN", labeled!(r"BUN|尿素窒素")),
    spec("Cre", labeled!(r"Creatinine|Cre|Cr|血清クレアチニン")),
    spec("UA", labeled!(r"UA|尿酸")),
    spec("eGFR", labeled!(r"eGFR")),
    spec("AST", labeled!(r"AST|GOT")),
    spec("ALT", labeled!(r"ALT|GPT")),
    spec("LDH", labeled!(r"LDH|LD")),
    spec("ALP", labeled!(r"ALP")),
    spec("γ-GTP", labeled!(r"γ-?GTP|GGT")),
    spec("T-Bil", labeled!(r"T-?Bil|総ビリルビン")),
    spec(
        "CK",
        r"(?:^|[^a-z\d])(?:CPK|CK)(?:[^a-z\d\-][^\d]*)?(\d+(?:\.\d+)?)",
    ),
    spec("Na", labeled!(r"Na|ナトリウム")),
    spec("K", labeled!(r"K|カリウム")),
    spec("Cl", labeled!(r"Cl|クロール")),
    spec("CRP", labeled!(r"CRP")),
    spec("PT-INR", labeled!(r"PT-INR|INR")),
    spec("D-dimer", labeled!(r"D-?dimer|Dダイマー")),
    spec("HbA1c", labeled!(r"HbA1c|A1c")),
    spec("Glu", labeled!(r"Glu|血糖|FBS")),
    spec("TG", labeled!(r"TG|中性脂肪")),
    spec("LDL-C", labeled!(r"LDL")),
    spec("HDL-C", labeled!(r"HDL")),
    spec("BNP", labeled!(r"BNP")),
    spec("pH", labeled!(r"pH")),
    spec("PaCO2", labeled!(r"PaCO2|pCO2")),
    spec("PaO2", labeled!(r"PaO2|pO2")),
    spec("HCO3", labeled!(r"HCO3-?|重炭酸")),
    spec(
        "BE",
        labeled_signed!(r"BE|B\.E\.|ABE|SBE|Base\s*Excess|塩基過剰"),
    ),
    spec("Lac", labeled!(r"Lac|Lactate")),
];

#[derive(Debug, Clone)]
struct CompiledFallback {
    item: &'static str,
    unit: &'static str,
    signed: bool,
    regex: Regex,
}

/// Compiled fallback rules bound to a dictionary
///
/// # Example
///
/// ```
/// use labextract_core::extraction::FallbackTable;
///
/// let table = FallbackTable::standard();
/// assert!(table.items().any(|item| item == "CRP"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    rules: Vec<CompiledFallback>,
}

impl FallbackTable {
    /// Returns the built-in table compiled against the built-in dictionary
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in pattern fails to compile.
    pub fn standard() -> &'static FallbackTable {
        static TABLE: OnceLock<FallbackTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            FallbackTable::compile(STANDARD_FALLBACKS, AliasDictionary::standard())
                .expect("Built-in fallback patterns failed validation")
        })
    }

    /// A table with no rules
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles rules against a dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if a rule names an item the dictionary does not
    /// define, or if its pattern fails to compile.
    pub fn compile(specs: &[FallbackSpec], dictionary: &AliasDictionary) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| {
                let entry = dictionary
                    .get(spec.item)
                    .ok_or_else(|| LabExtractError::UnknownItem(spec.item.to_string()))?;
                let regex = RegexBuilder::new(spec.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| LabExtractError::InvalidPattern {
                        name: spec.item.to_string(),
                        source,
                    })?;
                Ok(CompiledFallback {
                    item: entry.id,
                    unit: entry.unit,
                    signed: entry.signed,
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled {} fallback patterns", rules.len());
        Ok(Self { rules })
    }

    /// Items covered by the table, in rule order
    pub fn items(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.item)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule whose item is still missing to the flattened text
    pub fn scan(&self, flat: &str, found: &mut FoundSet, out: &mut Vec<Measurement>) {
        for rule in &self.rules {
            if found.contains(rule.item) {
                continue;
            }

            let value = rule
                .regex
                .captures_iter(flat)
                .find_map(|caps| parse_value(&caps[1], rule.signed));

            if let Some(value) = value {
                debug!("Fallback: {} = {}", rule.item, value);
                found.insert(rule.item);
                out.push(Measurement::new(rule.item, value, rule.unit));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scan(flat: &str) -> Vec<Measurement> {
        let mut found = FoundSet::default();
        let mut out = Vec::new();
        FallbackTable::standard().scan(flat, &mut found, &mut out);
        out
    }

    #[test]
    fn test_standard_table_compiles() {
        assert_eq!(FallbackTable::standard().len(), STANDARD_FALLBACKS.len());
    }

    #[test]
    fn test_every_rule_names_a_dictionary_item() {
        let dict = AliasDictionary::standard();
        for spec in STANDARD_FALLBACKS {
            assert!(dict.contains(spec.item), "unknown item {}", spec.item);
        }
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let specs = [spec("NotAnItem", labeled!(r"XYZ"))];
        let err = FallbackTable::compile(&specs, AliasDictionary::standard()).unwrap_err();
        assert!(matches!(err, LabExtractError::UnknownItem(ref id) if id == "NotAnItem"));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let specs = [spec("CRP", r"CRP(\d+")];
        let err = FallbackTable::compile(&specs, AliasDictionary::standard()).unwrap_err();
        assert!(matches!(err, LabExtractError::InvalidPattern { ref name, .. } if name == "CRP"));
    }

    #[rstest]
    #[case("crp: 2.5 mg/dL", "CRP", 2.5)]
    #[case("白血球 8500 赤血球数 450", "WBC", 8500.0)]
    #[case("CPK 230", "CK", 230.0)]
    #[case("Base Excess -1.5", "BE", -1.5)]
    #[case("Base Excess －1.5", "BE", -1.5)]
    #[case("B.E. −0.8 mEq/L", "BE", -0.8)]
    #[case("HCO3- 24.1", "HCO3", 24.1)]
    fn test_rule_captures(#[case] flat: &str, #[case] item: &str, #[case] value: f64) {
        let out = scan(flat);
        let hit = out.iter().find(|m| m.item == item).unwrap();
        assert_eq!(hit.value, value);
    }

    #[test]
    fn test_ck_ignores_ck_mb() {
        let out = scan("CK-MB 5");
        assert!(out.iter().all(|m| m.item != "CK"));
    }

    #[test]
    fn test_found_items_are_skipped() {
        let mut found = FoundSet::default();
        found.insert("CRP");
        let mut out = Vec::new();
        FallbackTable::standard().scan("CRP 2.5", &mut found, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_minus_is_filler_for_unsigned_items() {
        let out = scan("Na -140");
        assert_eq!(out, vec![Measurement::new("Na", 140.0, "mEq/L")]);
    }

    #[test]
    fn test_empty_table_finds_nothing() {
        let mut found = FoundSet::default();
        let mut out = Vec::new();
        FallbackTable::empty().scan("CRP 2.5", &mut found, &mut out);
        assert!(out.is_empty());
    }
}
