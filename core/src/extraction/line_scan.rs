//! Line-proximity scan
//!
//! For each line, items are tried in dictionary precedence order. An alias
//! that appears on the line claims the first number after it on the same
//! line, or the number opening the next line. Once a line yields a
//! measurement the scan moves on to the next line.

use super::numeric::parse_value;
use super::FoundSet;
use crate::dictionary::AliasDictionary;
use crate::error::{LabExtractError, Result};
use crate::types::Measurement;
use log::{debug, trace};
use regex::Regex;
use std::sync::OnceLock;

const LEADING_GUARD: &str = r"(?:^|[^A-Za-zＡ-Ｚａ-ｚ])";
const TRAILING_GUARD: &str = r"(?:[^A-Za-zＡ-Ｚａ-ｚ]|$)";
const NUMBER: &str = r"(\d+(?:\.\d+)?)";
const SIGNED_NUMBER: &str = r"([-－−]?\d+(?:\.\d+)?)";

/// Builds the presence pattern for an alias
///
/// The alias is escaped. An alias starting with a Latin letter (ASCII or
/// full-width) must not be preceded by one, and an alias ending in a letter
/// must not be followed by a Latin letter, so `Hb` does not fire inside
/// `HbA1c` and `K` does not fire inside `CK`.
///
/// # Example
///
/// ```
/// use labextract_core::extraction::alias_pattern;
/// use regex::Regex;
///
/// let re = Regex::new(&alias_pattern("Hb")).unwrap();
/// assert!(re.is_match("Hb 14.2"));
/// assert!(!re.is_match("HbA1c 6.1"));
/// ```
pub fn alias_pattern(alias: &str) -> String {
    let mut pattern = String::new();
    if starts_with_latin(alias) {
        pattern.push_str(LEADING_GUARD);
    }
    pattern.push_str(&regex::escape(alias));
    if ends_with_letter(alias) {
        pattern.push_str(TRAILING_GUARD);
    }
    pattern
}

/// Builds the same-line value pattern for an alias
///
/// Capture group 1 holds the first number after the alias. Signed items
/// accept a leading minus (`-`, `－` or `−`); for them a minus is never
/// skipped as filler.
pub fn alias_value_pattern(alias: &str, signed: bool) -> String {
    let mut pattern = String::new();
    if starts_with_latin(alias) {
        pattern.push_str(LEADING_GUARD);
    }
    pattern.push_str(&regex::escape(alias));

    let filler = match (ends_with_letter(alias), signed) {
        (true, false) => r"(?:[^A-Za-zＡ-Ｚａ-ｚ\d][^\d]*)?",
        (true, true) => r"(?:[^A-Za-zＡ-Ｚａ-ｚ\d\-－−][^\d\-－−]*)?",
        (false, false) => r"[^\d]*",
        (false, true) => r"[^\d\-－−]*",
    };
    pattern.push_str(filler);
    pattern.push_str(if signed { SIGNED_NUMBER } else { NUMBER });
    pattern
}

fn starts_with_latin(alias: &str) -> bool {
    alias.chars().next().is_some_and(is_latin_letter)
}

/// ASCII or full-width Latin letter
fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'Ａ'..='Ｚ' | 'ａ'..='ｚ')
}

fn ends_with_letter(alias: &str) -> bool {
    alias.chars().last().is_some_and(char::is_alphabetic)
}

/// Removes a leading OCR line number ("12 WBC 8500" becomes "WBC 8500")
fn strip_line_number(line: &str) -> &str {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"^\d+\s+").expect("Failed to compile regex"));
    match re.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Reads the value that opens a line such as "8500 H" or "92.3 fL 80-100"
///
/// Returns the value and the text after it and its H/L/N flag.
fn next_line_value(line: &str, signed: bool) -> Option<(f64, &str)> {
    static UNSIGNED: OnceLock<Regex> = OnceLock::new();
    static SIGNED: OnceLock<Regex> = OnceLock::new();

    let re = if signed {
        SIGNED.get_or_init(|| {
            Regex::new(r"^([-－−]?\d+(?:\.\d+)?)\s*[HLN]?(?:\s|$)").expect("Failed to compile regex")
        })
    } else {
        UNSIGNED.get_or_init(|| {
            Regex::new(r"^(\d+(?:\.\d+)?)\s*[HLN]?(?:\s|$)").expect("Failed to compile regex")
        })
    };

    let line = line.trim();
    let caps = re.captures(line)?;
    let value = parse_value(&caps[1], signed)?;
    Some((value, &line[caps.get(0)?.end()..]))
}

#[derive(Debug, Clone)]
struct AliasMatcher {
    alias: &'static str,
    presence: Regex,
    value: Regex,
}

impl AliasMatcher {
    fn compile(alias: &'static str, signed: bool) -> Result<Self> {
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|source| LabExtractError::InvalidPattern {
                name: alias.to_string(),
                source,
            })
        };

        Ok(Self {
            alias,
            presence: compile(alias_pattern(alias))?,
            value: compile(alias_value_pattern(alias, signed))?,
        })
    }

    fn is_present(&self, text: &str) -> bool {
        text.contains(self.alias) && self.presence.is_match(text)
    }

    fn same_line_value(&self, text: &str, signed: bool) -> Option<f64> {
        self.value
            .captures_iter(text)
            .find_map(|caps| parse_value(&caps[1], signed))
    }
}

#[derive(Debug, Clone)]
struct ItemMatcher {
    id: &'static str,
    unit: &'static str,
    signed: bool,
    aliases: Vec<AliasMatcher>,
}

/// Compiled alias matchers for every dictionary item, in precedence order
#[derive(Debug, Clone)]
pub struct LineScanner {
    items: Vec<ItemMatcher>,
}

impl LineScanner {
    /// Compiles matchers for every alias in the dictionary
    pub fn new(dictionary: &AliasDictionary) -> Result<Self> {
        let items = dictionary
            .iter()
            .map(|entry| {
                let aliases = entry
                    .aliases
                    .iter()
                    .map(|&alias| AliasMatcher::compile(alias, entry.signed))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ItemMatcher {
                    id: entry.id,
                    unit: entry.unit,
                    signed: entry.signed,
                    aliases,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled line scanner for {} items", items.len());
        Ok(Self { items })
    }

    /// Scans trimmed, non-empty lines, appending new measurements
    pub fn scan(
        &self,
        lines: &[&str],
        next_line_values: bool,
        found: &mut FoundSet,
        out: &mut Vec<Measurement>,
    ) {
        for (index, line) in lines.iter().enumerate() {
            let next = if next_line_values {
                lines.get(index + 1).copied()
            } else {
                None
            };

            if let Some(measurement) = self.scan_line(line, next, found) {
                found.insert(measurement.item.clone());
                out.push(measurement);
            }
        }
    }

    /// Value opening the next line, unless that line is another labeled row
    fn bare_value(&self, line: &str, signed: bool) -> Option<f64> {
        let (value, rest) = next_line_value(line, signed)?;
        let labeled = self
            .items
            .iter()
            .flat_map(|item| &item.aliases)
            .any(|alias| alias.is_present(rest));
        if labeled {
            trace!("Next line '{}' is a labeled row", line);
            return None;
        }
        Some(value)
    }

    fn scan_line(&self, line: &str, next: Option<&str>, found: &FoundSet) -> Option<Measurement> {
        let stripped = strip_line_number(line);
        let both = [stripped, line];
        let candidates = if stripped.len() == line.len() {
            &both[1..]
        } else {
            &both[..]
        };

        for item in &self.items {
            if found.contains(item.id) {
                continue;
            }

            for alias in &item.aliases {
                if !candidates.iter().any(|text| alias.is_present(text)) {
                    continue;
                }

                let same_line = candidates
                    .iter()
                    .find_map(|text| alias.same_line_value(text, item.signed));
                let value = same_line.or_else(|| next.and_then(|n| self.bare_value(n, item.signed)));

                match value {
                    Some(value) => {
                        trace!("Line '{}' matched alias '{}'", line, alias.alias);
                        debug!("Line scan: {} = {}", item.id, value);
                        return Some(Measurement::new(item.id, value, item.unit));
                    }
                    None => trace!("Alias '{}' present without a value", alias.alias),
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scan(text: &str) -> Vec<Measurement> {
        let scanner = LineScanner::new(AliasDictionary::standard()).unwrap();
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let mut found = FoundSet::default();
        let mut out = Vec::new();
        scanner.scan(&lines, true, &mut found, &mut out);
        out
    }

    #[rstest]
    #[case("Hb", "Hb 14.2", true)]
    #[case("Hb", "HbA1c 6.1", false)]
    #[case("K", "CK 120", false)]
    #[case("K", "K 4.1", true)]
    #[case("K", "K:4.1", true)]
    #[case("Ｐ", "ＣＲＰ 0.3", false)]
    #[case("PT", "PT-INR 1.1", true)]
    #[case("白血球", "白血球数 8500", true)]
    #[case("B.E.", "B.E. 2", true)]
    #[case("B.E.", "BxEx 2", false)]
    fn test_alias_pattern(#[case] alias: &str, #[case] text: &str, #[case] expected: bool) {
        let re = Regex::new(&alias_pattern(alias)).unwrap();
        assert_eq!(re.is_match(text), expected);
    }

    #[rstest]
    #[case("AST", false, "AST (GOT) 64", Some("64"))]
    #[case("Hb", false, "Hb14.2", Some("14.2"))]
    #[case("Hb", false, "HbA1c 6.1", None)]
    #[case("BE", true, "BE -3.2", Some("-3.2"))]
    #[case("BE", true, "BE －3.2", Some("－3.2"))]
    #[case("BE", true, "BE：−3.2", Some("−3.2"))]
    #[case("BE", false, "BE -3.2", Some("3.2"))]
    #[case("白血球", false, "白血球数 8500 /μL", Some("8500"))]
    #[case("CA19-9", false, "CA19-9 12.5", Some("12.5"))]
    fn test_alias_value_pattern(
        #[case] alias: &str,
        #[case] signed: bool,
        #[case] text: &str,
        #[case] expected: Option<&str>,
    ) {
        let re = Regex::new(&alias_value_pattern(alias, signed)).unwrap();
        let captured = re.captures(text).map(|c| c[1].to_string());
        assert_eq!(captured.as_deref(), expected);
    }

    #[test]
    fn test_strip_line_number() {
        assert_eq!(strip_line_number("12 WBC 8500"), "WBC 8500");
        assert_eq!(strip_line_number("WBC 8500"), "WBC 8500");
        assert_eq!(strip_line_number("8500"), "8500");
    }

    #[rstest]
    #[case("8500 H", false, Some(8500.0))]
    #[case("4.2", false, Some(4.2))]
    #[case("12.5 L ", false, Some(12.5))]
    #[case("-3.2", true, Some(-3.2))]
    #[case("-3.2", false, None)]
    #[case("－3.2", true, Some(-3.2))]
    #[case("8500 /μL", false, Some(8500.0))]
    #[case("92.3 fL", false, Some(92.3))]
    #[case("30.1 H 27.0-33.0", false, Some(30.1))]
    #[case("92.3fL", false, None)]
    #[case("RBC 450", false, None)]
    fn test_next_line_value(#[case] line: &str, #[case] signed: bool, #[case] expected: Option<f64>) {
        assert_eq!(next_line_value(line, signed).map(|(value, _)| value), expected);
    }

    #[test]
    fn test_next_line_value_rest() {
        assert_eq!(next_line_value("30.1 H 27.0-33.0", false), Some((30.1, "27.0-33.0")));
        assert_eq!(next_line_value("2 Alb 4.1", false), Some((2.0, "Alb 4.1")));
    }

    #[test]
    fn test_same_line_value() {
        let out = scan("AST (GOT) 64");
        assert_eq!(out, vec![Measurement::new("AST", 64.0, "U/L")]);
    }

    #[test]
    fn test_value_on_next_line() {
        let out = scan("WBC\n8500 H");
        assert_eq!(out, vec![Measurement::new("WBC", 8500.0, "/μL")]);
    }

    #[test]
    fn test_next_line_with_unit_and_range() {
        let out = scan("MCV\n92.3 fL\nMCH\n30.1 H 27.0-33.0");
        assert_eq!(
            out,
            vec![
                Measurement::new("MCV", 92.3, "fL"),
                Measurement::new("MCH", 30.1, "pg"),
            ]
        );
    }

    #[test]
    fn test_next_labeled_row_is_not_a_value() {
        let out = scan("WBC\n2 Alb 4.1");
        assert_eq!(out, vec![Measurement::new("Alb", 4.1, "g/dL")]);
    }

    #[test]
    fn test_next_line_disabled() {
        let scanner = LineScanner::new(AliasDictionary::standard()).unwrap();
        let mut found = FoundSet::default();
        let mut out = Vec::new();
        scanner.scan(&["WBC", "8500 H"], false, &mut found, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_signed_item_keeps_negative_value() {
        let out = scan("BE -3.2");
        assert_eq!(out, vec![Measurement::new("BE", -3.2, "mEq/L")]);
    }

    #[rstest]
    #[case("BE －3.2")]
    #[case("BE −3.2")]
    #[case("BE\n－3.2")]
    fn test_signed_item_keeps_wide_minus(#[case] text: &str) {
        assert_eq!(scan(text), vec![Measurement::new("BE", -3.2, "mEq/L")]);
    }

    #[test]
    fn test_line_number_is_ignored() {
        let out = scan("3 Alb 4.1 g/dL");
        assert_eq!(out, vec![Measurement::new("Alb", 4.1, "g/dL")]);
    }

    #[test]
    fn test_embedding_item_wins() {
        let out = scan("HbA1c 6.1");
        assert_eq!(out, vec![Measurement::new("HbA1c", 6.1, "%")]);

        let out = scan("CK 120");
        assert_eq!(out, vec![Measurement::new("CK", 120.0, "U/L")]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let out = scan("AST 64\nAST 80");
        assert_eq!(out, vec![Measurement::new("AST", 64.0, "U/L")]);
    }

    #[test]
    fn test_label_without_value_is_skipped() {
        let out = scan("AST 測定中\n備考");
        assert!(out.is_empty());
    }

    #[test]
    fn test_japanese_labels() {
        let out = scan("総蛋白 7.2\n白血球数 6800\nＣＲＰ 0.3");
        assert_eq!(
            out,
            vec![
                Measurement::new("TP", 7.2, "g/dL"),
                Measurement::new("WBC", 6800.0, "/μL"),
                Measurement::new("CRP", 0.3, "mg/dL"),
            ]
        );
    }
}
