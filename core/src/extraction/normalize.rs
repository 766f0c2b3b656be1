use crate::dictionary::AliasDictionary;
use log::trace;
use std::sync::OnceLock;

/// Minimum alias length (in characters) eligible for containment matching
const MIN_CONTAINED_ALIAS_CHARS: usize = 3;

/// Cleans a raw label before matching
///
/// Trims, removes every whitespace character (including the ideographic
/// space), converts full-width parentheses to ASCII and maps the long-vowel
/// mark and minus glyphs (`ー`, `−`, `－`) to `-`.
pub fn clean_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '（' => '(',
            '）' => ')',
            'ー' | '−' | '－' => '-',
            other => other,
        })
        .collect()
}

/// An alias prepared for label matching
#[derive(Debug, Clone)]
struct PreparedAlias {
    entry: usize,
    cleaned: String,
    lowered: String,
    chars: usize,
}

/// Resolves free-form labels to canonical items
///
/// Matching runs in tiers, each tier scanning every alias in dictionary
/// order before the next tier starts:
///
/// 1. exact match, case-sensitive then case-insensitive
/// 2. text before the first `(` equals an alias
/// 3. the label contains an alias of at least three characters
///
/// # Example
///
/// ```
/// use labextract_core::Normalizer;
///
/// let normalizer = Normalizer::standard();
///
/// assert_eq!(normalizer.normalize("ＡＳＴ（ＧＯＴ）"), Some("AST"));
/// assert_eq!(normalizer.normalize("Glu(空腹時)"), Some("Glu"));
/// assert_eq!(normalizer.normalize("血清総蛋白値"), Some("TP"));
/// assert_eq!(normalizer.normalize("備考"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<'d> {
    dictionary: &'d AliasDictionary,
    aliases: Vec<PreparedAlias>,
}

impl<'d> Normalizer<'d> {
    /// Creates a normalizer over a dictionary
    pub fn new(dictionary: &'d AliasDictionary) -> Self {
        let aliases = dictionary
            .iter()
            .enumerate()
            .flat_map(|(entry, item)| {
                item.aliases.iter().map(move |alias| {
                    let cleaned = clean_label(alias);
                    PreparedAlias {
                        entry,
                        lowered: cleaned.to_lowercase(),
                        chars: cleaned.chars().count(),
                        cleaned,
                    }
                })
            })
            .collect();

        Self {
            dictionary,
            aliases,
        }
    }

    /// Returns the normalizer over the built-in dictionary
    pub fn standard() -> &'static Normalizer<'static> {
        static NORMALIZER: OnceLock<Normalizer<'static>> = OnceLock::new();
        NORMALIZER.get_or_init(|| Normalizer::new(AliasDictionary::standard()))
    }

    /// The dictionary this normalizer resolves against
    pub fn dictionary(&self) -> &'d AliasDictionary {
        self.dictionary
    }

    /// Returns the canonical item a label resolves to, if any
    pub fn normalize(&self, raw: &str) -> Option<&'static str> {
        let label = clean_label(raw);
        if label.is_empty() {
            return None;
        }

        let hit = self
            .exact(&label)
            .or_else(|| self.parenthetical_prefix(&label))
            .or_else(|| self.contained(&label));

        hit.map(|prepared| {
            let id = self.dictionary.entries()[prepared.entry].id;
            trace!("Normalized '{}' to {} via alias '{}'", label, id, prepared.cleaned);
            id
        })
    }

    fn exact(&self, label: &str) -> Option<&PreparedAlias> {
        if let Some(hit) = self.aliases.iter().find(|a| a.cleaned == label) {
            return Some(hit);
        }
        let lowered = label.to_lowercase();
        self.aliases.iter().find(|a| a.lowered == lowered)
    }

    fn parenthetical_prefix(&self, label: &str) -> Option<&PreparedAlias> {
        let (prefix, _) = label.split_once('(')?;
        if prefix.is_empty() {
            return None;
        }
        self.aliases.iter().find(|a| a.cleaned == prefix)
    }

    fn contained(&self, label: &str) -> Option<&PreparedAlias> {
        self.aliases
            .iter()
            .find(|a| a.chars >= MIN_CONTAINED_ALIAS_CHARS && label.contains(a.cleaned.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{CategoryTable, ItemSpec};
    use crate::types::Category;
    use rstest::rstest;

    #[rstest]
    #[case("  AST  ", "AST")]
    #[case("A S T", "AST")]
    #[case("AST（GOT）", "AST(GOT)")]
    #[case("γ－GTP", "γ-GTP")]
    #[case("T−Bil", "T-Bil")]
    #[case("コリンエステラーゼ", "コリンエステラ-ゼ")]
    #[case("総\u{3000}蛋白", "総蛋白")]
    #[case("", "")]
    fn test_clean_label(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_label(raw), expected);
    }

    #[rstest]
    #[case("AST", Some("AST"))]
    #[case("AST(GOT)", Some("AST"))]
    #[case("AST (GOT)", Some("AST"))]
    #[case("ast", Some("AST"))]
    #[case("wbc", Some("WBC"))]
    #[case("白血球数", Some("WBC"))]
    #[case("Hb", Some("Hb"))]
    #[case("ＨｂＡ１ｃ", Some("HbA1c"))]
    #[case("γ-GTP", Some("γ-GTP"))]
    #[case("ｒ-GTP", Some("γ-GTP"))]
    #[case("Base Excess", Some("BE"))]
    #[case("尿中アルブミン", Some("U-Alb"))]
    #[case("IL-1β", Some("IL-1β"))]
    #[case("Glu(空腹時)", Some("Glu"))]
    #[case("LDLコレステロール値", Some("LDL-C"))]
    #[case("血清総蛋白値", Some("TP"))]
    #[case("備考", None)]
    #[case("   ", None)]
    fn test_normalize(#[case] label: &str, #[case] expected: Option<&str>) {
        assert_eq!(Normalizer::standard().normalize(label), expected);
    }

    #[test]
    fn test_every_alias_normalizes_to_its_item() {
        let normalizer = Normalizer::standard();
        for entry in AliasDictionary::standard().iter() {
            for alias in entry.aliases {
                assert_eq!(
                    normalizer.normalize(alias),
                    Some(entry.id),
                    "alias '{}' should resolve to {}",
                    alias,
                    entry.id
                );
            }
        }
    }

    #[test]
    fn test_every_alias_survives_width_and_spacing_variants() {
        let normalizer = Normalizer::standard();
        for entry in AliasDictionary::standard().iter() {
            for alias in entry.aliases {
                let widened = alias.replace('(', "（").replace(')', "）");
                let spaced: String = widened
                    .chars()
                    .flat_map(|c| [c, ' '])
                    .collect();
                let padded = format!("\u{3000}{} \t", spaced);
                assert_eq!(
                    normalizer.normalize(&padded),
                    Some(entry.id),
                    "variant '{}' should resolve to {}",
                    padded,
                    entry.id
                );
            }
        }
    }

    #[test]
    fn test_short_alias_not_used_for_containment() {
        // "K" is an alias but too short to match inside a longer label
        assert_eq!(Normalizer::standard().normalize("Kelvin"), None);
    }

    #[test]
    fn test_exact_tier_beats_earlier_containment() {
        const TABLE_A: &[ItemSpec] = &[ItemSpec {
            id: "Alb",
            unit: "g/dL",
            aliases: &["アルブミン"],
            signed: false,
        }];
        const TABLE_B: &[ItemSpec] = &[ItemSpec {
            id: "U-Alb",
            unit: "mg/gCr",
            aliases: &["尿中アルブミン"],
            signed: false,
        }];
        let dict = AliasDictionary::from_tables(&[
            CategoryTable {
                category: Category::Proteins,
                items: TABLE_A,
            },
            CategoryTable {
                category: Category::Urinalysis,
                items: TABLE_B,
            },
        ])
        .unwrap();
        let normalizer = Normalizer::new(&dict);

        assert_eq!(normalizer.normalize("尿中アルブミン"), Some("U-Alb"));
        // Containment falls back to dictionary order
        assert_eq!(normalizer.normalize("血清アルブミン値"), Some("Alb"));
    }
}
