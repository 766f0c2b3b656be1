//! Alias dictionary
//!
//! Maps each canonical item to its recognized surface forms and its canonical
//! unit. The table is pure data: matching lives in [`crate::extraction`].
//!
//! Tables are validated when a dictionary is built. Two items claiming the
//! same alias (after label cleaning) is a [`LabExtractError::DictionaryIntegrity`]
//! error rather than a silent runtime tie-break.

mod tables;

use crate::error::{LabExtractError, Result};
use crate::extraction::normalize::clean_label;
use crate::types::Category;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Static definition of one canonical item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    /// Canonical item identifier
    pub id: &'static str,

    /// Canonical unit, empty when untracked
    pub unit: &'static str,

    /// Surface forms, canonical name first
    pub aliases: &'static [&'static str],

    /// Whether the value may legitimately be negative
    pub signed: bool,
}

/// One category group of item definitions
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub category: Category,
    pub items: &'static [ItemSpec],
}

/// A loaded dictionary item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub id: &'static str,
    pub category: Category,
    pub unit: &'static str,
    pub aliases: &'static [&'static str],
    pub signed: bool,
}

/// Validated, ordered alias dictionary
///
/// Entries iterate in category precedence order ([`Category::ORDER`]), then
/// in table order within a category.
///
/// # Example
///
/// ```
/// use labextract_core::AliasDictionary;
///
/// let dict = AliasDictionary::standard();
///
/// assert_eq!(dict.unit("AST"), "U/L");
/// assert!(dict.aliases("WBC").unwrap().contains(&"白血球"));
/// assert_eq!(dict.unit("not-an-item"), "");
/// ```
#[derive(Debug, Clone)]
pub struct AliasDictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<&'static str, usize>,
}

impl AliasDictionary {
    /// Returns the built-in dictionary, loaded once per process
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in tables fail validation.
    pub fn standard() -> &'static AliasDictionary {
        static DICTIONARY: OnceLock<AliasDictionary> = OnceLock::new();
        DICTIONARY.get_or_init(|| {
            AliasDictionary::from_tables(tables::STANDARD_TABLES)
                .expect("Built-in alias tables failed validation")
        })
    }

    /// Builds and validates the built-in dictionary without caching it
    pub fn try_standard() -> Result<Self> {
        Self::from_tables(tables::STANDARD_TABLES)
    }

    /// Builds a dictionary from category tables
    ///
    /// Tables may be given in any order; they are arranged by category
    /// precedence. A reduced table set is useful for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an item id appears twice
    /// - an alias is empty
    /// - two items share an alias after label cleaning
    pub fn from_tables(tables: &[CategoryTable]) -> Result<Self> {
        let mut ordered: Vec<&CategoryTable> = tables.iter().collect();
        ordered.sort_by_key(|table| table.category);

        let mut entries = Vec::new();
        let mut index = HashMap::new();
        let mut alias_owner: HashMap<String, &'static str> = HashMap::new();

        for table in ordered {
            for spec in table.items {
                if index.contains_key(spec.id) {
                    return Err(LabExtractError::DuplicateItem(spec.id.to_string()));
                }

                for alias in spec.aliases {
                    let cleaned = clean_label(alias);
                    if cleaned.is_empty() {
                        return Err(LabExtractError::EmptyAlias(spec.id.to_string()));
                    }
                    match alias_owner.get(cleaned.as_str()) {
                        Some(owner) if *owner != spec.id => {
                            return Err(LabExtractError::DictionaryIntegrity {
                                alias: alias.to_string(),
                                first: owner.to_string(),
                                second: spec.id.to_string(),
                            });
                        }
                        Some(_) => {}
                        None => {
                            alias_owner.insert(cleaned, spec.id);
                        }
                    }
                }

                index.insert(spec.id, entries.len());
                entries.push(DictionaryEntry {
                    id: spec.id,
                    category: table.category,
                    unit: spec.unit,
                    aliases: spec.aliases,
                    signed: spec.signed,
                });
            }
        }

        debug!(
            "Loaded alias dictionary: {} items, {} distinct aliases",
            entries.len(),
            alias_owner.len()
        );

        Ok(Self { entries, index })
    }

    /// Looks up an item by canonical id
    pub fn get(&self, id: &str) -> Option<&DictionaryEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Returns the alias set of an item
    pub fn aliases(&self, id: &str) -> Option<&'static [&'static str]> {
        self.get(id).map(|entry| entry.aliases)
    }

    /// Returns the canonical unit of an item, or "" when untracked or unknown
    pub fn unit(&self, id: &str) -> &'static str {
        self.get(id).map(|entry| entry.unit).unwrap_or("")
    }

    /// Whether the id is a canonical item of this dictionary
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in precedence order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Iterates over entries in precedence order
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    /// Number of canonical items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no items
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
