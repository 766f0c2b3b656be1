use serde::{Deserialize, Serialize};
use std::fmt;

/// One extracted lab measurement
///
/// `item` is always a canonical item identifier of the dictionary that
/// produced it, and `unit` is that item's canonical unit (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub item: String,
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    /// Creates a new Measurement
    pub fn new(item: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Whether the unit is untracked for this item
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_empty()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} = {}", self.item, self.value)
        } else {
            write!(f, "{} = {} {}", self.item, self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_unit() {
        let m = Measurement::new("AST", 64.0, "U/L");
        assert_eq!(m.to_string(), "AST = 64 U/L");
        assert!(!m.is_dimensionless());
    }

    #[test]
    fn test_display_without_unit() {
        let m = Measurement::new("pH", 7.41, "");
        assert_eq!(m.to_string(), "pH = 7.41");
        assert!(m.is_dimensionless());
    }

    #[test]
    fn test_serializes_flat() {
        let m = Measurement::new("WBC", 8500.0, "/μL");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["item"], "WBC");
        assert_eq!(json["value"], 8500.0);
        assert_eq!(json["unit"], "/μL");
    }
}
