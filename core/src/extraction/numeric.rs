//! Numeric value parsing for captured measurement text

/// Parses a captured decimal, accepting full-width digits, point and minus
pub fn parse_decimal(text: &str) -> Option<f64> {
    let ascii: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '．' => '.',
            '－' | '−' => '-',
            other => other,
        })
        .collect();

    ascii.parse::<f64>().ok()
}

/// Whether a parsed value is acceptable for an item
///
/// Values must be finite; negative values are only kept for signed items.
pub fn is_acceptable(value: f64, signed: bool) -> bool {
    value.is_finite() && (signed || value >= 0.0)
}

/// Parses and validates a captured value in one step
pub fn parse_value(text: &str, signed: bool) -> Option<f64> {
    parse_decimal(text).filter(|&value| is_acceptable(value, signed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("64", Some(64.0))]
    #[case("7.41", Some(7.41))]
    #[case(" 0.05 ", Some(0.05))]
    #[case("８５００", Some(8500.0))]
    #[case("１２．５", Some(12.5))]
    #[case("-3.2", Some(-3.2))]
    #[case("abc", None)]
    #[case("", None)]
    fn test_parse_decimal(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_decimal(text), expected);
    }

    #[test]
    fn test_negative_only_for_signed() {
        assert_eq!(parse_value("-3.2", true), Some(-3.2));
        assert_eq!(parse_value("-3.2", false), None);
        assert_eq!(parse_value("3.2", false), Some(3.2));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(!is_acceptable(f64::INFINITY, true));
        assert!(!is_acceptable(f64::NAN, false));
        assert!(is_acceptable(0.0, false));
    }
}
