use crate::listings::domain::FieldValue;

/// Constraint parsed from a numeric selection option.
enum NumericBound {
    Exactly(f64),
    AtLeast(f64),
}

fn parse_bound(selection: &str) -> Option<NumericBound> {
    let trimmed = selection.trim();
    match trimmed.strip_suffix('+') {
        Some(base) => base.trim().parse().ok().map(NumericBound::AtLeast),
        None => trimmed.parse().ok().map(NumericBound::Exactly),
    }
}

/// Bed/bath comparison: both sides coerce to numbers, and an `N+` option is
/// an at-least-N threshold. A non-numeric value on either side is a
/// mismatch, never an error.
pub(crate) fn numeric_matches(selection: &str, value: Option<&FieldValue>) -> bool {
    let Some(bound) = parse_bound(selection) else {
        return false;
    };
    let Some(actual) = value.and_then(FieldValue::as_f64) else {
        return false;
    };
    match bound {
        NumericBound::Exactly(expected) => (actual - expected).abs() < f64::EPSILON,
        NumericBound::AtLeast(minimum) => actual >= minimum,
    }
}

/// Application-fee threshold: `Yes` keeps fee-charging listings, `No` keeps
/// fee-free ones. Non-numeric fee values are excluded.
pub(crate) fn fee_matches(selection: &str, value: Option<&FieldValue>) -> bool {
    let Some(amount) = value.and_then(FieldValue::as_f64) else {
        return false;
    };
    if selection.trim().eq_ignore_ascii_case("yes") {
        amount > 0.0
    } else if selection.trim().eq_ignore_ascii_case("no") {
        amount == 0.0
    } else {
        false
    }
}

/// Accessibility free-text match: case-insensitive substring containment.
/// A missing record field never matches.
pub(crate) fn contains_matches(selection: &str, value: Option<&str>) -> bool {
    match value {
        Some(text) => text.to_lowercase().contains(&selection.to_lowercase()),
        None => false,
    }
}

/// Yes/no style match: case-insensitive exact equality after trimming.
pub(crate) fn equals_matches(selection: &str, value: Option<&str>) -> bool {
    match value {
        Some(text) => text.trim().eq_ignore_ascii_case(selection.trim()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_match_coerces_numeric_strings() {
        assert!(numeric_matches("2", Some(&FieldValue::Text("2".to_string()))));
        assert!(numeric_matches("2", Some(&FieldValue::Number(2.0))));
        assert!(!numeric_matches("2", Some(&FieldValue::Number(3.0))));
    }

    #[test]
    fn numeric_match_excludes_non_numeric_values() {
        assert!(!numeric_matches("2", Some(&FieldValue::Text("two".to_string()))));
        assert!(!numeric_matches("2", None));
    }

    #[test]
    fn plus_suffixed_option_is_a_threshold() {
        assert!(numeric_matches("4+", Some(&FieldValue::Number(4.0))));
        assert!(numeric_matches("4+", Some(&FieldValue::Text("6".to_string()))));
        assert!(!numeric_matches("4+", Some(&FieldValue::Number(3.0))));
    }

    #[test]
    fn fee_yes_requires_positive_amount() {
        assert!(fee_matches("Yes", Some(&FieldValue::Number(35.0))));
        assert!(!fee_matches("Yes", Some(&FieldValue::Number(0.0))));
        assert!(!fee_matches("Yes", Some(&FieldValue::Text("waived".to_string()))));
    }

    #[test]
    fn fee_no_requires_zero_amount() {
        assert!(fee_matches("No", Some(&FieldValue::Text("0".to_string()))));
        assert!(!fee_matches("No", Some(&FieldValue::Number(25.0))));
        assert!(!fee_matches("No", None));
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_matches("Grab Bars", Some("BATH GRAB BARS installed")));
        assert!(!contains_matches("Walk-in Shower", Some("tub only")));
        assert!(!contains_matches("Grab Bars", None));
    }

    #[test]
    fn exact_match_ignores_case_and_padding() {
        assert!(equals_matches("yes", Some("Yes ")));
        assert!(!equals_matches("yes", Some("yes, with deposit")));
        assert!(!equals_matches("yes", None));
    }
}
