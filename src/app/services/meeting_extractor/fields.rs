//! Field normalization utilities
//!
//! Small helpers shared by the header, race-block and participant parsers
//! for turning raw captured text into normalized field values.

/// Normalize a numeric capture to a canonical integer string
///
/// Strips every non-digit character (thousands separators, stray spaces) and
/// re-renders the value without leading zeros, so "1.200 " becomes "1200".
/// Returns `None` when the input carries no digits at all.
pub fn normalize_int(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok().map(|n| n.to_string())
}

/// Normalize a numeric capture, defaulting to an empty string
///
/// Missing numeric fields are an expected condition; this is the non-fatal
/// variant used when the value flows straight into a model field.
pub fn normalize_int_or_empty(raw: &str) -> String {
    normalize_int(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_int_strips_separators() {
        assert_eq!(normalize_int("1.200 "), Some("1200".to_string()));
        assert_eq!(normalize_int("$100.000"), Some("100000".to_string()));
        assert_eq!(normalize_int("12"), Some("12".to_string()));
    }

    #[test]
    fn test_normalize_int_drops_leading_zeros() {
        assert_eq!(normalize_int("056"), Some("56".to_string()));
    }

    #[test]
    fn test_normalize_int_no_digits() {
        assert_eq!(normalize_int("Mts."), None);
        assert_eq!(normalize_int(""), None);
        assert_eq!(normalize_int_or_empty("abc"), "");
    }
}
