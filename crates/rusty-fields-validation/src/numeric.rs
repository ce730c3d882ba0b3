//! Numeric predicates

/// Parses a string as a number the lenient way form inputs need:
/// surrounding whitespace is ignored and a blank string reads as zero.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// True when the string parses as a number
pub fn is_numeric(s: &str) -> bool {
    parse_number(s).is_some()
}

/// Strictly positive check
pub fn is_greater_than_zero(n: f64) -> bool {
    n > 0.0
}
