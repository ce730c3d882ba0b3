//! String predicates

/// True when the string is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Exact length check, counted in characters
pub fn has_exact_length(s: &str, len: usize) -> bool {
    s.chars().count() == len
}
