//! Error path construction
//!
//! Paths are always string segments, so list indices are stringified and any
//! error location can be addressed the same way regardless of nesting kind.

/// `path` extended with a field name
pub fn child(path: &[String], name: &str) -> Vec<String> {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(name.to_string());
    next
}

/// `path` extended with a list index
pub fn element(path: &[String], index: usize) -> Vec<String> {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(index.to_string());
    next
}

/// Dotted rendering, used in schema error locations and log lines
pub fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
