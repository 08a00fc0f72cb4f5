//! Database operations for the two entity tables.
//!
//! Every function takes a `&mut PgConnection` checked out by the caller, so
//! a request holds its connection for exactly one operation and tests can
//! hand in whatever connection they like. Nothing here maps errors to HTTP;
//! that happens at the API boundary.

pub mod ingredients;
pub mod recipes;

/// Escape LIKE wildcards so user-supplied terms match literally inside an
/// ILIKE pattern.
pub(crate) fn like_escape(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_escape_passes_plain_text() {
        assert_eq!(like_escape("chocolate"), "chocolate");
        assert_eq!(like_escape("green beans"), "green beans");
    }

    #[test]
    fn test_like_escape_neutralizes_wildcards() {
        assert_eq!(like_escape("100%"), "100\\%");
        assert_eq!(like_escape("a_b"), "a\\_b");
        assert_eq!(like_escape("back\\slash"), "back\\\\slash");
    }
}
