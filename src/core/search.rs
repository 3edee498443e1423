//! core::search
//!
//! Case-insensitive key search.

/// Byte offsets of every non-overlapping, ASCII case-insensitive match of
/// `needle` in `haystack`.
///
/// An empty needle matches nothing.
///
/// ```
/// use herofig::core::search::substring_search;
///
/// assert_eq!(substring_search("A_A_KEY", "a"), vec![0, 2]);
/// assert!(substring_search("SOME_KEY", "NOT_HERE").is_empty());
/// ```
pub fn substring_search(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    // ASCII lowering keeps byte offsets aligned with the original string.
    let haystack = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();

    haystack
        .match_indices(needle.as_str())
        .map(|(index, _)| index)
        .collect()
}
