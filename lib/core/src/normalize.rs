//! Free-text normalization for case- and punctuation-insensitive comparison.

/// Canonicalize a query or catalog name.
///
/// Lowercases, drops every character that is not an ASCII lowercase letter,
/// ASCII digit or whitespace, then collapses whitespace runs into a single
/// space and trims both ends. Applying it twice yields the same string.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
