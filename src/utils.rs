//! Common utility functions shared across the codebase.

/// Length of `text` in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Checks if every cased character in `text` is upper case.
///
/// Requires at least one cased character, so digits and punctuation alone are
/// not upper case. Title-case letters count as cased but not upper case.
///
/// # Examples
///
/// ```
/// use samecheck::utils::is_upper;
///
/// assert!(is_upper("OK"));
/// assert!(is_upper("SMS 2"));
/// assert!(is_upper("ÉTÉ"));
/// assert!(!is_upper("Ok"));
/// assert!(!is_upper("123"));
/// assert!(!is_upper(""));
/// ```
pub fn is_upper(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() || c.to_uppercase().ne(std::iter::once(c)) {
            // Lower case, or title case like `ǅ`
            return false;
        }
    }
    has_upper
}
