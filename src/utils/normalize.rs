use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to Unicode Normalization Form C (canonical composition).
///
/// # Example
/// ```
/// assert_eq!(regex_toolkit::to_nfc("e\u{301}"), "é");
/// ```
pub fn to_nfc(text: &str) -> String {
    text.nfc().collect()
}
