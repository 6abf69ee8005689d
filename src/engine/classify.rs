//! Character classification.
//!
//! Only ASCII characters carry classes; every non-ASCII codepoint classifies
//! as [`CharClass::empty()`] and falls through to the flavor's fallback.
//!
//! ## Invariants
//!
//! - `SAFE` and `ALWAYS_ESCAPE` never overlap.
//! - `PUNCTUATION` is exactly `char::is_ascii_punctuation`.

use once_cell::sync::Lazy;

/// ASCII digits.
pub const DIGITS: &str = "0123456789";

/// ASCII letters, lowercase then uppercase.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Metacharacters and whitespace controls that the backtracking flavor always
/// escapes with a backslash.
pub const ALWAYS_ESCAPE: &str = "()[]{}?*+-|^$\\.&~# \t\n\r\x0b\x0c";

bitflags::bitflags! {
    /// Escaping-relevant properties of a character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// ASCII letter or digit; matches itself in every flavor.
        const SAFE          = 1 << 0;
        /// Member of [`ALWAYS_ESCAPE`].
        const ALWAYS_ESCAPE = 1 << 1;
        /// ASCII punctuation.
        const PUNCTUATION   = 1 << 2;
    }
}

static ASCII_CLASSES: Lazy<[CharClass; 128]> = Lazy::new(|| {
    let mut table = [CharClass::empty(); 128];
    for c in DIGITS.chars().chain(ASCII_LETTERS.chars()) {
        table[c as usize] |= CharClass::SAFE;
    }
    for c in ALWAYS_ESCAPE.chars() {
        table[c as usize] |= CharClass::ALWAYS_ESCAPE;
    }
    for (b, class) in table.iter_mut().enumerate() {
        if (b as u8).is_ascii_punctuation() {
            *class |= CharClass::PUNCTUATION;
        }
    }
    table
});

/// Classify a single character.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() { ASCII_CLASSES[c as usize] } else { CharClass::empty() }
}
