//! Codepoint formatting.
//!
//! Codepoints are written as uppercase hexadecimal, zero-padded to
//! [`DEFAULT_ZFILL`] digits unless another width is requested. Parsing accepts
//! one to eight hex digits in either case.

use crate::error::{Error, Result};

/// Padding width that fits every scalar value.
pub const DEFAULT_ZFILL: usize = 8;

/// Ordinal to codepoint text, padded to [`DEFAULT_ZFILL`] digits.
///
/// # Example
/// ```
/// assert_eq!(regex_toolkit::ord_to_cpoint(128054), "0001F436");
/// ```
pub fn ord_to_cpoint(ordinal: u32) -> String {
    ord_to_cpoint_with(ordinal, Some(DEFAULT_ZFILL))
}

/// Ordinal to codepoint text, padded to `zfill` digits. `None` or `Some(0)`
/// disables padding; a value shorter than the hex digits never truncates.
pub fn ord_to_cpoint_with(ordinal: u32, zfill: Option<usize>) -> String {
    let hex = format!("{:X}", ordinal);
    match zfill {
        Some(width) if width > 0 => format!("{:0>width$}", hex, width = width),
        _ => hex,
    }
}

/// Character to codepoint text, padded to [`DEFAULT_ZFILL`] digits.
pub fn char_to_cpoint(c: char) -> String {
    ord_to_cpoint(u32::from(c))
}

pub fn char_to_cpoint_with(c: char, zfill: Option<usize>) -> String {
    ord_to_cpoint_with(u32::from(c), zfill)
}

/// Codepoint text to ordinal.
pub fn cpoint_to_ord(cpoint: &str) -> Result<u32> {
    if !regex!(r"^[0-9A-Fa-f]{1,8}$").is_match(cpoint) {
        return Err(Error::invalid_input(format!("{:?} is not a hexadecimal codepoint", cpoint)));
    }
    u32::from_str_radix(cpoint, 16)
        .map_err(|err| Error::invalid_input(format!("{:?} is not a hexadecimal codepoint: {}", cpoint, err)))
}

/// Codepoint text to character. Fails for values that are not Unicode
/// scalar values (surrogates, or above `10FFFF`).
pub fn cpoint_to_char(cpoint: &str) -> Result<char> {
    let ordinal = cpoint_to_ord(cpoint)?;
    char::from_u32(ordinal)
        .ok_or_else(|| Error::invalid_input(format!("codepoint {:?} is not a Unicode scalar value", cpoint)))
}
