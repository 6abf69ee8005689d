use crate::error::{Error, Result};
use crate::engine;
use crate::flavor::{IntoFlavor, resolve_flavor};

/// Create an expression that exactly matches one character.
///
/// # Example
/// ```
/// use regex_toolkit::{RegexFlavor, escape};
///
/// assert_eq!(escape('a', RegexFlavor::Re).unwrap(), "a");
/// assert_eq!(escape('.', RegexFlavor::Re).unwrap(), r"\.");
/// assert_eq!(escape('/', RegexFlavor::Re).unwrap(), r"\/");
///
/// assert_eq!(escape('.', RegexFlavor::Re2).unwrap(), r"\.");
/// assert_eq!(escape('/', RegexFlavor::Re2).unwrap(), r"\x{002f}");
/// ```
pub fn escape(c: char, flavor: impl IntoFlavor) -> Result<String> {
    let flavor = resolve_flavor(flavor)?;
    Ok(engine::escape_char(c, flavor))
}

/// Like [`escape`], for a string that must hold exactly one scalar value.
///
/// Grapheme clusters made of several codepoints (`"e\u{301}"`) are rejected.
pub fn escape_str(s: &str, flavor: impl IntoFlavor) -> Result<String> {
    let flavor = resolve_flavor(flavor)?;
    let c = single_char(s)?;
    Ok(engine::escape_char(c, flavor))
}

/// Create an expression that exactly matches a string.
///
/// # Example
/// ```
/// use regex_toolkit::{RegexFlavor, string_as_exp};
///
/// assert_eq!(string_as_exp("example.com", RegexFlavor::Re).unwrap(), r"example\.com");
/// assert_eq!(string_as_exp("a b", RegexFlavor::Re2).unwrap(), r"a\x{0020}b");
/// ```
pub fn string_as_exp(text: &str, flavor: impl IntoFlavor) -> Result<String> {
    let flavor = resolve_flavor(flavor)?;
    Ok(engine::string_as_exp(text, flavor))
}

/// Create an expression that exactly matches any one of `texts`.
///
/// Duplicates are ignored and the output does not depend on input order:
/// alternatives are placed longest first, ties broken lexicographically.
///
/// # Example
/// ```
/// use regex_toolkit::{RegexFlavor, strings_as_exp};
///
/// let exp = strings_as_exp(["apple", "banana", "cherry"], RegexFlavor::Re).unwrap();
/// assert_eq!(exp, "banana|cherry|apple");
/// ```
pub fn strings_as_exp<I, S>(texts: I, flavor: impl IntoFlavor) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let flavor = resolve_flavor(flavor)?;
    Ok(engine::strings_as_exp(texts, flavor))
}

/// Create a character-class body that exactly matches the given characters.
///
/// Characters are sorted and runs of three or more consecutive codepoints
/// are written as ranges. The result is not wrapped in `[...]`, so it can be
/// combined with other class items.
///
/// # Example
/// ```
/// use regex_toolkit::{RegexFlavor, make_exp};
///
/// let exp = make_exp(['a', 'b', 'c', 'z', 'y', 'x'], RegexFlavor::Re).unwrap();
/// assert_eq!(format!("[{exp}]"), "[a-cx-z]");
/// ```
pub fn make_exp<I>(chars: I, flavor: impl IntoFlavor) -> Result<String>
where
    I: IntoIterator<Item = char>,
{
    let flavor = resolve_flavor(flavor)?;
    Ok(engine::make_exp(chars, flavor))
}

/// Like [`make_exp`], for string elements that must each hold exactly one
/// scalar value.
pub fn make_exp_strs<I, S>(chars: I, flavor: impl IntoFlavor) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let flavor = resolve_flavor(flavor)?;
    let chars = chars.into_iter().map(|s| single_char(s.as_ref())).collect::<Result<Vec<char>>>()?;
    Ok(engine::make_exp(chars, flavor))
}

/// The single scalar value held by `s`.
///
/// Fails with [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput)
/// when `s` is empty or holds more than one scalar value. String-typed entry
/// points validate their characters through this.
///
/// # Example
/// ```
/// use regex_toolkit::single_char;
///
/// assert_eq!(single_char("é").unwrap(), 'é');
/// assert!(single_char("e\u{301}").is_err());
/// ```
pub fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::invalid_input(format!(
            "expected exactly one character, but {:?} has {} characters",
            s,
            s.chars().count()
        ))),
    }
}
