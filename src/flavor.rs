//! Regex flavors (dialects) and flavor resolution.
//!
//! Every public operation accepts its flavor through [`IntoFlavor`], so an
//! explicit [`RegexFlavor`], a raw integer code, or `None` (meaning "use the
//! configured default", see [`crate::config`]) all share one validation path:
//! [`resolve_flavor`].

use crate::config;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Regex engine family that produced fragments must target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegexFlavor {
    /// Backtracking engine. Any non-alphanumeric character may be escaped
    /// with a backslash.
    Re = 1,
    /// Linear-time automaton engine. Only ASCII punctuation may be escaped
    /// with a backslash; everything else uses the `\x{...}` codepoint form.
    Re2 = 2,
}

/// All defined flavors, in code order.
pub const ALL_REGEX_FLAVORS: [RegexFlavor; 2] = [RegexFlavor::Re, RegexFlavor::Re2];

impl RegexFlavor {
    /// Serialization code of this flavor.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegexFlavor::Re => "RE",
            RegexFlavor::Re2 => "RE2",
        }
    }

    /// Codes of all defined flavors, used in error messages.
    pub(crate) fn valid_codes() -> Vec<u8> {
        ALL_REGEX_FLAVORS.iter().map(|f| f.code()).collect()
    }

    fn from_code(value: i64) -> Option<Self> {
        ALL_REGEX_FLAVORS.iter().copied().find(|f| i64::from(f.code()) == value)
    }
}

impl fmt::Display for RegexFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RegexFlavor> for i64 {
    fn from(flavor: RegexFlavor) -> Self {
        i64::from(flavor.code())
    }
}

impl TryFrom<i64> for RegexFlavor {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_code(value).ok_or_else(|| Error::InvalidConfig { value, valid: Self::valid_codes() })
    }
}

impl FromStr for RegexFlavor {
    type Err = Error;

    /// Accepts a flavor name (`re`, `re2`, any case) or its numeric code.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("re") {
            return Ok(RegexFlavor::Re);
        }
        if trimmed.eq_ignore_ascii_case("re2") {
            return Ok(RegexFlavor::Re2);
        }
        match trimmed.parse::<i64>() {
            Ok(code) => RegexFlavor::try_from(code),
            Err(_) => Err(Error::invalid_input(format!(
                "unknown regex flavor {:?} (expected re, re2 or one of {:?})",
                s,
                Self::valid_codes()
            ))),
        }
    }
}

/// Conversion into a validated [`RegexFlavor`].
///
/// Implemented for [`RegexFlavor`] itself, for integer codes, and for
/// `Option<RegexFlavor>` where `None` falls back to the configured default.
pub trait IntoFlavor {
    fn into_flavor(self) -> Result<RegexFlavor>;
}

impl IntoFlavor for RegexFlavor {
    fn into_flavor(self) -> Result<RegexFlavor> {
        Ok(self)
    }
}

impl IntoFlavor for i64 {
    fn into_flavor(self) -> Result<RegexFlavor> {
        RegexFlavor::try_from(self)
    }
}

impl IntoFlavor for i32 {
    fn into_flavor(self) -> Result<RegexFlavor> {
        RegexFlavor::try_from(i64::from(self))
    }
}

impl IntoFlavor for u8 {
    fn into_flavor(self) -> Result<RegexFlavor> {
        RegexFlavor::try_from(i64::from(self))
    }
}

impl IntoFlavor for Option<RegexFlavor> {
    fn into_flavor(self) -> Result<RegexFlavor> {
        match self {
            Some(flavor) => Ok(flavor),
            None => config::resolve_default(),
        }
    }
}

/// Resolve `value` to a flavor, falling back to the configured default when
/// it is `None`.
///
/// # Example
/// ```
/// use regex_toolkit::{RegexFlavor, resolve_flavor};
///
/// assert_eq!(resolve_flavor(2).unwrap(), RegexFlavor::Re2);
/// assert!(resolve_flavor(3).is_err());
/// ```
pub fn resolve_flavor(value: impl IntoFlavor) -> Result<RegexFlavor> {
    value.into_flavor()
}
