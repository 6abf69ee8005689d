//! Build regular-expression fragments that match literal text exactly.
//!
//! Two regex engine families ("flavors") are supported:
//!
//! - [`RegexFlavor::Re`]: a backtracking engine that accepts a backslash
//!   before any literal character.
//! - [`RegexFlavor::Re2`]: a linear-time automaton engine that only accepts
//!   backslash escapes of ASCII punctuation; other characters are written as
//!   `\x{...}` codepoints.
//!
//! The core operations are [`escape`], [`string_as_exp`], [`strings_as_exp`]
//! and [`make_exp`]. Fragments are not anchored or grouped; callers embed them
//! into larger patterns.
//!
//! ```
//! use regex_toolkit::{RegexFlavor, make_exp, strings_as_exp};
//!
//! let alternation = strings_as_exp(["a.b", "a"], RegexFlavor::Re2).unwrap();
//! assert_eq!(alternation, r"a\.b|a");
//!
//! let class = make_exp("fedcba".chars(), RegexFlavor::Re2).unwrap();
//! assert_eq!(format!("[{class}]"), "[a-f]");
//! ```

#[macro_use]
mod macros;
mod api;
pub mod config;
mod engine;
mod error;
mod flavor;
mod utils;

pub use api::{escape, escape_str, make_exp, make_exp_strs, single_char, string_as_exp, strings_as_exp};
pub use engine::{ALWAYS_ESCAPE, ASCII_LETTERS, CharClass, DIGITS, classify};
pub use error::{Error, ErrorKind, Result};
pub use flavor::{ALL_REGEX_FLAVORS, IntoFlavor, RegexFlavor, resolve_flavor};
pub use utils::{
    CharRange, CharRangeIter, DEFAULT_ZFILL, Span, char_range, char_to_cpoint, char_to_cpoint_with, cpoint_to_char,
    cpoint_to_ord, iter_char_range, iter_sort_by_len_and_alpha, mask_span, mask_spans, mask_spans_with,
    ord_to_cpoint, ord_to_cpoint_with, sort_by_len_and_alpha, to_nfc,
};
