//! Fragment construction engine.
//!
//! This module turns literal characters and strings into regex fragments that
//! match them exactly. Everything here is pure: flavors are already resolved
//! by the time a call reaches this module (see `api.rs`), so nothing can fail.
//!
//! ## How the parts work together
//!
//! ```text
//! char ── classify (classify.rs) ── CharClass
//!                                      │
//!                       push_escaped (char_escape.rs)
//!                         - SAFE        -> as-is
//!                         - RE          -> \c
//!                         - RE2 + punct -> \c
//!                         - RE2 other   -> \x{...}
//!                                      │
//!            ┌─────────────────────────┼────────────────────────┐
//!            v                         v                        v
//!   string_as_exp              strings_as_exp               make_exp
//!   (alternation.rs)           (alternation.rs)             (ranges.rs)
//!   concat per char            dedup, longest first,        sort codepoints,
//!                              join with `|`                runs of 3+ -> a-z
//! ```
//!
//! ## Responsibilities by module
//!
//! - `classify.rs`: partitions codepoints into safe / always-escape /
//!   punctuation classes through a lazily built ASCII table.
//! - `char_escape.rs`: the per-flavor escaping policy for one character.
//! - `alternation.rs`: strings and sets of strings.
//! - `ranges.rs`: character-class bodies with range compression.

#[path = "engine/alternation.rs"]
mod alternation;
#[path = "engine/char_escape.rs"]
mod char_escape;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/ranges.rs"]
mod ranges;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub(crate) use alternation::{string_as_exp, strings_as_exp};
pub(crate) use char_escape::escape_char;
pub use classify::{ALWAYS_ESCAPE, ASCII_LETTERS, CharClass, DIGITS, classify};
pub(crate) use ranges::make_exp;
