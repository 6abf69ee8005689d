use super::classify::{CharClass, classify};
use crate::RegexFlavor;
use std::fmt::Write;

/// Escape a single character for `flavor`.
pub(crate) fn escape_char(c: char, flavor: RegexFlavor) -> String {
    let mut out = String::new();
    push_escaped(&mut out, c, flavor);
    out
}

/// Append the fragment matching exactly `c` to `out`.
pub(crate) fn push_escaped(out: &mut String, c: char, flavor: RegexFlavor) {
    let class = classify(c);
    if class.contains(CharClass::SAFE) {
        out.push(c);
        return;
    }

    match flavor {
        // The backtracking engine accepts a backslash before any literal.
        RegexFlavor::Re => push_backslashed(out, c),
        RegexFlavor::Re2 if class.contains(CharClass::ALWAYS_ESCAPE | CharClass::PUNCTUATION) => {
            push_backslashed(out, c)
        }
        RegexFlavor::Re2 => push_codepoint(out, c),
    }
}

fn push_backslashed(out: &mut String, c: char) {
    out.push('\\');
    out.push(c);
}

/// `\x{...}` with eight lowercase hex digits, minus one leading `0000`.
fn push_codepoint(out: &mut String, c: char) {
    let padded = format!("{:08x}", u32::from(c));
    let digits = padded.strip_prefix("0000").unwrap_or(padded.as_str());
    // Writing to a String cannot fail.
    let _ = write!(out, "\\x{{{}}}", digits);
}
