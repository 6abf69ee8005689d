//! Character-class bodies with range compression.
//!
//! Sorted, deduplicated codepoints are split into maximal runs of consecutive
//! values. A run of three or more becomes `first-last`; shorter runs are
//! written out character by character. The result is not bracketed.

use super::char_escape::push_escaped;
use crate::RegexFlavor;
use std::collections::BTreeSet;

/// Minimum run length written as a range.
const MIN_RANGE_LEN: usize = 3;

pub(crate) fn make_exp<I>(chars: I, flavor: RegexFlavor) -> String
where
    I: IntoIterator<Item = char>,
{
    let sorted: BTreeSet<char> = chars.into_iter().collect();

    let mut out = String::new();
    let mut group: Vec<char> = Vec::new();
    for c in sorted {
        match group.last() {
            Some(&prev) if u32::from(prev) + 1 == u32::from(c) => group.push(c),
            Some(_) => {
                push_group(&mut out, &group, flavor);
                group.clear();
                group.push(c);
            }
            None => group.push(c),
        }
    }
    push_group(&mut out, &group, flavor);
    out
}

fn push_group(out: &mut String, group: &[char], flavor: RegexFlavor) {
    match group {
        [first, .., last] if group.len() >= MIN_RANGE_LEN => {
            push_escaped(out, *first, flavor);
            out.push('-');
            push_escaped(out, *last, flavor);
        }
        _ => {
            for &c in group {
                push_escaped(out, c, flavor);
            }
        }
    }
}
