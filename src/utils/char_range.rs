//! Inclusive character ranges.
//!
//! A [`CharRange`] is a plain value; every call to [`CharRange::iter`] starts
//! a fresh walk, so the sequence can be replayed any number of times. Ranges
//! run ascending or descending depending on which endpoint is larger.
//! Surrogate codepoints are not scalar values and are skipped.

use std::iter::FusedIterator;

/// Inclusive range between two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    first: char,
    last: char,
}

impl CharRange {
    pub fn new(first: char, last: char) -> Self {
        CharRange { first, last }
    }

    pub fn first(&self) -> char {
        self.first
    }

    pub fn last(&self) -> char {
        self.last
    }

    /// Returns true when the range walks from a higher to a lower codepoint.
    pub fn is_descending(&self) -> bool {
        self.first > self.last
    }

    pub fn iter(&self) -> CharRangeIter {
        CharRangeIter {
            next: Some(u32::from(self.first)),
            last: u32::from(self.last),
            descending: self.is_descending(),
        }
    }
}

impl IntoIterator for CharRange {
    type Item = char;
    type IntoIter = CharRangeIter;

    fn into_iter(self) -> CharRangeIter {
        self.iter()
    }
}

impl IntoIterator for &CharRange {
    type Item = char;
    type IntoIter = CharRangeIter;

    fn into_iter(self) -> CharRangeIter {
        self.iter()
    }
}

/// Iterator over a [`CharRange`].
#[derive(Debug, Clone)]
pub struct CharRangeIter {
    next: Option<u32>,
    last: u32,
    descending: bool,
}

impl Iterator for CharRangeIter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let current = self.next?;
            self.next = if current == self.last {
                None
            } else if self.descending {
                Some(current - 1)
            } else {
                Some(current + 1)
            };
            if let Some(c) = char::from_u32(current) {
                return Some(c);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let remaining = current.abs_diff(self.last) as usize + 1;
                (0, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for CharRangeIter {}

/// Lazily iterate every character from `first` to `last`, inclusive.
///
/// # Example
/// ```
/// use regex_toolkit::iter_char_range;
///
/// let range = iter_char_range('c', 'a');
/// assert_eq!(range.iter().collect::<String>(), "cba");
/// assert_eq!(range.iter().collect::<String>(), "cba");
/// ```
pub fn iter_char_range(first: char, last: char) -> CharRange {
    CharRange::new(first, last)
}

/// Every character from `first` to `last`, inclusive.
pub fn char_range(first: char, last: char) -> Vec<char> {
    CharRange::new(first, last).iter().collect()
}
