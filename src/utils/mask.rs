//! Span masking and splicing.
//!
//! Span indices count characters (scalar values), not bytes. Spans handed to
//! [`mask_spans`] / [`mask_spans_with`] must be ordered and non-overlapping;
//! they are applied from the end of the text backward so that the offsets of
//! earlier spans stay valid while later ones are replaced.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::Range;

/// Half-open `(start, end)` character span, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start character index (inclusive).
    pub start: usize,
    /// End character index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span { start, end }
    }
}

impl From<[usize; 2]> for Span {
    fn from([start, end]: [usize; 2]) -> Self {
        Span { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span { start: range.start, end: range.end }
    }
}

/// Replace the characters covered by `span` with `mask`, or remove them when
/// `mask` is `None`.
///
/// # Example
/// ```
/// use regex_toolkit::mask_span;
///
/// assert_eq!(mask_span("This is an example", (8, 8), Some("not ")).unwrap(), "This is not an example");
/// assert_eq!(mask_span("This is an example", (5, 7), Some("isn't")).unwrap(), "This isn't an example");
/// ```
pub fn mask_span(text: &str, span: impl Into<Span>, mask: Option<&str>) -> Result<String> {
    let span = span.into();
    let offsets = CharOffsets::new(text);
    let bytes = offsets.byte_range(span)?;

    let mut out = text.to_string();
    out.replace_range(bytes, mask.unwrap_or(""));
    Ok(out)
}

/// Remove every span from `text`.
pub fn mask_spans<I>(text: &str, spans: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Span>,
{
    let spans: Vec<Span> = spans.into_iter().map(Into::into).collect();
    splice(text, &spans, None)
}

/// Replace each span with the mask at the same position in `masks`.
///
/// # Example
/// ```
/// use regex_toolkit::mask_spans_with;
///
/// let out = mask_spans_with("This is a example", [(5, 7), (10, 10)], ["replaces part of", "insert "]).unwrap();
/// assert_eq!(out, "This replaces part of a insert example");
/// ```
pub fn mask_spans_with<I, M, S>(text: &str, spans: I, masks: M) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Span>,
    M: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let spans: Vec<Span> = spans.into_iter().map(Into::into).collect();
    let masks: Vec<S> = masks.into_iter().collect();
    if masks.len() != spans.len() {
        return Err(Error::invalid_input(format!("got {} spans but {} masks", spans.len(), masks.len())));
    }
    let masks: Vec<&str> = masks.iter().map(AsRef::as_ref).collect();
    splice(text, &spans, Some(masks.as_slice()))
}

fn splice(text: &str, spans: &[Span], masks: Option<&[&str]>) -> Result<String> {
    let offsets = CharOffsets::new(text);
    let mut byte_ranges = Vec::with_capacity(spans.len());
    for (idx, span) in spans.iter().enumerate() {
        if let Some(prev) = idx.checked_sub(1).map(|p| spans[p]) {
            if span.start < prev.end {
                return Err(Error::invalid_input(format!(
                    "span {} overlaps or precedes span {}; spans must be ordered and non-overlapping",
                    span, prev
                )));
            }
        }
        byte_ranges.push(offsets.byte_range(*span)?);
    }

    log::trace!("masking {} spans in text of {} chars", spans.len(), offsets.char_len());

    let mut out = text.to_string();
    for (idx, bytes) in byte_ranges.into_iter().enumerate().rev() {
        out.replace_range(bytes, masks.map_or("", |m| m[idx]));
    }
    Ok(out)
}

/// Character index to byte offset table for one text.
struct CharOffsets {
    /// Byte offset of every character, followed by the text length.
    bounds: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let bounds = text.char_indices().map(|(b, _)| b).chain(std::iter::once(text.len())).collect();
        CharOffsets { bounds }
    }

    fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn byte_range(&self, span: Span) -> Result<Range<usize>> {
        if span.start > span.end {
            return Err(Error::invalid_input(format!("span {} has start > end", span)));
        }
        if span.end > self.char_len() {
            return Err(Error::invalid_input(format!(
                "span {} is out of bounds for text of {} chars",
                span,
                self.char_len()
            )));
        }
        Ok(self.bounds[span.start]..self.bounds[span.end])
    }
}
