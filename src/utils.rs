//! Supporting utilities.
//!
//! None of these depend on a flavor. The alternation builder uses
//! [`sort_by_len_and_alpha`]; the rest are independent helpers that are
//! commonly needed next to fragment construction.

#[path = "utils/char_range.rs"]
mod char_range;
#[path = "utils/cpoint.rs"]
mod cpoint;
#[path = "utils/mask.rs"]
mod mask;
#[path = "utils/normalize.rs"]
mod normalize;
#[path = "utils/sort.rs"]
mod sort;

pub use char_range::{CharRange, CharRangeIter, char_range, iter_char_range};
pub use cpoint::{
    DEFAULT_ZFILL, char_to_cpoint, char_to_cpoint_with, cpoint_to_char, cpoint_to_ord, ord_to_cpoint,
    ord_to_cpoint_with,
};
pub use mask::{Span, mask_span, mask_spans, mask_spans_with};
pub use normalize::to_nfc;
pub use sort::{iter_sort_by_len_and_alpha, sort_by_len_and_alpha};
