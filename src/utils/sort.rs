use std::cmp::Reverse;

/// Iterate `texts` ordered longest first (in scalar values), then
/// lexicographically by codepoint.
///
/// With `reverse`, the order flips: shortest first, then reverse
/// lexicographic.
pub fn iter_sort_by_len_and_alpha<I, S>(texts: I, reverse: bool) -> std::vec::IntoIter<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sort_by_len_and_alpha(texts, reverse).into_iter()
}

/// Collect `texts` in the order described by [`iter_sort_by_len_and_alpha`].
///
/// # Example
/// ```
/// use regex_toolkit::sort_by_len_and_alpha;
///
/// let sorted = sort_by_len_and_alpha(["z", "a", "zz", "aa", "zzz", "aaa"], false);
/// assert_eq!(sorted, ["aaa", "zzz", "aa", "zz", "a", "z"]);
/// ```
pub fn sort_by_len_and_alpha<I, S>(texts: I, reverse: bool) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<S> = texts.into_iter().collect();
    sorted.sort_by_cached_key(|text| {
        let text = text.as_ref();
        (Reverse(text.chars().count()), text.to_owned())
    });
    // Items with equal keys are equal strings, so reversing the whole vector
    // is exactly the reversed ordering.
    if reverse {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_first_then_alphabetical() {
        assert_eq!(sort_by_len_and_alpha(["a", "aa", "aaa"], false), ["aaa", "aa", "a"]);
        assert_eq!(sort_by_len_and_alpha(["c", "a", "b"], false), ["a", "b", "c"]);
        assert_eq!(
            sort_by_len_and_alpha(vec!["strawberry", "fig", "blueberry", "blackberry", "plum", "apple"], false),
            ["blackberry", "strawberry", "blueberry", "apple", "plum", "fig"]
        );
    }

    #[test]
    fn reversed_order() {
        assert_eq!(sort_by_len_and_alpha(["z", "a", "zz", "aa"], true), ["z", "a", "zz", "aa"]);
        let iterated: Vec<String> =
            iter_sort_by_len_and_alpha(vec!["bb".to_string(), "a".to_string(), "ccc".to_string()], true).collect();
        assert_eq!(iterated, ["a", "bb", "ccc"]);
    }

    #[test]
    fn length_is_measured_in_scalar_values() {
        assert_eq!(sort_by_len_and_alpha(["ab", "ééé"], false), ["ééé", "ab"]);
    }
}
