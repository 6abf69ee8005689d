use super::char_escape::push_escaped;
use crate::RegexFlavor;
use crate::utils::sort_by_len_and_alpha;
use std::collections::BTreeSet;

/// Escape every character of `text`, preserving order.
pub(crate) fn string_as_exp(text: &str, flavor: RegexFlavor) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c, flavor);
    }
    out
}

/// Build an alternation matching any one of `texts`.
///
/// Duplicates are dropped. Alternatives are ordered longest first (in scalar
/// values) so a shorter alternative never pre-empts a longer one sharing its
/// prefix; equal lengths are ordered lexicographically by codepoint.
pub(crate) fn strings_as_exp<I, S>(texts: I, flavor: RegexFlavor) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = texts.into_iter().collect();
    let unique: BTreeSet<&str> = owned.iter().map(AsRef::as_ref).collect();

    if unique.len() > 1 && unique.iter().all(|t| t.chars().count() == 1) {
        log::debug!("all {} alternatives are single characters; make_exp gives a shorter expression", unique.len());
    }

    sort_by_len_and_alpha(unique, false)
        .into_iter()
        .map(|text| string_as_exp(text, flavor))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_escapes_each_character_in_order() {
        assert_eq!(string_as_exp("", RegexFlavor::Re), "");
        assert_eq!(string_as_exp("abc", RegexFlavor::Re2), "abc");
        assert_eq!(string_as_exp("http://www.example.com", RegexFlavor::Re), r"http\:\/\/www\.example\.com");
        assert_eq!(
            string_as_exp("http://www.example.com", RegexFlavor::Re2),
            r"http\x{003a}\x{002f}\x{002f}www\.example\.com"
        );
    }

    #[test]
    fn alternation_orders_longest_first_then_alphabetically() {
        let fruits = ["apple", "banana", "cherry"];
        assert_eq!(strings_as_exp(fruits, RegexFlavor::Re), "banana|cherry|apple");
        assert_eq!(strings_as_exp(fruits, RegexFlavor::Re2), "banana|cherry|apple");

        assert_eq!(strings_as_exp(["z", "a", "zz", "aa", "zzz", "aaa"], RegexFlavor::Re), "aaa|zzz|aa|zz|a|z");
    }

    #[test]
    fn alternation_deduplicates_and_is_order_independent() {
        let forward = strings_as_exp(vec!["a.b", "c", "a.b", "dd"], RegexFlavor::Re);
        let backward = strings_as_exp(vec!["dd", "c", "a.b"], RegexFlavor::Re);
        assert_eq!(forward, r"a\.b|dd|c");
        assert_eq!(forward, backward);
    }

    #[test]
    fn alternation_length_counts_scalar_values() {
        // "éé" is four bytes but two scalar values, shorter than "abc".
        assert_eq!(strings_as_exp(["éé", "abc"], RegexFlavor::Re2), r"abc|\x{00e9}\x{00e9}");
    }

    #[test]
    fn empty_collection_is_empty_expression() {
        assert_eq!(strings_as_exp(Vec::<String>::new(), RegexFlavor::Re), "");
        assert_eq!(strings_as_exp([""], RegexFlavor::Re), "");
    }
}
