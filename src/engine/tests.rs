//! Engine-backed checks: fragments are compiled with a real regex engine of
//! the matching family and anchored to a full match.
//!
//! `regex` is the linear-time engine used for `RE2` fragments; `fancy_regex`
//! is the backtracking engine used for `RE` fragments.

use super::classify::{ALWAYS_ESCAPE, ASCII_LETTERS, DIGITS};
use super::{escape_char, make_exp, string_as_exp, strings_as_exp};
use crate::RegexFlavor;

const NON_ASCII_CHARS: &str = "🅰🅱🅾🅿🆎🆑🆒🆓°±²éñß€✓中文😀🌀🌅\u{00a0}\u{2028}\u{10ffff}";

fn full_match(exp: &str, text: &str, flavor: RegexFlavor) -> bool {
    let anchored = format!("^(?:{})$", exp);
    match flavor {
        RegexFlavor::Re => fancy_regex::Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("RE pattern {anchored:?} failed to compile: {e}"))
            .is_match(text)
            .unwrap(),
        RegexFlavor::Re2 => regex::Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("RE2 pattern {anchored:?} failed to compile: {e}"))
            .is_match(text),
    }
}

fn assert_matches_exactly(exp: &str, text: &str, flavor: RegexFlavor) {
    assert!(full_match(exp, text, flavor), "{flavor} pattern {exp:?} does not match {text:?}");
    let doubled = format!("{text}{text}");
    assert!(!full_match(exp, &doubled, flavor), "{flavor} pattern {exp:?} also matches {doubled:?}");
    if text != "x" {
        assert!(!full_match(exp, "x", flavor), "{flavor} pattern {exp:?} also matches \"x\"");
    }
}

fn punctuation_escapes() -> impl Iterator<Item = char> {
    ALWAYS_ESCAPE.chars().filter(char::is_ascii_punctuation)
}

#[test]
fn safe_characters_match_themselves() {
    for flavor in crate::ALL_REGEX_FLAVORS {
        for c in DIGITS.chars().chain(ASCII_LETTERS.chars()) {
            let exp = escape_char(c, flavor);
            assert_eq!(exp, c.to_string());
            assert_matches_exactly(&exp, &exp, flavor);
        }
    }
}

#[test]
fn metacharacters_are_backslashed_in_both_flavors() {
    for flavor in crate::ALL_REGEX_FLAVORS {
        for c in punctuation_escapes() {
            let exp = escape_char(c, flavor);
            assert_eq!(exp, format!("\\{c}"));
            assert_matches_exactly(&exp, &c.to_string(), flavor);
        }
    }
}

#[test]
fn every_ascii_character_round_trips_in_re2() {
    for c in (0u8..128).map(char::from) {
        let exp = escape_char(c, RegexFlavor::Re2);
        assert_matches_exactly(&exp, &c.to_string(), RegexFlavor::Re2);
    }
}

#[test]
fn non_ascii_characters_use_codepoints_in_re2() {
    for c in NON_ASCII_CHARS.chars() {
        let exp = escape_char(c, RegexFlavor::Re2);
        let padded = format!("{:08x}", u32::from(c));
        let expected = format!("\\x{{{}}}", padded.strip_prefix("0000").unwrap_or(padded.as_str()));
        assert_eq!(exp, expected);
        assert_matches_exactly(&exp, &c.to_string(), RegexFlavor::Re2);
    }
}

#[test]
fn non_ascii_characters_are_backslashed_in_re() {
    for c in NON_ASCII_CHARS.chars() {
        let exp = escape_char(c, RegexFlavor::Re);
        assert_eq!(exp, format!("\\{c}"));
        assert_matches_exactly(&exp, &c.to_string(), RegexFlavor::Re);
    }
}

#[test]
fn always_escaped_characters_match_themselves() {
    for flavor in crate::ALL_REGEX_FLAVORS {
        for c in ALWAYS_ESCAPE.chars() {
            let exp = escape_char(c, flavor);
            assert_matches_exactly(&exp, &c.to_string(), flavor);
        }
    }
}

#[test]
fn strings_match_exactly() {
    let texts = [
        "http://www.example.com",
        "C:\\Program Files (x86)\\",
        "a+b=c? [yes] {no} ^$ |~&#-",
        "tab\tnew\nline\r\x0b\x0c end",
        "naïve café 🐶",
        "",
    ];
    for flavor in crate::ALL_REGEX_FLAVORS {
        for text in texts {
            let exp = string_as_exp(text, flavor);
            assert!(full_match(&exp, text, flavor), "{flavor} {exp:?} vs {text:?}");
            if !text.is_empty() {
                assert!(!full_match(&exp, &text[1..], flavor), "{flavor} {exp:?} matches a suffix of {text:?}");
            }
        }
    }

    let joined: String = punctuation_escapes().collect();
    let exp = string_as_exp(&joined, RegexFlavor::Re);
    assert_eq!(exp, joined.chars().map(|c| format!("\\{c}")).collect::<String>());
    assert_matches_exactly(&exp, &joined, RegexFlavor::Re);
}

#[test]
fn alternation_matches_every_member_and_nothing_else() {
    let members = ["foo", "foo.bar", "fo", "a|b", "(x)", "🐶", "[]", "a b", "°C"];
    let outsiders = ["foo.", "a", "b", "x", "fooXbar", "foo.bar.", "(x", "", "🐶🐶", "ab", "°"];

    for flavor in crate::ALL_REGEX_FLAVORS {
        let exp = strings_as_exp(members, flavor);
        for member in members {
            assert!(full_match(&exp, member, flavor), "{flavor} {exp:?} does not match {member:?}");
        }
        for outsider in outsiders {
            assert!(!full_match(&exp, outsider, flavor), "{flavor} {exp:?} matches {outsider:?}");
        }
    }
}

#[test]
fn alternation_is_deterministic_across_input_orders() {
    let mut texts = vec!["pear", "fig", "plum", "kiwi", "apple", "fig", "date"];
    let first = strings_as_exp(&texts, RegexFlavor::Re);
    texts.reverse();
    assert_eq!(strings_as_exp(&texts, RegexFlavor::Re), first);
    texts.sort();
    assert_eq!(strings_as_exp(&texts, RegexFlavor::Re), first);
    assert_eq!(first, "apple|date|kiwi|pear|plum|fig");
}

#[test]
fn character_class_bodies_match_exactly_their_members() {
    let members: Vec<char> = "abcdexz0123.-,°±²😀 \t".chars().collect();
    let expected = [
        (RegexFlavor::Re, "\\\t\\ \\,-\\.0-3a-exz\\°-\\²\\😀"),
        (RegexFlavor::Re2, r"\x{0009}\x{0020}\x{002c}-\.0-3a-exz\x{00b0}-\x{00b2}\x{0001f600}"),
    ];
    for (flavor, body) in expected {
        let exp = make_exp(members.iter().copied(), flavor);
        assert_eq!(exp, body);

        let class = format!("[{exp}]");
        for c in (0u32..0x300).chain([0x1f5ff, 0x1f600, 0x1f601]).filter_map(char::from_u32) {
            let expected = members.contains(&c);
            assert_eq!(full_match(&class, &c.to_string(), flavor), expected, "{flavor} char {c:?} in {class:?}");
        }
    }

    let ascii: Vec<char> = "abcxyz0189".chars().collect();
    let class = format!("[{}]", make_exp(ascii.iter().copied(), RegexFlavor::Re));
    assert_eq!(class, "[0189a-cx-z]");
}
