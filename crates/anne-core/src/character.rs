// Character classification and the word token pattern

use crate::enums::{MAX_WORD_CHARS, MIN_WORD_CHARS};

/// The lowercase letters used for replacement and insertion edits.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Apostrophe, the only non-letter allowed inside a word.
pub const APOSTROPHE: char = '\'';

// ---------------------------------------------------------------------------
// Word characters
// ---------------------------------------------------------------------------

/// Check whether a character may appear in a word token (ASCII letter of
/// either case, or apostrophe).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == APOSTROPHE
}

/// Check whether a character may appear as a key in the frequency trie
/// (lowercase ASCII letter or apostrophe).
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == APOSTROPHE
}

/// Check whether a string matches the word token pattern.
///
/// A word is longer than one character, at most [`MAX_WORD_CHARS`]
/// characters, and contains only ASCII letters and apostrophes.
pub fn is_word(token: &str) -> bool {
    let mut len = 0;
    for c in token.chars() {
        if !is_word_char(c) {
            return false;
        }
        len += 1;
        if len > MAX_WORD_CHARS {
            return false;
        }
    }
    len >= MIN_WORD_CHARS
}

/// Check whether a character slice matches the word token pattern.
pub fn is_word_chars(word: &[char]) -> bool {
    (MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&word.len()) && word.iter().all(|&c| is_word_char(c))
}

/// Lowercase a word into the character sequence used for trie lookups.
pub fn key_chars(word: &str) -> Vec<char> {
    word.chars().map(simple_lower).collect()
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The word pattern is ASCII-only, so case mapping is the one-to-one ASCII
// mapping; anything else is returned unchanged.
// ---------------------------------------------------------------------------

/// Convert a character to lowercase (ASCII only).
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Convert a character to uppercase (ASCII only).
pub fn simple_upper(c: char) -> char {
    c.to_ascii_uppercase()
}

/// Check whether a character is an uppercase ASCII letter.
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Check whether a character is a lowercase ASCII letter.
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Check whether a character separates tokens.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn alphabet_is_sorted_lowercase_ascii() {
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
        assert!(ALPHABET.iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('\''));
        assert!(!is_word_char('1'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\u{00E4}')); // ä
    }

    #[test]
    fn key_chars_are_lowercase_only() {
        assert!(is_key_char('q'));
        assert!(is_key_char('\''));
        assert!(!is_key_char('Q'));
        assert!(!is_key_char('_'));
    }

    #[test]
    fn words_need_two_characters() {
        assert!(!is_word(""));
        assert!(!is_word("a"));
        assert!(!is_word("I"));
        assert!(is_word("is"));
        assert!(is_word("I'm"));
    }

    #[test]
    fn words_reject_digits_and_punctuation() {
        assert!(!is_word("1"));
        assert!(!is_word("abc1"));
        assert!(!is_word("end."));
        assert!(!is_word("well-known"));
        assert!(!is_word("caf\u{00E9}"));
    }

    #[test]
    fn words_have_an_upper_bound() {
        let long = "a".repeat(MAX_WORD_CHARS);
        assert!(is_word(&long));
        let too_long = "a".repeat(MAX_WORD_CHARS + 1);
        assert!(!is_word(&too_long));
    }

    #[test]
    fn char_slice_pattern_matches_str_pattern() {
        for w in ["is", "I'm", "a", "x1", "", "don't"] {
            assert_eq!(is_word(w), is_word_chars(&chars(w)), "mismatch for {w:?}");
        }
    }

    #[test]
    fn key_chars_lowercases() {
        assert_eq!(key_chars("Don'T"), chars("don't"));
    }

    #[test]
    fn case_helpers() {
        assert!(is_upper('A'));
        assert!(!is_upper('a'));
        assert!(is_lower('a'));
        assert!(!is_lower('\''));
        assert_eq!(simple_upper('x'), 'X');
        assert_eq!(simple_lower('X'), 'x');
        assert_eq!(simple_lower('\''), '\'');
    }

    #[test]
    fn whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('a'));
    }
}
