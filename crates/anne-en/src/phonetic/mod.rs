// Phonetic comparison: provider trait and the near-match rule on keys
//
// The phonetic algorithm itself is an external collaborator. The engine only
// needs a deterministic key function and an equality test; the Metaphone
// provider behind the `metaphone` feature is the default implementation.

#[cfg(feature = "metaphone")]
pub mod metaphone;

#[cfg(feature = "metaphone")]
pub use metaphone::MetaphoneProvider;

/// A source of phonetic keys.
///
/// Implementations must be deterministic: the same word always yields the
/// same key.
pub trait PhoneticProvider: Send + Sync {
    /// A normalized representation of how `word` sounds.
    fn phonetic_key(&self, word: &str) -> String;

    /// Whether two words sound the same. Defaults to key equality.
    fn phonetically_equal(&self, a: &str, b: &str) -> bool {
        self.phonetic_key(a) == self.phonetic_key(b)
    }
}

/// Loose similarity between two phonetic keys.
///
/// `a` is the key of the word being corrected, `b` the key of a candidate.
/// The candidate key may be at most one character longer (a longer `a` is not
/// rejected by length). Positions up to the shorter length are compared; a
/// differing position counts as a mismatch only when `a[i]` matches neither
/// neighbour `b[i - 1]` nor `b[i + 1]`, so a one-position drift is free. The
/// keys are similar while fewer than two mismatches were counted.
///
/// This is deliberately looser than edit distance: a misspelling and its
/// correction often encode to keys of different lengths.
pub fn near_match(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if b.len() > a.len() + 1 {
        return false;
    }

    let mut mismatches = 0;
    let len = a.len().min(b.len());
    for i in 0..len {
        if mismatches >= 2 {
            break;
        }
        if a[i] == b[i] {
            continue;
        }
        let drifted = (i > 0 && a[i] == b[i - 1]) || b.get(i + 1) == Some(&a[i]);
        if !drifted {
            mismatches += 1;
        }
    }

    mismatches < 2
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uses the uppercased spelling as the key.
    struct SpellingKey;

    impl PhoneticProvider for SpellingKey {
        fn phonetic_key(&self, word: &str) -> String {
            word.to_ascii_uppercase()
        }
    }

    #[test]
    fn default_equality_compares_keys() {
        assert!(SpellingKey.phonetically_equal("abc", "ABC"));
        assert!(!SpellingKey.phonetically_equal("abc", "abd"));
    }

    #[test]
    fn identical_keys_match() {
        assert!(near_match("0S", "0S"));
        assert!(near_match("", ""));
    }

    #[test]
    fn candidate_key_may_be_one_longer() {
        assert!(near_match("TST", "TSTS"));
        assert!(!near_match("T", "TST"));
    }

    #[test]
    fn shorter_candidate_key_is_not_rejected_by_length() {
        assert!(near_match("TSTNK", "TS"));
    }

    #[test]
    fn one_mismatch_is_tolerated() {
        assert!(near_match("ABCD", "AXCD"));
        assert!(near_match("T", "0"));
    }

    #[test]
    fn two_mismatches_are_not() {
        assert!(!near_match("ABCD", "AXYD"));
        assert!(!near_match("ABC", "XYZ"));
    }

    #[test]
    fn adjacent_drift_is_free() {
        // Swapped pair: each side finds its character one position away.
        assert!(near_match("ABCD", "ABDC"));
        // Shifted by an inserted character.
        assert!(near_match("ABC", "AXBC"));
    }
}
