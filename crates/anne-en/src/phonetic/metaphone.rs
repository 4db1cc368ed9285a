// Metaphone phonetic provider backed by rphonetic

use rphonetic::{Encoder, Metaphone};

use super::PhoneticProvider;

/// Default maximum length of a Metaphone key.
pub const DEFAULT_MAX_KEY_LEN: usize = 8;

/// Phonetic keys from the original Metaphone algorithm.
///
/// Apostrophes and any other non-letters are dropped before encoding, so
/// "don't" and "dont" share a key.
pub struct MetaphoneProvider {
    encoder: Metaphone,
}

impl MetaphoneProvider {
    /// Create a provider with [`DEFAULT_MAX_KEY_LEN`].
    pub fn new() -> Self {
        Self::with_max_key_len(DEFAULT_MAX_KEY_LEN)
    }

    /// Create a provider producing keys of at most `max_key_len` characters.
    pub fn with_max_key_len(max_key_len: usize) -> Self {
        Self {
            encoder: Metaphone::new(Some(max_key_len)),
        }
    }
}

impl Default for MetaphoneProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticProvider for MetaphoneProvider {
    fn phonetic_key(&self, word: &str) -> String {
        let letters: String = word.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.is_empty() {
            return String::new();
        }
        self.encoder.encode(&letters)
    }
}
