// Phonetic filter: keep neighbours that sound like the word being corrected

use crate::phonetic::{PhoneticProvider, near_match};

use super::status::Neighbor;

/// Filters neighbours by phonetic agreement with the input word.
///
/// A neighbour survives when the provider says the two words sound the same,
/// or when their phonetic keys are similar under [`near_match`].
pub struct PhoneticFilter<'p> {
    provider: &'p dyn PhoneticProvider,
}

impl<'p> PhoneticFilter<'p> {
    pub fn new(provider: &'p dyn PhoneticProvider) -> Self {
        Self { provider }
    }

    /// Check a single neighbour against the word's precomputed key.
    pub fn accepts(&self, word: &str, word_key: &str, candidate: &str) -> bool {
        if self.provider.phonetically_equal(word, candidate) {
            return true;
        }
        near_match(word_key, &self.provider.phonetic_key(candidate))
    }

    /// Keep the neighbours of `word` that pass the filter, in their original
    /// order. An empty result means no correction is available.
    pub fn retain(&self, word: &str, neighbors: Vec<Neighbor>) -> Vec<Neighbor> {
        let word_key = self.provider.phonetic_key(word);
        neighbors
            .into_iter()
            .filter(|n| self.accepts(word, &word_key, &n.word))
            .collect()
    }
}
