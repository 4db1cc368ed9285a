// Frequency lookup consumed by candidate generation

use anne_trie::{FrequencyTrie, Weight};

/// Read-only frequency oracle.
///
/// Candidate generators look up every edit they produce through this trait.
/// Words are passed as lowercase `char` slices.
pub trait Lexicon {
    /// The weight of `word`, `Weight::ZERO` if unknown.
    fn frequency(&self, word: &[char]) -> Weight;
}

impl Lexicon for FrequencyTrie {
    fn frequency(&self, word: &[char]) -> Weight {
        FrequencyTrie::frequency(self, word)
    }
}
