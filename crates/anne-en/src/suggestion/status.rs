// Suggestion status: deduplication of generated edits and kept neighbours

use anne_trie::Weight;
use hashbrown::HashSet;

use crate::lexicon::Lexicon;

/// A generated edit that the lexicon knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// The neighbouring word (lowercase).
    pub word: String,
    /// Its raw frequency, always positive.
    pub frequency: Weight,
}

/// Tracks the state of candidate generation for one word: which edits have
/// been looked up, which were kept, and their summed frequency.
///
/// Every distinct edit is looked up exactly once; producing the same string
/// through two different edit operations counts once, in the position of its
/// first generation.
pub struct SuggestionStatus<'a> {
    /// The word for which neighbours are being generated (lowercase chars).
    word: &'a [char],
    /// Strings already looked up.
    seen: HashSet<String>,
    /// Kept neighbours in generation order.
    neighbors: Vec<Neighbor>,
    /// Sum of the kept frequencies.
    mass: Weight,
}

impl<'a> SuggestionStatus<'a> {
    /// Create a new status for the given word.
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            seen: HashSet::new(),
            neighbors: Vec::new(),
            mass: Weight::ZERO,
        }
    }

    /// Look up a candidate buffer and keep it if the lexicon knows it.
    ///
    /// Buffers already seen are skipped without a lookup.
    pub fn consider(&mut self, lexicon: &dyn Lexicon, buffer: &[char]) {
        let candidate: String = buffer.iter().collect();
        if self.seen.contains(&candidate) {
            return;
        }
        let frequency = lexicon.frequency(buffer);
        self.seen.insert(candidate.clone());
        if frequency.is_positive() {
            self.mass = self.mass.saturating_add(frequency);
            self.neighbors.push(Neighbor {
                word: candidate,
                frequency,
            });
        }
    }

    /// Return the word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    /// Return the word length.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Number of distinct edits looked up so far.
    pub fn lookup_count(&self) -> usize {
        self.seen.len()
    }

    /// Number of kept neighbours.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Sum of the kept frequencies.
    pub fn total_mass(&self) -> Weight {
        self.mass
    }

    /// Return a reference to the kept neighbours.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Consume the status and return the kept neighbours.
    pub fn into_neighbors(self) -> Vec<Neighbor> {
        self.neighbors
    }
}
