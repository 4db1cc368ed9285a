// Edit strategy: composes generators into the edit-distance-1 pipeline

use anne_core::character::ALPHABET;

use crate::lexicon::Lexicon;
use super::generators::*;
use super::status::SuggestionStatus;

/// An ordered list of generators run against one word.
///
/// Generation order matters only for deduplication (an edit reachable by
/// two operations is attributed to the first) and for the order in which
/// neighbours are reported; ranking does not depend on it.
pub struct EditStrategy {
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl EditStrategy {
    /// Build a strategy from an explicit generator list.
    pub fn new(generators: Vec<Box<dyn CandidateGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator in order.
    pub fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            generator.generate(lexicon, status);
        }
    }

    /// Number of generators in the strategy.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns `true` if the strategy has no generators.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

/// The full edit-distance-1 neighbourhood over the 26 lowercase letters:
/// deletion, adjacent transposition, replacement, insertion.
pub fn default_strategy() -> EditStrategy {
    let generators: Vec<Box<dyn CandidateGenerator>> = vec![
        Box::new(Deletion),
        Box::new(Transposition),
        Box::new(Replacement {
            letters: ALPHABET.to_vec(),
        }),
        Box::new(Insertion {
            letters: ALPHABET.to_vec(),
        }),
    ];

    EditStrategy::new(generators)
}
