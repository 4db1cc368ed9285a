// Correction candidates for a single word.
//
// Produces the edit-distance-1 neighbourhood of a word, keeps the neighbours
// the lexicon knows, filters them phonetically, and ranks the survivors.
//
// Architecture:
//   - `generators`: individual edit operations (CandidateGenerator trait)
//   - `status`: deduplication, kept neighbours, total frequency mass
//   - `strategy`: composes generators into the edit-distance-1 pipeline
//   - `filter`: phonetic agreement between the word and each neighbour
//   - `ranking`: normalization, ordering, and selection

pub mod filter;
pub mod generators;
pub mod ranking;
pub mod status;
pub mod strategy;

use anne_trie::Weight;

use crate::lexicon::Lexicon;

pub use filter::PhoneticFilter;
pub use generators::CandidateGenerator;
pub use ranking::Candidate;
pub use status::{Neighbor, SuggestionStatus};
pub use strategy::{EditStrategy, default_strategy};

/// Enumerate the known edit-distance-1 neighbours of `word` produced by
/// `strategy`.
///
/// Returns the neighbours with positive frequency in generation order,
/// together with their summed frequency.
pub fn neighbors(
    word: &[char],
    lexicon: &dyn Lexicon,
    strategy: &EditStrategy,
) -> (Vec<Neighbor>, Weight) {
    let mut status = SuggestionStatus::new(word);
    strategy.generate(lexicon, &mut status);
    let mass = status.total_mass();
    (status.into_neighbors(), mass)
}
