// Individual candidate generators: each applies one class of edit operation
// to produce candidate words, then looks each one up in the lexicon.
//
// Edits work on explicit index ranges over a `char` sequence, never on byte
// offsets into a string.

use crate::lexicon::Lexicon;
use super::status::SuggestionStatus;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual candidate generators.
///
/// Each generator produces candidate words by applying one class of edit
/// operation to the word tracked by `status`, and hands every candidate to
/// [`SuggestionStatus::consider`].
pub trait CandidateGenerator: Send + Sync {
    /// Generate candidates for the word tracked by `status`, using `lexicon`
    /// to look them up.
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>);
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove the character at each position.
pub struct Deletion;

impl CandidateGenerator for Deletion {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        let mut buffer = Vec::with_capacity(wlen);

        for i in 0..wlen {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            status.consider(lexicon, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters.
pub struct Transposition;

impl CandidateGenerator for Transposition {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();

        for i in 1..buffer.len() {
            buffer.swap(i - 1, i);
            status.consider(lexicon, &buffer);
            buffer.swap(i - 1, i);
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Substitute each position with every letter of `letters`.
///
/// Substituting a character with itself reproduces the word, so a known
/// word is always among its own candidates.
pub struct Replacement {
    pub letters: Vec<char>,
}

impl CandidateGenerator for Replacement {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();

        for i in 0..buffer.len() {
            let original = buffer[i];
            for &letter in &self.letters {
                buffer[i] = letter;
                status.consider(lexicon, &buffer);
            }
            buffer[i] = original;
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every letter of `letters` at each position, including both ends.
pub struct Insertion {
    pub letters: Vec<char>,
}

impl CandidateGenerator for Insertion {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = Vec::with_capacity(word.len() + 1);

        for i in 0..=word.len() {
            for &letter in &self.letters {
                buffer.clear();
                buffer.extend_from_slice(&word[..i]);
                buffer.push(letter);
                buffer.extend_from_slice(&word[i..]);
                status.consider(lexicon, &buffer);
            }
        }
    }
}
