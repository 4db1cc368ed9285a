//! Self-training spelling correction for English text.
//!
//! The engine learns word frequencies from observed text and corrects
//! misspelled words by combining edit-distance-1 proximity with phonetic
//! similarity. No dictionary ships with it: the vocabulary is whatever the
//! host has taught it.
//!
//! ```ignore
//! let mut anne = anne_en::Anne::new();
//! anne.learn("this is a test").learn("this is a test");
//! assert_eq!(anne.fix("ths is a test"), "this is a test");
//! ```
//!
//! # Architecture
//!
//! - [`lexicon`] -- read-only frequency oracle consumed by the generators
//! - [`suggestion`] -- edit generators, deduplication, phonetic filter, ranking
//! - [`phonetic`] -- phonetic provider trait, near-match rule, Metaphone provider
//! - [`tokenizer`] -- whitespace tokenization that keeps whitespace runs
//! - [`engine`] -- the `Anne` facade owning the frequency store

pub mod engine;
pub mod lexicon;
pub mod phonetic;
pub mod suggestion;
pub mod tokenizer;

pub use engine::{Anne, AnneError, EngineOptions};
pub use phonetic::PhoneticProvider;
pub use suggestion::Candidate;

pub use anne_core::enums::Spacing;
pub use anne_trie::{FrequencyTrie, SnapshotError, SnapshotInput, Weight};
