//! Frequency store for the anne spelling corrector.
//!
//! A prefix trie keyed by character maps every observed word to a
//! [`Weight`]: a learned occurrence count, or the `Definite` weight pinned by
//! explicit definition. The whole trie is the engine's serializable state.
//!
//! # Architecture
//!
//! - [`weight`] -- the `Finite(n)` / `Definite` weight and its total order
//! - [`node`] -- trie nodes (child map plus optional terminal count)
//! - [`trie`] -- the `FrequencyTrie` with increment / define / lookup
//! - [`snapshot`] -- serde encoding of the trie as a nested mapping

pub mod node;
pub mod snapshot;
pub mod trie;
pub mod weight;

pub use node::TrieNode;
pub use snapshot::SnapshotInput;
pub use trie::FrequencyTrie;
pub use weight::Weight;

/// Error type for snapshot decoding.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot root must be an object, got {0}")]
    NotAnObject(&'static str),
}

/// Reserved snapshot key holding a node's count.
///
/// `_` is outside the word character set, so it never collides with a
/// child key.
pub const COUNT_KEY: &str = "_";

/// Textual marker for the `Definite` weight in snapshots.
pub const DEFINITE_MARKER: &str = "definite";
