// Anne: the self-training spelling-correction engine.
//
// Owns the frequency trie, the phonetic provider, and the edit strategy, and
// exposes learn / define / import / fix / fix_and_learn together with
// snapshot export and import.
//
// Design notes:
// - The trie is the only mutable state. Writers (`learn`, `define`,
//   `import`, `from_snapshot`) take `&mut self`; `fix`, `suggest`, and
//   `frequency` only read.
// - A snapshot is decoded completely before it replaces the trie, so a
//   malformed snapshot never leaves a half-loaded engine behind.
// - `fix_and_learn` learns from the text as given, misspellings included.
//   A misspelling repeated often enough will eventually outrank its
//   correction; hosts that need strict behaviour learn only trusted text.

use anne_core::case::restore_case;
use anne_core::character::{is_word, is_word_char, key_chars};
use anne_core::enums::{MAX_WORD_CHARS, Spacing};
use anne_trie::{FrequencyTrie, SnapshotError, SnapshotInput, Weight};
use log::{debug, info, trace};

use crate::phonetic::PhoneticProvider;
use crate::suggestion::ranking::{self, Candidate};
use crate::suggestion::{EditStrategy, PhoneticFilter, default_strategy, neighbors};
use crate::tokenizer;

/// Default number of candidates returned by [`Anne::suggest`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Errors surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum AnneError {
    /// A snapshot could not be decoded or encoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// How `fix` rebuilds whitespace around corrected words.
    pub spacing: Spacing,
    /// Maximum number of candidates returned by `suggest`.
    pub max_suggestions: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            spacing: Spacing::Preserve,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// The spelling-correction engine.
///
/// ```ignore
/// let mut anne = Anne::new();
/// anne.learn("this is a test").learn("this is a test");
/// assert_eq!(anne.fix("ths is another test"), "this is another test");
/// ```
pub struct Anne {
    /// Word frequencies learned so far.
    trie: FrequencyTrie,

    /// Phonetic keys for the candidate filter.
    provider: Box<dyn PhoneticProvider>,

    /// Edit-distance-1 candidate generation.
    strategy: EditStrategy,

    options: EngineOptions,
}

#[cfg(feature = "metaphone")]
impl Default for Anne {
    fn default() -> Self {
        Self::new()
    }
}

impl Anne {
    /// Create an empty engine using the Metaphone provider.
    #[cfg(feature = "metaphone")]
    pub fn new() -> Self {
        Self::with_provider(Box::new(crate::phonetic::MetaphoneProvider::new()))
    }

    /// Create an empty engine using the given phonetic provider.
    pub fn with_provider(provider: Box<dyn PhoneticProvider>) -> Self {
        Self::from_trie(FrequencyTrie::new(), provider)
    }

    /// Create an engine around an already-built trie.
    pub fn from_trie(trie: FrequencyTrie, provider: Box<dyn PhoneticProvider>) -> Self {
        Self {
            trie,
            provider,
            strategy: default_strategy(),
            options: EngineOptions::default(),
        }
    }

    /// Replace all options at once.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    // ------------------------------------------------------------------
    // Learning
    // ------------------------------------------------------------------

    /// Count every word of `text`.
    ///
    /// Text is split on whitespace; tokens that do not match the word pattern
    /// (single characters, numbers, anything with punctuation other than the
    /// apostrophe) are skipped.
    pub fn learn(&mut self, text: &str) -> &mut Self {
        for word in tokenizer::words(text) {
            self.trie.increment(&key_chars(word));
        }
        self
    }

    /// Pin a word to the highest possible rank.
    ///
    /// The word is trimmed and lowercased. Empty input, and input with
    /// characters that can never appear in a word, is ignored.
    pub fn define(&mut self, word: &str) -> &mut Self {
        let word = word.trim();
        if word.is_empty() {
            return self;
        }
        if !word.chars().all(is_word_char) || word.chars().count() > MAX_WORD_CHARS {
            debug!("ignoring definition of non-word {word:?}");
            return self;
        }
        let key: String = key_chars(word).into_iter().collect();
        self.trie.set_definite(&key);
        self
    }

    /// [`define`](Self::define) every word of an ordered list.
    pub fn import<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.define(word.as_ref());
        }
        self
    }

    /// [`define`](Self::define) every item of a list written as free text,
    /// separated by whitespace, newlines, or commas.
    pub fn import_text(&mut self, text: &str) -> &mut Self {
        self.import(tokenizer::split_list(text))
    }

    // ------------------------------------------------------------------
    // Correction
    // ------------------------------------------------------------------

    /// Correct every word of `text`.
    ///
    /// Tokens that are not words pass through unchanged. Whitespace is
    /// handled according to [`EngineOptions::spacing`].
    pub fn fix(&self, text: &str) -> String {
        match self.options.spacing {
            Spacing::Preserve => tokenizer::tokenize(text)
                .into_iter()
                .map(|token| {
                    if token.is_word() {
                        self.correct_word(&token.text)
                    } else {
                        token.text
                    }
                })
                .collect(),
            Spacing::Collapse => text
                .split_whitespace()
                .map(|token| self.correct_word(token))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Correct a single token.
    ///
    /// Non-words and words without a better-ranked neighbour come back as
    /// given. A correction takes the case pattern of the original token.
    pub fn correct_word(&self, word: &str) -> String {
        if !is_word(word) {
            return word.to_string();
        }
        let key = key_chars(word);
        let candidates = self.rank(&key);
        let Some(best) = ranking::best(&candidates) else {
            return word.to_string();
        };

        let original: Vec<char> = word.chars().collect();
        let correction: Vec<char> = best.word.chars().collect();
        let fixed = restore_case(&original, &correction);
        if fixed != word {
            debug!("corrected {word:?} -> {fixed:?} ({})", best.frequency);
        }
        fixed
    }

    /// Correct `text`, then learn from the text as it was given.
    pub fn fix_and_learn(&mut self, text: &str) -> String {
        let fixed = self.fix(text);
        self.learn(text);
        fixed
    }

    /// The ranked correction candidates for one word, best first, at most
    /// [`EngineOptions::max_suggestions`] of them.
    ///
    /// A word that does not match the word pattern has no candidates.
    pub fn suggest(&self, word: &str) -> Vec<Candidate> {
        let word = word.trim();
        if !is_word(word) {
            return Vec::new();
        }
        let mut candidates = self.rank(&key_chars(word));
        candidates.truncate(self.options.max_suggestions);
        candidates
    }

    /// Generate, filter, and rank the neighbours of a lowercase word.
    fn rank(&self, key: &[char]) -> Vec<Candidate> {
        let (found, mass) = neighbors(key, &self.trie, &self.strategy);
        let word: String = key.iter().collect();
        trace!("{word:?}: {} known neighbours, mass {mass}", found.len());

        let filter = PhoneticFilter::new(self.provider.as_ref());
        ranking::rank(&word, filter.retain(&word, found))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The learned weight of a word (case-insensitive).
    pub fn frequency(&self, word: &str) -> Weight {
        self.trie.frequency(&key_chars(word.trim()))
    }

    /// Number of distinct words with a positive weight.
    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// The learned state, by reference.
    pub fn to_snapshot(&self) -> &FrequencyTrie {
        &self.trie
    }

    /// The learned state as compact JSON.
    pub fn to_json(&self) -> Result<String, AnneError> {
        Ok(self.trie.to_json()?)
    }

    /// The learned state as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, AnneError> {
        Ok(self.trie.to_json_pretty()?)
    }

    /// The learned state as a JSON value tree.
    pub fn to_value(&self) -> Result<serde_json::Value, AnneError> {
        Ok(self.trie.to_value()?)
    }

    /// Replace the learned state with a snapshot.
    ///
    /// Accepts a decoded trie, a JSON value, or JSON text. On error the
    /// current state is kept.
    pub fn from_snapshot(
        &mut self,
        snapshot: impl Into<SnapshotInput>,
    ) -> Result<&mut Self, AnneError> {
        let trie = snapshot.into().decode()?;
        info!("loaded snapshot with {} words", trie.word_count());
        self.trie = trie;
        Ok(self)
    }

    /// Replace the learned state with a JSON snapshot.
    pub fn from_json(&mut self, text: &str) -> Result<&mut Self, AnneError> {
        self.from_snapshot(text)
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Set how `fix` handles whitespace.
    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.options.spacing = spacing;
    }

    /// Set the maximum number of candidates returned by `suggest`.
    pub fn set_max_suggestions(&mut self, max: usize) {
        self.options.max_suggestions = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keys are the consonants of the word, uppercased.
    struct ConsonantKey;

    impl PhoneticProvider for ConsonantKey {
        fn phonetic_key(&self, word: &str) -> String {
            word.chars()
                .filter(|c| c.is_ascii_alphabetic() && !"aeiouAEIOU".contains(*c))
                .map(|c| c.to_ascii_uppercase())
                .collect()
        }
    }

    fn engine() -> Anne {
        Anne::with_provider(Box::new(ConsonantKey))
    }

    fn trained() -> Anne {
        let mut anne = engine();
        anne.learn("this is a test")
            .learn("this is a test")
            .learn("ths is a test");
        anne
    }

    #[test]
    fn learn_counts_words() {
        let anne = trained();
        assert_eq!(anne.frequency("this"), Weight::Finite(2));
        assert_eq!(anne.frequency("ths"), Weight::Finite(1));
        assert_eq!(anne.frequency("test"), Weight::Finite(3));
        assert_eq!(anne.frequency("a"), Weight::ZERO);
        assert_eq!(anne.word_count(), 4);
    }

    #[test]
    fn learn_is_case_insensitive() {
        let mut anne = engine();
        anne.learn("Hello HELLO hello");
        assert_eq!(anne.frequency("hello"), Weight::Finite(3));
        assert_eq!(anne.frequency("HeLLo"), Weight::Finite(3));
    }

    #[test]
    fn learn_skips_non_words() {
        let mut anne = engine();
        anne.learn("a 1 42 -- hello, x'y");
        assert_eq!(anne.word_count(), 1);
        assert_eq!(anne.frequency("x'y"), Weight::Finite(1));
    }

    #[test]
    fn fix_prefers_the_frequent_neighbour() {
        let anne = trained();
        assert_eq!(anne.fix("ths is another test"), "this is another test");
    }

    #[test]
    fn fix_keeps_whitespace_by_default() {
        let anne = trained();
        assert_eq!(anne.fix("  ths\tis\n\ntest "), "  this\tis\n\ntest ");
    }

    #[test]
    fn fix_collapse_joins_with_single_spaces() {
        let mut anne = trained();
        anne.set_spacing(Spacing::Collapse);
        assert_eq!(anne.fix("  ths\tis\n\ntest "), "this is test");
    }

    #[test]
    fn fix_restores_case() {
        let anne = trained();
        assert_eq!(anne.fix("Ths"), "This");
        assert_eq!(anne.fix("THS"), "THIS");
        assert_eq!(anne.fix("tHs"), "this");
        assert_eq!(anne.fix("TEST"), "TEST");
    }

    #[test]
    fn fix_passes_non_words_through() {
        let anne = trained();
        assert_eq!(anne.fix("a 1 I'm ths!"), "a 1 I'm ths!");
    }

    #[test]
    fn fix_without_knowledge_is_identity() {
        let anne = engine();
        assert_eq!(anne.fix("anything goes here"), "anything goes here");
    }

    #[test]
    fn fix_and_learn_learns_the_original() {
        let mut anne = trained();
        assert_eq!(anne.fix_and_learn("ths is a test"), "this is a test");
        assert_eq!(anne.frequency("ths"), Weight::Finite(2));
        assert_eq!(anne.frequency("this"), Weight::Finite(2));
        // Now tied, so neither replaces the other.
        assert_eq!(anne.fix("ths"), "ths");
        assert_eq!(anne.fix("this"), "this");
    }

    #[test]
    fn fix_keeps_word_tied_with_defined_neighbour() {
        let mut anne = engine();
        anne.import_text("bat, cat");
        assert_eq!(anne.fix("cat"), "cat");
        assert_eq!(anne.fix("bat"), "bat");
        assert_eq!(anne.fix("Cat bat"), "Cat bat");
    }

    #[test]
    fn fix_keeps_word_tied_with_learned_neighbour() {
        let mut anne = engine();
        anne.learn("bat cat bat cat");
        assert_eq!(anne.frequency("cat"), Weight::Finite(2));
        assert_eq!(anne.fix("cat"), "cat");
        assert_eq!(anne.fix("bat"), "bat");

        anne.learn("bat");
        assert_eq!(anne.fix("cat"), "bat");
    }

    #[test]
    fn define_outranks_learned_counts() {
        let mut anne = engine();
        for _ in 0..50 {
            anne.learn("recieve");
        }
        anne.define("receive");
        assert_eq!(anne.frequency("receive"), Weight::Definite);
        assert_eq!(anne.fix("recieve"), "receive");
    }

    #[test]
    fn define_before_learning_stays_definite() {
        let mut anne = engine();
        anne.define("Receive");
        anne.learn("receive receive");
        assert_eq!(anne.frequency("receive"), Weight::Definite);
    }

    #[test]
    fn define_ignores_empty_and_invalid_input() {
        let mut anne = engine();
        anne.define("").define("   ").define("two words").define("4th");
        assert!(anne.to_snapshot().is_empty());
    }

    #[test]
    fn import_defines_each_item() {
        let mut anne = engine();
        anne.import(["alpha", " beta "]);
        anne.import_text("gamma, delta\nepsilon");
        for word in ["alpha", "beta", "gamma", "delta", "epsilon"] {
            assert_eq!(anne.frequency(word), Weight::Definite, "{word}");
        }
        assert_eq!(anne.word_count(), 5);
    }

    #[test]
    fn suggest_ranks_and_truncates() {
        let mut anne = trained();
        let found = anne.suggest("ths");
        let words: Vec<&str> = found.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["this", "ths"]);
        assert!((found[0].weight - 2.0 / 3.0).abs() < 1e-9);

        anne.set_max_suggestions(1);
        assert_eq!(anne.suggest("ths").len(), 1);
        assert!(anne.suggest("x").is_empty());
    }

    #[test]
    fn json_round_trip_keeps_frequencies() {
        let mut anne = trained();
        anne.define("definitely");
        let json = anne.to_json().unwrap();

        let mut restored = engine();
        restored.from_json(&json).unwrap();
        assert_eq!(restored.to_snapshot(), anne.to_snapshot());
        assert_eq!(restored.frequency("definitely"), Weight::Definite);
    }

    #[test]
    fn snapshot_from_value_and_trie() {
        let anne = trained();
        let value = anne.to_value().unwrap();

        let mut from_value = engine();
        from_value.from_snapshot(value).unwrap();
        assert_eq!(from_value.frequency("this"), Weight::Finite(2));

        let mut from_trie = engine();
        from_trie.from_snapshot(anne.to_snapshot().clone()).unwrap();
        assert_eq!(from_trie.frequency("test"), Weight::Finite(3));
    }

    #[test]
    fn malformed_snapshot_keeps_state() {
        let mut anne = trained();
        assert!(anne.from_json("[1, 2, 3]").is_err());
        assert!(anne.from_json("{\"t\": ").is_err());
        assert!(matches!(
            anne.from_json("{\"_\": -1}"),
            Err(AnneError::Snapshot(_))
        ));
        assert_eq!(anne.frequency("this"), Weight::Finite(2));
    }

    #[test]
    fn options_default_and_builder() {
        let anne = engine();
        assert_eq!(*anne.options(), EngineOptions::default());
        assert_eq!(anne.options().max_suggestions, DEFAULT_MAX_SUGGESTIONS);

        let anne = engine().with_options(EngineOptions {
            spacing: Spacing::Collapse,
            max_suggestions: 2,
        });
        assert_eq!(anne.options().spacing, Spacing::Collapse);
    }
}
