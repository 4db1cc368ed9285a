// Frequency trie: the word -> weight dictionary built from ingested text

use crate::node::TrieNode;
use crate::weight::Weight;

/// A prefix trie mapping learned words to their [`Weight`].
///
/// Words are walked character by character from the root. Every prefix of a
/// learned word exists as a path, even when no word ends there. Nodes are
/// created on demand and never pruned.
///
/// The trie stores exactly the characters it is given; callers lowercase and
/// validate words against the word pattern first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTrie {
    pub(crate) root: TrieNode,
}

impl FrequencyTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing root node.
    pub fn from_root(root: TrieNode) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Record one more occurrence of `word` and return its new weight.
    ///
    /// Missing nodes along the path are created. A `Definite` word stays
    /// `Definite`.
    pub fn increment(&mut self, word: &[char]) -> Weight {
        let node = self.node_or_insert(word);
        let weight = node.weight().increment();
        node.count = Some(weight);
        weight
    }

    /// Pin `word` to the `Definite` weight, overwriting any learned count.
    ///
    /// Surrounding whitespace is trimmed first. Returns `false` (and changes
    /// nothing) if the trimmed word is empty.
    pub fn set_definite(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        self.node_or_insert(&chars).count = Some(Weight::Definite);
        true
    }

    /// The weight of `word`: `Finite(0)` as soon as the path breaks, or when
    /// the path exists but no word ends there.
    pub fn frequency(&self, word: &[char]) -> Weight {
        self.find(word).map_or(Weight::ZERO, TrieNode::weight)
    }

    /// [`frequency`](Self::frequency) for a string slice.
    pub fn frequency_of(&self, word: &str) -> Weight {
        let chars: Vec<char> = word.chars().collect();
        self.frequency(&chars)
    }

    /// Follow `word` from the root.
    pub fn find(&self, word: &[char]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for &c in word {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Returns `true` if nothing has been learned or defined.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0 && self.root.count.is_none()
    }

    /// Number of distinct words with a positive weight.
    pub fn word_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            let here = usize::from(node.weight().is_positive());
            here + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// All words with a positive weight, in lexicographic order.
    pub fn entries(&self) -> Vec<(String, Weight)> {
        fn walk(node: &TrieNode, prefix: &mut String, out: &mut Vec<(String, Weight)>) {
            if node.weight().is_positive() {
                out.push((prefix.clone(), node.weight()));
            }
            for (c, child) in node.sorted_children() {
                prefix.push(c);
                walk(child, prefix, out);
                prefix.pop();
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut String::new(), &mut out);
        out
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    fn node_or_insert(&mut self, word: &[char]) -> &mut TrieNode {
        let mut node = &mut self.root;
        for &c in word {
            node = node.child_or_insert(c);
        }
        node
    }
}
