// Trie node: child map keyed by character plus an optional terminal count

use hashbrown::HashMap;

use crate::weight::Weight;

/// A node of the frequency trie.
///
/// Children and the terminal count live in separate fields, so no child key
/// can be mistaken for the count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) count: Option<Weight>,
}

impl TrieNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal count, if a word ends at this node.
    pub fn count(&self) -> Option<Weight> {
        self.count
    }

    /// The weight of the word ending at this node (`Finite(0)` if none does).
    pub fn weight(&self) -> Weight {
        self.count.unwrap_or(Weight::ZERO)
    }

    /// Set or clear the terminal count.
    pub fn set_count(&mut self, count: Option<Weight>) {
        self.count = count;
    }

    /// Look up the child for `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Get the child for `c`, creating an empty one if missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Attach `child` under `c`, returning any node it replaced.
    pub fn insert_child(&mut self, c: char, child: TrieNode) -> Option<TrieNode> {
        self.children.insert(c, child)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children sorted by key character.
    pub fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(&c, n)| (c, n)).collect();
        children.sort_unstable_by_key(|&(c, _)| c);
        children
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }
}
