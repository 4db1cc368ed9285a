// Shared enums and limits: TokenType, Spacing, word length bounds

/// Token types produced by the whitespace tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A token matching the word pattern (ASCII letters and apostrophes,
    /// longer than one character).
    Word,
    /// Any other non-whitespace run: numbers, punctuation, single letters,
    /// words with non-ASCII characters.
    Other,
    /// A run of whitespace characters.
    Whitespace,
}

/// How `fix` rebuilds text around corrected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spacing {
    /// Keep every whitespace run of the input exactly as it was.
    #[default]
    Preserve,
    /// Split on whitespace and join the tokens with a single space.
    Collapse,
}

/// Minimum number of characters in a word token.
pub const MIN_WORD_CHARS: usize = 2;

/// Maximum number of characters in a word token.
///
/// Longer tokens are treated as non-words. The bound also limits trie depth,
/// which keeps JSON snapshots inside the parser's nesting limit.
pub const MAX_WORD_CHARS: usize = 64;
