// Whitespace tokenizer
//
// Text is split into alternating whitespace runs and non-whitespace runs.
// Non-whitespace runs are classified as words when they match the word
// pattern; everything else passes through untouched. Concatenating the text
// of every token reproduces the input exactly.

use anne_core::character::{is_whitespace, is_word, is_word_chars};
use anne_core::enums::TokenType;
use anne_core::token::Token;

/// Find the next token starting at position `pos`.
///
/// Returns the token type and its length in characters, or `None` at the end
/// of the text.
pub fn next_token(text: &[char], pos: usize) -> Option<(TokenType, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;

    let whitespace = is_whitespace(slice[0]);
    let len = slice
        .iter()
        .position(|&c| is_whitespace(c) != whitespace)
        .unwrap_or(slice.len());

    let token_type = if whitespace {
        TokenType::Whitespace
    } else if is_word_chars(&slice[..len]) {
        TokenType::Word
    } else {
        TokenType::Other
    };
    Some((token_type, len))
}

/// Split text into tokens, keeping whitespace runs as tokens of their own.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some((token_type, len)) = next_token(&chars, pos) {
        let token_text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, pos));
        pos += len;
    }
    tokens
}

/// Iterate over the whitespace-separated tokens of `text` that match the
/// word pattern, in their original case.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|token| is_word(token))
}

/// Split a word list on whitespace, newlines, and commas, dropping empty
/// items.
pub fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || is_whitespace(c))
        .filter(|item| !item.is_empty())
}
