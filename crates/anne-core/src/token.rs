// Token type shared by the tokenizer and the engine

use crate::enums::TokenType;

/// A text token produced by the whitespace tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Returns `true` if this token is a candidate for learning and fixing.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    /// Returns `true` if this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.token_type == TokenType::Whitespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new_counts_chars() {
        let t = Token::new(TokenType::Word, "don't", 4);
        assert_eq!(t.token_type, TokenType::Word);
        assert_eq!(t.text, "don't");
        assert_eq!(t.token_len, 5);
        assert_eq!(t.pos, 4);
    }

    #[test]
    fn token_len_uses_chars_not_bytes() {
        let t = Token::new(TokenType::Other, "caf\u{00E9}", 0);
        assert_eq!(t.token_len, 4);
    }

    #[test]
    fn token_kind_helpers() {
        assert!(Token::new(TokenType::Word, "is", 0).is_word());
        assert!(!Token::new(TokenType::Other, "1", 0).is_word());
        assert!(Token::new(TokenType::Whitespace, "  ", 0).is_whitespace());
    }

    #[test]
    fn token_clone_eq() {
        let t = Token::new(TokenType::Word, "test", 0);
        assert_eq!(t, t.clone());
    }
}
