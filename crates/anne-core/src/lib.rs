//! Shared types for the anne spelling corrector.
//!
//! - [`character`] -- word character classes and the word token pattern
//! - [`case`] -- case pattern detection and restoration
//! - [`enums`] -- token types, spacing modes, word length limits
//! - [`token`] -- text tokens

pub mod case;
pub mod character;
pub mod enums;
pub mod token;
