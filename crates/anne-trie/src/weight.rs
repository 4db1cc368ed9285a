// Word weight: learned count or definite pin, with an explicit total order

use std::cmp::Ordering;
use std::fmt;

/// The frequency attached to a word in the trie.
///
/// `Definite` is strictly greater than every finite count. `Finite(0)` means
/// the word is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    /// Number of times the word was learned.
    Finite(u64),
    /// Pinned to the maximum rank by an explicit definition.
    Definite,
}

impl Weight {
    /// The weight of an unknown word.
    pub const ZERO: Weight = Weight::Finite(0);

    /// Returns `true` for `Finite(0)`.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` for any weight above zero.
    pub fn is_positive(self) -> bool {
        !self.is_zero()
    }

    /// Returns `true` for the `Definite` weight.
    pub fn is_definite(self) -> bool {
        self == Weight::Definite
    }

    /// The finite count, or `None` for `Definite`.
    pub fn as_finite(self) -> Option<u64> {
        match self {
            Weight::Finite(n) => Some(n),
            Weight::Definite => None,
        }
    }

    /// One more observation. `Definite` absorbs the increment.
    pub fn increment(self) -> Self {
        match self {
            Weight::Finite(n) => Weight::Finite(n.saturating_add(1)),
            Weight::Definite => Weight::Definite,
        }
    }

    /// Sum of two weights. `Definite` absorbs any addend.
    pub fn saturating_add(self, other: Weight) -> Self {
        match (self, other) {
            (Weight::Finite(a), Weight::Finite(b)) => Weight::Finite(a.saturating_add(b)),
            _ => Weight::Definite,
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Weight {
    fn from(n: u64) -> Self {
        Weight::Finite(n)
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Weight::Definite, Weight::Definite) => Ordering::Equal,
            (Weight::Definite, Weight::Finite(_)) => Ordering::Greater,
            (Weight::Finite(_), Weight::Definite) => Ordering::Less,
            (Weight::Finite(a), Weight::Finite(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, Weight::saturating_add)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Finite(n) => write!(f, "{n}"),
            Weight::Definite => f.write_str(crate::DEFINITE_MARKER),
        }
    }
}
