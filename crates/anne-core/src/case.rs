// Carrying the capitalisation of a misspelt token over to its correction

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Capitalisation pattern of a token, judged on its letters alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters at all: "''".
    NoLetters,
    /// "house"
    AllLower,
    /// "House", "'Tis"
    FirstUpper,
    /// Anything else: "hoUse", "McDonald".
    Complex,
    /// "HOUSE", "DON'T"
    AllUpper,
}

/// Classify the capitalisation of `word`.
///
/// Apostrophes and other non-letters are skipped, so a leading apostrophe
/// does not hide a capital.
pub fn detect_case(word: &[char]) -> CaseType {
    let mut letters = word.iter().copied().filter(|&c| is_upper(c) || is_lower(c));
    let Some(first) = letters.next() else {
        return CaseType::NoLetters;
    };
    let (upper, lower) = letters.fold((0usize, 0usize), |(upper, lower), c| {
        if is_upper(c) {
            (upper + 1, lower)
        } else {
            (upper, lower + 1)
        }
    });

    match (is_upper(first), upper, lower) {
        (true, _, 0) => CaseType::AllUpper,
        (true, 0, _) => CaseType::FirstUpper,
        (false, 0, _) => CaseType::AllLower,
        _ => CaseType::Complex,
    }
}

/// Write `correction` in the capitalisation `case`. Anything that is not
/// all-upper or first-upper comes out lowercase.
fn recase(correction: &[char], case: CaseType) -> String {
    let mut capital_pending = case == CaseType::FirstUpper;
    correction
        .iter()
        .map(|&c| match case {
            CaseType::AllUpper => simple_upper(c),
            CaseType::FirstUpper if capital_pending && (is_upper(c) || is_lower(c)) => {
                capital_pending = false;
                simple_upper(c)
            }
            _ => simple_lower(c),
        })
        .collect()
}

/// Carry the case pattern of `original` over to a lowercase `correction`.
///
/// If the correction is the original word (ignoring case) the original is
/// returned verbatim, so mixed-case words that need no fixing survive
/// untouched. A complex original yields the lowercase correction.
pub fn restore_case(original: &[char], correction: &[char]) -> String {
    let same_word = original.len() == correction.len()
        && original
            .iter()
            .zip(correction)
            .all(|(&a, &b)| simple_lower(a) == simple_lower(b));
    if same_word {
        return original.iter().collect();
    }
    recase(correction, detect_case(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn detect_without_letters() {
        assert_eq!(detect_case(&[]), CaseType::NoLetters);
        assert_eq!(detect_case(&chars("123")), CaseType::NoLetters);
        assert_eq!(detect_case(&chars("''")), CaseType::NoLetters);
    }

    #[test]
    fn detect_simple_patterns() {
        assert_eq!(detect_case(&chars("don't")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("I'm")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("DON'T")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("X")), CaseType::AllUpper);
    }

    #[test]
    fn detect_complex() {
        assert_eq!(detect_case(&chars("hoUse")), CaseType::Complex);
        assert_eq!(detect_case(&chars("McDonald")), CaseType::Complex);
    }

    #[test]
    fn detect_skips_leading_apostrophe() {
        assert_eq!(detect_case(&chars("'Tis")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("'TIS")), CaseType::AllUpper);
    }

    #[test]
    fn restore_keeps_original_when_unchanged() {
        assert_eq!(restore_case(&chars("McDonald"), &chars("mcdonald")), "McDonald");
        assert_eq!(restore_case(&chars("I'm"), &chars("i'm")), "I'm");
    }

    #[test]
    fn restore_follows_the_original() {
        assert_eq!(restore_case(&chars("ths"), &chars("this")), "this");
        assert_eq!(restore_case(&chars("Ths"), &chars("this")), "This");
        assert_eq!(restore_case(&chars("THS"), &chars("this")), "THIS");
    }

    #[test]
    fn restore_complex_yields_lowercase() {
        assert_eq!(restore_case(&chars("tHs"), &chars("this")), "this");
    }

    #[test]
    fn restore_capitalises_first_letter_after_apostrophe() {
        assert_eq!(restore_case(&chars("'Tsi"), &chars("'tis")), "'Tis");
    }
}
