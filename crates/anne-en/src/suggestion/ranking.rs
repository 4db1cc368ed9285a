// Ranking: normalize neighbour frequencies, order them, pick the best

use std::cmp::Ordering;

use anne_trie::Weight;

use super::status::Neighbor;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The candidate word (lowercase).
    pub word: String,
    /// Raw frequency from the store.
    pub frequency: Weight,
    /// Frequency divided by the total mass of all ranked candidates.
    ///
    /// When any candidate is `Definite`, each definite candidate gets
    /// `1 / d` (d definite candidates) and every finite one gets `0.0`.
    pub weight: f64,
}

/// Order candidates: higher weight first. Among equal weights the word being
/// corrected comes first, the rest alphabetically.
fn compare(word: &str, a: &Candidate, b: &Candidate) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| (b.word == word).cmp(&(a.word == word)))
        .then_with(|| a.word.cmp(&b.word))
}

/// Turn the filtered neighbours of `word` (lowercase) into ranked
/// candidates, best first.
///
/// A known word is never replaced by a neighbour that only ties with it.
pub fn rank(word: &str, neighbors: Vec<Neighbor>) -> Vec<Candidate> {
    let definite = neighbors
        .iter()
        .filter(|n| n.frequency.is_definite())
        .count();
    let finite_mass: u64 = neighbors
        .iter()
        .filter_map(|n| n.frequency.as_finite())
        .fold(0u64, |acc, f| acc.saturating_add(f));

    let mut candidates: Vec<Candidate> = neighbors
        .into_iter()
        .map(|n| {
            let weight = match (n.frequency, definite) {
                (Weight::Definite, d) => 1.0 / d as f64,
                (Weight::Finite(_), d) if d > 0 => 0.0,
                (Weight::Finite(_), _) if finite_mass == 0 => 0.0,
                (Weight::Finite(f), _) => f as f64 / finite_mass as f64,
            };
            Candidate {
                word: n.word,
                frequency: n.frequency,
                weight,
            }
        })
        .collect();

    candidates.sort_by(|a, b| compare(word, a, b));
    candidates
}

/// The top-ranked candidate, if any.
pub fn best(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor(word: &str, frequency: Weight) -> Neighbor {
        Neighbor {
            word: word.to_string(),
            frequency,
        }
    }

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn sorted_by_frequency_descending() {
        let ranked = rank(
            "tis",
            vec![
                neighbor("ths", Weight::Finite(1)),
                neighbor("this", Weight::Finite(3)),
            ],
        );
        assert_eq!(words(&ranked), vec!["this", "ths"]);
        assert_eq!(ranked[0].weight, 0.75);
        assert_eq!(ranked[1].weight, 0.25);
    }

    #[test]
    fn ties_resolve_alphabetically() {
        let ranked = rank(
            "tis",
            vec![
                neighbor("ths", Weight::Finite(2)),
                neighbor("this", Weight::Finite(2)),
            ],
        );
        assert_eq!(words(&ranked), vec!["this", "ths"]);
        assert_eq!(ranked[0].weight, 0.5);
    }

    #[test]
    fn tied_input_word_stays_first() {
        let ranked = rank(
            "cat",
            vec![
                neighbor("bat", Weight::Finite(2)),
                neighbor("cat", Weight::Finite(2)),
                neighbor("at", Weight::Finite(2)),
            ],
        );
        assert_eq!(words(&ranked), vec!["cat", "at", "bat"]);
    }

    #[test]
    fn tied_definite_input_word_stays_first() {
        let ranked = rank(
            "cat",
            vec![
                neighbor("bat", Weight::Definite),
                neighbor("cat", Weight::Definite),
            ],
        );
        assert_eq!(words(&ranked), vec!["cat", "bat"]);
        assert_eq!(ranked[0].weight, 0.5);
    }

    #[test]
    fn heavier_neighbour_still_beats_input_word() {
        let ranked = rank(
            "ths",
            vec![
                neighbor("ths", Weight::Finite(1)),
                neighbor("this", Weight::Finite(2)),
            ],
        );
        assert_eq!(words(&ranked), vec!["this", "ths"]);
    }

    #[test]
    fn definite_outranks_finite() {
        let ranked = rank(
            "recieve",
            vec![
                neighbor("recieve", Weight::Finite(1000)),
                neighbor("receive", Weight::Definite),
            ],
        );
        assert_eq!(words(&ranked), vec!["receive", "recieve"]);
        assert_eq!(ranked[0].weight, 1.0);
        assert_eq!(ranked[1].weight, 0.0);
    }

    #[test]
    fn definite_candidates_share_weight() {
        let ranked = rank(
            "tis",
            vec![
                neighbor("bat", Weight::Definite),
                neighbor("cat", Weight::Definite),
                neighbor("hat", Weight::Finite(5)),
            ],
        );
        assert_eq!(words(&ranked), vec!["bat", "cat", "hat"]);
        assert_eq!(ranked[0].weight, 0.5);
        assert_eq!(ranked[1].weight, 0.5);
    }

    #[test]
    fn best_of_empty_is_none() {
        assert!(rank("cat", Vec::new()).is_empty());
        assert!(best(&[]).is_none());
    }

    #[test]
    fn best_is_first() {
        let ranked = rank(
            "cst",
            vec![
                neighbor("cot", Weight::Finite(1)),
                neighbor("cat", Weight::Finite(4)),
            ],
        );
        assert_eq!(best(&ranked).map(|c| c.word.as_str()), Some("cat"));
    }
}
