//! Word validation and scoring.
//!
//! Points depend only on how many cells the word uses: `(L - 1) * L`. A one-cell
//! word is worth nothing, and every extra cell is worth more than the last.

use crate::{Path, WordDictionary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { text: String, score: u32 },
    Rejected { text: String },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Accepted { text, .. } | Outcome::Rejected { text } => text,
        }
    }
}

/// A word accepted during this game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundWord {
    pub text: String,
    pub score: u32,
}

pub fn word_score(cells: usize) -> u32 {
    let l = cells as u32;
    l.saturating_sub(1) * l
}

/// Check the path's word against the dictionary. Pure: applying the result is
/// the caller's job.
pub fn resolve(path: &Path, dictionary: &WordDictionary) -> Outcome {
    let text = path.text();
    if dictionary.contains(&text) {
        let score = word_score(path.len());
        Outcome::Accepted { text, score }
    } else {
        Outcome::Rejected { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, CellId, Position, SelectionEntry};
    use std::collections::HashMap;

    fn dictionary() -> WordDictionary {
        let weights = HashMap::from([("ku".to_string(), 1.0)]);
        WordDictionary::new(["kupu", "ā", "whare"], &weights).unwrap()
    }

    fn path_of(texts: &[&'static str]) -> Path {
        let mut path = Path::new();
        for (i, &t) in texts.iter().enumerate() {
            let entry = SelectionEntry::new(Position::new(0, i), Cell::new(t, CellId(i as u64)));
            path.toggle(entry);
        }
        path
    }

    #[test]
    fn score_law() {
        assert_eq!(word_score(0), 0);
        assert_eq!(word_score(1), 0);
        assert_eq!(word_score(2), 2);
        assert_eq!(word_score(4), 12);
        assert_eq!(word_score(6), 30);
    }

    #[test]
    fn kupu_is_accepted_for_twelve() {
        let path = path_of(&["k", "u", "p", "u"]);
        assert_eq!(
            resolve(&path, &dictionary()),
            Outcome::Accepted {
                text: "kupu".into(),
                score: 12
            }
        );
    }

    #[test]
    fn score_counts_cells_not_letters() {
        let path = path_of(&["ku", "pu"]);
        let outcome = resolve(&path, &dictionary());
        assert_eq!(
            outcome,
            Outcome::Accepted {
                text: "kupu".into(),
                score: 2
            }
        );
    }

    #[test]
    fn single_cell_word_scores_zero() {
        let outcome = resolve(&path_of(&["ā"]), &dictionary());
        assert_eq!(
            outcome,
            Outcome::Accepted {
                text: "ā".into(),
                score: 0
            }
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let outcome = resolve(&path_of(&["pu", "ku"]), &dictionary());
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.text(), "puku");
        assert!(!resolve(&Path::new(), &dictionary()).is_accepted());
    }

    #[test]
    fn resolve_is_repeatable() {
        let dict = dictionary();
        let path = path_of(&["wha", "re"]);
        let first = resolve(&path, &dict);
        for _ in 0..3 {
            assert_eq!(resolve(&path, &dict), first);
        }
        assert_eq!(path.len(), 2);
    }
}
