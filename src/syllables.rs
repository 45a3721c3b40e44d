//! Māori syllable alphabet and the weighted draw used to fill grid cells.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{KupuError, SimpleRng};

/// Short and macronised long vowels, in draw order.
pub const VOWELS: [&str; 10] = ["a", "ā", "e", "ē", "i", "ī", "o", "ō", "u", "ū"];

/// Onsets, including the two digraphs.
pub const CONSONANTS: [&str; 10] = ["h", "k", "m", "n", "p", "r", "t", "w", "wh", "ng"];

/// Every syllable that may appear on the grid: bare vowels first, then each
/// consonant paired with every vowel (consonant-major). 110 entries.
pub fn syllables() -> &'static [&'static str] {
    static SYLLABLES: OnceLock<&'static [&'static str]> = OnceLock::new();
    SYLLABLES.get_or_init(|| {
        let mut all: Vec<&'static str> = VOWELS.to_vec();
        for c in CONSONANTS {
            for v in VOWELS {
                let s: &'static str = Box::leak(format!("{c}{v}").into_boxed_str());
                all.push(s);
            }
        }
        Box::leak(all.into_boxed_slice())
    })
}

/// Roulette-wheel table over the syllable alphabet.
///
/// Weights are resolved once against the alphabet; syllables missing from the
/// weighting map count as zero and can never be drawn.
#[derive(Debug, Clone)]
pub struct SyllableTable {
    entries: Vec<(&'static str, f64)>,
    total: f64,
}

impl SyllableTable {
    pub fn new(weightings: &HashMap<String, f64>) -> Result<Self, KupuError> {
        Self::from_candidates(syllables(), weightings)
    }

    /// Build over an explicit candidate list (enumeration order is draw order).
    pub fn from_candidates(
        candidates: &[&'static str],
        weightings: &HashMap<String, f64>,
    ) -> Result<Self, KupuError> {
        let entries: Vec<(&'static str, f64)> = candidates
            .iter()
            .map(|s| {
                let w = weightings.get(*s).copied().unwrap_or(0.0);
                // Negative or NaN weights are treated as absent.
                (*s, if w > 0.0 { w } else { 0.0 })
            })
            .collect();
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(KupuError::NoSyllableWeight);
        }
        Ok(Self { entries, total })
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn weight_of(&self, syllable: &str) -> f64 {
        self.entries
            .iter()
            .find(|(s, _)| *s == syllable)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Draw one syllable with probability proportional to its weight.
    pub fn draw(&self, rng: &mut SimpleRng) -> &'static str {
        self.pick(rng.next_f64() * self.total)
    }

    /// Walk the wheel with `r` in `[0, total)`: the first candidate that drives
    /// the running value negative wins.
    fn pick(&self, mut r: f64) -> &'static str {
        let mut last_positive = self.entries[0].0;
        for &(syllable, weight) in &self.entries {
            if weight <= 0.0 {
                continue;
            }
            last_positive = syllable;
            r -= weight;
            if r < 0.0 {
                return syllable;
            }
        }
        // Rounding can leave r at exactly zero after the last positive weight.
        last_positive
    }
}
