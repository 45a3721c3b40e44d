// Dataset invariants for the syllable alphabet and the weighted draw.
// Native-friendly: no wasm/browser APIs.

use std::collections::{HashMap, HashSet};

use kupu::{CONSONANTS, Grid, SimpleRng, SyllableTable, VOWELS, syllables};

#[test]
fn syllables_are_unique_and_well_formed() {
    let mut seen = HashSet::new();
    for s in syllables() {
        assert!(seen.insert(*s), "duplicate syllable '{}'", s);
        let chars = s.chars().count();
        assert!((1..=3).contains(&chars), "syllable '{}' has {} chars", s, chars);
        let vowel_end = VOWELS.iter().any(|v| s.ends_with(*v));
        assert!(vowel_end, "syllable '{}' does not end with a vowel", s);
    }
    assert_eq!(seen.len(), VOWELS.len() + CONSONANTS.len() * VOWELS.len());
}

#[test]
fn every_consonant_pairs_with_every_vowel() {
    let all: HashSet<&str> = syllables().iter().copied().collect();
    for c in CONSONANTS {
        for v in VOWELS {
            let s = format!("{c}{v}");
            assert!(all.contains(s.as_str()), "missing '{}'", s);
        }
    }
}

#[test]
fn uniform_weights_reach_every_syllable() {
    let weights: HashMap<String, f64> = syllables().iter().map(|s| (s.to_string(), 1.0)).collect();
    let table = SyllableTable::new(&weights).unwrap();
    let mut rng = SimpleRng::new(31337);
    let mut drawn = HashSet::new();
    for _ in 0..20_000 {
        drawn.insert(table.draw(&mut rng));
    }
    assert_eq!(drawn.len(), 110);
}

#[test]
fn grid_uses_only_weighted_syllables() {
    let weights = HashMap::from([
        ("wha".to_string(), 5.0),
        ("ngā".to_string(), 1.0),
        ("o".to_string(), 0.0),
    ]);
    let table = SyllableTable::new(&weights).unwrap();
    let grid = Grid::generate(10, &table, &mut SimpleRng::new(4));
    let texts: HashSet<&str> = grid.columns().iter().flatten().map(|c| c.text).collect();
    assert!(texts.is_subset(&HashSet::from(["wha", "ngā"])));
}
