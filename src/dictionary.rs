//! Word list and syllable weightings supplied by the host page.

use std::collections::{HashMap, HashSet};

use crate::{KupuError, SyllableTable};

#[derive(Debug, Clone)]
pub struct WordDictionary {
    words: HashSet<String>,
    syllables: SyllableTable,
}

impl WordDictionary {
    pub fn new<I, W>(words: I, weightings: &HashMap<String, f64>) -> Result<Self, KupuError>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words: HashSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(KupuError::EmptyWordList);
        }
        let syllables = SyllableTable::new(weightings)?;
        Ok(Self { words, syllables })
    }

    /// Load from the JSON forms the page ships: `word_list` is either an array
    /// of words or an object mapping word to a truthy value; `weightings` maps
    /// syllable to a non-negative number.
    #[cfg(feature = "serde_json")]
    pub fn from_json(word_list: &str, weightings: &str) -> Result<Self, KupuError> {
        use serde_json::Value;

        let list: Value = serde_json::from_str(word_list).map_err(|source| KupuError::Json {
            what: "word list",
            source,
        })?;
        let words: Vec<String> = match list {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::Object(map) => map
                .into_iter()
                .filter(|(_, v)| is_truthy(v))
                .map(|(k, _)| k)
                .collect(),
            _ => Vec::new(),
        };
        let weightings: HashMap<String, f64> =
            serde_json::from_str(weightings).map_err(|source| KupuError::Json {
                what: "syllable weightings",
                source,
            })?;
        Self::new(words, &weightings)
    }

    /// Exact membership: no case folding, no macron normalisation.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn syllables(&self) -> &SyllableTable {
        &self.syllables
    }
}

#[cfg(feature = "serde_json")]
fn is_truthy(v: &serde_json::Value) -> bool {
    use serde_json::Value;
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
