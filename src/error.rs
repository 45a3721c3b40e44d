//! Infrastructure errors. Gameplay misses (unknown word, non-adjacent click,
//! clicks after time runs out) are outcomes, never errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KupuError {
    /// The weighting table gives no syllable of the alphabet a positive weight.
    #[error("syllable weightings give the alphabet a total weight of zero")]
    NoSyllableWeight,
    #[error("word list is empty")]
    EmptyWordList,
    #[cfg(feature = "serde_json")]
    #[error("malformed {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("browser API unavailable: {0}")]
    Browser(&'static str),
    #[error("timer scheduling failed: {0}")]
    Timer(String),
    #[error("storage write for key '{key}' failed: {reason}")]
    Storage { key: String, reason: String },
    #[cfg(feature = "rng")]
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

impl From<KupuError> for wasm_bindgen::JsValue {
    fn from(err: KupuError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
