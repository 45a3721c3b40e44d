//! Key/value persistence port (high score and mute preference).

use std::collections::HashMap;

use crate::KupuError;

pub const HIGH_SCORE_KEY: &str = "highScore";
pub const MUTE_KEY: &str = "mute";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KupuError>;
}

/// In-memory store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KupuError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored high score; anything unparsable counts as no score yet.
pub fn load_high_score(store: &impl KeyValueStore) -> u32 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

pub fn load_mute(store: &impl KeyValueStore) -> bool {
    store.get(MUTE_KEY).is_some_and(|v| v.trim() == "true")
}
