//! Kupu core crate.
//!
//! A 10x10 grid of Māori syllables: trace adjacent cells to spell words from
//! the dictionary before the countdown runs out. Reaching score milestones
//! buys more time.
//!
//! The game rules (grid, selection path, scoring, clock, controller) are plain
//! Rust and run natively; `board` is the browser front end that renders the
//! grid on a canvas and drives the controller from DOM events and timers.

use wasm_bindgen::prelude::*;

mod board;
pub mod clock;
mod config;
mod dictionary;
mod error;
pub mod game;
mod grid;
mod logging;
mod rng;
pub mod scoring;
pub mod selection;
pub mod sounds;
pub mod storage;
mod syllables;
pub mod timers;

pub use clock::{GameClock, MilestoneSchedule, Tick, format_time};
pub use config::GameConfig;
pub use dictionary::WordDictionary;
pub use error::KupuError;
pub use game::{GameController, Messages};
pub use grid::{Cell, CellId, Grid, Position};
pub use rng::SimpleRng;
pub use scoring::{FoundWord, Outcome, resolve, word_score};
pub use selection::{Path, SelectionEntry, Toggle, is_adjacent};
pub use sounds::{AudioSink, RecordingAudio, SoundId, Sounds};
pub use storage::{KeyValueStore, MemoryStore};
pub use syllables::{CONSONANTS, SyllableTable, VOWELS, syllables};
pub use timers::{ManualTimers, Timers};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Browser entrypoints
// -----------------------------------------------------------------------------

/// Start a game with the default rules. `word_list_json` is an array of words
/// (or an object of word -> truthy); `weightings_json` maps syllable -> weight.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game(word_list_json: &str, weightings_json: &str) -> Result<(), JsValue> {
    let dictionary = WordDictionary::from_json(word_list_json, weightings_json)?;
    board::start_board(GameConfig::default(), dictionary)
}

/// Like `start_game`, with a camelCase JSON object overriding any `GameConfig` field.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(
    word_list_json: &str,
    weightings_json: &str,
    config_json: &str,
) -> Result<(), JsValue> {
    let dictionary = WordDictionary::from_json(word_list_json, weightings_json)?;
    let config = GameConfig::from_json(config_json)?;
    board::start_board(config, dictionary)
}

/// A new game is a page reload: nothing carries over but the stored high score.
#[wasm_bindgen]
pub fn new_game() -> Result<(), JsValue> {
    board::reload_page()
}
