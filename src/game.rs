//! The single owner of a running game.
//!
//! `GameController` turns discrete host events (cell click, word submission,
//! countdown tick, deferred removal, focus loss) into state changes. It never
//! blocks and holds no callbacks: scheduling, persistence and audio go through
//! the `Timers`, `KeyValueStore` and `AudioSink` ports.

use crate::clock::{GameClock, Tick};
use crate::scoring::{self, FoundWord, Outcome};
use crate::selection::{Path, SelectionEntry, Toggle};
use crate::storage::{HIGH_SCORE_KEY, load_high_score};
use crate::{
    AudioSink, GameConfig, Grid, KeyValueStore, KupuError, Position, SimpleRng, SoundId, Sounds,
    Timers, WordDictionary,
};

pub const MSG_WORD_NOT_FOUND: &str = "Kupu kore i kitea!";
pub const MSG_WORD_FOUND: &str = "Kupu i kitea: ";
pub const MSG_GOAL_REACHED: &str = "Whāinga tutuki: wā atu";
pub const MSG_GAME_OVER: &str = "Kēmu ki runga";

const DICTIONARY_SEARCH: &str = "http://maoridictionary.co.nz/search?idiom=&phrase=&proverb=&loan=&histLoanWords=&keywords=";

/// Player-facing notices. `word` reports the last submission, `status`
/// reports bonuses and game over, `link` points at the found word's entry in
/// the online dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    pub word: String,
    pub status: String,
    pub link: Option<String>,
}

impl Messages {
    pub fn clear(&mut self) {
        self.word.clear();
        self.status.clear();
        self.link = None;
    }
}

pub fn dictionary_link(word: &str) -> String {
    format!("{DICTIONARY_SEARCH}{word}")
}

pub struct GameController<S, A, T: Timers> {
    config: GameConfig,
    dictionary: WordDictionary,
    grid: Grid,
    path: Path,
    clock: GameClock<T::Interval>,
    rng: SimpleRng,
    store: S,
    sounds: Sounds<A>,
    timers: T,
    score: u32,
    high_score: u32,
    paused: bool,
    found_words: Vec<FoundWord>,
    /// Cells of an accepted word, already replaced by refill cells but not yet
    /// spliced out of their columns.
    consuming: Option<Vec<SelectionEntry>>,
    messages: Messages,
}

impl<S, A, T> GameController<S, A, T>
where
    S: KeyValueStore,
    A: AudioSink,
    T: Timers,
{
    /// Deal a fresh grid. The game starts paused; the player presses play.
    pub fn new(
        config: GameConfig,
        dictionary: WordDictionary,
        store: S,
        audio: A,
        timers: T,
        mut rng: SimpleRng,
    ) -> Self {
        let grid = Grid::generate(config.grid_size, dictionary.syllables(), &mut rng);
        let high_score = load_high_score(&store);
        let sounds = Sounds::new(audio, &store);
        log::debug!(
            "new {n}x{n} game, {} words, high score {high_score}",
            dictionary.len(),
            n = config.grid_size
        );
        Self {
            clock: GameClock::new(&config),
            config,
            dictionary,
            grid,
            path: Path::new(),
            rng,
            store,
            sounds,
            timers,
            score: 0,
            high_score,
            paused: true,
            found_words: Vec::new(),
            consuming: None,
            messages: Messages::default(),
        }
    }

    fn accepts_input(&self) -> bool {
        !self.paused && !self.clock.is_expired() && self.consuming.is_none()
    }

    /// A click on the cell at `pos`.
    pub fn click(&mut self, pos: Position) -> Toggle {
        if !self.accepts_input() {
            return Toggle::Ignored;
        }
        self.messages.clear();
        let Some(cell) = self.grid.cell(pos).copied() else {
            return Toggle::Ignored;
        };
        self.path.toggle(SelectionEntry::new(pos, cell))
    }

    /// Submit the current path as a word. `None` when input is closed.
    pub fn submit(&mut self) -> Option<Outcome> {
        if !self.accepts_input() {
            return None;
        }
        let outcome = scoring::resolve(&self.path, &self.dictionary);
        match &outcome {
            Outcome::Rejected { text } => {
                log::debug!("rejected '{text}'");
                self.sounds.play(SoundId::IncorrectWord);
                self.messages.word = MSG_WORD_NOT_FOUND.to_string();
                self.messages.link = None;
            }
            Outcome::Accepted { text, score } => {
                log::debug!("accepted '{text}' for {score}");
                self.consume(text, *score);
            }
        }
        Some(outcome)
    }

    fn consume(&mut self, text: &str, score: u32) {
        self.sounds.play(SoundId::CorrectWord);
        self.found_words.push(FoundWord {
            text: text.to_string(),
            score,
        });

        // Refill first so no column ever shows fewer than `grid_size` cells.
        for entry in self.path.entries() {
            self.grid.refill_column(
                entry.position.col,
                1,
                self.dictionary.syllables(),
                &mut self.rng,
            );
        }
        self.consuming = Some(self.path.entries().to_vec());
        if let Err(err) = self.timers.defer(self.config.removal_delay_ms) {
            log::warn!("removal not scheduled ({err}); removing now");
            self.on_removal_due();
        }

        self.score += score;
        self.messages.word = format!("{MSG_WORD_FOUND}{text}");
        self.messages.link = Some(dictionary_link(text));
        self.record_high_score();
        if self.clock.award(self.score) {
            log::info!(
                "milestone reached at {}; next at {}",
                self.score,
                self.clock.next_more_time_score()
            );
            self.sounds.play(SoundId::GoalReached);
            self.messages.status = MSG_GOAL_REACHED.to_string();
        }
    }

    fn record_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        if let Err(err) = self.store.set(HIGH_SCORE_KEY, &self.score.to_string()) {
            log::warn!("could not persist high score: {err}");
        }
    }

    /// The deferred removal fired: splice consumed cells out and clear the
    /// path. Applies even if the game ended in the meantime.
    pub fn on_removal_due(&mut self) {
        let Some(consumed) = self.consuming.take() else {
            return;
        };
        for entry in &consumed {
            self.grid
                .remove_cells_by_id(entry.position.col, &[entry.cell.id]);
        }
        self.path.clear();
    }

    /// One countdown period elapsed.
    pub fn on_tick(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        match self.clock.tick(&mut self.timers) {
            Tick::Running => {}
            Tick::LowTime(cue) => self.sounds.play(cue),
            Tick::Expired => self.game_over(),
        }
    }

    fn game_over(&mut self) {
        log::info!("game over with {} points", self.score);
        self.sounds.play(SoundId::GameOver);
        self.path.clear();
        self.messages.status = MSG_GAME_OVER.to_string();
        self.paused = true;
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.clock.stop(&mut self.timers);
    }

    /// The play surface lost focus. Pauses only; the player resumes.
    pub fn on_focus_lost(&mut self) {
        self.pause();
    }

    /// Resume the countdown. Refused once time has run out.
    pub fn resume(&mut self) -> Result<(), KupuError> {
        if self.clock.is_expired() {
            return Ok(());
        }
        self.clock.start(&mut self.timers)?;
        self.paused = false;
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<(), KupuError> {
        if self.paused {
            self.resume()
        } else {
            self.pause();
            Ok(())
        }
    }

    pub fn set_mute(&mut self, mute: bool) {
        self.sounds.set_mute(mute, &mut self.store);
    }

    pub fn toggle_mute(&mut self) {
        let mute = !self.sounds.is_muted();
        self.set_mute(mute);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn selected_text(&self) -> String {
        self.path.text()
    }

    /// Cells of the last accepted word while their removal is pending.
    pub fn consuming(&self) -> &[SelectionEntry] {
        self.consuming.as_deref().unwrap_or(&[])
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn time_remaining(&self) -> u32 {
        self.clock.time_remaining()
    }

    pub fn more_time_cost(&self) -> u32 {
        self.clock.more_time_cost()
    }

    pub fn next_more_time_score(&self) -> u32 {
        self.clock.next_more_time_score()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.clock.is_expired()
    }

    pub fn is_muted(&self) -> bool {
        self.sounds.is_muted()
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sounds(&self) -> &Sounds<A> {
        &self.sounds
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }
}
