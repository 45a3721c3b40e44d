//! Sound cues. Playback is fire-and-forget and never feeds back into the game.

use crate::KeyValueStore;
use crate::storage::{MUTE_KEY, load_mute};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Tick,
    Tock,
    GameOver,
    CorrectWord,
    IncorrectWord,
    GoalReached,
}

impl SoundId {
    pub const ALL: [SoundId; 6] = [
        SoundId::Tick,
        SoundId::Tock,
        SoundId::GameOver,
        SoundId::CorrectWord,
        SoundId::IncorrectWord,
        SoundId::GoalReached,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoundId::Tick => "tick",
            SoundId::Tock => "tock",
            SoundId::GameOver => "gameOver",
            SoundId::CorrectWord => "correctWord",
            SoundId::IncorrectWord => "incorrectWord",
            SoundId::GoalReached => "goalReached",
        }
    }

    /// Asset path relative to the page.
    pub fn asset(self) -> &'static str {
        match self {
            SoundId::Tick => "sounds/tick.mp3",
            SoundId::Tock => "sounds/tock.mp3",
            SoundId::GameOver => "sounds/game-over.mp3",
            SoundId::CorrectWord => "sounds/correct.mp3",
            SoundId::IncorrectWord => "sounds/incorrect.mp3",
            SoundId::GoalReached => "sounds/goal-reached.mp3",
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, sound: SoundId);
}

/// Records every cue it is asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundId>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: SoundId) {
        self.played.push(sound);
    }
}

/// Sink plus the persisted mute preference consulted before every cue.
#[derive(Debug)]
pub struct Sounds<A> {
    sink: A,
    mute: bool,
}

impl<A: AudioSink> Sounds<A> {
    pub fn new(sink: A, store: &impl KeyValueStore) -> Self {
        Self {
            sink,
            mute: load_mute(store),
        }
    }

    pub fn play(&mut self, sound: SoundId) {
        if !self.mute {
            self.sink.play(sound);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.mute
    }

    pub fn set_mute(&mut self, mute: bool, store: &mut impl KeyValueStore) {
        self.mute = mute;
        if let Err(err) = store.set(MUTE_KEY, if mute { "true" } else { "false" }) {
            log::warn!("could not persist mute preference: {err}");
        }
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn muted_sounds_are_dropped() {
        let mut store = MemoryStore::new();
        let mut sounds = Sounds::new(RecordingAudio::default(), &store);
        sounds.play(SoundId::Tick);
        sounds.set_mute(true, &mut store);
        sounds.play(SoundId::Tock);
        assert_eq!(sounds.sink().played, vec![SoundId::Tick]);
        assert_eq!(store.get(MUTE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn mute_preference_is_restored() {
        let store = MemoryStore::new().with(MUTE_KEY, "true");
        let mut sounds = Sounds::new(RecordingAudio::default(), &store);
        assert!(sounds.is_muted());
        sounds.play(SoundId::GameOver);
        assert!(sounds.sink().played.is_empty());
    }

    #[test]
    fn ids_match_asset_names() {
        let names: Vec<&str> = SoundId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["tick", "tock", "gameOver", "correctWord", "incorrectWord", "goalReached"]
        );
        assert!(SoundId::ALL.iter().all(|s| s.asset().ends_with(".mp3")));
    }
}
