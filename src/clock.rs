//! Countdown clock with score-milestone time bonuses.

use crate::{GameConfig, KupuError, SoundId, Timers};

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    /// Few seconds left: alternate `Tick` (even seconds) and `Tock` (odd).
    LowTime(SoundId),
    /// Time has run out; the tick source is already stopped.
    Expired,
}

/// Escalating score thresholds that buy more time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSchedule {
    bonus_secs: u32,
    cost: u32,
    step: u32,
    next_score: u32,
}

impl MilestoneSchedule {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bonus_secs: config.bonus_time_secs,
            cost: config.bonus_cost_start,
            step: config.bonus_cost_step,
            next_score: config.first_bonus_score,
        }
    }

    /// Seconds earned by reaching `score`, advancing the schedule if so.
    /// At most one bonus per call.
    pub fn check(&mut self, score: u32) -> Option<u32> {
        if score < self.next_score {
            return None;
        }
        self.cost += self.step;
        self.next_score += self.cost;
        Some(self.bonus_secs)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn next_score(&self) -> u32 {
        self.next_score
    }
}

/// Seconds left plus ownership of the single repeating tick.
#[derive(Debug)]
pub struct GameClock<H> {
    time_remaining: u32,
    period_ms: u32,
    low_time_secs: u32,
    handle: Option<H>,
    milestones: MilestoneSchedule,
}

impl<H> GameClock<H> {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            time_remaining: config.starting_time_secs,
            period_ms: config.tick_interval_ms,
            low_time_secs: config.low_time_secs,
            handle: None,
            milestones: MilestoneSchedule::new(config),
        }
    }

    /// Start ticking. No-op if already running or out of time.
    pub fn start<T>(&mut self, timers: &mut T) -> Result<(), KupuError>
    where
        T: Timers<Interval = H>,
    {
        if self.handle.is_some() || self.is_expired() {
            return Ok(());
        }
        self.handle = Some(timers.start_interval(self.period_ms)?);
        Ok(())
    }

    /// Stop ticking. No-op if not running. Time remaining is untouched.
    pub fn stop<T>(&mut self, timers: &mut T)
    where
        T: Timers<Interval = H>,
    {
        if let Some(handle) = self.handle.take() {
            timers.cancel_interval(handle);
        }
    }

    pub fn tick<T>(&mut self, timers: &mut T) -> Tick
    where
        T: Timers<Interval = H>,
    {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.stop(timers);
            Tick::Expired
        } else if self.time_remaining <= self.low_time_secs {
            if self.time_remaining % 2 == 0 {
                Tick::LowTime(SoundId::Tick)
            } else {
                Tick::LowTime(SoundId::Tock)
            }
        } else {
            Tick::Running
        }
    }

    /// React to a new score: add bonus time when the next milestone is reached.
    pub fn award(&mut self, score: u32) -> bool {
        match self.milestones.check(score) {
            Some(secs) => {
                self.time_remaining += secs;
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn more_time_cost(&self) -> u32 {
        self.milestones.cost()
    }

    pub fn next_more_time_score(&self) -> u32 {
        self.milestones.next_score()
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
