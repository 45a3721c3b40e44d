//! Scheduling port: the repeating countdown tick and one-shot deferrals.
//!
//! The core never holds callbacks. A host fires `GameController::on_tick` for
//! every interval period and `GameController::on_removal_due` once per
//! deferral.

use crate::KupuError;

pub trait Timers {
    /// Handle that cancels a running interval.
    type Interval;

    fn start_interval(&mut self, period_ms: u32) -> Result<Self::Interval, KupuError>;

    fn cancel_interval(&mut self, handle: Self::Interval);

    /// Schedule one removal callback after `delay_ms`. Never cancelled.
    fn defer(&mut self, delay_ms: u32) -> Result<(), KupuError>;
}

/// Host-driven timers for native use and tests: nothing fires by itself, the
/// caller inspects what is scheduled and delivers the events.
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_handle: u32,
    active: Vec<u32>,
    started: usize,
    deferred: Vec<u32>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals currently running.
    pub fn active_intervals(&self) -> usize {
        self.active.len()
    }

    /// Intervals ever started.
    pub fn intervals_started(&self) -> usize {
        self.started
    }

    pub fn pending_deferrals(&self) -> usize {
        self.deferred.len()
    }

    /// Pop the oldest deferral, returning its delay.
    pub fn take_deferral(&mut self) -> Option<u32> {
        if self.deferred.is_empty() {
            None
        } else {
            Some(self.deferred.remove(0))
        }
    }
}

impl Timers for ManualTimers {
    type Interval = u32;

    fn start_interval(&mut self, _period_ms: u32) -> Result<u32, KupuError> {
        self.next_handle += 1;
        self.started += 1;
        self.active.push(self.next_handle);
        Ok(self.next_handle)
    }

    fn cancel_interval(&mut self, handle: u32) {
        self.active.retain(|h| *h != handle);
    }

    fn defer(&mut self, delay_ms: u32) -> Result<(), KupuError> {
        self.deferred.push(delay_ms);
        Ok(())
    }
}
