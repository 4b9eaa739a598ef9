//! Software countdown timers.

use crate::core::{TimerId, TimerService};
use std::collections::BTreeMap;
use tracing::trace;

/// Source of timer expiries driven by a tick counter.
pub trait TickSource {
    /// Advance time by `ticks` and return the timers that expired, in
    /// ascending id order. Expired timers stop running (one-shot).
    fn advance(&mut self, ticks: u32) -> Vec<TimerId>;
}

/// One-shot timers keyed by id.
///
/// Arming a running timer restarts it. Arming with zero ticks expires on
/// the next `advance`.
///
/// # Example
///
/// ```rust
/// use hsmkit::core::{TimerId, TimerService};
/// use hsmkit::runtime::{SoftTimers, TickSource};
///
/// let mut timers = SoftTimers::new();
/// timers.arm(TimerId(1), 200);
///
/// assert!(timers.advance(199).is_empty());
/// assert_eq!(timers.advance(1), vec![TimerId(1)]);
/// assert!(!timers.is_running(TimerId(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SoftTimers {
    running: BTreeMap<TimerId, u32>,
}

impl SoftTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self, id: TimerId) -> bool {
        self.running.contains_key(&id)
    }

    /// Ticks left before the timer expires, if it is running.
    pub fn remaining(&self, id: TimerId) -> Option<u32> {
        self.running.get(&id).copied()
    }

    /// Number of running timers.
    pub fn active(&self) -> usize {
        self.running.len()
    }
}

impl TimerService for SoftTimers {
    fn arm(&mut self, id: TimerId, ticks: u32) {
        trace!(timer = %id, ticks, "arm");
        self.running.insert(id, ticks);
    }

    fn cancel(&mut self, id: TimerId) {
        if self.running.remove(&id).is_some() {
            trace!(timer = %id, "cancel");
        }
    }
}

impl TickSource for SoftTimers {
    fn advance(&mut self, ticks: u32) -> Vec<TimerId> {
        let mut expired = Vec::new();
        for (id, remaining) in self.running.iter_mut() {
            *remaining = remaining.saturating_sub(ticks);
            if *remaining == 0 {
                expired.push(*id);
            }
        }
        for id in &expired {
            self.running.remove(id);
            trace!(timer = %id, "expired");
        }
        expired
    }
}
