//! Test doubles for behaviors.
//!
//! [`Recorder`] stands in for the board: it implements every port a roach
//! reaction uses and writes each call down in order, so tests can assert
//! the exact sequence of side effects a dispatch produced.

use crate::core::{TimerId, TimerService};
use crate::roach::{DriveMotors, MotorCommand};
use std::collections::BTreeSet;

/// One call a reaction made on its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffect {
    Armed { timer: TimerId, ticks: u32 },
    Cancelled(TimerId),
    Drive(MotorCommand),
}

/// Context that records side effects instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    effects: Vec<SideEffect>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn effects(&self) -> &[SideEffect] {
        &self.effects
    }

    /// Return the recorded effects and start over.
    pub fn take(&mut self) -> Vec<SideEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Timers armed and not cancelled since the recording started.
    pub fn running_timers(&self) -> BTreeSet<TimerId> {
        let mut running = BTreeSet::new();
        for effect in &self.effects {
            match effect {
                SideEffect::Armed { timer, .. } => {
                    running.insert(*timer);
                }
                SideEffect::Cancelled(timer) => {
                    running.remove(timer);
                }
                SideEffect::Drive(_) => {}
            }
        }
        running
    }
}

impl TimerService for Recorder {
    fn arm(&mut self, timer: TimerId, ticks: u32) {
        self.effects.push(SideEffect::Armed { timer, ticks });
    }

    fn cancel(&mut self, timer: TimerId) {
        self.effects.push(SideEffect::Cancelled(timer));
    }
}

impl DriveMotors for Recorder {
    fn forward(&mut self) {
        self.effects.push(SideEffect::Drive(MotorCommand::Forward));
    }

    fn tank_left(&mut self) {
        self.effects.push(SideEffect::Drive(MotorCommand::TankLeft));
    }

    fn tank_right(&mut self) {
        self.effects.push(SideEffect::Drive(MotorCommand::TankRight));
    }

    fn stop(&mut self) {
        self.effects.push(SideEffect::Drive(MotorCommand::Stop));
    }
}
