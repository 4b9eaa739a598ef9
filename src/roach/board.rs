//! The context roach reactions run against.

use crate::core::{TimerId, TimerService};
use crate::roach::motors::DriveMotors;
use crate::runtime::{SoftTimers, TickSource};

/// Timers plus drive motors: everything a roach reaction can touch.
#[derive(Clone, Debug, Default)]
pub struct RoachBoard<M> {
    pub timers: SoftTimers,
    pub motors: M,
}

impl<M: DriveMotors> RoachBoard<M> {
    pub fn new(motors: M) -> Self {
        Self {
            timers: SoftTimers::new(),
            motors,
        }
    }
}

impl<M> TimerService for RoachBoard<M> {
    fn arm(&mut self, id: TimerId, ticks: u32) {
        self.timers.arm(id, ticks);
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }
}

impl<M> TickSource for RoachBoard<M> {
    fn advance(&mut self, ticks: u32) -> Vec<TimerId> {
        self.timers.advance(ticks)
    }
}

impl<M: DriveMotors> DriveMotors for RoachBoard<M> {
    fn forward(&mut self) {
        self.motors.forward();
    }

    fn tank_left(&mut self) {
        self.motors.tank_left();
    }

    fn tank_right(&mut self) {
        self.motors.tank_right();
    }

    fn stop(&mut self) {
        self.motors.stop();
    }
}
