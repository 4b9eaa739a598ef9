//! The dance the roach performs after being bumped in the dark.
//!
//! Wait, spin right, spin left, repeat. Each step arms its timer on entry
//! and cancels it on exit; leaving the left spin also sets the wheels
//! driving forward again.

use crate::config::DanceConfig;
use crate::core::{Event, TimerService};
use crate::engine::{Behavior, React, Reaction};
use crate::roach::{DriveMotors, RoachEvent};

hsm_states! {
    pub enum SubDanceState {
        InitPSubState,
        Waiting,
        SpinningRight,
        SpinningLeft,
    }
    pseudo: InitPSubState
}

/// Dance sub-behavior. Runs as a child of [`FancyRoach`](crate::roach::FancyRoach)
/// or on its own.
#[derive(Clone, Debug, Default)]
pub struct SubDance {
    config: DanceConfig,
}

impl SubDance {
    pub fn new(config: DanceConfig) -> Self {
        Self { config }
    }
}

impl Behavior for SubDance {
    type State = SubDanceState;
    type Domain = RoachEvent;
    const NAME: &'static str = "SubDance";

    fn starting_state(&self) -> SubDanceState {
        SubDanceState::Waiting
    }
}

impl<C: TimerService + DriveMotors> React<C> for SubDance {
    fn react(
        &mut self,
        state: SubDanceState,
        event: &Event<RoachEvent>,
        ctx: &mut C,
    ) -> Reaction<SubDanceState, RoachEvent> {
        use SubDanceState::*;

        let DanceConfig { wait, right, left } = self.config;
        match (state, event) {
            (Waiting, Event::Entry) => {
                ctx.arm(wait.timer, wait.ticks);
                Reaction::Handled
            }
            (Waiting, Event::Timeout(_)) if event.is_timeout_of(wait.timer) => {
                Reaction::Transition(SpinningRight)
            }
            (Waiting, Event::Exit) => {
                ctx.cancel(wait.timer);
                Reaction::Handled
            }

            (SpinningRight, Event::Entry) => {
                ctx.tank_right();
                ctx.arm(right.timer, right.ticks);
                Reaction::Handled
            }
            (SpinningRight, Event::Timeout(_)) if event.is_timeout_of(right.timer) => {
                Reaction::Transition(SpinningLeft)
            }
            (SpinningRight, Event::Exit) => {
                ctx.cancel(right.timer);
                Reaction::Handled
            }

            (SpinningLeft, Event::Entry) => {
                ctx.tank_left();
                ctx.arm(left.timer, left.ticks);
                Reaction::Handled
            }
            (SpinningLeft, Event::Timeout(_)) if event.is_timeout_of(left.timer) => {
                Reaction::Transition(Waiting)
            }
            (SpinningLeft, Event::Exit) => {
                ctx.cancel(left.timer);
                ctx.forward();
                Reaction::Handled
            }

            _ => Reaction::Unhandled,
        }
    }
}
