//! Top-level roach behavior.
//!
//! Hides in the dark, flees from light, and dances when bumped while
//! hiding. The dance is a child machine that only runs while `Dancing` is
//! the current state.

use crate::config::RoachConfig;
use crate::core::{Event, TimerService};
use crate::engine::{Behavior, Machine, React, Reaction};
use crate::roach::sub_dance::SubDance;
use crate::roach::{DriveMotors, RoachEvent};
use tracing::warn;

hsm_states! {
    pub enum RoachState {
        InitPState,
        /// Stopped in the dark.
        Hiding,
        /// Running from the light.
        Fleeing,
        /// Bumped while hiding; the dance child is active.
        Dancing,
    }
    pseudo: InitPState
}

pub struct FancyRoach {
    dance: Machine<SubDance>,
}

impl FancyRoach {
    pub fn new(config: &RoachConfig) -> Self {
        Self {
            dance: Machine::new(SubDance::new(config.dance)),
        }
    }

    /// The dance child. Only meaningful while the roach is `Dancing`.
    pub fn dance(&self) -> &Machine<SubDance> {
        &self.dance
    }
}

impl Default for FancyRoach {
    fn default() -> Self {
        Self::new(&RoachConfig::default())
    }
}

impl Behavior for FancyRoach {
    type State = RoachState;
    type Domain = RoachEvent;
    const NAME: &'static str = "FancyRoach";

    fn starting_state(&self) -> RoachState {
        RoachState::Hiding
    }
}

impl<C: TimerService + DriveMotors> React<C> for FancyRoach {
    fn react(
        &mut self,
        state: RoachState,
        event: &Event<RoachEvent>,
        ctx: &mut C,
    ) -> Reaction<RoachState, RoachEvent> {
        use RoachState::*;

        match (state, event) {
            (Hiding, Event::Entry) => {
                ctx.stop();
                Reaction::Handled
            }
            (Hiding, Event::Domain(RoachEvent::LightOn)) => Reaction::Transition(Fleeing),
            (Hiding, Event::Domain(RoachEvent::Bumped)) => Reaction::Transition(Dancing),

            (Fleeing, Event::Entry) => {
                ctx.forward();
                Reaction::Handled
            }
            (Fleeing, Event::Domain(RoachEvent::LightOff)) => Reaction::Transition(Hiding),

            (Dancing, Event::Entry) => {
                if !self.dance.init(ctx) {
                    warn!("dance failed to start, roach stays put");
                }
                Reaction::Handled
            }
            (Dancing, Event::Exit) => {
                // Child exit effects run before ours.
                self.dance.dispatch(Event::Exit, ctx);
                ctx.stop();
                Reaction::Handled
            }
            (Dancing, Event::Domain(RoachEvent::LightOn)) => Reaction::Transition(Fleeing),
            (Dancing, other) => Reaction::Residual(self.dance.dispatch(other.clone(), ctx)),

            _ => Reaction::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DANCE_TIMER;
    use crate::roach::{MotorCommand, SubDanceState};
    use crate::testing::{Recorder, SideEffect};

    fn started() -> (Machine<FancyRoach>, Recorder) {
        let mut roach = Machine::new(FancyRoach::default());
        let mut board = Recorder::new();
        assert!(roach.init(&mut board));
        (roach, board)
    }

    #[test]
    fn init_hides_with_motors_stopped() {
        let (roach, board) = started();
        assert_eq!(roach.current_state(), RoachState::Hiding);
        assert_eq!(board.effects(), &[SideEffect::Drive(MotorCommand::Stop)]);
        assert!(!roach.behavior().dance().is_started());
    }

    #[test]
    fn bump_while_hiding_starts_the_dance() {
        let (mut roach, mut board) = started();
        board.clear();

        let residual = roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        assert_eq!(residual, Event::NoEvent);
        assert_eq!(roach.current_state(), RoachState::Dancing);
        assert_eq!(
            roach.behavior().dance().current_state(),
            SubDanceState::Waiting
        );
        assert_eq!(
            board.take(),
            vec![SideEffect::Armed {
                timer: DANCE_TIMER,
                ticks: 200
            }]
        );
    }

    #[test]
    fn timeouts_while_dancing_reach_the_child() {
        let (mut roach, mut board) = started();
        roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);

        let residual = roach.dispatch(Event::Timeout(DANCE_TIMER), &mut board);
        assert_eq!(residual, Event::NoEvent);
        assert_eq!(roach.current_state(), RoachState::Dancing);
        assert_eq!(
            roach.behavior().dance().current_state(),
            SubDanceState::SpinningRight
        );
    }

    #[test]
    fn light_while_dancing_exits_child_before_parent() {
        let (mut roach, mut board) = started();
        roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        roach.dispatch(Event::Timeout(DANCE_TIMER), &mut board);
        roach.dispatch(Event::Timeout(DANCE_TIMER), &mut board);
        board.clear();

        roach.dispatch(Event::Domain(RoachEvent::LightOn), &mut board);
        assert_eq!(roach.current_state(), RoachState::Fleeing);
        assert_eq!(
            board.take(),
            vec![
                SideEffect::Cancelled(DANCE_TIMER),
                SideEffect::Drive(MotorCommand::Forward),
                SideEffect::Drive(MotorCommand::Stop),
                SideEffect::Drive(MotorCommand::Forward),
            ]
        );
        assert!(board.running_timers().is_empty());
    }

    #[test]
    fn reentering_dance_restarts_from_waiting() {
        let (mut roach, mut board) = started();
        roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        roach.dispatch(Event::Timeout(DANCE_TIMER), &mut board);
        roach.dispatch(Event::Domain(RoachEvent::LightOn), &mut board);
        roach.dispatch(Event::Domain(RoachEvent::LightOff), &mut board);
        roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);

        assert_eq!(roach.current_state(), RoachState::Dancing);
        assert_eq!(
            roach.behavior().dance().current_state(),
            SubDanceState::Waiting
        );
    }

    #[test]
    fn bump_while_dancing_bubbles_up_unchanged() {
        let (mut roach, mut board) = started();
        roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        board.clear();

        let residual = roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        assert_eq!(residual, Event::Domain(RoachEvent::Bumped));
        assert!(board.effects().is_empty());
    }

    #[test]
    fn bump_while_fleeing_is_unhandled() {
        let (mut roach, mut board) = started();
        roach.dispatch(Event::Domain(RoachEvent::LightOn), &mut board);
        board.clear();

        let residual = roach.dispatch(Event::Domain(RoachEvent::Bumped), &mut board);
        assert_eq!(residual, Event::Domain(RoachEvent::Bumped));
        assert_eq!(roach.current_state(), RoachState::Fleeing);
        assert!(board.effects().is_empty());
    }
}
