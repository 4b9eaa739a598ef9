//! Machine instance and the dispatch protocol.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::engine::behavior::{Behavior, React, Reaction};
use crate::engine::error::HsmError;
use chrono::Utc;
use tracing::{debug, error, trace, trace_span, warn};

/// One running instance of a behavior.
///
/// The machine owns the current state; the behavior owns everything else
/// (configuration, child machines). Callers hold machines by value, so
/// several independent instances of the same behavior can coexist.
pub struct Machine<B: Behavior> {
    behavior: B,
    current: B::State,
    history: StateHistory<B::State>,
}

impl<B: Behavior> Machine<B> {
    /// Create a machine parked in the pseudo-state. Call `init` before
    /// dispatching anything else.
    pub fn new(behavior: B) -> Self {
        Self {
            behavior,
            current: B::State::PSEUDO,
            history: StateHistory::new(),
        }
    }

    /// Like [`new`](Self::new), keeping at most `capacity` transitions in
    /// the trace. Zero disables the trace.
    pub fn with_history_capacity(behavior: B, capacity: usize) -> Self {
        Self {
            behavior,
            current: B::State::PSEUDO,
            history: StateHistory::with_capacity(capacity),
        }
    }

    pub fn current_state(&self) -> B::State {
        self.current
    }

    /// Name of the current state, for diagnostics.
    pub fn state_name(&self) -> &'static str {
        self.current.name()
    }

    /// True once `init` has moved the machine out of the pseudo-state.
    pub fn is_started(&self) -> bool {
        !self.current.is_pseudo()
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Most recent transitions, oldest first.
    pub fn history(&self) -> &StateHistory<B::State> {
        &self.history
    }

    /// Initialize the machine, reporting failure as `false`.
    ///
    /// See [`try_init`](Self::try_init).
    pub fn init<C: ?Sized>(&mut self, ctx: &mut C) -> bool
    where
        B: React<C>,
    {
        match self.try_init(ctx) {
            Ok(()) => true,
            Err(err) => {
                error!(machine = B::NAME, %err, "initialization failed");
                false
            }
        }
    }

    /// Initialize the machine.
    ///
    /// Resets to the pseudo-state and dispatches `Init`, which moves the
    /// machine straight to its starting state without an exit/entry cycle.
    /// The starting state then receives exactly one `Entry`.
    ///
    /// Re-initializing a running machine does not run the old state's
    /// `Exit`; a parent is expected to forward `Exit` first.
    ///
    /// # Errors
    ///
    /// Returns `HsmError::InitFault` when the bootstrap residual is not
    /// `NoEvent`. The machine is left in the pseudo-state.
    pub fn try_init<C: ?Sized>(&mut self, ctx: &mut C) -> Result<(), HsmError>
    where
        B: React<C>,
    {
        self.current = B::State::PSEUDO;
        let residual = self.dispatch(Event::Init, ctx);
        if !residual.is_no_event() {
            self.current = B::State::PSEUDO;
            return Err(HsmError::InitFault {
                machine: B::NAME,
                residual: residual.kind(),
            });
        }
        self.dispatch(Event::Entry, ctx);
        Ok(())
    }

    /// Deliver one event and run it to completion.
    ///
    /// Returns `NoEvent` if the event was consumed, otherwise the residual
    /// the caller should try to handle itself.
    pub fn dispatch<C: ?Sized>(&mut self, event: Event<B::Domain>, ctx: &mut C) -> Event<B::Domain>
    where
        B: React<C>,
    {
        let _span = trace_span!("dispatch", machine = B::NAME).entered();
        let state = self.current;
        trace!(state = state.name(), event = %event.kind(), "dispatch");

        if state.is_pseudo() {
            return self.bootstrap(event);
        }

        match self.behavior.react(state, &event, ctx) {
            Reaction::Unhandled => event,
            Reaction::Handled => Event::NoEvent,
            Reaction::Residual(residual) => residual,
            Reaction::Transition(next) => {
                if event.is_lifecycle() {
                    warn!(
                        state = state.name(),
                        next = next.name(),
                        event = %event.kind(),
                        "transition requested from a lifecycle reaction, ignored"
                    );
                } else {
                    self.transition(state, next, &event, ctx);
                }
                Event::NoEvent
            }
        }
    }

    fn bootstrap(&mut self, event: Event<B::Domain>) -> Event<B::Domain> {
        if !matches!(event, Event::Init) {
            return event;
        }
        let start = self.behavior.starting_state();
        if start.is_pseudo() {
            return event;
        }
        debug!(machine = B::NAME, start = start.name(), "bootstrap");
        self.current = start;
        Event::NoEvent
    }

    fn transition<C: ?Sized>(
        &mut self,
        from: B::State,
        to: B::State,
        trigger: &Event<B::Domain>,
        ctx: &mut C,
    ) where
        B: React<C>,
    {
        debug!(
            machine = B::NAME,
            from = from.name(),
            to = to.name(),
            trigger = %trigger.kind(),
            "transition"
        );
        self.dispatch(Event::Exit, ctx);
        self.current = to;
        self.history.record(StateTransition {
            from,
            to,
            trigger: trigger.kind(),
            timestamp: Utc::now(),
        });
        self.dispatch(Event::Entry, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventKind, TimerId};

    const BLINK_TIMER: TimerId = TimerId(1);

    hsm_states! {
        enum LampState {
            InitPState,
            Off,
            On,
            Glitch,
        }
        pseudo: InitPState
    }

    #[derive(Clone, Debug, PartialEq)]
    enum LampEvent {
        Toggle,
        Poke,
        Glitch,
        Unknown,
    }

    struct Lamp {
        start: LampState,
    }

    impl Behavior for Lamp {
        type State = LampState;
        type Domain = LampEvent;
        const NAME: &'static str = "Lamp";

        fn starting_state(&self) -> LampState {
            self.start
        }
    }

    impl React<Vec<String>> for Lamp {
        fn react(
            &mut self,
            state: LampState,
            event: &Event<LampEvent>,
            log: &mut Vec<String>,
        ) -> Reaction<LampState, LampEvent> {
            let mut note = |what: &str| log.push(format!("{}:{}", state.name(), what));
            match (state, event) {
                (_, Event::Entry) => {
                    note("entry");
                    if state == LampState::Glitch {
                        return Reaction::Transition(LampState::Off);
                    }
                    Reaction::Handled
                }
                (_, Event::Exit) => {
                    note("exit");
                    Reaction::Handled
                }
                (LampState::Off, Event::Timeout(id)) if *id == BLINK_TIMER => {
                    note("timeout");
                    Reaction::Transition(LampState::On)
                }
                (LampState::On, Event::Timeout(id)) if *id == BLINK_TIMER => {
                    note("timeout");
                    Reaction::Transition(LampState::Off)
                }
                (LampState::Off, Event::Domain(LampEvent::Toggle)) => {
                    note("toggle");
                    Reaction::Transition(LampState::Off)
                }
                (LampState::Off, Event::Domain(LampEvent::Poke)) => {
                    note("poke");
                    Reaction::Handled
                }
                (LampState::Off, Event::Domain(LampEvent::Glitch)) => Reaction::Transition(LampState::Glitch),
                _ => Reaction::Unhandled,
            }
        }
    }

    fn started_lamp() -> (Machine<Lamp>, Vec<String>) {
        let mut machine = Machine::new(Lamp {
            start: LampState::Off,
        });
        let mut log = Vec::new();
        assert!(machine.init(&mut log));
        log.clear();
        (machine, log)
    }

    #[test]
    fn new_machine_waits_in_pseudo_state() {
        let machine = Machine::new(Lamp {
            start: LampState::Off,
        });
        assert_eq!(machine.current_state(), LampState::InitPState);
        assert!(!machine.is_started());
    }

    #[test]
    fn init_moves_to_start_and_enters_it_once() {
        let mut machine = Machine::new(Lamp {
            start: LampState::Off,
        });
        let mut log = Vec::new();

        assert!(machine.init(&mut log));
        assert_eq!(machine.current_state(), LampState::Off);
        assert_eq!(machine.state_name(), "Off");
        assert_eq!(log, vec!["Off:entry"]);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn init_fails_when_start_is_pseudo_state() {
        let mut machine = Machine::new(Lamp {
            start: LampState::InitPState,
        });
        let mut log = Vec::new();

        let err = machine.try_init(&mut log).unwrap_err();
        assert_eq!(
            err,
            HsmError::InitFault {
                machine: "Lamp",
                residual: EventKind::Init,
            }
        );
        assert!(!machine.is_started());
        assert!(log.is_empty());
        assert!(!machine.init(&mut log));
    }

    #[test]
    fn pseudo_state_ignores_everything_but_init() {
        let mut machine = Machine::new(Lamp {
            start: LampState::Off,
        });
        let mut log = Vec::new();

        let residual = machine.dispatch(Event::Domain(LampEvent::Poke), &mut log);
        assert_eq!(residual, Event::Domain(LampEvent::Poke));
        assert_eq!(machine.current_state(), LampState::InitPState);
        assert!(log.is_empty());
    }

    #[test]
    fn unhandled_event_is_returned_unchanged() {
        let (mut machine, mut log) = started_lamp();

        let residual = machine.dispatch(Event::Domain(LampEvent::Unknown), &mut log);
        assert_eq!(residual, Event::Domain(LampEvent::Unknown));
        assert_eq!(machine.current_state(), LampState::Off);
        assert!(log.is_empty());
    }

    #[test]
    fn init_after_start_is_unhandled() {
        let (mut machine, mut log) = started_lamp();
        assert_eq!(machine.dispatch(Event::Init, &mut log), Event::Init);
        assert!(log.is_empty());
    }

    #[test]
    fn handled_event_is_consumed_in_place() {
        let (mut machine, mut log) = started_lamp();

        let residual = machine.dispatch(Event::Domain(LampEvent::Poke), &mut log);
        assert_eq!(residual, Event::NoEvent);
        assert_eq!(log, vec!["Off:poke"]);
    }

    #[test]
    fn transition_runs_reaction_then_exit_then_entry() {
        let (mut machine, mut log) = started_lamp();

        let residual = machine.dispatch(Event::Timeout(BLINK_TIMER), &mut log);
        assert_eq!(residual, Event::NoEvent);
        assert_eq!(machine.current_state(), LampState::On);
        assert_eq!(log, vec!["Off:timeout", "Off:exit", "On:entry"]);
    }

    #[test]
    fn foreign_timeout_is_ignored() {
        let (mut machine, mut log) = started_lamp();

        let residual = machine.dispatch(Event::Timeout(TimerId(9)), &mut log);
        assert_eq!(residual, Event::Timeout(TimerId(9)));
        assert_eq!(machine.current_state(), LampState::Off);
        assert!(log.is_empty());
    }

    #[test]
    fn self_transition_runs_exit_and_entry_once() {
        let (mut machine, mut log) = started_lamp();

        machine.dispatch(Event::Domain(LampEvent::Toggle), &mut log);
        assert_eq!(machine.current_state(), LampState::Off);
        assert_eq!(log, vec!["Off:toggle", "Off:exit", "Off:entry"]);
        assert_eq!(machine.history().get_path(), vec![&LampState::Off, &LampState::Off]);
    }

    #[test]
    fn transition_from_entry_reaction_is_ignored() {
        let (mut machine, mut log) = started_lamp();

        let residual = machine.dispatch(Event::Domain(LampEvent::Glitch), &mut log);
        assert_eq!(residual, Event::NoEvent);
        assert_eq!(machine.current_state(), LampState::Glitch);
        assert_eq!(log, vec!["Off:exit", "Glitch:entry"]);
    }

    #[test]
    fn history_records_each_transition_with_trigger() {
        let (mut machine, mut log) = started_lamp();

        machine.dispatch(Event::Timeout(BLINK_TIMER), &mut log);
        machine.dispatch(Event::Timeout(BLINK_TIMER), &mut log);

        let history = machine.history();
        assert_eq!(
            history.get_path(),
            vec![&LampState::Off, &LampState::On, &LampState::Off]
        );
        assert!(history
            .transitions()
            .iter()
            .all(|t| t.trigger == EventKind::Timeout));
    }

    #[test]
    fn long_running_machine_keeps_history_at_capacity() {
        let mut machine = Machine::with_history_capacity(
            Lamp {
                start: LampState::Off,
            },
            4,
        );
        let mut log = Vec::new();
        assert!(machine.init(&mut log));

        for _ in 0..10_000 {
            machine.dispatch(Event::Timeout(BLINK_TIMER), &mut log);
            log.clear();
        }

        let history = machine.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history.transitions()[3].to, machine.current_state());
    }

    #[test]
    fn zero_history_capacity_still_transitions() {
        let mut machine = Machine::with_history_capacity(
            Lamp {
                start: LampState::Off,
            },
            0,
        );
        let mut log = Vec::new();
        assert!(machine.init(&mut log));

        machine.dispatch(Event::Timeout(BLINK_TIMER), &mut log);
        assert_eq!(machine.current_state(), LampState::On);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let (mut first, mut log) = started_lamp();
        let (second, _) = started_lamp();

        first.dispatch(Event::Timeout(BLINK_TIMER), &mut log);
        assert_eq!(first.current_state(), LampState::On);
        assert_eq!(second.current_state(), LampState::Off);
    }
}
