//! The per-machine reaction table.

use crate::core::{Event, State};
use std::fmt::Debug;

/// What a state did with an event.
///
/// The engine turns a reaction into the residual returned by `dispatch`:
///
/// | Reaction        | Residual                |
/// |-----------------|-------------------------|
/// | `Unhandled`     | the input, unchanged    |
/// | `Handled`       | `NoEvent`               |
/// | `Transition(t)` | `NoEvent` (after exit/entry) |
/// | `Residual(e)`   | `e`                     |
#[derive(Clone, Debug, PartialEq)]
pub enum Reaction<S, D> {
    /// No reaction registered for this (state, event) pair.
    Unhandled,

    /// The event was consumed in place.
    Handled,

    /// Consume the event and move to the target state.
    Transition(S),

    /// The event was forwarded to a child machine; this is what came back.
    Residual(Event<D>),
}

/// Static description of a behavior: its states, events and name.
pub trait Behavior {
    /// The machine's closed set of states.
    type State: State;

    /// Machine-local domain events, carried in `Event::Domain`.
    type Domain: Clone + PartialEq + Debug;

    /// Name used in logs and errors.
    const NAME: &'static str;

    /// The real state the pseudo-state hands over to on `Init`.
    fn starting_state(&self) -> Self::State;
}

/// Reaction table of a behavior, run against a context `C` that provides
/// the side-effect ports (timers, actuators).
///
/// Implementations are a single `match` over `(state, event)`. Pairs that
/// are not listed must fall through to `Reaction::Unhandled` without side
/// effects. A reaction never calls its own machine's `dispatch`; it asks for
/// a transition instead.
///
/// Lifecycle reactions cannot chain transitions: a `Reaction::Transition`
/// returned while handling `Entry` or `Exit` is ignored (logged at `warn`)
/// and the event counts as handled; the transition already under way is
/// unaffected. Request the move from the event that caused the entry
/// instead, or post a follow-up event.
///
/// The pseudo-state is handled by the engine and never reaches `react`.
pub trait React<C: ?Sized>: Behavior {
    fn react(
        &mut self,
        state: Self::State,
        event: &Event<Self::Domain>,
        ctx: &mut C,
    ) -> Reaction<Self::State, Self::Domain>;
}
