//! Transition trace.
//!
//! Each machine appends one record per state change so a host can inspect
//! (or dump as JSON) the path a behavior took.

use super::event::EventKind;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use hsmkit::core::{EventKind, State, StateTransition};
/// use hsmkit::hsm_states;
/// use chrono::Utc;
///
/// hsm_states! {
///     enum Lamp {
///         InitPState,
///         Off,
///         On,
///     }
///     pseudo: InitPState
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     trigger: EventKind::Domain,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.name(), "On");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Kind of the event whose reaction requested the transition
    pub trigger: EventKind,
    /// When the state variable changed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// Bounded: once `capacity` transitions are kept, each new one evicts the
/// oldest, so a machine that cycles forever uses fixed memory.
///
/// # Example
///
/// ```rust
/// use hsmkit::core::{EventKind, StateHistory, StateTransition};
/// use hsmkit::hsm_states;
/// use chrono::Utc;
///
/// hsm_states! {
///     enum Phase {
///         InitPState,
///         One,
///         Two,
///     }
///     pseudo: InitPState
/// }
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: Phase::One,
///     to: Phase::Two,
///     trigger: EventKind::Timeout,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

/// Number of transitions a machine keeps unless told otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history holding up to
    /// [`DEFAULT_HISTORY_CAPACITY`] transitions.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history that keeps the most recent `capacity` transitions.
    ///
    /// A capacity of zero turns recording off.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a transition, dropping the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by
    /// the `to` state of every kept transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest kept transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Kept transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
