//! Core state machine types.
//!
//! This module contains the values every machine is built from:
//! - State definitions via the `State` trait
//! - Events and their lifecycle vocabulary
//! - Named timer identities and the timer service contract
//! - The transition trace
//!
//! Nothing in here dispatches events; see [`crate::engine`] for that.

mod event;
mod history;
mod state;
mod timer;

pub use event::{Event, EventKind};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use state::State;
pub use timer::{TimerId, TimerService};
