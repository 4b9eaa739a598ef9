//! Hsmkit: hierarchical state machines for event-driven embedded control
//!
//! Behaviors are independent modules that receive events, react according
//! to their current state, and compose into parent/child hierarchies.
//! Events a machine does not handle come back to the caller unchanged, so
//! an enclosing machine can try them. State changes run the old state's
//! `Exit` and then the new state's `Entry` through the same dispatch path.
//!
//! # Core Concepts
//!
//! - **State**: a closed enum with one initial pseudo-state, via `State`
//! - **Event**: shared lifecycle variants plus machine-local domain events
//! - **Behavior**: a reaction table matched over `(state, event)`
//! - **Machine**: an owned instance running the dispatch protocol
//! - **Runtime**: host-side timers and a FIFO dispatcher
//!
//! # Example
//!
//! ```rust
//! use hsmkit::core::Event;
//! use hsmkit::engine::Machine;
//! use hsmkit::roach::{FancyRoach, RoachEvent, RoachState};
//! use hsmkit::testing::Recorder;
//!
//! let mut board = Recorder::new();
//! let mut roach = Machine::new(FancyRoach::default());
//! assert!(roach.init(&mut board));
//! assert_eq!(roach.current_state(), RoachState::Hiding);
//!
//! let residual = roach.dispatch(Event::Domain(RoachEvent::LightOn), &mut board);
//! assert_eq!(residual, Event::NoEvent);
//! assert_eq!(roach.current_state(), RoachState::Fleeing);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod engine;
pub mod roach;
pub mod runtime;
pub mod testing;

// Re-export commonly used types
pub use crate::core::{Event, EventKind, State, StateHistory, StateTransition, TimerId, TimerService};
pub use crate::engine::{Behavior, HsmError, Machine, React, Reaction};
