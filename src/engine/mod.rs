//! The dispatch engine.
//!
//! A [`Machine`] wraps a [`Behavior`] and implements the protocol every
//! module follows:
//!
//! - **Dispatch**: one `match` over `(state, event)` per event; unlisted pairs
//!   come back unchanged as the residual
//! - **Transitions**: `Exit` to the old state, state change, `Entry` to the
//!   new state, nothing interleaved
//! - **Initialization**: pseudo-state bootstrap on `Init`, then one `Entry`
//! - **Composition**: parents forward events to child machines and pass the
//!   child's residual up as their own
//!
//! # Example
//!
//! ```rust
//! use hsmkit::core::{Event, TimerId, TimerService};
//! use hsmkit::engine::{Behavior, Machine, React, Reaction};
//! use hsmkit::hsm_states;
//!
//! hsm_states! {
//!     enum Beacon {
//!         InitPState,
//!         Dark,
//!         Lit,
//!     }
//!     pseudo: InitPState
//! }
//!
//! const FLASH: TimerId = TimerId(4);
//!
//! struct Flasher;
//!
//! impl Behavior for Flasher {
//!     type State = Beacon;
//!     type Domain = ();
//!     const NAME: &'static str = "Flasher";
//!
//!     fn starting_state(&self) -> Beacon {
//!         Beacon::Dark
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Timers(Vec<TimerId>);
//!
//! impl TimerService for Timers {
//!     fn arm(&mut self, id: TimerId, _ticks: u32) {
//!         self.0.push(id);
//!     }
//!     fn cancel(&mut self, id: TimerId) {
//!         self.0.retain(|t| *t != id);
//!     }
//! }
//!
//! impl<C: TimerService> React<C> for Flasher {
//!     fn react(&mut self, state: Beacon, event: &Event<()>, ctx: &mut C) -> Reaction<Beacon, ()> {
//!         match (state, event) {
//!             (_, Event::Entry) => {
//!                 ctx.arm(FLASH, 10);
//!                 Reaction::Handled
//!             }
//!             (_, Event::Exit) => {
//!                 ctx.cancel(FLASH);
//!                 Reaction::Handled
//!             }
//!             (Beacon::Dark, Event::Timeout(id)) if *id == FLASH => Reaction::Transition(Beacon::Lit),
//!             (Beacon::Lit, Event::Timeout(id)) if *id == FLASH => Reaction::Transition(Beacon::Dark),
//!             _ => Reaction::Unhandled,
//!         }
//!     }
//! }
//!
//! let mut timers = Timers::default();
//! let mut machine = Machine::new(Flasher);
//! assert!(machine.init(&mut timers));
//! assert_eq!(timers.0, vec![FLASH]);
//!
//! assert_eq!(machine.dispatch(Event::Timeout(FLASH), &mut timers), Event::NoEvent);
//! assert_eq!(machine.current_state(), Beacon::Lit);
//! assert_eq!(timers.0, vec![FLASH]);
//! ```

mod behavior;
mod error;
mod machine;

pub use behavior::{Behavior, React, Reaction};
pub use error::HsmError;
pub use machine::Machine;
