//! Host-side reference runtime.
//!
//! On a target board these pieces come from the platform: a hardware tick
//! drives the timers and the framework owns the event queues. This module
//! provides software versions so behaviors can run on a host, in tests and
//! in simulation.

mod framework;
mod queue;
mod timers;

pub use framework::{Framework, RunReport};
pub use queue::{EventQueue, DEFAULT_QUEUE_CAPACITY};
pub use timers::{SoftTimers, TickSource};
