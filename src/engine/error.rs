//! Engine error types.

use crate::core::EventKind;
use thiserror::Error;

/// Errors surfaced by the engine and the reference runtime.
///
/// An unhandled event is not an error: it is returned as a residual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HsmError {
    /// The bootstrap `Init` did not come back as `NoEvent`.
    #[error("Machine '{machine}' failed to initialize (bootstrap residual: {residual})")]
    InitFault {
        machine: &'static str,
        residual: EventKind,
    },

    #[error("Event queue full (capacity: {capacity})")]
    QueueFull { capacity: usize },

    #[error("Machine '{machine}' has not been started. Call start() first")]
    NotStarted { machine: &'static str },
}
