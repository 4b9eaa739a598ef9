//! Core State trait for state machine states.
//!
//! Every machine declares its states as a closed enum. One variant is the
//! initial pseudo-state, which the machine only occupies while `init` runs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Copy`: states are plain identities, stored by value
/// - `PartialEq`: the engine compares states (pseudo-state check, traces)
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: states appear in the transition trace
///
/// Most machines declare their states with [`hsm_states!`](crate::hsm_states)
/// rather than implementing this trait by hand.
///
/// # Example
///
/// ```rust
/// use hsmkit::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     InitPState,
///     Closed,
///     Open,
/// }
///
/// impl State for DoorState {
///     const PSEUDO: Self = Self::InitPState;
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::InitPState => "InitPState",
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert!(DoorState::InitPState.is_pseudo());
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// The initial pseudo-state. Its only legal reaction is to `Init`.
    const PSEUDO: Self;

    /// Human-readable name, for tracing only. Never used for behavior.
    fn name(&self) -> &'static str;

    /// Check if this is the initial pseudo-state.
    fn is_pseudo(&self) -> bool {
        *self == Self::PSEUDO
    }
}
