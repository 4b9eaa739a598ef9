//! Named timers as seen from a state machine.
//!
//! A machine only ever holds a timer's name. The countdown itself belongs
//! to whatever implements [`TimerService`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a named timer.
///
/// Timer ids form one namespace shared by every machine in the system, so
/// each machine must use ids no other machine arms.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(pub u8);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Timer service consumed by state reactions.
///
/// On expiry the service delivers `Event::Timeout(id)` through the
/// dispatcher. Both calls are fire-and-forget.
pub trait TimerService {
    /// Start (or restart) the named timer with a duration in ticks.
    fn arm(&mut self, id: TimerId, ticks: u32);

    /// Stop the named timer. Cancelling a timer that is not running is a no-op.
    fn cancel(&mut self, id: TimerId);
}
