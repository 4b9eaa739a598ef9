//! Roach behaviors built on the engine.
//!
//! [`FancyRoach`] is the top-level machine; [`SubDance`] is its child.
//! Both react against any context providing [`TimerService`](crate::core::TimerService)
//! and [`DriveMotors`], such as [`RoachBoard`] on a host or
//! [`Recorder`](crate::testing::Recorder) in tests.

mod board;
mod fancy_roach;
mod motors;
mod sub_dance;

use serde::{Deserialize, Serialize};

pub use board::RoachBoard;
pub use fancy_roach::{FancyRoach, RoachState};
pub use motors::{DriveMotors, MotorCommand, TracingMotors};
pub use sub_dance::{SubDance, SubDanceState};

/// Events posted by the roach's sensors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoachEvent {
    /// A bumper switch closed.
    Bumped,
    /// The light sensor crossed into light.
    LightOn,
    /// The light sensor crossed into darkness.
    LightOff,
}
