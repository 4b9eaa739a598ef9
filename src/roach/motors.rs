//! Drive motor port used by the roach behaviors.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Differential drive commands. Fire-and-forget: reactions never look at a
/// result.
pub trait DriveMotors {
    /// Both wheels forward.
    fn forward(&mut self);

    /// Spin in place to the left (left wheel back, right wheel forward).
    fn tank_left(&mut self);

    /// Spin in place to the right (left wheel forward, right wheel back).
    fn tank_right(&mut self);

    /// Both wheels stopped.
    fn stop(&mut self);
}

/// A single drive command, as recorded or logged.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MotorCommand {
    Forward,
    TankLeft,
    TankRight,
    Stop,
}

/// Motors that only log what they were told to do.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingMotors;

impl TracingMotors {
    fn apply(&mut self, command: MotorCommand) {
        info!(?command, "drive");
    }
}

impl DriveMotors for TracingMotors {
    fn forward(&mut self) {
        self.apply(MotorCommand::Forward);
    }

    fn tank_left(&mut self) {
        self.apply(MotorCommand::TankLeft);
    }

    fn tank_right(&mut self) {
        self.apply(MotorCommand::TankRight);
    }

    fn stop(&mut self) {
        self.apply(MotorCommand::Stop);
    }
}
