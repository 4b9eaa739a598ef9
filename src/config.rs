//! Behavior configuration.
//!
//! Timings and timer ids for the roach behaviors. Every field has a default
//! matching the stock robot, so a JSON document only needs the fields it
//! changes.
//!
//! ```rust
//! use hsmkit::config::RoachConfig;
//!
//! let config = RoachConfig::from_json(r#"{ "dance": { "wait": { "timer": 1, "ticks": 50 } } }"#).unwrap();
//! assert_eq!(config.dance.wait.ticks, 50);
//! assert_eq!(config.dance.right, RoachConfig::default().dance.right);
//! ```

use crate::core::TimerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timer shared by every step of the dance.
pub const DANCE_TIMER: TimerId = TimerId(1);

/// Pause before the dance starts spinning.
pub const DANCE_WAIT_TICKS: u32 = 200;

pub const DANCE_RIGHT_TICKS: u32 = 400;

pub const DANCE_LEFT_TICKS: u32 = 400;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duration of '{field}' must be at least one tick")]
    ZeroDuration { field: &'static str },
}

/// A state's timer: which one to arm on entry, and for how long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedStep {
    pub timer: TimerId,
    pub ticks: u32,
}

impl TimedStep {
    pub const fn new(timer: TimerId, ticks: u32) -> Self {
        Self { timer, ticks }
    }
}

/// Timing of the dance sub-behavior.
///
/// Steps may share a timer id: only one dance state is active at a time
/// and each cancels its timer on exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanceConfig {
    pub wait: TimedStep,
    pub right: TimedStep,
    pub left: TimedStep,
}

impl Default for DanceConfig {
    fn default() -> Self {
        Self {
            wait: TimedStep::new(DANCE_TIMER, DANCE_WAIT_TICKS),
            right: TimedStep::new(DANCE_TIMER, DANCE_RIGHT_TICKS),
            left: TimedStep::new(DANCE_TIMER, DANCE_LEFT_TICKS),
        }
    }
}

impl DanceConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroDuration` for a step that would never wait.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, step) in [
            ("dance.wait", self.wait),
            ("dance.right", self.right),
            ("dance.left", self.left),
        ] {
            if step.ticks == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }
        Ok(())
    }
}

/// Configuration for the whole roach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoachConfig {
    pub dance: DanceConfig,
}

impl RoachConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::ZeroDuration` for invalid timings.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// See [`DanceConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dance.validate()
    }
}
