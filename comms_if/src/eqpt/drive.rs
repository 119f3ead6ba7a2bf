//! # Drive Equipment Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Velocity demands sent to the drive base.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct VelDems {
    /// Forwards velocity demand.
    ///
    /// Units: meters/second
    pub linear_ms: f64,

    /// Angular velocity demand about the robot's Z+ (upwards) axis, so that a positive rate
    /// turns the robot to the left.
    ///
    /// Units: radians/second
    pub angular_rads: f64
}
