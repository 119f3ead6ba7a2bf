//! # Localisation Equipment Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Pose estimate published by the localisation system.
///
/// This is an odometry-style pose: the full 3D position and attitude of the robot body in the
/// world frame. Only the planar part is used for steering.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PoseMsg {
    /// Position of the robot in the world frame.
    ///
    /// Units: meters
    pub position_m: [f64; 3],

    /// Attitude of the robot in the world frame, as a quaternion in `[i, j, k, w]` order.
    pub attitude_q: [f64; 4]
}
