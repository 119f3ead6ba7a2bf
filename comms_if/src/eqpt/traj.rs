//! # Trajectory Equipment Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The instantaneous desired state published by the trajectory generator.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct DesStateMsg {
    /// Target X position in the world frame.
    ///
    /// Units: meters
    pub x_m: f64,

    /// Target Y position in the world frame.
    ///
    /// Units: meters
    pub y_m: f64,

    /// Target forwards speed.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Target heading, counter-clockwise from the world X axis.
    ///
    /// Units: radians
    pub heading_rad: f64,

    /// Target path curvature. Positive curvature is a turn to the left.
    ///
    /// Units: 1/meters
    pub curv_m: f64
}
