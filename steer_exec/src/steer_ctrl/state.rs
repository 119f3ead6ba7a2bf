//! Inputs and outputs of the steering control law

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The planar pose of the robot in the world frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in the world frame.
    ///
    /// Units: meters
    pub position_m: Vector2<f64>,

    /// Heading, counter-clockwise from the world X axis.
    ///
    /// Units: radians
    pub heading_rad: f64
}

/// The desired state the robot should be tracking.
///
/// The default value is all zeros, a stationary target at the origin facing along X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesState {
    /// Target position in the world frame.
    ///
    /// Units: meters
    pub position_m: Vector2<f64>,

    /// Target forwards speed.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Target heading, counter-clockwise from the world X axis.
    ///
    /// Units: radians
    pub heading_rad: f64,

    /// Target path curvature, positive to the left.
    ///
    /// Units: 1/meters
    pub curv_m: f64
}

/// A velocity command for the drive base.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelCmd {
    /// Forwards velocity.
    ///
    /// Units: meters/second
    pub linear_ms: f64,

    /// Angular velocity, positive to the left.
    ///
    /// Units: radians/second
    pub angular_rads: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    pub fn new(x_m: f64, y_m: f64, heading_rad: f64) -> Self {
        Self {
            position_m: Vector2::new(x_m, y_m),
            heading_rad
        }
    }
}

impl DesState {
    pub fn new(x_m: f64, y_m: f64, speed_ms: f64, heading_rad: f64, curv_m: f64) -> Self {
        Self {
            position_m: Vector2::new(x_m, y_m),
            speed_ms,
            heading_rad,
            curv_m
        }
    }

    /// Unit vector pointing along the desired heading.
    pub fn tangent(&self) -> Vector2<f64> {
        Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
    }
}

impl Default for DesState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0)
    }
}
