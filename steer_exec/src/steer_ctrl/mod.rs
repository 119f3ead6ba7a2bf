//! # Steering control module
//!
//! Steering control converts the robot's current pose and the desired state provided by the
//! trajectory generator into a forwards velocity and angular velocity demand.
//!
//! The position error between the robot and the target point is decomposed along the desired
//! heading. The along-track part of the error adjusts the speed demand, so the robot speeds up
//! when it is behind the target and slows down when it is ahead. The cross-track part (the
//! distance to the left of the line through the target point along the desired heading) and the
//! heading error produce a curvature correction, which is added to the desired path curvature.
//! The angular velocity demand is the speed demand multiplied by this curvature, so a robot with
//! no speed demand is never asked to turn.
//!
//! Both correction gains come from a single convergence rate (see [`Gains`]), giving an
//! approximately critically damped decay of the tracking error.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod convert;
mod gains;
mod law;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use gains::*;
pub use law::*;
pub use state::*;
