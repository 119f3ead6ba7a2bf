//! # Steering library.
//!
//! This library allows other crates in the workspace, and the steering executable itself, to
//! access the steering controller and its network interfaces.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Command server - publishes velocity demands to the drive base
pub mod cmd_server;

/// Control loop - runs the steering control law at a fixed rate on the latest feed data
pub mod ctrl_loop;

/// Feed clients - subscribe to the pose and desired state publishers
pub mod feed_client;

/// Parameters for the steering executable
pub mod params;

/// Steering control module - converts pose and desired state into velocity demands
pub mod steer_ctrl;
