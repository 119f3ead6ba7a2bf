//! # Equipment Interface
//!
//! This module defines the messages exchanged between the steering controller and the equipment
//! around it: the localisation system providing the pose, the trajectory generator providing the
//! desired state, and the drive base consuming velocity demands.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod drive;
pub mod loc;
pub mod traj;
