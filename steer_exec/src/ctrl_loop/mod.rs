//! # Control loop module
//!
//! The control loop runs steering control at a fixed rate. It holds the latest pose and the
//! latest desired state, each refreshed by its own feed, and on each tick sends the resulting
//! velocity command to a sink.
//!
//! No command is produced until a pose has been received. Until then the loop is
//! [`LoopState::Uninit`], and the first pose moves it to [`LoopState::Active`], which is the only
//! state holding a pose to steer from.
//!
//! Feeds are serviced once per tick, after any command for that tick has been sent, so an update
//! takes effect from the following tick. Only the most recent update from each feed is kept.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod io;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use io::*;
pub use state::*;
