//! # Steering Executable Parameters
//!
//! This module provides parameters for the steering executable. Every key is optional, missing
//! keys take their default value.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::warn;
use serde::{Serialize, Deserialize};
use util::time::period_from_rate;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteerExecParams {

    /// Characteristic distance over which the cross-track error should decay.
    ///
    /// Units: meters
    #[serde(alias = "convergence_rate")]
    pub convergence_rate_m: f64,

    /// Along-track error to speed demand gain.
    pub k_v: f64,

    /// Frequency of the control loop.
    ///
    /// Units: hertz
    #[serde(alias = "loop_rate")]
    pub loop_rate_hz: f64,

    /// If true no velocity command is sent until a desired state has been received, as well as a
    /// pose. Otherwise an all-zero desired state is tracked until the first one arrives.
    pub gate_on_des_state: bool
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for SteerExecParams {
    fn default() -> Self {
        Self {
            convergence_rate_m: 2.0,
            k_v: 1.0,
            loop_rate_hz: 20.0,
            gate_on_des_state: false
        }
    }
}

impl SteerExecParams {
    /// Replace any value which cannot be used by its default, logging a warning for each.
    ///
    /// The convergence rate and loop rate must be finite and positive, `k_v` must be finite. The
    /// loop rate must also give a period which fits in a `Duration`.
    pub fn validated(self) -> Self {
        let defaults = Self::default();

        Self {
            convergence_rate_m: positive_or(
                "convergence_rate_m", self.convergence_rate_m, defaults.convergence_rate_m
            ),
            k_v: if self.k_v.is_finite() {
                self.k_v
            }
            else {
                warn!(
                    "Invalid k_v ({}), using the default ({})", 
                    self.k_v, 
                    defaults.k_v
                );
                defaults.k_v
            },
            loop_rate_hz: if period_from_rate(self.loop_rate_hz).is_some() {
                positive_or("loop_rate_hz", self.loop_rate_hz, defaults.loop_rate_hz)
            }
            else {
                warn!(
                    "Invalid loop_rate_hz ({}), using the default ({})",
                    self.loop_rate_hz,
                    defaults.loop_rate_hz
                );
                defaults.loop_rate_hz
            },
            gate_on_des_state: self.gate_on_des_state
        }
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn positive_or(name: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    }
    else {
        warn!("Invalid {} ({}), using the default ({})", name, value, default);
        default
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
