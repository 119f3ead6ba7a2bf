//! Steering control gains

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use crate::params::SteerExecParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The gains used by the steering control law.
///
/// These are fixed once the executable has started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gains {
    /// Along-track error gain, mapping along-track error onto speed.
    ///
    /// Units: 1/seconds
    pub k_v: f64,

    /// Cross-track error gain, mapping cross-track error onto curvature.
    ///
    /// Units: 1/meters^2
    pub k_d: f64,

    /// Heading error gain, mapping heading error onto curvature.
    ///
    /// Units: 1/meters
    pub k_psi: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Gains {
    /// Derive the gains from the convergence rate and the along-track gain.
    ///
    /// The convergence rate is the characteristic distance, in meters, over which cross-track
    /// error decays. It sets `k_d = 1/r^2` and `k_psi = 2/r`.
    pub fn new(convergence_rate_m: f64, k_v: f64) -> Self {
        Self {
            k_v,
            k_d: 1.0 / convergence_rate_m.powi(2),
            k_psi: 2.0 / convergence_rate_m
        }
    }
}

impl From<&SteerExecParams> for Gains {
    fn from(params: &SteerExecParams) -> Self {
        Self::new(params.convergence_rate_m, params.k_v)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_gain_derivation() {
        let gains = Gains::new(2.0, 1.0);

        assert_eq!(gains.k_d, 0.25);
        assert_eq!(gains.k_psi, 1.0);
        assert_eq!(gains.k_v, 1.0);

        let gains = Gains::new(0.5, 0.3);

        assert_eq!(gains.k_d, 4.0);
        assert_eq!(gains.k_psi, 4.0);
        assert_eq!(gains.k_v, 0.3);

        let gains = Gains::new(3.0, 1.0);
        assert_relative_eq!(gains.k_d, 1.0 / 9.0);
        assert_relative_eq!(gains.k_psi, 2.0 / 3.0);
    }

    #[test]
    fn test_gains_from_default_params() {
        let gains = Gains::from(&SteerExecParams::default());

        assert_eq!(gains, Gains { k_v: 1.0, k_d: 0.25, k_psi: 1.0 });
    }
}
