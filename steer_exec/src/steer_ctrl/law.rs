//! The steering control law

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use util::maths::wrap_pi;

use super::{DesState, Gains, Pose, VelCmd};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The intermediate quantities of one evaluation of the control law.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusReport {
    /// Distance from the robot to the target point, along the desired heading. Positive when the
    /// robot is behind the target.
    pub along_track_err_m: f64,

    /// Distance from the robot to the line through the target point along the desired heading.
    /// Positive when the robot is to the left of the line.
    pub cross_track_err_m: f64,

    /// Robot heading minus desired heading, wrapped into (-pi, pi].
    pub head_err_rad: f64,

    /// Curvature demand, the desired curvature plus the corrections.
    ///
    /// Units: 1/meters
    pub curv_dem_m: f64
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Calculate the velocity command which steers the robot at `pose` onto `des_state`.
///
/// This never fails. Non-finite inputs produce non-finite outputs.
pub fn calc_vel_cmd(
    pose: &Pose,
    des_state: &DesState,
    gains: &Gains
) -> (VelCmd, StatusReport) {

    // Tangent to the desired heading, and the normal pointing to its left
    let tangent = des_state.tangent();
    let normal = Vector2::new(-tangent[1], tangent[0]);

    let pos_err_m = des_state.position_m - pose.position_m;

    // Speed demand from the along-track error
    let along_track_err_m = tangent.dot(&pos_err_m);
    let linear_ms = des_state.speed_ms + gains.k_v * along_track_err_m;

    let cross_track_err_m = -normal.dot(&pos_err_m);
    let head_err_rad = wrap_pi(pose.heading_rad - des_state.heading_rad);

    let curv_dem_m = 
        - gains.k_d * cross_track_err_m 
        - gains.k_psi * head_err_rad 
        + des_state.curv_m;

    // Coupling the turn rate to the speed means no speed gives no turn
    let angular_rads = linear_ms * curv_dem_m;

    (
        VelCmd {
            linear_ms,
            angular_rads
        },
        StatusReport {
            along_track_err_m,
            cross_track_err_m,
            head_err_rad,
            curv_dem_m
        }
    )
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use super::*;

    #[test]
    fn test_on_path() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(3.0, -1.5, 0.8, 0.7, 0.0);
        let pose = Pose::new(3.0, -1.5, 0.7);

        let (cmd, report) = calc_vel_cmd(&pose, &des, &gains);

        assert_eq!(cmd.linear_ms, 0.8);
        assert_eq!(cmd.angular_rads, 0.0);
        assert_eq!(report.along_track_err_m, 0.0);
        assert_eq!(report.cross_track_err_m, 0.0);
        assert_eq!(report.head_err_rad, 0.0);
    }

    #[test]
    fn test_zero_speed_gives_no_turn() {
        let gains = Gains::new(0.1, 0.0);
        let des = DesState::new(0.0, 0.0, 0.0, 0.0, 0.5);

        for pose in [
            Pose::new(0.0, 5.0, 0.0),
            Pose::new(-2.0, -3.0, 2.5),
            Pose::new(10.0, 0.0, -PI),
            Pose::new(0.0, 0.0, 7.0 * PI),
        ].iter() {
            let (cmd, _) = calc_vel_cmd(pose, &des, &gains);

            assert_eq!(cmd.linear_ms, 0.0);
            assert_eq!(cmd.angular_rads, 0.0);
        }
    }

    #[test]
    fn test_along_track_only() {
        let gains = Gains::new(2.0, 0.5);

        // Behind the target along X
        let des = DesState::new(4.0, 1.0, 1.0, 0.0, 0.2);
        let (cmd, report) = calc_vel_cmd(&Pose::new(1.0, 1.0, 0.0), &des, &gains);

        assert_eq!(report.along_track_err_m, 3.0);
        assert_eq!(report.cross_track_err_m, 0.0);
        assert_eq!(cmd.linear_ms, 1.0 + 0.5 * 3.0);
        assert_relative_eq!(cmd.angular_rads, cmd.linear_ms * 0.2);

        // Ahead of the target along X
        let (cmd, report) = calc_vel_cmd(&Pose::new(6.0, 1.0, 0.0), &des, &gains);

        assert_eq!(report.along_track_err_m, -2.0);
        assert_eq!(cmd.linear_ms, 1.0 - 0.5 * 2.0);
        assert_eq!(cmd.angular_rads, 0.0);
    }

    #[test]
    fn test_along_track_only_oblique() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(1.0, 2.0, 0.5, FRAC_PI_3, -0.1);

        // Offset the robot 1.5 m behind the target along the desired heading
        let pos = des.position_m - des.tangent() * 1.5;
        let pose = Pose::new(pos[0], pos[1], FRAC_PI_3);

        let (cmd, report) = calc_vel_cmd(&pose, &des, &gains);

        assert_relative_eq!(report.along_track_err_m, 1.5, epsilon = 1e-12);
        assert_relative_eq!(report.cross_track_err_m, 0.0, epsilon = 1e-12);
        assert_relative_eq!(cmd.linear_ms, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cmd.angular_rads, 2.0 * -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_cross_track_steers_back() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(0.0, 0.0, 1.0, 0.0, 0.0);

        // Left of the line, should turn right
        let (cmd, report) = calc_vel_cmd(&Pose::new(0.0, 1.0, 0.0), &des, &gains);
        assert_eq!(report.cross_track_err_m, 1.0);
        assert_eq!(report.curv_dem_m, -0.25);
        assert_eq!(cmd.angular_rads, -0.25);

        // Right of the line, should turn left
        let (cmd, report) = calc_vel_cmd(&Pose::new(0.0, -2.0, 0.0), &des, &gains);
        assert_eq!(report.cross_track_err_m, -2.0);
        assert_eq!(cmd.angular_rads, 0.5);
    }

    #[test]
    fn test_heading_error_steers_back() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(0.0, 0.0, 2.0, FRAC_PI_2, 0.0);

        // Pointing a quarter turn to the left of the desired heading
        let (cmd, report) = calc_vel_cmd(&Pose::new(0.0, 0.0, PI), &des, &gains);
        assert_relative_eq!(report.head_err_rad, FRAC_PI_2);
        assert_relative_eq!(cmd.angular_rads, 2.0 * -FRAC_PI_2);
    }

    #[test]
    fn test_heading_error_wraps() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(0.0, 0.0, 1.0, -0.25 * PI, 0.0);

        // 3.5 pi away from the desired heading folds to -0.5 pi
        let pose = Pose::new(0.0, 0.0, 3.25 * PI);
        let (cmd, report) = calc_vel_cmd(&pose, &des, &gains);

        assert_relative_eq!(report.head_err_rad, -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(cmd.angular_rads, 0.5 * PI, epsilon = 1e-12);

    }

    #[test]
    fn test_opposite_heading_is_plus_pi() {
        let gains = Gains::new(2.0, 1.0);

        // Exactly opposite headings give +pi, never -pi, whichever way round they are
        let des = DesState::new(0.0, 0.0, 1.0, 0.0, 0.0);
        let (cmd, report) = calc_vel_cmd(&Pose::new(0.0, 0.0, PI), &des, &gains);

        assert_eq!(report.head_err_rad, PI);
        assert_eq!(report.curv_dem_m, -PI);
        assert_eq!(cmd.angular_rads, -PI);

        let des = DesState::new(0.0, 0.0, 1.0, PI, 0.0);
        let (_, report) = calc_vel_cmd(&Pose::new(0.0, 0.0, 0.0), &des, &gains);

        assert_eq!(report.head_err_rad, PI);
    }

    #[test]
    fn test_non_finite_input_passes_through() {
        let gains = Gains::new(2.0, 1.0);
        let des = DesState::new(0.0, 0.0, 1.0, 0.0, 0.0);

        let (cmd, _) = calc_vel_cmd(&Pose::new(std::f64::NAN, 0.0, 0.0), &des, &gains);

        assert!(cmd.linear_ms.is_nan());
        assert!(cmd.angular_rads.is_nan());
    }
}
