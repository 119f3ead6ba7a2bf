//! Conversions between network messages and steering control types

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::eqpt::{drive::VelDems, loc::PoseMsg, traj::DesStateMsg};
use nalgebra::{Quaternion, UnitQuaternion, Vector2};

use super::{DesState, Pose, VelCmd};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl From<PoseMsg> for Pose {
    /// Project the pose onto the world XY plane, taking the heading as the yaw of the attitude.
    fn from(msg: PoseMsg) -> Self {
        let [i, j, k, w] = msg.attitude_q;
        let attitude = UnitQuaternion::from_quaternion(Quaternion::new(w, i, j, k));

        Self {
            position_m: Vector2::new(msg.position_m[0], msg.position_m[1]),
            heading_rad: attitude.euler_angles().2
        }
    }
}

impl From<DesStateMsg> for DesState {
    fn from(msg: DesStateMsg) -> Self {
        Self::new(msg.x_m, msg.y_m, msg.speed_ms, msg.heading_rad, msg.curv_m)
    }
}

impl From<VelCmd> for VelDems {
    fn from(cmd: VelCmd) -> Self {
        Self {
            linear_ms: cmd.linear_ms,
            angular_rads: cmd.angular_rads
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    fn yaw_msg(x: f64, y: f64, yaw: f64) -> PoseMsg {
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw);

        PoseMsg {
            position_m: [x, y, 0.3],
            attitude_q: [q.i, q.j, q.k, q.w]
        }
    }

    #[test]
    fn test_pose_from_msg() {
        let pose = Pose::from(yaw_msg(1.0, -2.0, 3.0 * FRAC_PI_4));

        assert_eq!(pose.position_m, Vector2::new(1.0, -2.0));
        assert_relative_eq!(pose.heading_rad, 3.0 * FRAC_PI_4, epsilon = 1e-12);

        let pose = Pose::from(yaw_msg(0.0, 0.0, -FRAC_PI_4));
        assert_relative_eq!(pose.heading_rad, -FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_pose_from_identity_attitude() {
        let pose = Pose::from(PoseMsg {
            position_m: [0.0, 0.0, 0.0],
            attitude_q: [0.0, 0.0, 0.0, 1.0]
        });

        assert_eq!(pose.heading_rad, 0.0);
    }

    #[test]
    fn test_des_state_from_msg() {
        let des = DesState::from(DesStateMsg {
            x_m: 52.8,
            y_m: -9.9,
            speed_ms: 1.2,
            heading_rad: -0.71,
            curv_m: 0.05
        });

        assert_eq!(des, DesState::new(52.8, -9.9, 1.2, -0.71, 0.05));
    }

    #[test]
    fn test_vel_dems_from_cmd() {
        let dems = VelDems::from(VelCmd { linear_ms: 0.4, angular_rads: -0.1 });

        assert_eq!(dems, VelDems { linear_ms: 0.4, angular_rads: -0.1 });
    }
}
