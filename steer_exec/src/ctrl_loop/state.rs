//! Control loop state

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

// Internal
use super::{Feed, VelCmdSink};
use crate::params::SteerExecParams;
use crate::steer_ctrl::{calc_vel_cmd, DesState, Gains, Pose, VelCmd};
use util::time::period_from_rate;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The fixed-rate steering control loop.
///
/// `P` provides poses, `D` provides desired states and `S` receives the velocity commands.
pub struct CtrlLoop<P, D, S> {
    gains: Gains,

    /// Target period of one tick.
    period: Duration,

    /// If set commands are held back until a desired state has been received.
    gate_on_des_state: bool,

    state: LoopState,

    /// Latest desired state, `None` until the first one arrives.
    des_state: Option<DesState>,

    pose_feed: P,
    des_state_feed: D,
    sink: S,

    /// Number of ticks already executed
    num_ticks: u64
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Whether the control loop has a pose to steer from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopState {
    /// No pose has been received yet.
    Uninit,

    /// At least one pose has been received.
    Active {
        /// The latest pose.
        pose: Pose,

        /// The first pose received.
        init_pose: Pose
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LoopState {
    /// Take a new pose, replacing the latest one.
    ///
    /// The first pose also becomes the initial pose and activates the loop.
    fn update_pose(&mut self, new_pose: Pose) {
        match self {
            LoopState::Uninit => {
                info!(
                    "First pose received at ({:.3}, {:.3}) m heading {:.3} rad, control active",
                    new_pose.position_m[0],
                    new_pose.position_m[1],
                    new_pose.heading_rad
                );

                *self = LoopState::Active {
                    pose: new_pose,
                    init_pose: new_pose
                };
            },
            LoopState::Active { pose, .. } => *pose = new_pose
        }
    }
}

impl<P, D, S> CtrlLoop<P, D, S>
where
    P: Feed<Item = Pose>,
    D: Feed<Item = DesState>,
    S: VelCmdSink
{
    /// Create a new control loop.
    ///
    /// The parameters should already have been validated, see [`SteerExecParams::validated`].
    pub fn new(params: &SteerExecParams, pose_feed: P, des_state_feed: D, sink: S) -> Self {
        let gains = Gains::from(params);

        debug!("Steering gains: {:?}", gains);

        let period = match period_from_rate(params.loop_rate_hz) {
            Some(p) => p,
            None => {
                let default_rate_hz = SteerExecParams::default().loop_rate_hz;
                warn!(
                    "Cannot run the loop at {} Hz, running at {} Hz instead",
                    params.loop_rate_hz,
                    default_rate_hz
                );
                period_from_rate(default_rate_hz).unwrap_or(Duration::from_millis(50))
            }
        };

        Self {
            gains,
            period,
            gate_on_des_state: params.gate_on_des_state,
            state: LoopState::Uninit,
            des_state: None,
            pose_feed,
            des_state_feed,
            sink,
            num_ticks: 0
        }
    }

    /// Run the loop at the configured rate until `shutdown` is set.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        while !shutdown.load(Ordering::Relaxed) {
            let tick_start = Instant::now();

            self.tick();

            // Sleep to the next tick boundary. An overrunning tick starts the next one straight
            // away.
            let tick_dur = tick_start.elapsed();
            match self.period.checked_sub(tick_dur) {
                Some(d) => thread::sleep(d),
                None => trace!(
                    "Tick {} took {:.06} s",
                    self.num_ticks,
                    tick_dur.as_secs_f64()
                )
            }
        }

        info!("Shutdown requested, control loop stopped after {} ticks", self.num_ticks);
    }

    /// Execute a single tick of the loop.
    ///
    /// If the loop is active a command is calculated from the latest pose and desired state, sent
    /// to the sink and returned. The feeds are then serviced regardless.
    pub fn tick(&mut self) -> Option<VelCmd> {
        let cmd = self.calc_cmd();

        if let Some(ref c) = cmd {
            if let Err(e) = self.sink.send(c) {
                warn!("Could not send velocity command: {}", e);
            }
        }

        self.spin_feeds();

        self.num_ticks += 1;

        cmd
    }

    /// The current state of the loop.
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// The first pose received, if any.
    pub fn init_pose(&self) -> Option<Pose> {
        match self.state {
            LoopState::Uninit => None,
            LoopState::Active { init_pose, .. } => Some(init_pose)
        }
    }

    /// The desired state which will be used on the next tick.
    ///
    /// Before any desired state is received this is the all-zero default.
    pub fn des_state(&self) -> DesState {
        self.des_state.unwrap_or_default()
    }

    /// The gains in use.
    pub fn gains(&self) -> &Gains {
        &self.gains
    }

    /// Target period of one tick.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks executed so far.
    pub fn num_ticks(&self) -> u64 {
        self.num_ticks
    }

    /// Give back the feeds and sink.
    pub fn into_parts(self) -> (P, D, S) {
        (self.pose_feed, self.des_state_feed, self.sink)
    }

    fn calc_cmd(&self) -> Option<VelCmd> {
        let pose = match self.state {
            LoopState::Uninit => return None,
            LoopState::Active { pose, .. } => pose
        };

        let des_state = match self.des_state {
            Some(d) => d,
            None if self.gate_on_des_state => return None,
            None => DesState::default()
        };

        let (cmd, report) = calc_vel_cmd(&pose, &des_state, &self.gains);

        trace!(
            "Tick {}: v = {:.4} m/s, w = {:.4} rad/s, {:?}",
            self.num_ticks,
            cmd.linear_ms,
            cmd.angular_rads,
            report
        );

        Some(cmd)
    }

    fn spin_feeds(&mut self) {
        if let Some(pose) = self.pose_feed.spin() {
            self.state.update_pose(pose);
        }

        if let Some(des_state) = self.des_state_feed.spin() {
            if self.des_state.is_none() {
                info!("First desired state received");
            }
            self.des_state = Some(des_state);
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
