//! Steering controller executable entry point.
//!
//! # Architecture
//!
//! The executable:
//!
//!     - Initialises the session and logging
//!     - Loads the steering and network parameters, falling back to defaults
//!     - Connects to the pose and desired state publishers and binds the command server
//!     - Runs the control loop until Ctrl+C or SIGTERM is received
//!
//! The control loop stays silent until the first pose has been received.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::WrapErr};
use log::info;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

// Internal
use comms_if::net::{NetParams, zmq};
use steer_lib::{
    cmd_server::CmdServer,
    ctrl_loop::CtrlLoop,
    feed_client::{DesStateClient, PoseClient},
    params::SteerExecParams
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "steer_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Steering Controller Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params = util::params::load_or_default::<SteerExecParams>("steer_exec.toml")
        .validated();
    let net_params: NetParams = util::params::load_or_default("net.toml");

    info!("Steering parameters: {:?}", params);
    info!("Network parameters: {:?}", net_params);

    // ---- SHUTDOWN SIGNAL ----

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            shutdown.store(true, Ordering::Relaxed);
        }).wrap_err("Failed to set the shutdown signal handler")?;
    }

    // ---- INITIALISE NETWORK ----

    info!("Initialising network");

    let zmq_ctx = zmq::Context::new();

    let pose_client = {
        let c = PoseClient::new(&zmq_ctx, "pose", &net_params.pose_endpoint)
            .wrap_err("Failed to initialise the PoseClient")?;
        info!("PoseClient initialised");
        c
    };

    let des_state_client = {
        let c = DesStateClient::new(&zmq_ctx, "desired state", &net_params.des_state_endpoint)
            .wrap_err("Failed to initialise the DesStateClient")?;
        info!("DesStateClient initialised");
        c
    };

    let cmd_server = {
        let s = CmdServer::new(&zmq_ctx, &net_params.cmd_vel_endpoint)
            .wrap_err("Failed to initialise the CmdServer")?;
        info!("CmdServer initialised");
        s
    };

    info!("Network initialisation complete");

    // ---- MAIN LOOP ----

    let mut ctrl_loop = CtrlLoop::new(&params, pose_client, des_state_client, cmd_server);

    info!("Beginning control loop at {} Hz, waiting for the first pose\n", params.loop_rate_hz);

    ctrl_loop.run(&shutdown);

    // Close the sockets before the context is dropped
    drop(ctrl_loop);

    info!("End of execution");

    Ok(())
}
