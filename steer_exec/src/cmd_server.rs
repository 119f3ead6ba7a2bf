//! # Velocity Command Server
//!
//! Publishes the velocity demands produced by the control loop to the drive base.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::{
    eqpt::drive::VelDems,
    net::{MonitoredSocket, MonitoredSocketError, SocketOptions, zmq}
};
use crate::{ctrl_loop::VelCmdSink, steer_ctrl::VelCmd};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Velocity command server
pub struct CmdServer {
    socket: MonitoredSocket
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CmdServerError {
    #[error("Socket error: {0}")]
    SocketError(MonitoredSocketError),

    #[error("Could not send the command: {0}")]
    SendError(zmq::Error),

    #[error("Could not serialize the command: {0}")]
    SerializationError(serde_json::Error),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl CmdServer {
    /// Create a new instance of the command server, bound to `endpoint`.
    ///
    /// This function will not block until a subscriber connects.
    pub fn new(ctx: &zmq::Context, endpoint: &str) -> Result<Self, CmdServerError> {
        let socket_options = SocketOptions {
            block_on_first_connect: false,
            bind: true,
            connect_timeout: 1000,
            heartbeat_ivl: 500,
            heartbeat_ttl: 1000,
            heartbeat_timeout: 1000,
            linger: 1,
            recv_timeout: 10,
            send_timeout: 10,
            ..Default::default()
        };

        let socket = MonitoredSocket::new(
            ctx,
            zmq::PUB,
            socket_options,
            endpoint
        ).map_err(CmdServerError::SocketError)?;

        Ok(Self {
            socket
        })
    }
}

impl VelCmdSink for CmdServer {
    type Error = CmdServerError;

    fn send(&mut self, cmd: &VelCmd) -> Result<(), CmdServerError> {
        let dems_string = serde_json::to_string(&VelDems::from(*cmd))
            .map_err(CmdServerError::SerializationError)?;

        self.socket.send(dems_string.as_str(), 0)
            .map_err(CmdServerError::SendError)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::{thread, time::Duration};

    use super::*;

    #[test]
    fn test_send_publishes_json() {
        let endpoint = "inproc://test_send_publishes_json";
        let ctx = zmq::Context::new();
        let mut server = CmdServer::new(&ctx, endpoint).unwrap();

        let subscriber = ctx.socket(zmq::SUB).unwrap();
        subscriber.set_linger(0).unwrap();
        subscriber.set_subscribe(b"").unwrap();
        subscriber.connect(endpoint).unwrap();

        let cmd = VelCmd {
            linear_ms: 0.75,
            angular_rads: -0.125
        };

        // Keep sending until the subscription has reached the server
        let mut received = None;
        for _ in 0..500 {
            server.send(&cmd).unwrap();
            thread::sleep(Duration::from_millis(5));
            if let Ok(Ok(s)) = subscriber.recv_string(zmq::DONTWAIT) {
                received = Some(s);
                break
            }
        }
        let received = received.expect("Subscriber never received a command");

        let dems: VelDems = serde_json::from_str(&received).unwrap();
        assert_eq!(dems, VelDems { linear_ms: 0.75, angular_rads: -0.125 });

        let fields: serde_json::Value = serde_json::from_str(&received).unwrap();
        assert_eq!(fields["linear_ms"], 0.75);
        assert_eq!(fields["angular_rads"], -0.125);
    }
}
