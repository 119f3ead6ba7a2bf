//! # Feed Client
//!
//! Feed clients subscribe to the publishers of the pose and desired state feeds. Publishers send
//! JSON-serialized messages as often as they like; each time the client is spun every queued
//! message is read and only the most recent valid one is passed on to the control loop.
//!
//! The client never blocks: it is created without waiting for the publisher, and ZMQ reconnects in
//! the background if the publisher goes away. Changes in the connection state are logged.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::marker::PhantomData;
use log::{info, warn};
use serde::de::DeserializeOwned;

use comms_if::{
    eqpt::{loc::PoseMsg, traj::DesStateMsg},
    net::{MonitoredSocket, MonitoredSocketError, SocketOptions, zmq}
};
use crate::{ctrl_loop::Feed, steer_ctrl::{DesState, Pose}};

// ------------------------------------------------------------------------------------------------
// TYPES
// ------------------------------------------------------------------------------------------------

/// Client for the pose feed.
pub type PoseClient = FeedClient<PoseMsg, Pose>;

/// Client for the desired state feed.
pub type DesStateClient = FeedClient<DesStateMsg, DesState>;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Subscriber to a feed publishing messages of type `M`, which are converted into `T`.
pub struct FeedClient<M, T> {
    /// Name of the feed, used in log messages.
    name: &'static str,

    socket: MonitoredSocket,

    /// Connection state the last time the client was spun.
    was_connected: bool,

    _types: PhantomData<fn(M) -> T>
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FeedClientError {
    #[error("Socket error: {0}")]
    SocketError(MonitoredSocketError),

    #[error("Could not subscribe to the feed: {0}")]
    SubscribeError(zmq::Error),

    #[error("Could not receive a message from the publisher: {0}")]
    RecvError(zmq::Error)
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<M, T> FeedClient<M, T>
where
    M: DeserializeOwned,
    T: From<M>
{
    /// Create a new feed client connected to the publisher at `endpoint`.
    ///
    /// This function will not block until the publisher is available.
    pub fn new(
        ctx: &zmq::Context,
        name: &'static str,
        endpoint: &str
    ) -> Result<Self, FeedClientError> {
        let socket_options = SocketOptions {
            block_on_first_connect: false,
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
            zmq::SUB,
            socket_options,
            endpoint
        ).map_err(FeedClientError::SocketError)?;

        // Take every message the publisher sends
        socket.set_subscribe(b"")
            .map_err(FeedClientError::SubscribeError)?;

        Ok(Self {
            name,
            socket,
            was_connected: false,
            _types: PhantomData
        })
    }

    /// Receive all queued messages, returning the latest valid one.
    pub fn recv(&mut self) -> Result<Option<T>, FeedClientError> {
        self.check_connection();

        self.socket.recv_latest::<M>()
            .map(|m| m.map(T::from))
            .map_err(FeedClientError::RecvError)
    }

    fn check_connection(&mut self) {
        let connected = self.socket.connected();

        match (self.was_connected, connected) {
            (false, true) => info!("Connected to the {} publisher", self.name),
            (true, false) => warn!("Lost connection to the {} publisher", self.name),
            _ => ()
        }

        self.was_connected = connected;
    }
}

impl<M, T> Feed for FeedClient<M, T>
where
    M: DeserializeOwned,
    T: From<M>
{
    type Item = T;

    fn spin(&mut self) -> Option<T> {
        match self.recv() {
            Ok(t) => t,
            Err(e) => {
                warn!("Error on the {} feed: {}", self.name, e);
                None
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
