//! Inputs to and outputs from the control loop

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::steer_ctrl::VelCmd;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A source of updates for one of the control loop's latest-value slots.
pub trait Feed {
    /// The value carried by an update.
    type Item;

    /// Service all pending updates without blocking, returning the most recent one.
    ///
    /// `None` is returned if there were no pending updates. Problems with the feed itself are the
    /// feed's to report, they shall not stop the control loop.
    fn spin(&mut self) -> Option<Self::Item>;
}

/// A destination for the velocity commands produced by the control loop.
pub trait VelCmdSink {
    /// An error which can occur while sending a command.
    type Error: std::fmt::Display;

    /// Send a command. No acknowledgement is expected.
    fn send(&mut self, cmd: &VelCmd) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

/// In-process feed, each message sent on the channel is one update.
impl<T> Feed for Receiver<T> {
    type Item = T;

    fn spin(&mut self) -> Option<T> {
        self.try_iter().last()
    }
}

/// In-process sink.
impl VelCmdSink for Sender<VelCmd> {
    type Error = SendError<VelCmd>;

    fn send(&mut self, cmd: &VelCmd) -> Result<(), Self::Error> {
        Sender::send(self, *cmd)
    }
}
