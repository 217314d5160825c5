//! Input change events and the sink seam.
//!
//! The poller represents input changes as small per-slot deltas
//! ([`InputChange`]) and hands them to whatever [`ChangeSink`] the core was
//! built with. The core itself never consumes these events; the sink is the
//! extension point for anything that wants a change feed (loggers, recorders,
//! a remote-pad forwarder).
//!
//! ## Value conventions
//! - **Joypad buttons:** `0` released, nonzero (normally `1`) pressed.
//! - **Analog axes:** the host's signed 16-bit axis reading, bit-cast into
//!   the `u16` snapshot word. Cast back to `i16` to recover the sign.

use crate::descriptor::DeviceKind;
use serde::{Deserialize, Serialize};

/// One slot's transition to a new state, as noticed by the poller.
///
/// Serializable so sinks can ship changes off-process (e.g. to a remote pad
/// listener) without defining their own wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputChange {
    /// Controller port the change was observed on.
    pub port: u32,
    /// Device class of the originating descriptor.
    pub kind: DeviceKind,
    /// Device-local index (analog stick selector; `0` for joypads).
    pub index: u32,
    /// Button or axis id within the device.
    pub id: u32,
    /// The new state now stored in the snapshot.
    pub state: u16,
}

/// Receives input changes in the order the poller notices them.
pub trait ChangeSink: Send {
    fn on_change(&mut self, change: &InputChange);
}
