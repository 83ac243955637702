//! Outbound application events.
//!
//! The [`BotService`](super::service::BotService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, record in a test, etc.
//! They are diagnostic only; nothing is sent back to the client.

use crate::events::AttrHandle;

use super::commands::{DriveDirection, MotionCommand, RelayCommand, RelayId};
use super::lifecycle::LinkState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service was constructed and is waiting for the radio.
    Started,

    /// Motors were driven for a motion command.
    MotionApplied {
        /// Raw byte as written by the client.
        raw: u8,
        command: MotionCommand,
        left: DriveDirection,
        right: DriveDirection,
    },

    /// A relay output was set.
    RelayApplied {
        relay: RelayId,
        raw: u8,
        state: RelayCommand,
    },

    /// Link state moved.
    LinkChanged { from: LinkState, to: LinkState },

    /// Advertising was (re)started.
    AdvertisingStarted,

    /// A client write was dropped without actuation.
    WriteDiscarded(DiscardReason),
}

/// Why a write was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Zero-length payload.
    EmptyPayload,
    /// No channel is bound to the handle.
    UnknownHandle(AttrHandle),
}
