//! Command dispatcher — turns one accepted byte into pin actuation.
//!
//! ```text
//!  (Channel, byte) ──▶ decode (total) ──▶ ActuatorPort ──▶ cached_value
//! ```
//!
//! Unrecognised bytes are normalised to Stop/Off before anything is
//! driven.  This fail-safe is the only guard against malformed or hostile
//! writes and must stay a plain total mapping.

use log::debug;

use crate::error::ActuatorError;

use super::commands::{MotionCommand, MotorSide, RelayCommand};
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink};
use super::registry::Channel;

/// Apply `value` to `channel`.
///
/// The cached value is updated only after the pins were set.  Writing the
/// same value twice leaves the pins unchanged (no toggle semantics).
pub fn dispatch(
    channel: &mut Channel,
    value: u8,
    hw: &mut impl ActuatorPort,
    sink: &mut impl EventSink,
) -> Result<(), ActuatorError> {
    let event = match channel.id().relay() {
        None => {
            let command = MotionCommand::from_byte(value);
            let (left, right) = command.drive_pair();
            hw.set_motor(MotorSide::Left, left)?;
            hw.set_motor(MotorSide::Right, right)?;
            AppEvent::MotionApplied {
                raw: value,
                command,
                left,
                right,
            }
        }
        Some(relay) => {
            let state = RelayCommand::from_byte(value);
            hw.set_relay(relay, state)?;
            AppEvent::RelayApplied {
                relay,
                raw: value,
                state,
            }
        }
    };

    channel.record(value);
    debug!("dispatch: {:?} <- 0x{:02x}", channel.id(), value);
    sink.emit(&event);
    Ok(())
}
