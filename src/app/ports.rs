//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BotService (domain)
//! ```
//!
//! Driven adapters (pins, radio stack, event sinks) implement these traits.
//! The [`BotService`](super::service::BotService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Inbound notifications (connect, disconnect, write) do not flow through a
//! port: the radio adapter posts them to the
//! [`EventQueue`](crate::events::EventQueue) and the worker hands them to
//! the service.

use crate::error::{ActuatorError, RadioError};
use crate::events::AttrHandle;

use super::commands::{DriveDirection, MotorSide, RelayCommand, RelayId};
use super::registry::ChannelId;

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command pins.
///
/// Every method is synchronous.  An `Err` means the pin layer faulted,
/// which the worker treats as fatal; there is no retry.
pub trait ActuatorPort {
    /// Drive both bridge inputs of one motor for `direction`.
    fn set_motor(&mut self, side: MotorSide, direction: DriveDirection) -> Result<(), ActuatorError>;

    /// Set one relay output.
    fn set_relay(&mut self, relay: RelayId, state: RelayCommand) -> Result<(), ActuatorError>;

    /// Connected/disconnected indicator.
    fn set_link_indicator(&mut self, connected: bool) -> Result<(), ActuatorError>;

    /// Motors stopped, relays off, indicator off — boot-time safe state.
    fn all_off(&mut self) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Radio port (driven adapter: domain → BLE stack)
// ───────────────────────────────────────────────────────────────

/// The narrow slice of the BLE stack the domain needs.
pub trait RadioPort {
    /// Handle assigned to a channel's characteristic, once registration
    /// has completed.
    fn channel_handle(&self, id: ChannelId) -> Option<AttrHandle>;

    /// Begin (or resume) connectable advertising.
    fn start_advertising(&mut self) -> Result<(), RadioError>;

    /// Whether the stack is currently advertising.  Checked on disconnect
    /// so a set that is still live is not started twice.
    fn is_advertising(&self) -> bool;

    /// Give the stack time for deferred internal processing.
    fn process_events(&mut self) {}

    /// All channel handles in [`ChannelId::ALL`] order.
    fn channel_handles(&self) -> Result<[AttrHandle; ChannelId::COUNT], RadioError> {
        let mut out = [0; ChannelId::COUNT];
        for (slot, id) in out.iter_mut().zip(ChannelId::ALL) {
            *slot = self.channel_handle(id).ok_or(RadioError::NotReady)?;
        }
        Ok(out)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, test
/// recorder, …).  Nothing downstream may be required for correctness.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
