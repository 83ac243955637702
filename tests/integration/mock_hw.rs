//! Mock adapters for integration tests.
//!
//! Records every actuator and radio call so tests can assert on the full
//! command history without touching real GPIO or a BLE stack.

use relaybot::app::commands::{DriveDirection, MotorSide, RelayCommand, RelayId};
use relaybot::app::events::AppEvent;
use relaybot::app::ports::{ActuatorPort, EventSink, RadioPort};
use relaybot::app::registry::ChannelId;
use relaybot::error::{ActuatorError, RadioError};
use relaybot::events::AttrHandle;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Motor(MotorSide, DriveDirection),
    Relay(RelayId, RelayCommand),
    LinkIndicator(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    /// Fail every call with this pin number.
    pub fail_pin: Option<i32>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, call: ActuatorCall) -> Result<(), ActuatorError> {
        if let Some(pin) = self.fail_pin {
            return Err(ActuatorError::GpioWriteFailed(pin));
        }
        self.calls.push(call);
        Ok(())
    }

    pub fn motor(&self, side: MotorSide) -> Option<DriveDirection> {
        self.calls.iter().rev().find_map(|c| match *c {
            ActuatorCall::Motor(s, d) if s == side => Some(d),
            ActuatorCall::AllOff => Some(DriveDirection::Stop),
            _ => None,
        })
    }

    pub fn relay(&self, relay: RelayId) -> Option<RelayCommand> {
        self.calls.iter().rev().find_map(|c| match *c {
            ActuatorCall::Relay(r, s) if r == relay => Some(s),
            ActuatorCall::AllOff => Some(RelayCommand::Off),
            _ => None,
        })
    }

    pub fn link_lit(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match *c {
                ActuatorCall::LinkIndicator(on) => Some(on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl ActuatorPort for MockHardware {
    fn set_motor(&mut self, side: MotorSide, direction: DriveDirection) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::Motor(side, direction))
    }

    fn set_relay(&mut self, relay: RelayId, state: RelayCommand) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::Relay(relay, state))
    }

    fn set_link_indicator(&mut self, connected: bool) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::LinkIndicator(connected))
    }

    fn all_off(&mut self) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::AllOff)
    }
}

// ── MockRadio ─────────────────────────────────────────────────

/// Handles assigned by [`MockRadio::registered`], in `ChannelId::ALL` order.
pub const MOCK_HANDLES: [AttrHandle; ChannelId::COUNT] = [0x10, 0x12, 0x14, 0x16, 0x18];

#[derive(Default)]
pub struct MockRadio {
    pub handles: Option<[AttrHandle; ChannelId::COUNT]>,
    pub advertising: bool,
    pub adv_starts: u32,
    pub processed: u32,
    /// Reject `start_advertising` with this return code.
    pub refuse_adv: Option<i32>,
}

#[allow(dead_code)]
impl MockRadio {
    /// Registration already complete.
    pub fn registered() -> Self {
        Self {
            handles: Some(MOCK_HANDLES),
            ..Self::default()
        }
    }

    pub fn handle(id: ChannelId) -> AttrHandle {
        MOCK_HANDLES[id as usize]
    }

    /// The stack stops advertising once a central is connected.
    pub fn connect(&mut self) {
        self.advertising = false;
    }
}

impl RadioPort for MockRadio {
    fn channel_handle(&self, id: ChannelId) -> Option<AttrHandle> {
        self.handles.map(|h| h[id as usize])
    }

    fn start_advertising(&mut self) -> Result<(), RadioError> {
        if let Some(rc) = self.refuse_adv {
            return Err(RadioError::AdvertisingFailed(rc));
        }
        self.advertising = true;
        self.adv_starts += 1;
        Ok(())
    }

    fn is_advertising(&self) -> bool {
        self.advertising
    }

    fn process_events(&mut self) {
        self.processed += 1;
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
