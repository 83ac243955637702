//! Unified error types for the RelayBot firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! worker loop's error handling uniform.  All variants are `Copy` so they
//! can be passed out of a work item without allocation.
//!
//! Only infrastructure failures live here.  Malformed client input (bad
//! command bytes, unknown handles, empty payloads) is never an error: it
//! is normalised or discarded by the application core.

use core::fmt;

use crate::events::AttrHandle;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pin write failed.  Unrecoverable at this layer.
    Actuator(ActuatorError),
    /// The radio stack failed to start, register or advertise.
    Radio(RadioError),
    /// The deferred-work queue overflowed.
    Queue(QueueError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Radio(e) => write!(f, "radio: {e}"),
            Self::Queue(e) => write!(f, "queue: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set/clear failed on the given pin.
    GpioWriteFailed(i32),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed(pin) => write!(f, "GPIO {pin} write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Radio errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioError {
    /// Controller or host stack initialisation failed (ESP-IDF return code).
    StackInitFailed(i32),
    /// GATT service or characteristic registration failed.
    RegistrationFailed(i32),
    /// `start_advertising` was rejected by the stack.
    AdvertisingFailed(i32),
    /// The stack has not finished registering the channel characteristics.
    NotReady,
    /// The stack reported the same attribute handle for two channels.
    DuplicateHandle(AttrHandle),
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackInitFailed(rc) => write!(f, "BLE stack init failed (rc={rc})"),
            Self::RegistrationFailed(rc) => write!(f, "GATT registration failed (rc={rc})"),
            Self::AdvertisingFailed(rc) => write!(f, "start advertising failed (rc={rc})"),
            Self::NotReady => write!(f, "channel handles not yet assigned"),
            Self::DuplicateHandle(h) => write!(f, "attribute handle {h} assigned twice"),
        }
    }
}

impl From<RadioError> for Error {
    fn from(e: RadioError) -> Self {
        Self::Radio(e)
    }
}

// ---------------------------------------------------------------------------
// Queue errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// All slots of the deferred-work queue are occupied.
    Full,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "deferred-work queue full"),
        }
    }
}

impl From<QueueError> for Error {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
