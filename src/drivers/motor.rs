//! Rear drive motor driver (dual-input H-bridge).
//!
//! Direction-only control: each motor is two bridge inputs, no PWM.
//!
//! | Direction | A | B |
//! |-----------|---|---|
//! | Forward   | 1 | 0 |
//! | Back      | 0 | 1 |
//! | Stop      | 1 | 1 |  (both high = brake)
//!
//! ## Dual-target design
//!
//! Generic over `embedded_hal::digital::OutputPin`.  On ESP-IDF the pins
//! are [`GpioOutput`](super::hw_init::GpioOutput)s; on host they are the
//! same type backed by an in-memory level.

use embedded_hal::digital::{OutputPin, PinState};

use crate::app::commands::DriveDirection;
use crate::error::ActuatorError;

/// Two-pin bridge encoding of a [`DriveDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorEncoding {
    pub pin_a: bool,
    pub pin_b: bool,
}

impl MotorEncoding {
    pub const fn for_direction(direction: DriveDirection) -> Self {
        let (pin_a, pin_b) = match direction {
            DriveDirection::Forward => (true, false),
            DriveDirection::Back => (false, true),
            DriveDirection::Stop => (true, true),
        };
        Self { pin_a, pin_b }
    }
}

pub struct MotorDriver<P> {
    pin_a: P,
    pin_b: P,
    gpio_a: i32,
    gpio_b: i32,
    direction: Option<DriveDirection>,
}

impl<P: OutputPin> MotorDriver<P> {
    /// `gpio_a`/`gpio_b` are only used to label errors.
    pub fn new(pin_a: P, gpio_a: i32, pin_b: P, gpio_b: i32) -> Self {
        Self {
            pin_a,
            pin_b,
            gpio_a,
            gpio_b,
            direction: None,
        }
    }

    pub fn set(&mut self, direction: DriveDirection) -> Result<(), ActuatorError> {
        let enc = MotorEncoding::for_direction(direction);
        self.pin_a
            .set_state(PinState::from(enc.pin_a))
            .map_err(|_| ActuatorError::GpioWriteFailed(self.gpio_a))?;
        self.pin_b
            .set_state(PinState::from(enc.pin_b))
            .map_err(|_| ActuatorError::GpioWriteFailed(self.gpio_b))?;
        self.direction = Some(direction);
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        self.set(DriveDirection::Stop)
    }

    /// Last commanded direction, `None` before the first command.
    pub fn direction(&self) -> Option<DriveDirection> {
        self.direction
    }

    /// Both pins, for level inspection.
    pub fn pins_mut(&mut self) -> (&mut P, &mut P) {
        (&mut self.pin_a, &mut self.pin_b)
    }
}
