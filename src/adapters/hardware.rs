//! Hardware adapter — bridges the pin drivers to [`ActuatorPort`].
//!
//! Owns both motor drivers, the four relays and the link LED.  This is
//! the only module that drives actuator pins.  Generic over the pin type
//! so tests and the host build run the exact same code on in-memory pins.

use embedded_hal::digital::{OutputPin, StatefulOutputPin};
use log::debug;

use crate::app::commands::{DriveDirection, MotorSide, RelayCommand, RelayId};
use crate::app::ports::ActuatorPort;
use crate::drivers::hw_init::GpioOutput;
use crate::drivers::motor::MotorDriver;
use crate::drivers::relay::RelayDriver;
use crate::drivers::status_led::StatusLed;
use crate::error::ActuatorError;
use crate::pins;

/// Output levels of every actuator pin, `true` = HIGH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSnapshot {
    /// Left motor `(A, B)`.
    pub left: (bool, bool),
    /// Right motor `(A, B)`.
    pub right: (bool, bool),
    /// Relay 1..4.
    pub relays: [bool; 4],
    pub led: bool,
}

/// Concrete adapter that combines all actuators behind the port trait.
pub struct HardwareAdapter<P> {
    left: MotorDriver<P>,
    right: MotorDriver<P>,
    relays: [RelayDriver<P>; 4],
    led: StatusLed<P>,
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(
        left: MotorDriver<P>,
        right: MotorDriver<P>,
        relays: [RelayDriver<P>; 4],
        led: StatusLed<P>,
    ) -> Self {
        Self {
            left,
            right,
            relays,
            led,
        }
    }

    fn motor_mut(&mut self, side: MotorSide) -> &mut MotorDriver<P> {
        match side {
            MotorSide::Left => &mut self.left,
            MotorSide::Right => &mut self.right,
        }
    }

    pub fn motor_direction(&self, side: MotorSide) -> Option<DriveDirection> {
        match side {
            MotorSide::Left => self.left.direction(),
            MotorSide::Right => self.right.direction(),
        }
    }

    pub fn relay_state(&self, relay: RelayId) -> Option<RelayCommand> {
        self.relays[relay.index()].state()
    }

    pub fn is_link_lit(&self) -> bool {
        self.led.is_lit()
    }
}

impl HardwareAdapter<GpioOutput> {
    /// Adapter on the board's pin map.  Pins must be configured with
    /// [`init_outputs`](crate::drivers::hw_init::init_outputs) first.
    pub fn from_board() -> Self {
        let motor = |a, b| MotorDriver::new(GpioOutput::new(a), a, GpioOutput::new(b), b);
        Self::new(
            motor(pins::MOTOR_LEFT_A_GPIO, pins::MOTOR_LEFT_B_GPIO),
            motor(pins::MOTOR_RIGHT_A_GPIO, pins::MOTOR_RIGHT_B_GPIO),
            pins::RELAY_GPIOS.map(|g| RelayDriver::new(GpioOutput::new(g), g)),
            StatusLed::new(GpioOutput::new(pins::LINK_LED_GPIO), pins::LINK_LED_GPIO),
        )
    }
}

impl<P: StatefulOutputPin> HardwareAdapter<P> {
    /// Read back every output level.
    pub fn pin_snapshot(&mut self) -> Result<PinSnapshot, P::Error> {
        let (la, lb) = self.left.pins_mut();
        let left = (la.is_set_high()?, lb.is_set_high()?);
        let (ra, rb) = self.right.pins_mut();
        let right = (ra.is_set_high()?, rb.is_set_high()?);
        let mut relays = [false; 4];
        for (level, relay) in relays.iter_mut().zip(self.relays.iter_mut()) {
            *level = relay.pin_mut().is_set_high()?;
        }
        let led = self.led.pin_mut().is_set_high()?;
        Ok(PinSnapshot {
            left,
            right,
            relays,
            led,
        })
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: OutputPin> ActuatorPort for HardwareAdapter<P> {
    fn set_motor(&mut self, side: MotorSide, direction: DriveDirection) -> Result<(), ActuatorError> {
        self.motor_mut(side).set(direction)
    }

    fn set_relay(&mut self, relay: RelayId, state: RelayCommand) -> Result<(), ActuatorError> {
        self.relays[relay.index()].set(state)
    }

    fn set_link_indicator(&mut self, connected: bool) -> Result<(), ActuatorError> {
        self.led.set(connected)
    }

    fn all_off(&mut self) -> Result<(), ActuatorError> {
        self.left.stop()?;
        self.right.stop()?;
        for relay in &mut self.relays {
            relay.set(RelayCommand::Off)?;
        }
        self.led.off()?;
        debug!("hardware: all outputs in safe state");
        Ok(())
    }
}
