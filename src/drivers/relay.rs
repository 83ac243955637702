//! Relay output driver.
//!
//! The relay module inputs are active-low.  Command byte 0 (On) drives the
//! pin LOW and energises the coil; any other byte (Off) drives it HIGH.

use embedded_hal::digital::OutputPin;

use crate::app::commands::RelayCommand;
use crate::error::ActuatorError;

pub struct RelayDriver<P> {
    pin: P,
    gpio: i32,
    state: Option<RelayCommand>,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(pin: P, gpio: i32) -> Self {
        Self {
            pin,
            gpio,
            state: None,
        }
    }

    pub fn set(&mut self, state: RelayCommand) -> Result<(), ActuatorError> {
        let res = match state {
            RelayCommand::On => self.pin.set_low(),
            RelayCommand::Off => self.pin.set_high(),
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed(self.gpio))?;
        self.state = Some(state);
        Ok(())
    }

    pub fn state(&self) -> Option<RelayCommand> {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == Some(RelayCommand::On)
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
