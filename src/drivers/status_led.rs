//! Link indicator LED driver.
//!
//! Single discrete LED, lit while a client is connected.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct StatusLed<P> {
    pin: P,
    gpio: i32,
    lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    pub fn new(pin: P, gpio: i32) -> Self {
        Self {
            pin,
            gpio,
            lit: false,
        }
    }

    pub fn set(&mut self, lit: bool) -> Result<(), ActuatorError> {
        let res = if lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed(self.gpio))?;
        self.lit = lit;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), ActuatorError> {
        self.set(false)
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
