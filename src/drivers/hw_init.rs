//! One-shot GPIO initialisation and the output pin type used by all drivers.
//!
//! Configures every actuator pin as a push-pull output using raw ESP-IDF
//! sys calls. Called once from `main()` before the radio comes up.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

use crate::pins;

// ── Error types ───────────────────────────────────────────────

/// Errors during one-shot peripheral initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

/// A rejected level write, carrying the ESP-IDF return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError(pub i32);

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

// ── Initialisation ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_outputs() -> Result<(), HwInitError> {
    for &pin in &pins::OUTPUT_GPIOS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: called once from main() before any driver touches the pins.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }
    log::info!("hw_init: {} GPIO outputs configured", pins::OUTPUT_GPIOS.len());
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_outputs() -> Result<(), HwInitError> {
    log::info!(
        "hw_init(sim): {} outputs simulated in memory",
        pins::OUTPUT_GPIOS.len()
    );
    Ok(())
}

// ── GpioOutput ────────────────────────────────────────────────

/// Push-pull output on a numbered GPIO.
///
/// The last written level is tracked locally so `StatefulOutputPin` works
/// the same on both targets; on host that is the only state there is.
#[derive(Debug)]
pub struct GpioOutput {
    pin: i32,
    level: bool,
}

impl GpioOutput {
    /// The pin must already be configured by [`init_outputs`] on target.
    pub const fn new(pin: i32) -> Self {
        Self { pin, level: false }
    }

    pub const fn pin(&self) -> i32 {
        self.pin
    }

    #[cfg(target_os = "espidf")]
    fn write(&mut self, high: bool) -> Result<(), GpioError> {
        // SAFETY: pin configured as output in init_outputs(); only the
        // worker task writes actuator pins.
        let ret = unsafe { gpio_set_level(self.pin, u32::from(high)) };
        if ret != ESP_OK as i32 {
            return Err(GpioError(ret));
        }
        self.level = high;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    #[allow(clippy::unnecessary_wraps)]
    fn write(&mut self, high: bool) -> Result<(), GpioError> {
        self.level = high;
        Ok(())
    }
}

impl ErrorType for GpioOutput {
    type Error = GpioError;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl StatefulOutputPin for GpioOutput {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}
