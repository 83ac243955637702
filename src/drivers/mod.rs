//! Actuator drivers and GPIO initialisation.

pub mod hw_init;
pub mod motor;
pub mod relay;
pub mod status_led;
