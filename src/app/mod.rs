//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules for the RelayBot: command decoding,
//! channel routing, dispatch to actuators, and the radio link lifecycle.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod dispatcher;
pub mod events;
pub mod lifecycle;
pub mod ports;
pub mod registry;
pub mod service;
