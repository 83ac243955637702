//! RelayBot firmware library.
//!
//! Exposes the application core, adapters and drivers for the binary and
//! for integration testing. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; on any other target
//! the same code runs against in-memory pins and a simulated radio.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod pins;
pub mod scheduler;

pub mod adapters;
pub mod drivers;

#[cfg(target_os = "espidf")]
mod esp_link_shims;
