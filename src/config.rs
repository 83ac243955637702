//! System configuration parameters
//!
//! Radio identity and console settings for the RelayBot.  Defaults match
//! the shipped robots; a build-time JSON override can be supplied through
//! the `RELAYBOT_CONFIG` environment variable.
//!
//! The GATT layout (service and characteristic UUIDs) is a wire contract
//! with the client app and deliberately not configurable.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::adapters::utils::is_printable_ascii;
use crate::error::Error;

/// Maximum advertised name length in bytes.
pub const DEVICE_NAME_MAX: usize = 24;

/// Legal BLE advertising interval range (milliseconds).
const ADV_INTERVAL_MIN_MS: u16 = 20;
const ADV_INTERVAL_MAX_MS: u16 = 10_240;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    // --- Radio identity ---
    /// Complete local name placed in the advertising and scan response payloads
    pub device_name: heapless::String<DEVICE_NAME_MAX>,
    /// GAP appearance value
    pub appearance: u16,
    /// Advertising interval (milliseconds)
    pub advertising_interval_ms: u16,

    // --- Console ---
    /// Log every actuation decision (`Go Forward`, `Turn relay 1 ON`, …)
    pub debug_serial: bool,
    /// Console baud rate
    pub serial_baud: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        let mut device_name = heapless::String::new();
        // "VNG_Bot2" always fits in DEVICE_NAME_MAX.
        let _ = device_name.push_str("VNG_Bot2");
        Self {
            device_name,
            appearance: 6000,
            advertising_interval_ms: 200,
            debug_serial: true,
            serial_baud: 115_200,
        }
    }
}

impl BotConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.device_name.is_empty() || !is_printable_ascii(&self.device_name) {
            return Err(Error::Config("device_name must be 1-24 printable ASCII bytes"));
        }
        if !(ADV_INTERVAL_MIN_MS..=ADV_INTERVAL_MAX_MS).contains(&self.advertising_interval_ms) {
            return Err(Error::Config("advertising_interval_ms outside 20..=10240"));
        }
        if self.serial_baud == 0 {
            return Err(Error::Config("serial_baud must be non-zero"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build-time override if present and valid, defaults otherwise.
    pub fn load() -> Self {
        match option_env!("RELAYBOT_CONFIG") {
            Some(json) => match Self::from_json(json) {
                Ok(cfg) => {
                    info!("Config: using RELAYBOT_CONFIG override");
                    cfg
                }
                Err(e) => {
                    warn!("Config: RELAYBOT_CONFIG rejected ({}), using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Advertising interval in BLE controller units (0.625 ms).
    pub fn advertising_interval_units(&self) -> u16 {
        ((u32::from(self.advertising_interval_ms) * 1000) / 625) as u16
    }

    /// Log filter implied by `debug_serial`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug_serial {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
