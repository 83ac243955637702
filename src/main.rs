//! RelayBot Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single deferred-work worker.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter      BleAdapter          LogEventSink         │
//! │  (ActuatorPort)       (RadioPort)         (EventSink)          │
//! │                            │ callbacks                         │
//! │                            ▼                                   │
//! │                      EventQueue (16)                           │
//! │                            │                                   │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                            ▼                                   │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │   Scheduler ──▶ BotService (pure logic)                │    │
//! │  │   Registry · Dispatcher · ConnectionManager            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use relaybot::adapters::ble::BleAdapter;
use relaybot::adapters::hardware::HardwareAdapter;
use relaybot::adapters::log_sink::LogEventSink;
use relaybot::app::ports::ActuatorPort;
use relaybot::app::service::BotService;
use relaybot::config::BotConfig;
use relaybot::drivers::hw_init;
use relaybot::error::Error;
use relaybot::events::EVENT_QUEUE;
use relaybot::scheduler::Scheduler;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    // ── 2. Configuration ──────────────────────────────────────
    let config = BotConfig::load();
    log::set_max_level(config.log_level());

    info!("RelayBot v{} '{}'", env!("CARGO_PKG_VERSION"), config.device_name);
    info!(
        "console {} baud, debug output {}",
        config.serial_baud,
        if config.debug_serial { "on" } else { "off" }
    );

    // ── 3. Outputs into the safe state before anything else ───
    if let Err(e) = hw_init::init_outputs() {
        error!("GPIO init failed: {} — halting", e);
        return Err(e.into());
    }
    let mut hw = HardwareAdapter::from_board();
    hw.all_off().map_err(Error::from)?;

    // ── 4. Radio ──────────────────────────────────────────────
    let mut ble = BleAdapter::new(&config, &EVENT_QUEUE);
    if let Err(e) = ble.start() {
        // Never advertise, never accept commands.
        error!("BLE init failed: {} — halting", e);
        return Err(Error::from(e).into());
    }

    // ── 5. Worker ─────────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut service = BotService::new();
    service.start(&mut sink);

    info!("System ready. Entering worker loop.");
    let mut scheduler = Scheduler::new(&EVENT_QUEUE);
    let res = scheduler.run_forever(|event| service.handle_event(event, &mut hw, &mut ble, &mut sink));
    match res {
        Ok(never) => match never {},
        Err(e) => {
            // Returning from main aborts, and the abort resets the chip.
            error!("Fatal: {} after {} work items", e, scheduler.processed());
            Err(e.into())
        }
    }
}
