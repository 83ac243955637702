//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (UART / USB-CDC).  Actuation lines go out at `debug`, so they
//! only show when the config enables the debug console; lifecycle lines
//! are always at `info`.

use log::{debug, info};

use crate::app::events::{AppEvent, DiscardReason};
use crate::app::lifecycle::LinkState;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | waiting for radio"),
            AppEvent::MotionApplied { command, .. } => debug!("{}", command.describe()),
            AppEvent::RelayApplied { relay, state, .. } => {
                debug!("Turn relay {} {}", relay.number(), state);
            }
            AppEvent::LinkChanged { from, to } => match (from, to) {
                (_, LinkState::Connected) => info!("BLE: connected"),
                (LinkState::Connected, LinkState::Advertising) => {
                    info!("BLE: disconnected, advertising restarted");
                }
                _ => info!("LINK | {:?} -> {:?}", from, to),
            },
            AppEvent::AdvertisingStarted => debug!("BLE: advertising"),
            AppEvent::WriteDiscarded(DiscardReason::EmptyPayload) => {
                debug!("WRITE | empty payload dropped");
            }
            AppEvent::WriteDiscarded(DiscardReason::UnknownHandle(h)) => {
                debug!("WRITE | unknown handle {} dropped", h);
            }
        }
    }
}
