//! Bot service — the hexagonal core.
//!
//! [`BotService`] is the peripheral context owned by the worker: the
//! channel registry and the connection manager.  Every work item drained
//! by the [`Scheduler`](crate::scheduler::Scheduler) is handed to
//! [`BotService::handle_event`]; all I/O flows through port traits
//! injected at call sites, making the whole service testable with mock
//! adapters.
//!
//! ```text
//!    Event ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!              │         BotService         │
//! RadioPort ◀──│ Registry · Dispatch · Link │──▶ ActuatorPort
//!              └────────────────────────────┘
//! ```

use log::{debug, error, info, warn};

use crate::error::Result;
use crate::events::{AttrHandle, Event};

use super::dispatcher::dispatch;
use super::events::{AppEvent, DiscardReason};
use super::lifecycle::{ConnectionManager, LinkState};
use super::ports::{ActuatorPort, EventSink, RadioPort};
use super::registry::{ChannelId, ChannelRegistry};

// ───────────────────────────────────────────────────────────────
// BotService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
#[derive(Debug, Default)]
pub struct BotService {
    registry: ChannelRegistry,
    link: ConnectionManager,
    handled: u64,
}

impl BotService {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the service; call once before the worker starts.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("BotService started, waiting for radio");
    }

    // ── Work item handling ────────────────────────────────────

    /// Run one work item to completion.
    ///
    /// An `Err` is an infrastructure fault (pin or radio) and ends the
    /// worker; client input never produces one.
    pub fn handle_event<H, R, S>(
        &mut self,
        event: Event,
        hw: &mut H,
        radio: &mut R,
        sink: &mut S,
    ) -> Result<()>
    where
        H: ActuatorPort,
        R: RadioPort,
        S: EventSink,
    {
        self.handled += 1;
        match event {
            Event::RadioReady => {
                let handles = radio.channel_handles()?;
                self.registry.bind(handles)?;
                info!("BotService: channels bound to handles {:?}", handles);
                self.link.on_radio_ready(radio, sink)
            }
            Event::RadioPending => {
                radio.process_events();
                Ok(())
            }
            Event::Connected => self.link.on_connected(hw, sink),
            Event::Disconnected => self.link.on_disconnected(radio, hw, sink),
            Event::RadioFault(e) => {
                error!("BotService: radio fault in {:?}: {}", self.link.state(), e);
                Err(e.into())
            }
            Event::Write { handle, payload } => self.handle_write(handle, &payload, hw, sink),
        }
    }

    fn handle_write(
        &mut self,
        handle: AttrHandle,
        payload: &[u8],
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let Some(&value) = payload.first() else {
            debug!("BotService: empty write to handle {} dropped", handle);
            sink.emit(&AppEvent::WriteDiscarded(DiscardReason::EmptyPayload));
            return Ok(());
        };
        let Some(channel) = self.registry.resolve(handle) else {
            warn!("BotService: write to unknown handle {} dropped", handle);
            sink.emit(&AppEvent::WriteDiscarded(DiscardReason::UnknownHandle(handle)));
            return Ok(());
        };
        if payload.len() > 1 {
            debug!("BotService: ignoring {} trailing bytes", payload.len() - 1);
        }
        dispatch(channel, value, hw, sink)?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn link_state(&self) -> LinkState {
        self.link.state()
    }

    /// Last byte accepted on a channel (diagnostics and tests only).
    pub fn cached_value(&self, id: ChannelId) -> Option<u8> {
        self.registry.get(id).cached_value()
    }

    /// Work items handled since startup.
    pub fn handled_count(&self) -> u64 {
        self.handled
    }
}
