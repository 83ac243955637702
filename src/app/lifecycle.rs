//! Connection lifecycle manager.
//!
//! ```text
//!   Idle ──radio ready──▶ Advertising ──connect──▶ Connected
//!                              ▲                       │
//!                              └──────disconnect───────┘
//!                                (advertising restarted
//!                                 in the same work item)
//! ```
//!
//! After a disconnect the device is advertising again before the work item
//! ends: restarted, unless the stack still reports the set as live.  A
//! refused restart is returned to the worker as fatal.  A restart the stack
//! accepts but later fails arrives as
//! [`Event::RadioFault`](crate::events::Event::RadioFault).

use log::{debug, info, warn};

use crate::error::Result;

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, RadioPort};

/// Link state as seen by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Radio not ready yet.
    Idle,
    /// Discoverable, waiting for a central.
    Advertising,
    /// One central connected.
    Connected,
}

/// Tracks the link and keeps the device discoverable.
#[derive(Debug)]
pub struct ConnectionManager {
    state: LinkState,
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            state: LinkState::Idle,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Radio bring-up finished: start advertising.
    pub fn on_radio_ready(
        &mut self,
        radio: &mut impl RadioPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.state != LinkState::Idle {
            warn!("Link: radio ready reported twice (state={:?})", self.state);
            return Ok(());
        }
        radio.start_advertising()?;
        sink.emit(&AppEvent::AdvertisingStarted);
        self.transition(LinkState::Advertising, sink);
        Ok(())
    }

    /// A central connected.
    pub fn on_connected(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match self.state {
            LinkState::Advertising => {
                hw.set_link_indicator(true)?;
                self.transition(LinkState::Connected, sink);
            }
            // The stack refuses a second central; nothing to do.
            LinkState::Connected => warn!("Link: connect while already connected, ignored"),
            LinkState::Idle => warn!("Link: connect before radio ready, ignored"),
        }
        Ok(())
    }

    /// The central disconnected: advertise again before anything else runs.
    pub fn on_disconnected(
        &mut self,
        radio: &mut impl RadioPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.state == LinkState::Idle {
            warn!("Link: disconnect before radio ready, ignored");
            return Ok(());
        }
        // A second start while the set is live is rejected by the stack.
        if radio.is_advertising() {
            debug!("Link: still advertising, no restart needed");
        } else {
            radio.start_advertising()?;
            sink.emit(&AppEvent::AdvertisingStarted);
            info!("Link: advertising restarted after disconnect");
        }
        hw.set_link_indicator(false)?;
        self.transition(LinkState::Advertising, sink);
        Ok(())
    }

    fn transition(&mut self, to: LinkState, sink: &mut impl EventSink) {
        let from = self.state;
        self.state = to;
        if from != to {
            sink.emit(&AppEvent::LinkChanged { from, to });
        }
    }
}
