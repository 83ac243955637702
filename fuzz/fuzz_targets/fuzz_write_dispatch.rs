//! Fuzz target: arbitrary work-item sequences through `BotService`.
//!
//! Every pair of input bytes becomes one work item: the first selects the
//! kind (write to a channel, write to a stray handle, connect, disconnect,
//! empty write), the second is the command byte.  After each item the
//! motor pins must hold a legal encoding and the service must never fail.
//!
//! cargo fuzz run fuzz_write_dispatch

#![no_main]

use libfuzzer_sys::fuzz_target;
use relaybot::adapters::hardware::HardwareAdapter;
use relaybot::app::events::AppEvent;
use relaybot::app::ports::{ActuatorPort, EventSink, RadioPort};
use relaybot::app::registry::ChannelId;
use relaybot::app::service::BotService;
use relaybot::error::RadioError;
use relaybot::events::{AttrHandle, Event};

struct Radio {
    advertising: bool,
}

impl RadioPort for Radio {
    fn channel_handle(&self, id: ChannelId) -> Option<AttrHandle> {
        Some(0x30 + 2 * id as AttrHandle)
    }
    fn start_advertising(&mut self) -> Result<(), RadioError> {
        self.advertising = true;
        Ok(())
    }
    fn is_advertising(&self) -> bool {
        self.advertising
    }
}

struct Sink;

impl EventSink for Sink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut service = BotService::new();
    let mut hw = HardwareAdapter::from_board();
    hw.all_off().unwrap();
    let mut radio = Radio { advertising: false };
    service
        .handle_event(Event::RadioReady, &mut hw, &mut radio, &mut Sink)
        .unwrap();

    for pair in data.chunks_exact(2) {
        let (kind, value) = (pair[0], pair[1]);
        let event = match kind % 8 {
            0..=4 => {
                let id = ChannelId::ALL[usize::from(kind % 8)];
                Event::write(radio.channel_handle(id).unwrap(), &[value])
            }
            5 => Event::write(AttrHandle::from(value), &[value]),
            6 if value & 1 == 0 => {
                radio.advertising = false;
                Event::Connected
            }
            6 => Event::Disconnected,
            _ => Event::write(0x30, &[]),
        };
        service
            .handle_event(event, &mut hw, &mut radio, &mut Sink)
            .unwrap();

        let pins = hw.pin_snapshot().unwrap();
        assert_ne!(pins.left, (false, false), "left motor in undefined state");
        assert_ne!(pins.right, (false, false), "right motor in undefined state");
    }
});
