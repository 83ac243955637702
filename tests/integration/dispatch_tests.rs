//! Write → BotService → HardwareAdapter → pin level.
//!
//! Drives the real hardware adapter on in-memory pins and checks the
//! resulting output levels against the command tables.

use relaybot::adapters::hardware::{HardwareAdapter, PinSnapshot};
use relaybot::app::events::{AppEvent, DiscardReason};
use relaybot::app::registry::ChannelId;
use relaybot::app::service::BotService;
use relaybot::drivers::hw_init::GpioOutput;
use relaybot::events::Event;

use crate::mock_hw::{MockHardware, MockRadio, RecordingSink};

struct Rig {
    service: BotService,
    hw: HardwareAdapter<GpioOutput>,
    radio: MockRadio,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        let mut rig = Self {
            service: BotService::new(),
            hw: HardwareAdapter::from_board(),
            radio: MockRadio::registered(),
            sink: RecordingSink::new(),
        };
        rig.event(Event::RadioReady);
        rig
    }

    fn event(&mut self, event: Event) {
        self.service
            .handle_event(event, &mut self.hw, &mut self.radio, &mut self.sink)
            .unwrap();
    }

    fn write(&mut self, id: ChannelId, data: &[u8]) -> PinSnapshot {
        self.event(Event::write(MockRadio::handle(id), data));
        self.hw.pin_snapshot().unwrap()
    }
}

// ── Motion scenarios ─────────────────────────────────────────

#[test]
fn forward_drives_both_sides_forward() {
    let mut rig = Rig::new();
    let pins = rig.write(ChannelId::Motion, &[1]);
    assert_eq!(pins.left, (true, false));
    assert_eq!(pins.right, (true, false));
}

#[test]
fn left_rotates_in_place() {
    let mut rig = Rig::new();
    let pins = rig.write(ChannelId::Motion, &[3]);
    assert_eq!(pins.left, (false, true));
    assert_eq!(pins.right, (true, false));
}

#[test]
fn right_rotates_the_other_way() {
    let mut rig = Rig::new();
    let pins = rig.write(ChannelId::Motion, &[4]);
    assert_eq!(pins.left, (true, false));
    assert_eq!(pins.right, (false, true));
}

#[test]
fn unknown_motion_byte_brakes() {
    let mut rig = Rig::new();
    rig.write(ChannelId::Motion, &[1]);
    let pins = rig.write(ChannelId::Motion, &[99]);
    assert_eq!(pins.left, (true, true));
    assert_eq!(pins.right, (true, true));
    assert_eq!(rig.service.cached_value(ChannelId::Motion), Some(99));
}

// ── Relay scenarios ──────────────────────────────────────────

#[test]
fn relay2_on_then_off_leaves_others_alone() {
    let mut rig = Rig::new();
    let before = rig.hw.pin_snapshot().unwrap().relays;

    let pins = rig.write(ChannelId::Relay2, &[0]);
    assert!(!pins.relays[1], "On drives the pin low");
    assert_eq!(
        [pins.relays[0], pins.relays[2], pins.relays[3]],
        [before[0], before[2], before[3]]
    );

    let pins = rig.write(ChannelId::Relay2, &[5]);
    assert!(pins.relays[1], "unknown byte is Off, pin high");
    assert_eq!(
        [pins.relays[0], pins.relays[2], pins.relays[3]],
        [before[0], before[2], before[3]]
    );

    assert_eq!(rig.service.cached_value(ChannelId::Relay2), Some(5));
    assert_eq!(rig.service.cached_value(ChannelId::Relay1), None);
    assert_eq!(rig.service.cached_value(ChannelId::Relay3), None);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut rig = Rig::new();
    let pins = rig.write(ChannelId::Relay4, &[0, 1, 1, 1]);
    assert!(!pins.relays[3]);
    assert_eq!(rig.service.cached_value(ChannelId::Relay4), Some(0));
}

// ── Discarded writes ─────────────────────────────────────────

#[test]
fn empty_payload_changes_nothing() {
    let mut rig = Rig::new();
    rig.write(ChannelId::Motion, &[2]);
    let before = rig.hw.pin_snapshot().unwrap();

    let after = rig.write(ChannelId::Motion, &[]);

    assert_eq!(before, after);
    assert_eq!(rig.service.cached_value(ChannelId::Motion), Some(2));
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::WriteDiscarded(DiscardReason::EmptyPayload))
    );
}

#[test]
fn unknown_handle_changes_nothing() {
    let mut rig = Rig::new();
    let before = rig.hw.pin_snapshot().unwrap();

    rig.event(Event::write(0x7777, &[0]));

    assert_eq!(rig.hw.pin_snapshot().unwrap(), before);
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::WriteDiscarded(DiscardReason::UnknownHandle(0x7777)))
    );
}

#[test]
fn writes_before_registration_are_discarded() {
    let mut service = BotService::new();
    let mut hw = MockHardware::new();
    let mut radio = MockRadio::default();
    let mut sink = RecordingSink::new();

    service
        .handle_event(
            Event::write(MockRadio::handle(ChannelId::Motion), &[1]),
            &mut hw,
            &mut radio,
            &mut sink,
        )
        .unwrap();

    assert!(hw.calls.is_empty());
}

#[test]
fn actuator_fault_is_returned_and_cache_untouched() {
    let mut service = BotService::new();
    let mut hw = MockHardware::new();
    let mut radio = MockRadio::registered();
    let mut sink = RecordingSink::new();
    service
        .handle_event(Event::RadioReady, &mut hw, &mut radio, &mut sink)
        .unwrap();

    hw.fail_pin = Some(15);
    let res = service.handle_event(
        Event::write(MockRadio::handle(ChannelId::Relay1), &[0]),
        &mut hw,
        &mut radio,
        &mut sink,
    );

    assert!(res.is_err());
    assert_eq!(service.cached_value(ChannelId::Relay1), None);
}
