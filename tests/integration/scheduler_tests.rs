//! Queue → Scheduler → BotService ordering guarantees.

use std::cell::Cell;

use relaybot::adapters::hardware::HardwareAdapter;
use relaybot::app::lifecycle::LinkState;
use relaybot::app::ports::RadioPort;
use relaybot::app::registry::ChannelId;
use relaybot::app::service::BotService;
use relaybot::events::{Event, EventQueue, EVENT_QUEUE_CAP};
use relaybot::error::{Error, QueueError};
use relaybot::scheduler::Scheduler;

use crate::mock_hw::{MockHardware, MockRadio, RecordingSink};

#[test]
fn last_write_to_a_channel_wins() {
    static Q: EventQueue = EventQueue::new();
    let mut service = BotService::new();
    let mut hw = HardwareAdapter::from_board();
    let mut radio = MockRadio::registered();
    let mut sink = RecordingSink::new();

    let motion = MockRadio::handle(ChannelId::Motion);
    Q.post(Event::RadioReady).unwrap();
    // Both queued before the worker runs: A = Forward, B = Back.
    Q.post(Event::write(motion, &[1])).unwrap();
    Q.post(Event::write(motion, &[2])).unwrap();

    let n = Scheduler::new(&Q)
        .run_pending(|e| service.handle_event(e, &mut hw, &mut radio, &mut sink))
        .unwrap();

    assert_eq!(n, 3);
    let pins = hw.pin_snapshot().unwrap();
    assert_eq!(pins.left, (false, true));
    assert_eq!(pins.right, (false, true));
    assert_eq!(service.cached_value(ChannelId::Motion), Some(2));
}

#[test]
fn no_dispatch_runs_before_advertising_resumes() {
    static Q: EventQueue = EventQueue::new();
    let mut service = BotService::new();
    let mut hw = MockHardware::new();
    let mut radio = MockRadio::registered();
    let mut sink = RecordingSink::new();

    let relay1 = MockRadio::handle(ChannelId::Relay1);
    Q.post(Event::RadioReady).unwrap();
    Q.post(Event::Connected).unwrap();
    Q.post(Event::write(relay1, &[0])).unwrap();
    Q.post(Event::Disconnected).unwrap();
    Q.post(Event::write(relay1, &[1])).unwrap();

    let disconnected = Cell::new(false);
    Scheduler::new(&Q)
        .run_pending(|e| {
            if e == Event::Connected {
                radio.connect();
            }
            if disconnected.get() {
                // Every item after the disconnect sees the device either
                // advertising or connected.
                assert!(radio.is_advertising() || service.link_state() == LinkState::Connected);
            }
            if e == Event::Disconnected {
                disconnected.set(true);
            }
            service.handle_event(e, &mut hw, &mut radio, &mut sink)
        })
        .unwrap();

    assert!(disconnected.get());
    assert_eq!(service.link_state(), LinkState::Advertising);
    assert_eq!(radio.adv_starts, 2);
}

#[test]
fn fault_stops_worker_with_items_left() {
    static Q: EventQueue = EventQueue::new();
    let mut service = BotService::new();
    let mut hw = MockHardware::new();
    let mut radio = MockRadio::registered();
    let mut sink = RecordingSink::new();

    Q.post(Event::RadioReady).unwrap();
    Q.post(Event::write(MockRadio::handle(ChannelId::Motion), &[1])).unwrap();
    Q.post(Event::write(MockRadio::handle(ChannelId::Relay3), &[0])).unwrap();

    let mut scheduler = Scheduler::new(&Q);
    let res = scheduler.run_pending(|e| {
        if matches!(e, Event::Write { .. }) {
            hw.fail_pin = Some(4);
        }
        service.handle_event(e, &mut hw, &mut radio, &mut sink)
    });

    assert!(matches!(res, Err(Error::Actuator(_))));
    assert_eq!(scheduler.processed(), 2);
    assert_eq!(Q.len(), 1);
}

#[test]
fn overflow_is_reported_to_the_poster() {
    static Q: EventQueue = EventQueue::new();
    for _ in 0..EVENT_QUEUE_CAP {
        Q.post(Event::RadioPending).unwrap();
    }
    assert_eq!(Q.post(Event::Connected), Err(QueueError::Full));
    assert_eq!(Q.len(), EVENT_QUEUE_CAP);
}
