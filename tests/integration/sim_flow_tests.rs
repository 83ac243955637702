//! End-to-end on the host: simulated BLE stack, real hardware adapter on
//! in-memory pins, log sink, and the scheduler in between.

use relaybot::adapters::ble::{BleAdapter, BleState};
use relaybot::adapters::hardware::HardwareAdapter;
use relaybot::adapters::log_sink::LogEventSink;
use relaybot::app::lifecycle::LinkState;
use relaybot::app::ports::{ActuatorPort, RadioPort};
use relaybot::app::registry::ChannelId;
use relaybot::app::service::BotService;
use relaybot::config::BotConfig;
use relaybot::drivers::hw_init::{self, GpioOutput};
use relaybot::error::{Error, RadioError};
use relaybot::events::EventQueue;
use relaybot::scheduler::Scheduler;

struct Bot {
    queue: &'static EventQueue,
    service: BotService,
    hw: HardwareAdapter<GpioOutput>,
    ble: BleAdapter,
    sink: LogEventSink,
}

impl Bot {
    fn boot(queue: &'static EventQueue) -> Self {
        let mut bot = Self::power_on(queue);
        bot.drain();
        bot
    }

    /// Outputs safe and radio started, nothing processed yet.
    fn power_on(queue: &'static EventQueue) -> Self {
        hw_init::init_outputs().unwrap();
        let mut hw = HardwareAdapter::from_board();
        hw.all_off().unwrap();

        let mut ble = BleAdapter::new(&BotConfig::default(), queue);
        ble.start().unwrap();

        let mut sink = LogEventSink::new();
        let mut service = BotService::new();
        service.start(&mut sink);

        Self {
            queue,
            service,
            hw,
            ble,
            sink,
        }
    }

    fn try_drain(&mut self) -> relaybot::error::Result<usize> {
        Scheduler::new(self.queue).run_pending(|e| {
            self.service
                .handle_event(e, &mut self.hw, &mut self.ble, &mut self.sink)
        })
    }

    fn drain(&mut self) -> usize {
        self.try_drain().unwrap()
    }
}

#[test]
fn boot_reaches_advertising_in_safe_state() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::boot(&Q);

    assert_eq!(bot.service.link_state(), LinkState::Advertising);
    assert_eq!(bot.ble.state(), BleState::Advertising);
    assert!(bot.ble.is_advertising());
    assert_eq!(bot.ble.sim_adv_starts(), 1);

    let pins = bot.hw.pin_snapshot().unwrap();
    assert_eq!(pins.left, (true, true));
    assert_eq!(pins.right, (true, true));
    assert_eq!(pins.relays, [true; 4]);
    assert!(!pins.led);
}

#[test]
fn client_session_drives_outputs() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::boot(&Q);

    bot.ble.sim_connect().unwrap();
    bot.ble.sim_write(ChannelId::Motion, &[3]).unwrap();
    bot.ble.sim_write(ChannelId::Relay1, &[0]).unwrap();
    bot.ble.sim_write(ChannelId::Relay4, &[0]).unwrap();
    assert_eq!(bot.drain(), 4);

    assert_eq!(bot.service.link_state(), LinkState::Connected);
    assert!(bot.hw.is_link_lit());
    let pins = bot.hw.pin_snapshot().unwrap();
    assert!(pins.led);
    assert_eq!(pins.left, (false, true));
    assert_eq!(pins.right, (true, false));
    assert_eq!(pins.relays, [false, true, true, false]);
}

#[test]
fn disconnect_resumes_advertising_and_keeps_outputs() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::boot(&Q);

    bot.ble.sim_connect().unwrap();
    bot.ble.sim_write(ChannelId::Relay2, &[0]).unwrap();
    bot.drain();

    bot.ble.sim_disconnect().unwrap();
    bot.drain();

    assert_eq!(bot.service.link_state(), LinkState::Advertising);
    assert_eq!(bot.ble.state(), BleState::Advertising);
    assert_eq!(bot.ble.sim_adv_starts(), 2);
    let pins = bot.hw.pin_snapshot().unwrap();
    assert!(!pins.led);
    assert!(!bot.hw.is_link_lit());
    assert!(!pins.relays[1], "relay state survives the link drop");

    // And a new central can connect again.
    bot.ble.sim_connect().unwrap();
    bot.drain();
    assert_eq!(bot.service.link_state(), LinkState::Connected);
}

#[test]
fn stray_handle_write_is_ignored() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::boot(&Q);
    let before = bot.hw.pin_snapshot().unwrap();

    bot.ble.sim_write_handle(3, &[1]).unwrap();
    bot.ble.sim_write(ChannelId::Motion, &[]).unwrap();
    assert_eq!(bot.drain(), 2);

    assert_eq!(bot.hw.pin_snapshot().unwrap(), before);
}

#[test]
fn late_advertising_failure_after_disconnect_stops_worker() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::boot(&Q);

    bot.ble.sim_connect().unwrap();
    bot.drain();
    bot.ble.sim_disconnect().unwrap();
    bot.drain();
    assert_eq!(bot.service.link_state(), LinkState::Advertising);

    // The restart was accepted, then the controller reports it never came up.
    bot.ble.sim_advertising_failed(0x0C).unwrap();
    bot.ble.sim_write(ChannelId::Relay1, &[0]).unwrap();

    let err = bot.try_drain().unwrap_err();
    assert_eq!(err, Error::Radio(RadioError::AdvertisingFailed(0x0C)));
    assert!(!bot.ble.is_advertising());
    assert_eq!(Q.len(), 1, "nothing runs after the fault");
    assert!(bot.hw.pin_snapshot().unwrap().relays[0], "relay 1 untouched");
}

#[test]
fn registration_failure_stops_worker_before_advertising() {
    static Q: EventQueue = EventQueue::new();
    let mut bot = Bot::power_on(&Q);
    bot.ble.sim_registration_failed(0x85).unwrap();

    let mut scheduler = Scheduler::new(&Q);
    let res = scheduler.run_pending(|e| {
        bot.service
            .handle_event(e, &mut bot.hw, &mut bot.ble, &mut bot.sink)
    });

    assert_eq!(res, Err(Error::Radio(RadioError::RegistrationFailed(0x85))));
    assert_eq!(scheduler.processed(), 2);
    assert_eq!(bot.service.link_state(), LinkState::Idle);
    assert_eq!(bot.ble.sim_adv_starts(), 0);
}
