//! BLE control-link adapter.
//!
//! Implements [`RadioPort`] on top of a single GATT service with five
//! write-only characteristics, one per command channel.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: Bluedroid GAP/GATTS via raw `esp_idf_svc::sys` calls.
//! - **all other targets**: simulation with deterministic handles and
//!   `sim_*` helpers for host-side tests.
//!
//! Stack callbacks never touch application state.  They post [`Event`]s to
//! the [`EventQueue`] and return; the worker does the rest.
//!
//! ## GATT Service Layout
//!
//! | Characteristic | UUID     | Perms |
//! |----------------|----------|-------|
//! | Service        | `0xFFF0` |       |
//! | Motion         | `0xFFF1` | Write |
//! | Relay 1        | `0xFFF2` | Write |
//! | Relay 2        | `0xFFF3` | Write |
//! | Relay 3        | `0xFFF4` | Write |
//! | Relay 4        | `0xFFF5` | Write |

use log::{info, warn};

use crate::app::ports::RadioPort;
use crate::app::registry::ChannelId;
use crate::config::{BotConfig, DEVICE_NAME_MAX};
use crate::error::RadioError;
use crate::events::{AttrHandle, EventQueue};

#[cfg(not(target_os = "espidf"))]
use crate::error::Error;
#[cfg(not(target_os = "espidf"))]
use crate::events::Event;

// ───────────────────────────────────────────────────────────────
// Constants
// ───────────────────────────────────────────────────────────────

pub const SERVICE_UUID: u16 = 0xFFF0;

/// Characteristic UUID carrying a channel.
pub const fn char_uuid(id: ChannelId) -> u16 {
    match id {
        ChannelId::Motion => 0xFFF1,
        ChannelId::Relay1 => 0xFFF2,
        ChannelId::Relay2 => 0xFFF3,
        ChannelId::Relay3 => 0xFFF4,
        ChannelId::Relay4 => 0xFFF5,
    }
}

// ───────────────────────────────────────────────────────────────
// BLE state
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleState {
    /// `start` not called yet.
    Idle,
    /// Stack up, service and advertising payload still being registered.
    Registering,
    /// All handles assigned, not advertising.
    Ready,
    Advertising,
    Connected,
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF Bluedroid glue
// ───────────────────────────────────────────────────────────────
//
// Bluedroid callbacks are C function pointers that cannot capture Rust
// closures.  These statics bridge the callback context to the adapter.

#[cfg(target_os = "espidf")]
mod stack {
    use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU16, AtomicU32, Ordering};
    use std::sync::OnceLock;

    use esp_idf_svc::sys::*;

    use super::{SERVICE_UUID, char_uuid};
    use crate::app::registry::ChannelId;
    use crate::error::RadioError;
    use crate::events::{Event, EventQueue};

    pub(super) static QUEUE: OnceLock<&'static EventQueue> = OnceLock::new();

    static SVC_HANDLE: AtomicU16 = AtomicU16::new(0);
    static CHAR_STEP: AtomicU32 = AtomicU32::new(0);
    pub(super) static CHAR_HANDLES: [AtomicU16; ChannelId::COUNT] =
        [const { AtomicU16::new(0) }; ChannelId::COUNT];

    pub(super) static STARTED: AtomicBool = AtomicBool::new(false);
    pub(super) static ADVERTISING: AtomicBool = AtomicBool::new(false);
    pub(super) static CONNECTED: AtomicBool = AtomicBool::new(false);

    // RadioReady goes out once all three registrations completed.
    pub(super) const READY_ADV_DATA: u8 = 1 << 0;
    pub(super) const READY_SCAN_RSP: u8 = 1 << 1;
    pub(super) const READY_CHARS: u8 = 1 << 2;
    pub(super) const READY_ALL: u8 = READY_ADV_DATA | READY_SCAN_RSP | READY_CHARS;
    pub(super) static READY: AtomicU8 = AtomicU8::new(0);

    /// Post from stack context.  A full queue cannot be handled here, so
    /// the device restarts.
    fn post(event: Event) {
        let Some(queue) = QUEUE.get() else {
            log::warn!("BLE: callback before queue attached, {:?} dropped", event);
            return;
        };
        if let Err(e) = queue.post(event) {
            log::error!("BLE: {} in stack callback, restarting", e);
            // SAFETY: esp_restart never returns.
            unsafe { esp_restart() };
        }
    }

    /// A registration or advertising step failed in stack context.  The
    /// worker ends on it.
    fn fault(err: RadioError) {
        log::error!("BLE: {}", err);
        post(Event::RadioFault(err));
    }

    fn mark_ready(bit: u8) {
        let prev = READY.fetch_or(bit, Ordering::AcqRel);
        if prev != READY_ALL && prev | bit == READY_ALL {
            log::info!("BLE: registration complete");
            post(Event::RadioReady);
        }
    }

    fn uuid16(uuid: u16) -> esp_bt_uuid_t {
        // SAFETY: esp_bt_uuid_t is plain data; all-zero is a valid value.
        let mut t: esp_bt_uuid_t = unsafe { core::mem::zeroed() };
        t.len = ESP_UUID_LEN_16 as u16;
        t.uuid.uuid16 = uuid;
        t
    }

    unsafe fn add_channel_char(svc_handle: u16, id: ChannelId) {
        let mut uuid = uuid16(char_uuid(id));
        // SAFETY: svc_handle comes from the CREATE event; pointers are
        // only read for the duration of the call.
        let ret = unsafe {
            esp_ble_gatts_add_char(
                svc_handle,
                &mut uuid,
                ESP_GATT_PERM_WRITE as esp_gatt_perm_t,
                ESP_GATT_CHAR_PROP_BIT_WRITE as esp_gatt_char_prop_t,
                core::ptr::null_mut(),
                core::ptr::null_mut(),
            )
        };
        if ret != ESP_OK as i32 {
            log::error!("BLE GATTS: add {:?} characteristic failed", id);
            fault(RadioError::RegistrationFailed(ret));
        }
    }

    pub(super) unsafe extern "C" fn gap_event_handler(
        event: esp_gap_ble_cb_event_t,
        param: *mut esp_ble_gap_cb_param_t,
    ) {
        match event {
            esp_gap_ble_cb_event_t_ESP_GAP_BLE_ADV_DATA_SET_COMPLETE_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let status = unsafe { (*param).adv_data_cmpl.status };
                if status == esp_bt_status_t_ESP_BT_STATUS_SUCCESS {
                    mark_ready(READY_ADV_DATA);
                } else {
                    fault(RadioError::AdvertisingFailed(status as i32));
                }
            }
            esp_gap_ble_cb_event_t_ESP_GAP_BLE_SCAN_RSP_DATA_SET_COMPLETE_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let status = unsafe { (*param).scan_rsp_data_cmpl.status };
                if status == esp_bt_status_t_ESP_BT_STATUS_SUCCESS {
                    mark_ready(READY_SCAN_RSP);
                } else {
                    fault(RadioError::AdvertisingFailed(status as i32));
                }
            }
            esp_gap_ble_cb_event_t_ESP_GAP_BLE_ADV_START_COMPLETE_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let status = unsafe { (*param).adv_start_cmpl.status };
                if status == esp_bt_status_t_ESP_BT_STATUS_SUCCESS {
                    ADVERTISING.store(true, Ordering::Release);
                    log::info!("BLE GAP: advertising started");
                } else {
                    ADVERTISING.store(false, Ordering::Release);
                    fault(RadioError::AdvertisingFailed(status as i32));
                }
            }
            esp_gap_ble_cb_event_t_ESP_GAP_BLE_ADV_STOP_COMPLETE_EVT => {
                ADVERTISING.store(false, Ordering::Release);
            }
            _ => {}
        }
    }

    pub(super) unsafe extern "C" fn gatts_event_handler(
        event: esp_gatts_cb_event_t,
        gatts_if: esp_gatt_if_t,
        param: *mut esp_ble_gatts_cb_param_t,
    ) {
        match event {
            esp_gatts_cb_event_t_ESP_GATTS_REG_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let status = unsafe { (*param).reg.status };
                if status != esp_gatt_status_t_ESP_GATT_OK {
                    fault(RadioError::RegistrationFailed(status as i32));
                    return;
                }
                log::info!("BLE GATTS: app registered (if={})", gatts_if);
                let mut svc_id = esp_gatt_srvc_id_t {
                    id: esp_gatt_id_t {
                        uuid: uuid16(SERVICE_UUID),
                        inst_id: 0,
                    },
                    is_primary: true,
                };
                // Service declaration plus declaration/value per characteristic.
                let num_handles = 1 + 2 * ChannelId::COUNT as u16;
                // SAFETY: svc_id outlives the call.
                let ret = unsafe { esp_ble_gatts_create_service(gatts_if, &mut svc_id, num_handles) };
                if ret != ESP_OK as i32 {
                    fault(RadioError::RegistrationFailed(ret));
                }
            }
            esp_gatts_cb_event_t_ESP_GATTS_CREATE_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let p = unsafe { &(*param).create };
                if p.status != esp_gatt_status_t_ESP_GATT_OK {
                    fault(RadioError::RegistrationFailed(p.status as i32));
                    return;
                }
                let svc_handle = p.service_handle;
                SVC_HANDLE.store(svc_handle, Ordering::Relaxed);
                log::info!("BLE GATTS: service created (handle={})", svc_handle);
                CHAR_STEP.store(0, Ordering::Relaxed);
                // SAFETY: service handle just assigned by the stack.
                let ret = unsafe { esp_ble_gatts_start_service(svc_handle) };
                if ret != ESP_OK as i32 {
                    fault(RadioError::RegistrationFailed(ret));
                    return;
                }
                // SAFETY: as above.
                unsafe { add_channel_char(svc_handle, ChannelId::ALL[0]) };
            }
            esp_gatts_cb_event_t_ESP_GATTS_ADD_CHAR_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let p = unsafe { &(*param).add_char };
                let step = CHAR_STEP.load(Ordering::Relaxed) as usize;
                let Some(&id) = ChannelId::ALL.get(step) else {
                    return;
                };
                if p.status != esp_gatt_status_t_ESP_GATT_OK {
                    log::error!("BLE GATTS: {:?} characteristic rejected", id);
                    fault(RadioError::RegistrationFailed(p.status as i32));
                    return;
                }
                CHAR_HANDLES[step].store(p.attr_handle, Ordering::Release);
                log::info!("BLE GATTS: {:?} char (handle={})", id, p.attr_handle);
                CHAR_STEP.store(step as u32 + 1, Ordering::Relaxed);
                match ChannelId::ALL.get(step + 1) {
                    // SAFETY: service handle stored by the CREATE event.
                    Some(&next) => unsafe {
                        add_channel_char(SVC_HANDLE.load(Ordering::Relaxed), next);
                    },
                    None => mark_ready(READY_CHARS),
                }
            }
            esp_gatts_cb_event_t_ESP_GATTS_CONNECT_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let conn_id = unsafe { (*param).connect.conn_id };
                // The controller stops advertising when a central connects.
                ADVERTISING.store(false, Ordering::Release);
                CONNECTED.store(true, Ordering::Release);
                log::info!("BLE GATTS: client connected (conn_id={})", conn_id);
                post(Event::Connected);
            }
            esp_gatts_cb_event_t_ESP_GATTS_DISCONNECT_EVT => {
                CONNECTED.store(false, Ordering::Release);
                log::info!("BLE GATTS: client disconnected");
                post(Event::Disconnected);
            }
            esp_gatts_cb_event_t_ESP_GATTS_WRITE_EVT => {
                // SAFETY: param is valid for this event per the Bluedroid API.
                let p = unsafe { &(*param).write };
                if p.need_rsp {
                    let status = if p.is_prep {
                        esp_gatt_status_t_ESP_GATT_REQ_NOT_SUPPORTED
                    } else {
                        esp_gatt_status_t_ESP_GATT_OK
                    };
                    // SAFETY: conn_id/trans_id come from this write request.
                    unsafe {
                        esp_ble_gatts_send_response(gatts_if, p.conn_id, p.trans_id, status, core::ptr::null_mut());
                    }
                }
                if p.is_prep {
                    log::warn!("BLE GATTS: prepared write on handle {} refused", p.handle);
                    return;
                }
                let data: &[u8] = if p.value.is_null() || p.len == 0 {
                    &[]
                } else {
                    // SAFETY: value/len describe the stack's buffer, valid
                    // for the duration of the callback.  Copied before return.
                    unsafe { core::slice::from_raw_parts(p.value, usize::from(p.len)) }
                };
                post(Event::write(p.handle, data));
            }
            _ => {}
        }
    }
}

// ───────────────────────────────────────────────────────────────
// BLE adapter
// ───────────────────────────────────────────────────────────────

pub struct BleAdapter {
    device_name: heapless::String<DEVICE_NAME_MAX>,
    appearance: u16,
    /// Advertising interval in 0.625 ms units.
    interval: u16,
    queue: &'static EventQueue,
    #[cfg(not(target_os = "espidf"))]
    sim: SimRadio,
}

/// In-memory stand-in for the stack.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
struct SimRadio {
    started: bool,
    handles: Option<[AttrHandle; ChannelId::COUNT]>,
    advertising: bool,
    connected: bool,
    adv_starts: u32,
}

/// First characteristic value handle the simulated stack assigns.
#[cfg(not(target_os = "espidf"))]
pub const SIM_FIRST_HANDLE: AttrHandle = 42;

impl BleAdapter {
    pub fn new(config: &BotConfig, queue: &'static EventQueue) -> Self {
        Self {
            device_name: config.device_name.clone(),
            appearance: config.appearance,
            interval: config.advertising_interval_units(),
            queue,
            #[cfg(not(target_os = "espidf"))]
            sim: SimRadio::default(),
        }
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Bring the stack up and begin GATT registration.
    ///
    /// Returns once the registration requests are issued; completion is
    /// reported by [`Event::RadioReady`](crate::events::Event::RadioReady)
    /// on the queue.  Any error here means the robot can never be reached
    /// and must not enter the run loop.
    pub fn start(&mut self) -> Result<(), RadioError> {
        info!(
            "BLE: starting as '{}' (service {:04X}, interval {} units)",
            self.device_name, SERVICE_UUID, self.interval
        );
        self.platform_start()
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_start(&mut self) -> Result<(), RadioError> {
        use core::sync::atomic::Ordering;
        use esp_idf_svc::sys::*;

        if stack::QUEUE.set(self.queue).is_err() {
            warn!("BLE: adapter started twice, keeping first queue");
        }

        let check = |ret: esp_err_t, what: &str, err: fn(i32) -> RadioError| {
            if ret == ESP_OK as i32 {
                Ok(())
            } else {
                log::error!("BLE: {} failed ({})", what, ret);
                Err(err(ret))
            }
        };

        // SAFETY: called once from main() before the worker starts; the
        // callbacks registered below only touch the atomics in `stack`.
        unsafe {
            // BLE-only: classic BT memory is never needed.
            esp_bt_controller_mem_release(esp_bt_mode_t_ESP_BT_MODE_CLASSIC_BT);

            let mut bt_cfg = esp_bt_controller_config_t::default();
            check(esp_bt_controller_init(&mut bt_cfg), "bt_controller_init", RadioError::StackInitFailed)?;
            check(
                esp_bt_controller_enable(esp_bt_mode_t_ESP_BT_MODE_BLE),
                "bt_controller_enable",
                RadioError::StackInitFailed,
            )?;
            check(esp_bluedroid_init(), "bluedroid_init", RadioError::StackInitFailed)?;
            check(esp_bluedroid_enable(), "bluedroid_enable", RadioError::StackInitFailed)?;

            check(
                esp_ble_gap_register_callback(Some(stack::gap_event_handler)),
                "gap_register_callback",
                RadioError::RegistrationFailed,
            )?;
            check(
                esp_ble_gatts_register_callback(Some(stack::gatts_event_handler)),
                "gatts_register_callback",
                RadioError::RegistrationFailed,
            )?;

            let mut cname = heapless::Vec::<u8, { DEVICE_NAME_MAX + 1 }>::new();
            // Cannot fail: name length is bounded by DEVICE_NAME_MAX.
            let _ = cname.extend_from_slice(self.device_name.as_bytes());
            let _ = cname.push(0);
            check(
                esp_ble_gap_set_device_name(cname.as_ptr().cast()),
                "set_device_name",
                RadioError::AdvertisingFailed,
            )?;

            // 16-bit UUIDs travel as 128-bit Base-UUID values in this API.
            let mut uuid128: [u8; 16] = [
                0xFB, 0x34, 0x9B, 0x5F, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0, 0, 0x00,
                0x00,
            ];
            uuid128[12..14].copy_from_slice(&SERVICE_UUID.to_le_bytes());

            let mut adv_data = esp_ble_adv_data_t {
                set_scan_rsp: false,
                include_name: true,
                include_txpower: false,
                appearance: i32::from(self.appearance),
                service_uuid_len: uuid128.len() as u16,
                p_service_uuid: uuid128.as_mut_ptr(),
                flag: (ESP_BLE_ADV_FLAG_GEN_DISC | ESP_BLE_ADV_FLAG_BREDR_NOT_SPT) as u8,
                ..core::mem::zeroed()
            };
            check(
                esp_ble_gap_config_adv_data(&mut adv_data),
                "config_adv_data",
                RadioError::AdvertisingFailed,
            )?;

            let mut scan_rsp = esp_ble_adv_data_t {
                set_scan_rsp: true,
                include_name: true,
                ..core::mem::zeroed()
            };
            check(
                esp_ble_gap_config_adv_data(&mut scan_rsp),
                "config_scan_rsp",
                RadioError::AdvertisingFailed,
            )?;

            check(esp_ble_gatts_app_register(0), "gatts_app_register", RadioError::RegistrationFailed)?;
        }

        stack::STARTED.store(true, Ordering::Release);
        info!("BLE(espidf): Bluedroid up, registering service");
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_start(&mut self) -> Result<(), RadioError> {
        self.sim.started = true;
        // Registration completes when the worker lets the stack process.
        self.queue
            .post(Event::RadioPending)
            .map_err(|_| RadioError::StackInitFailed(-1))?;
        info!("BLE(sim): stack up, registration pending");
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn platform_start_advertising(&mut self) -> Result<(), RadioError> {
        use esp_idf_svc::sys::*;
        // SAFETY: plain data passed by pointer for the duration of the call.
        let ret = unsafe {
            let mut adv_params = esp_ble_adv_params_t {
                adv_int_min: self.interval,
                adv_int_max: self.interval,
                adv_type: esp_ble_adv_type_t_ADV_TYPE_IND,
                own_addr_type: esp_ble_addr_type_t_BLE_ADDR_TYPE_PUBLIC,
                channel_map: esp_ble_adv_channel_t_ADV_CHNL_ALL,
                adv_filter_policy: esp_ble_adv_filter_t_ADV_FILTER_ALLOW_SCAN_ANY_CON_ANY,
                ..core::mem::zeroed()
            };
            esp_ble_gap_start_advertising(&mut adv_params)
        };
        if ret != ESP_OK as i32 {
            return Err(RadioError::AdvertisingFailed(ret));
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_start_advertising(&mut self) -> Result<(), RadioError> {
        if self.sim.handles.is_none() {
            return Err(RadioError::NotReady);
        }
        self.sim.advertising = true;
        self.sim.adv_starts += 1;
        info!("BLE(sim): advertising '{}'", self.device_name);
        Ok(())
    }

    pub fn state(&self) -> BleState {
        #[cfg(target_os = "espidf")]
        {
            use core::sync::atomic::Ordering;
            if stack::CONNECTED.load(Ordering::Acquire) {
                BleState::Connected
            } else if stack::ADVERTISING.load(Ordering::Acquire) {
                BleState::Advertising
            } else if stack::READY.load(Ordering::Acquire) == stack::READY_ALL {
                BleState::Ready
            } else if stack::STARTED.load(Ordering::Acquire) {
                BleState::Registering
            } else {
                BleState::Idle
            }
        }
        #[cfg(not(target_os = "espidf"))]
        {
            let s = &self.sim;
            if s.connected {
                BleState::Connected
            } else if s.advertising {
                BleState::Advertising
            } else if s.handles.is_some() {
                BleState::Ready
            } else if s.started {
                BleState::Registering
            } else {
                BleState::Idle
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Simulation helpers (host only)
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl BleAdapter {
    /// A central connects.  Only possible while advertising.
    pub fn sim_connect(&mut self) -> Result<(), Error> {
        if !self.sim.advertising {
            warn!("BLE(sim): connect while not advertising");
            return Err(RadioError::NotReady.into());
        }
        self.sim.advertising = false;
        self.sim.connected = true;
        self.queue.post(Event::Connected)?;
        Ok(())
    }

    /// The central drops the link.
    pub fn sim_disconnect(&mut self) -> Result<(), Error> {
        if !self.sim.connected {
            warn!("BLE(sim): disconnect while not connected");
            return Err(RadioError::NotReady.into());
        }
        self.sim.connected = false;
        self.queue.post(Event::Disconnected)?;
        Ok(())
    }

    /// The central writes `data` to a channel characteristic.
    pub fn sim_write(&mut self, id: ChannelId, data: &[u8]) -> Result<(), Error> {
        let handle = self.channel_handle(id).ok_or(RadioError::NotReady)?;
        self.sim_write_handle(handle, data)
    }

    /// A write to an arbitrary attribute handle.
    pub fn sim_write_handle(&mut self, handle: AttrHandle, data: &[u8]) -> Result<(), Error> {
        self.queue.post(Event::write(handle, data))?;
        Ok(())
    }

    /// The controller reports that a started advertising set failed to
    /// come up, after `start_advertising` had returned success.
    pub fn sim_advertising_failed(&mut self, status: i32) -> Result<(), Error> {
        self.sim.advertising = false;
        self.queue
            .post(Event::RadioFault(RadioError::AdvertisingFailed(status)))?;
        Ok(())
    }

    /// The stack rejects a service or characteristic registration.
    pub fn sim_registration_failed(&mut self, status: i32) -> Result<(), Error> {
        self.queue
            .post(Event::RadioFault(RadioError::RegistrationFailed(status)))?;
        Ok(())
    }

    /// Times advertising was (re)started.
    pub fn sim_adv_starts(&self) -> u32 {
        self.sim.adv_starts
    }
}

// ───────────────────────────────────────────────────────────────
// RadioPort implementation
// ───────────────────────────────────────────────────────────────

impl RadioPort for BleAdapter {
    fn channel_handle(&self, id: ChannelId) -> Option<AttrHandle> {
        #[cfg(target_os = "espidf")]
        {
            use core::sync::atomic::Ordering;
            match stack::CHAR_HANDLES[id as usize].load(Ordering::Acquire) {
                0 => None,
                h => Some(h),
            }
        }
        #[cfg(not(target_os = "espidf"))]
        {
            self.sim.handles.map(|h| h[id as usize])
        }
    }

    fn start_advertising(&mut self) -> Result<(), RadioError> {
        self.platform_start_advertising()?;
        info!("BLE: advertising as '{}'", self.device_name);
        Ok(())
    }

    fn is_advertising(&self) -> bool {
        self.state() == BleState::Advertising
    }

    #[cfg(not(target_os = "espidf"))]
    fn process_events(&mut self) {
        if !self.sim.started || self.sim.handles.is_some() {
            return;
        }
        // Declaration + value per characteristic, values on the odd slot.
        let handles = core::array::from_fn(|i| SIM_FIRST_HANDLE + 2 * i as AttrHandle);
        self.sim.handles = Some(handles);
        info!("BLE(sim): characteristics registered at {:?}", handles);
        if let Err(e) = self.queue.post(Event::RadioReady) {
            log::error!("BLE(sim): {} posting RadioReady", e);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
