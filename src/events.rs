//! Interrupt-driven deferred-work queue.
//!
//! Work items are produced by:
//! - Bluedroid GAP/GATTS callbacks (connect, disconnect, characteristic write)
//! - Radio bring-up completing (all characteristic handles assigned)
//! - The radio stack asking for housekeeping time
//! - The radio stack reporting a late failure (advertising or registration)
//!
//! Work items are consumed by the single worker loop in
//! [`Scheduler`](crate::scheduler::Scheduler), one at a time, in FIFO order.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ GAP cb      │────▶│              │     │              │
//! │ GATTS cb    │────▶│  EventQueue  │────▶│  Worker loop │
//! │ Stack ready │────▶│  (16 slots)  │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Producers never touch channel state or pins; posting is their only
//! permitted action.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

use crate::error::{QueueError, RadioError};

/// Maximum number of pending work items.
pub const EVENT_QUEUE_CAP: usize = 16;

/// Bytes of a characteristic write carried into the work item.
/// Default ATT MTU (23) minus the 3-byte write header.
pub const MAX_WRITE_LEN: usize = 20;

/// Opaque attribute handle assigned by the radio stack.
pub type AttrHandle = u16;

/// Client write payload, truncated to [`MAX_WRITE_LEN`].
pub type WritePayload = Vec<u8, MAX_WRITE_LEN>;

/// A unit of work captured in callback context and executed later on the
/// worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // ── Radio lifecycle ───────────────────────────────────
    /// Every channel characteristic has a handle; advertising may begin.
    RadioReady,
    /// The stack has internal events to process.
    RadioPending,
    /// A central connected.
    Connected,
    /// The central disconnected.
    Disconnected,
    /// The stack reported a failure asynchronously, after the request that
    /// caused it had already returned success.  Fatal on the worker.
    RadioFault(RadioError),

    // ── Client commands ───────────────────────────────────
    /// A client wrote to the characteristic identified by `handle`.
    Write {
        handle: AttrHandle,
        payload: WritePayload,
    },
}

impl Event {
    /// Build a write work item, keeping at most [`MAX_WRITE_LEN`] bytes.
    pub fn write(handle: AttrHandle, data: &[u8]) -> Self {
        let n = data.len().min(MAX_WRITE_LEN);
        let mut payload = WritePayload::new();
        // Cannot fail: n <= capacity.
        let _ = payload.extend_from_slice(&data[..n]);
        Self::Write { handle, payload }
    }
}

// ── Bounded MPSC queue ────────────────────────────────────────
//
// Callbacks post (produce), the worker receives (consumes).  The embassy
// channel guards its ring with a critical section, so posting is safe from
// any context.

/// Fixed-capacity FIFO of pending work items.
pub struct EventQueue {
    channel: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_CAP>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue a work item without blocking.
    /// Safe to call from callback/interrupt context.
    pub fn post(&self, event: Event) -> Result<(), QueueError> {
        self.channel.try_send(event).map_err(|_| QueueError::Full)
    }

    /// Dequeue the oldest work item, if any.
    pub fn try_take(&self) -> Option<Event> {
        self.channel.try_receive().ok()
    }

    /// Wait until a work item is available and dequeue it.
    pub async fn take(&self) -> Event {
        self.channel.receive().await
    }

    /// Number of pending work items.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

/// The firmware's single queue, shared by radio callbacks and the worker.
pub static EVENT_QUEUE: EventQueue = EventQueue::new();
