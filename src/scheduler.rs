//! Deferred-work scheduler.
//!
//! A single cooperative worker.  Stack callbacks post [`Event`]s to the
//! [`EventQueue`]; the scheduler drains them in submission order and hands
//! each one to the handler, which runs it to completion before the next
//! is taken.  Nothing else executes application logic, so the dispatcher
//! and the link manager never see interleaved calls.
//!
//! ```text
//!  ┌─────────────┐  post()   ┌────────────┐  take()   ┌────────────────┐
//!  │ BLE callback├──────────▶│ EventQueue ├──────────▶│ Scheduler      │
//!  │ (any task)  │           │  FIFO, 16  │           │ handler(event) │
//!  └─────────────┘           └────────────┘           └────────────────┘
//! ```
//!
//! A handler error ends the loop: it is an infrastructure fault and the
//! caller decides how to die.

use core::convert::Infallible;

use futures_lite::future;
use log::{debug, error};

use crate::error::Result;
use crate::events::{Event, EventQueue};

pub struct Scheduler<'q> {
    queue: &'q EventQueue,
    processed: u64,
}

impl<'q> Scheduler<'q> {
    pub fn new(queue: &'q EventQueue) -> Self {
        Self {
            queue,
            processed: 0,
        }
    }

    /// Work items executed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    fn run_one<F>(&mut self, event: Event, handler: &mut F) -> Result<()>
    where
        F: FnMut(Event) -> Result<()>,
    {
        debug!("scheduler: running {:?}", event);
        self.processed += 1;
        handler(event).inspect_err(|e| error!("scheduler: work item failed: {}", e))
    }

    /// Drain everything currently queued, including items posted by the
    /// handler itself, then return the count.
    pub fn run_pending<F>(&mut self, mut handler: F) -> Result<usize>
    where
        F: FnMut(Event) -> Result<()>,
    {
        let mut n = 0;
        while let Some(event) = self.queue.try_take() {
            self.run_one(event, &mut handler)?;
            n += 1;
        }
        Ok(n)
    }

    /// Block on the queue forever.  Only returns on a handler error.
    pub fn run_forever<F>(&mut self, mut handler: F) -> Result<Infallible>
    where
        F: FnMut(Event) -> Result<()>,
    {
        loop {
            let event = future::block_on(self.queue.take());
            self.run_one(event, &mut handler)?;
        }
    }
}
