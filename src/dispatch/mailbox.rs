//! Mailbox plumbing: the envelopes a worker consumes and the sender half
//! handed to actions and external callers.

use crate::core::Event;
use crossbeam_channel::Sender;
use std::time::Duration;
use thiserror::Error;

/// Errors from the dispatch layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The worker is gone and the mailbox can no longer accept anything.
    #[error("machine mailbox is disconnected")]
    Disconnected,

    /// The worker thread panicked; the payload is the panic message.
    #[error("machine worker panicked: {0}")]
    Panicked(String),
}

/// What travels through a machine's mailbox.
pub(crate) enum Envelope<E> {
    /// Dispatch one event through the machine.
    Event(E),
    /// Replace the worker's single timer slot: after `delay`, feed
    /// `events` through the machine in order.
    Arm { delay: Duration, events: Vec<E> },
    /// Exit the worker loop.
    Stop,
}

/// Send-side handle to a machine's mailbox.
///
/// Cloneable: actions hold one to arm timers, external callers hold one
/// to inject events. All envelopes funnel into the same FIFO queue, so
/// everything a machine does is totally ordered.
pub struct EventSender<E: Event> {
    tx: Sender<Envelope<E>>,
}

impl<E: Event> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Event> EventSender<E> {
    pub(crate) fn new(tx: Sender<Envelope<E>>) -> Self {
        Self { tx }
    }

    /// Enqueue an event for dispatch.
    pub fn post(&self, event: E) -> Result<(), DispatchError> {
        self.tx
            .send(Envelope::Event(event))
            .map_err(|_| DispatchError::Disconnected)
    }

    /// Arm the machine's timer: after `delay`, `events` are dispatched
    /// in order, serialized with all other mailbox traffic.
    ///
    /// A machine has exactly one timer slot. Scheduling while a timer is
    /// pending replaces it - the previously armed events will never
    /// fire.
    pub fn schedule(&self, delay: Duration, events: Vec<E>) -> Result<(), DispatchError> {
        self.tx
            .send(Envelope::Arm { delay, events })
            .map_err(|_| DispatchError::Disconnected)
    }

    pub(crate) fn stop(&self) -> Result<(), DispatchError> {
        self.tx
            .send(Envelope::Stop)
            .map_err(|_| DispatchError::Disconnected)
    }
}

/// Test support: a sender paired with the raw receiving end, for driving
/// a machine synchronously and asserting on what actions enqueued.
#[cfg(test)]
pub(crate) fn loopback<E: Event>() -> (EventSender<E>, crossbeam_channel::Receiver<Envelope<E>>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (EventSender::new(tx), rx)
}
