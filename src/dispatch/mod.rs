//! Timer-backed serialized dispatch.
//!
//! [`spawn_machine`] puts a [`crate::engine::StateMachine`] on a
//! dedicated worker thread behind an unbounded FIFO mailbox. The worker
//! is the machine's serialized execution context: externally posted
//! events and timer-delivered events are all processed there, one at a
//! time, in arrival order.
//!
//! Each machine owns exactly one timer slot. [`EventSender::schedule`]
//! arms it; arming again before expiry replaces the slot, so a stale
//! deadline can never deliver. When the deadline passes, the armed
//! events are fed through the machine back-to-back - this is how an
//! action schedules future work for its own machine without re-entering
//! the dispatch function.

mod mailbox;
mod worker;

pub use mailbox::{DispatchError, EventSender};
pub use worker::{spawn_machine, MachineHandle};

#[cfg(test)]
pub(crate) use mailbox::{loopback, Envelope};
