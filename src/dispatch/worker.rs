//! The serialized worker loop that owns a machine.

use crate::core::{Event, State};
use crate::dispatch::mailbox::{DispatchError, Envelope, EventSender};
use crate::engine::StateMachine;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace};

/// The worker's single rearmable timer.
struct TimerSlot<E> {
    deadline: Instant,
    events: Vec<E>,
}

/// Handle to a machine running on its background worker thread.
///
/// Dropping the handle (and every [`EventSender`] cloned from it) lets
/// the worker exit on mailbox disconnect; [`MachineHandle::shutdown`] is
/// the orderly way out and returns the final machine and context.
pub struct MachineHandle<S: State, E: Event, C> {
    sender: EventSender<E>,
    join: JoinHandle<(StateMachine<S, E, C>, C)>,
}

impl<S: State, E: Event, C> MachineHandle<S, E, C> {
    /// Inject an external event into the machine's mailbox.
    pub fn post(&self, event: E) -> Result<(), DispatchError> {
        self.sender.post(event)
    }

    /// A cloned sender, e.g. to hand to another thread.
    pub fn sender(&self) -> EventSender<E> {
        self.sender.clone()
    }

    /// Stop the worker and join it, returning the machine and context as
    /// the last processed event left them.
    pub fn shutdown(self) -> Result<(StateMachine<S, E, C>, C), DispatchError> {
        // The worker may already have exited on disconnect; that is fine.
        let _ = self.sender.stop();
        self.join.join().map_err(|payload| {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            DispatchError::Panicked(message)
        })
    }
}

/// Spawn a machine onto a dedicated worker thread.
///
/// The worker owns the machine and its context outright; every event,
/// externally posted or timer-delivered, is processed on that one
/// thread in FIFO order, so the machine needs no locking. `make_ctx`
/// receives the mailbox sender so the context can hold it for
/// timer-arming actions.
pub fn spawn_machine<S, E, C, F>(
    machine: StateMachine<S, E, C>,
    make_ctx: F,
) -> MachineHandle<S, E, C>
where
    S: State + 'static,
    E: Event + 'static,
    C: Send + 'static,
    F: FnOnce(EventSender<E>) -> C,
{
    let (tx, rx) = unbounded();
    let sender = EventSender::new(tx);
    let ctx = make_ctx(sender.clone());

    let join = thread::Builder::new()
        .name("lifespan-worker".to_string())
        .spawn(move || run_loop(machine, ctx, rx))
        .expect("failed to spawn machine worker thread");

    MachineHandle { sender, join }
}

fn run_loop<S: State, E: Event, C>(
    mut machine: StateMachine<S, E, C>,
    mut ctx: C,
    rx: Receiver<Envelope<E>>,
) -> (StateMachine<S, E, C>, C) {
    let mut timer: Option<TimerSlot<E>> = None;

    loop {
        let received = match &timer {
            Some(slot) => rx.recv_deadline(slot.deadline),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Envelope::Event(event)) => {
                trace!(event = event.name(), "dispatching posted event");
                machine.process_event(&event, &mut ctx);
            }
            Ok(Envelope::Arm { delay, events }) => {
                if timer.is_some() {
                    trace!("pending timer replaced");
                }
                debug!(delay_ms = delay.as_millis() as u64, "timer armed");
                timer = Some(TimerSlot {
                    deadline: Instant::now() + delay,
                    events,
                });
            }
            Ok(Envelope::Stop) => {
                debug!("worker stopping");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(slot) = timer.take() {
                    debug!(events = slot.events.len(), "timer fired");
                    for event in slot.events {
                        machine.process_event(&event, &mut ctx);
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                debug!("mailbox disconnected, worker stopping");
                break;
            }
        }
    }

    (machine, ctx)
}
