//! One-shot completion signalling between threads.

use parking_lot::{Condvar, Mutex};

/// A one-shot completion latch.
///
/// One thread calls [`DoneSignal::mark_done`] (typically from inside a
/// machine action on the worker thread); any number of other threads
/// block in [`DoneSignal::wait_until_done`] until it has happened.
/// Marking is idempotent and waiting after the fact returns immediately.
///
/// # Example
///
/// ```rust
/// use lifespan::signal::DoneSignal;
/// use std::sync::Arc;
///
/// let signal = Arc::new(DoneSignal::new());
/// let worker_side = Arc::clone(&signal);
///
/// let worker = std::thread::spawn(move || {
///     worker_side.mark_done();
/// });
///
/// signal.wait_until_done();
/// assert!(signal.is_done());
/// worker.join().unwrap();
/// ```
pub struct DoneSignal {
    done: Mutex<bool>,
    cv: Condvar,
}

impl DoneSignal {
    /// Create an unsignalled latch.
    pub fn new() -> Self {
        Self {
            done: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    /// Mark the work finished and wake every waiter. Safe to call more
    /// than once; only the first call changes anything.
    pub fn mark_done(&self) {
        let mut done = self.done.lock();
        if !*done {
            *done = true;
            self.cv.notify_all();
        }
    }

    /// Block until [`DoneSignal::mark_done`] has been called at least
    /// once.
    pub fn wait_until_done(&self) {
        let mut done = self.done.lock();
        self.cv.wait_while(&mut done, |done| !*done);
    }

    /// Non-blocking probe.
    pub fn is_done(&self) -> bool {
        *self.done.lock()
    }
}

impl Default for DoneSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn starts_unsignalled() {
        let signal = DoneSignal::new();
        assert!(!signal.is_done());
    }

    #[test]
    fn wait_returns_once_marked_from_another_thread() {
        let signal = Arc::new(DoneSignal::new());
        let marker = Arc::clone(&signal);

        let worker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            marker.mark_done();
        });

        signal.wait_until_done();
        assert!(signal.is_done());
        worker.join().unwrap();
    }

    #[test]
    fn wait_after_mark_returns_immediately() {
        let signal = DoneSignal::new();
        signal.mark_done();
        signal.wait_until_done();
        assert!(signal.is_done());
    }

    #[test]
    fn marking_twice_is_harmless() {
        let signal = DoneSignal::new();
        signal.mark_done();
        signal.mark_done();
        assert!(signal.is_done());
    }

    #[test]
    fn every_waiter_wakes() {
        let signal = Arc::new(DoneSignal::new());

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let waiter = Arc::clone(&signal);
                thread::spawn(move || waiter.wait_until_done())
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        signal.mark_done();

        for waiter in waiters {
            waiter.join().unwrap();
        }
    }
}
