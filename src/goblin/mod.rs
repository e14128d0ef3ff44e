//! The goblin lifecycle machine.
//!
//! One goblin: born on demand, kills on a timer until its quota is full
//! (or someone does it in early), dies with an announcement, and is
//! forgotten a moment later, at which point whoever is waiting on the
//! [`DoneSignal`] is released.
//!
//! All announcements go to stdout; their order and count are the
//! observable behavior of the machine. They are also appended to the
//! context's chronicle so a run can be inspected after shutdown.

mod actions;
mod machine;

pub use machine::goblin_machine;

use crate::core::Event;
use crate::dispatch::EventSender;
use crate::signal::DoneSignal;
use crate::state_enum;
use std::sync::Arc;
use std::time::Duration;

state_enum! {
    /// Where a goblin is in its life.
    pub enum GoblinState {
        Unborn,
        Killing,
        Dead,
        Terminated,
    }
    final: [Terminated]
}

/// Everything that can happen to a goblin.
#[derive(Clone, Debug)]
pub enum GoblinEvent {
    /// Bring the goblin to life under the given name.
    Birth(String),
    /// Cut the killing spree short.
    Die,
    /// Let the world move on.
    Forget,
    /// The kill timer reports one more victim.
    KillOccurred,
    /// The kill timer asks whether to go again.
    RetryKill,
}

impl Event for GoblinEvent {
    fn name(&self) -> &str {
        match self {
            Self::Birth(_) => "Birth",
            Self::Die => "Die",
            Self::Forget => "Forget",
            Self::KillOccurred => "KillOccurred",
            Self::RetryKill => "RetryKill",
        }
    }
}

/// The goblin's record: set once at birth, tallied while killing.
#[derive(Clone, Debug, Default)]
pub struct CharacterSheet {
    pub name: String,
    pub kill_count: u32,
}

/// Timing and quota knobs.
///
/// The defaults are the canonical lifecycle: a kill every 200ms, up to
/// five of them, forgotten one second after death. Tests shrink the
/// delays; the binary runs the defaults.
#[derive(Clone, Debug)]
pub struct GoblinConfig {
    /// Delay before the kill timer fires.
    pub kill_delay: Duration,
    /// Delay between the death announcement and being forgotten.
    pub forget_delay: Duration,
    /// Kills after which the spree ends.
    pub kill_quota: u32,
}

impl Default for GoblinConfig {
    fn default() -> Self {
        Self {
            kill_delay: Duration::from_millis(200),
            forget_delay: Duration::from_millis(1000),
            kill_quota: 5,
        }
    }
}

/// The machine context: the sheet the actions mutate, the mailbox they
/// arm timers through, and the latch they release at the end.
///
/// Only the worker thread ever touches this - actions receive it as an
/// explicit `&mut` parameter inside serialized dispatch.
pub struct GoblinCtx {
    pub sheet: CharacterSheet,
    pub config: GoblinConfig,
    /// Announcement lines, in the order they were printed.
    pub chronicle: Vec<String>,
    pub(crate) sender: EventSender<GoblinEvent>,
    pub(crate) done: Arc<DoneSignal>,
}

impl GoblinCtx {
    pub fn new(
        config: GoblinConfig,
        sender: EventSender<GoblinEvent>,
        done: Arc<DoneSignal>,
    ) -> Self {
        Self {
            sheet: CharacterSheet::default(),
            config,
            chronicle: Vec::new(),
            sender,
            done,
        }
    }

    /// Print a line and remember it.
    pub(crate) fn announce(&mut self, line: String) {
        println!("{line}");
        self.chronicle.push(line);
    }
}
