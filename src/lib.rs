//! Lifespan: event-driven state machines with timer-scheduled
//! self-transitions.
//!
//! A machine is an ordered table of guarded rules evaluated
//! first-match-wins, with entry hooks on states. Machines run on a
//! dedicated worker thread behind a FIFO mailbox, and every machine owns
//! one rearmable timer whose expiry feeds events back into the same
//! mailbox, so an action can schedule future work for its own machine
//! and everything still happens one event at a time.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: the values a machine classifies ([`core`])
//! - **Rule**: one row of the transition table, with optional guard and
//!   target ([`engine`])
//! - **Dispatch**: the serialized worker loop and its timer ([`dispatch`])
//! - **DoneSignal**: blocks a controlling thread until the machine says
//!   it is finished ([`signal`])
//!
//! # Example
//!
//! ```rust
//! use lifespan::builder::{RuleBuilder, StateMachineBuilder};
//! use lifespan::core::Event;
//! use lifespan::state_enum;
//!
//! state_enum! {
//!     enum Ember {
//!         Glowing,
//!         Cold,
//!     }
//!     final: [Cold]
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Breeze;
//!
//! impl Event for Breeze {
//!     fn name(&self) -> &str {
//!         "Breeze"
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::<Ember, Breeze, u32>::new()
//!     .initial(Ember::Glowing)
//!     .rule(
//!         RuleBuilder::new()
//!             .from(Ember::Glowing)
//!             .on("Breeze")
//!             .action(|gusts: &mut u32, _e: &Breeze| *gusts += 1)
//!             .to(Ember::Cold),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut gusts = 0;
//! machine.process_event(&Breeze, &mut gusts);
//! assert!(machine.is_final());
//! assert_eq!(gusts, 1);
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod engine;
pub mod goblin;
pub mod signal;

// Re-export commonly used types
pub use crate::core::{Event, Guard, State, StateHistory, StateTransition};
pub use builder::{BuildError, RuleBuilder, StateMachineBuilder};
pub use dispatch::{spawn_machine, DispatchError, EventSender, MachineHandle};
pub use engine::{EventOutcome, Rule, StateMachine};
pub use signal::DoneSignal;
