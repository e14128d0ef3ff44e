//! The `Event` trait implemented by everything that can be dispatched
//! into a machine.
//!
//! Events are transient: constructed, posted, matched against the rule
//! table, handed to actions by reference, and dropped. They are never
//! stored by the engine.

use std::fmt::Debug;

/// Trait for machine events.
///
/// Rules match on [`Event::name`], so two variants of an event enum are
/// distinguishable to the rule table exactly when their names differ.
/// Payload fields (like the name carried by a birth event) are invisible
/// to matching and only read inside actions.
///
/// # Example
///
/// ```rust
/// use lifespan::core::Event;
///
/// #[derive(Clone, Debug)]
/// enum DoorEvent {
///     Knock,
///     Unlock(String),
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Knock => "Knock",
///             Self::Unlock(_) => "Unlock",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Unlock("brass key".into()).name(), "Unlock");
/// ```
pub trait Event: Clone + Debug + Send {
    /// The event's name, matched against [`crate::engine::Rule::on`].
    fn name(&self) -> &str;
}
