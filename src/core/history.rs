//! Transition history tracking.
//!
//! Every state-changing transition is recorded with the event that caused
//! it. Internal transitions (actions without a state change) leave no
//! record. History lives in memory only; it exists for inspection after a
//! run, not for persistence.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state-changing transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left.
    pub from: S,
    /// The state being entered.
    pub to: S,
    /// Name of the event that triggered the transition.
    pub event: String,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state-changing transitions.
///
/// `record` returns a new history rather than mutating in place, so a
/// caller holding an old handle never sees later transitions appear.
///
/// # Example
///
/// ```rust
/// use lifespan::core::{State, StateHistory, StateTransition};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Kettle {
///     Cold,
///     Boiling,
/// }
///
/// impl State for Kettle {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cold => "Cold",
///             Self::Boiling => "Boiling",
///         }
///     }
/// }
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Kettle::Cold,
///     to: Kettle::Boiling,
///     event: "SwitchOn".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Kettle::Cold, &Kettle::Boiling]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The sequence of states traversed: the first transition's source,
    /// then each transition's target in order. Empty while no transition
    /// has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock span from the first to the last recorded transition.
    /// `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let span = last.timestamp.signed_duration_since(first.timestamp);
            span.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
