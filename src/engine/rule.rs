//! Transition rules: one rule per row of a machine's transition table.

use crate::core::{Event, Guard, State};
use std::sync::Arc;

/// An action fired when a rule matches. Actions receive the machine
/// context and the triggering event as explicit parameters; they capture
/// nothing.
pub type Action<E, C> = Arc<dyn Fn(&mut C, &E) + Send + Sync>;

/// An action fired whenever a state is entered, regardless of which rule
/// led there.
pub type EntryAction<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// One row of a transition table.
///
/// A rule applies when the machine sits in `from`, the incoming event's
/// name equals `on`, and the guard (if any) passes. Rules are evaluated
/// in the order they were added and the first applicable rule wins, so
/// a guarded rule can shadow an unguarded fallthrough placed after it.
///
/// A rule with no target state is an internal transition: its actions run
/// but the machine stays put, entry actions do not re-fire and no history
/// is recorded.
pub struct Rule<S: State, E: Event, C> {
    /// Source state this rule applies in.
    pub from: S,
    /// Event name this rule listens for.
    pub on: String,
    /// Optional predicate gating the rule.
    pub guard: Option<Guard<C>>,
    /// Actions executed in order when the rule fires.
    pub actions: Vec<Action<E, C>>,
    /// Target state, or `None` for an internal transition.
    pub to: Option<S>,
}

impl<S: State, E: Event, C> Rule<S, E, C> {
    /// Whether this rule applies to `event` with the machine in `current`.
    pub fn matches(&self, current: &S, event: &E, ctx: &C) -> bool {
        if self.from != *current || self.on != event.name() {
            return false;
        }
        self.guard.as_ref().is_none_or(|g| g.check(ctx))
    }
}
