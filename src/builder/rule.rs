//! Fluent builder for transition rules.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, State};
use crate::engine::{Action, Rule};
use std::sync::Arc;

/// Builder for one row of a transition table.
///
/// `from` and `on` are required. Actions are optional and repeatable -
/// they fire in the order they were added. A rule built without `.to()`
/// is an internal transition.
pub struct RuleBuilder<S: State, E: Event, C> {
    from: Option<S>,
    on: Option<String>,
    guard: Option<Guard<C>>,
    actions: Vec<Action<E, C>>,
    to: Option<S>,
}

impl<S: State, E: Event, C> RuleBuilder<S, E, C> {
    /// Create an empty rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            guard: None,
            actions: Vec::new(),
            to: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the event name this rule listens for (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.on = Some(event.into());
        self
    }

    /// Attach a pre-built guard (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a guard from a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Append an action (optional, repeatable).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, &E) + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// Set the target state. Leave unset for an internal transition.
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, E, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEvent)?;

        Ok(Rule {
            from,
            on,
            guard: self.guard,
            actions: self.actions,
            to: self.to,
        })
    }
}

impl<S: State, E: Event, C> Default for RuleBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
