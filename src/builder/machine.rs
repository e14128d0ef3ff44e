//! Fluent builder for state machines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Event, State};
use crate::engine::{Rule, StateMachine};
use std::sync::Arc;

/// Builder assembling a machine from an initial state, an ordered rule
/// list and entry hooks.
pub struct StateMachineBuilder<S: State, E: Event, C> {
    initial: Option<S>,
    rules: Vec<Rule<S, E, C>>,
    entry_actions: Vec<(S, Arc<dyn Fn(&mut C) + Send + Sync>)>,
}

impl<S: State, E: Event, C> StateMachineBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
            entry_actions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Append a rule via its builder. Fails if the rule is incomplete.
    pub fn rule(mut self, builder: RuleBuilder<S, E, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Append a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, E, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Register an entry hook that fires whenever `state` is entered.
    pub fn on_entry<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.entry_actions.push((state, Arc::new(hook)));
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<StateMachine<S, E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        let mut machine = StateMachine::new(initial);
        for rule in self.rules {
            machine.add_rule(rule);
        }
        for (state, hook) in self.entry_actions {
            machine.add_entry_action(state, hook);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event, C> Default for StateMachineBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
