//! The event-processing engine.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::engine::rule::{EntryAction, Rule};
use chrono::Utc;
use tracing::{debug, trace};

/// What `process_event` did with an event.
#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome<S: State> {
    /// A rule fired and moved the machine to a new state.
    Transitioned(S),

    /// A rule fired without changing state (internal transition).
    Handled,

    /// No rule applied. Not an error: machines of this kind treat an
    /// unknown event in a state as a no-op.
    Ignored,
}

/// An event-driven state machine.
///
/// The machine holds its current state, the ordered rule table, the entry
/// hooks and the transition history. Everything else it needs (the
/// mutable data actions work on and the handles they arm timers through)
/// arrives as the context parameter of [`StateMachine::process_event`],
/// so the machine itself stays free of shared state.
pub struct StateMachine<S: State, E: Event, C> {
    current: S,
    rules: Vec<Rule<S, E, C>>,
    entry_actions: Vec<(S, EntryAction<C>)>,
    history: StateHistory<S>,
}

impl<S: State, E: Event, C> StateMachine<S, E, C> {
    /// Create a machine sitting in `initial` with an empty rule table.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            rules: Vec::new(),
            entry_actions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Append a rule. Order is significant: the first applicable rule wins.
    pub fn add_rule(&mut self, rule: Rule<S, E, C>) {
        self.rules.push(rule);
    }

    /// Register an entry hook for `state`. Hooks for the same state run in
    /// registration order each time the state is entered.
    pub fn add_entry_action(&mut self, state: S, action: EntryAction<C>) {
        self.entry_actions.push((state, action));
    }

    /// The state the machine currently sits in.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether the current state is terminal.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// The transitions taken so far.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Dispatch one event.
    ///
    /// Scans the rule table in order and fires the first rule whose
    /// source state, event name and guard all match; its actions run in
    /// order with `ctx`. If the rule names a target state the machine
    /// records the transition, switches state and runs every entry hook
    /// registered for the target. Events no rule applies to are ignored.
    pub fn process_event(&mut self, event: &E, ctx: &mut C) -> EventOutcome<S> {
        let matched = self
            .rules
            .iter()
            .position(|rule| rule.matches(&self.current, event, ctx));

        let Some(index) = matched else {
            trace!(
                state = self.current.name(),
                event = event.name(),
                "no rule applies, event ignored"
            );
            return EventOutcome::Ignored;
        };

        let rule = &self.rules[index];
        for action in &rule.actions {
            action(ctx, event);
        }
        let target = rule.to.clone();

        let Some(to) = target else {
            trace!(
                state = self.current.name(),
                event = event.name(),
                "internal transition"
            );
            return EventOutcome::Handled;
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        self.history = self.history.record(StateTransition {
            from: from.clone(),
            to: to.clone(),
            event: event.name().to_string(),
            timestamp: Utc::now(),
        });
        debug!(
            from = from.name(),
            to = to.name(),
            event = event.name(),
            "transition"
        );

        for (state, hook) in &self.entry_actions {
            if *state == self.current {
                hook(ctx);
            }
        }

        EventOutcome::Transitioned(to)
    }
}
