//! Build errors for machine and rule builders.

use thiserror::Error;

/// Errors raised when assembling machines and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule event not specified. Call .on(event_name)")]
    MissingEvent,
}
