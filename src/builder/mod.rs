//! Builder API for assembling machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use rule::RuleBuilder;

use crate::core::{Event, State};
use crate::engine::Rule;

/// Create a bare routing rule: on `event` in `from`, go to `to`, no
/// guard, no actions.
///
/// # Example
///
/// ```
/// use lifespan::builder::route;
/// use lifespan::core::Event;
/// use lifespan::state_enum;
///
/// state_enum! {
///     enum Torch {
///         Lit,
///         Doused,
///     }
///     final: [Doused]
/// }
///
/// #[derive(Clone, Debug)]
/// struct Douse;
///
/// impl Event for Douse {
///     fn name(&self) -> &str {
///         "Douse"
///     }
/// }
///
/// let rule = route::<Torch, Douse, ()>(Torch::Lit, "Douse", Torch::Doused);
/// assert_eq!(rule.to, Some(Torch::Doused));
/// ```
pub fn route<S, E, C>(from: S, event: impl Into<String>, to: S) -> Rule<S, E, C>
where
    S: State,
    E: Event,
{
    Rule {
        from,
        on: event.into(),
        guard: None,
        actions: Vec::new(),
        to: Some(to),
    }
}
