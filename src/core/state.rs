//! The `State` trait implemented by every machine state.
//!
//! States are plain values. The machine only ever inspects them through
//! these pure methods, so a state enum never needs interior mutability.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values describing where the machine currently is.
/// The `serde` bounds keep states (and the transition history built from
/// them) round-trippable for diagnostics.
///
/// For plain enums, [`crate::state_enum!`] generates this implementation.
///
/// # Example
///
/// ```rust
/// use lifespan::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(Door::Locked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name, for display and for transition records.
    fn name(&self) -> &str;

    /// Whether this is a terminal state.
    ///
    /// A machine sitting in a terminal state ignores every further event,
    /// simply because no rule leads out of it. Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        Off,
        On,
        BurnedOut,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
                Self::BurnedOut => "BurnedOut",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::BurnedOut)
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Lamp::Off.name(), "Off");
        assert_eq!(Lamp::On.name(), "On");
        assert_eq!(Lamp::BurnedOut.name(), "BurnedOut");
    }

    #[test]
    fn is_final_flags_terminal_states_only() {
        assert!(!Lamp::Off.is_final());
        assert!(!Lamp::On.is_final());
        assert!(Lamp::BurnedOut.is_final());
    }

    #[test]
    fn states_round_trip_through_serde() {
        let state = Lamp::On;
        let json = serde_json::to_string(&state).unwrap();
        let back: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn states_clone_and_compare() {
        let a = Lamp::Off;
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Lamp::On);
    }
}
