//! Guard predicates gating whether a rule applies.
//!
//! Guards read the machine context (the mutable data the actions work on)
//! and answer yes or no. They must not mutate anything.

use std::sync::Arc;

/// A boolean predicate over the machine context.
///
/// Guards are evaluated during rule matching, before any action runs, so
/// the value they see is the context as the previous event left it. The
/// predicate is stored behind an `Arc` and may be shared by several rules.
///
/// # Example
///
/// ```rust
/// use lifespan::core::Guard;
///
/// struct Tally {
///     count: u32,
/// }
///
/// let below_three = Guard::new(|t: &Tally| t.count < 3);
///
/// assert!(below_three.check(&Tally { count: 2 }));
/// assert!(!below_three.check(&Tally { count: 3 }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate.
    ///
    /// The predicate must be deterministic for a given context value;
    /// the engine may evaluate it any number of times.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against the context.
    pub fn check(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
