//! Property-based tests for the engine and the core types.
//!
//! These drive a small bounded-counter machine (the same shape as the
//! lifecycle machine, minus the timers) through random event sequences
//! and check the invariants that must survive any ordering.

use chrono::Utc;
use lifespan::builder::{route, RuleBuilder, StateMachineBuilder};
use lifespan::core::{Event, Guard, State, StateHistory, StateTransition};
use lifespan::engine::{EventOutcome, StateMachine};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum TallyState {
    Fresh,
    Counting,
    Sealed,
}

impl State for TallyState {
    fn name(&self) -> &str {
        match self {
            Self::Fresh => "Fresh",
            Self::Counting => "Counting",
            Self::Sealed => "Sealed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Sealed)
    }
}

#[derive(Clone, Debug)]
enum TallyEvent {
    Open,
    Bump,
    Close,
}

impl Event for TallyEvent {
    fn name(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Bump => "Bump",
            Self::Close => "Close",
        }
    }
}

/// Fresh --Open--> Counting; Bump increments while below `limit`, the
/// fallthrough row seals the tally once the limit is reached; Close
/// seals it early.
fn tally_machine(limit: u32) -> StateMachine<TallyState, TallyEvent, u32> {
    StateMachineBuilder::new()
        .initial(TallyState::Fresh)
        .rule(
            RuleBuilder::new()
                .from(TallyState::Fresh)
                .on("Open")
                .to(TallyState::Counting),
        )
        .unwrap()
        .rule(
            RuleBuilder::new()
                .from(TallyState::Counting)
                .on("Bump")
                .when(move |count: &u32| *count < limit)
                .action(|count: &mut u32, _e: &TallyEvent| *count += 1),
        )
        .unwrap()
        .add_rule(route(TallyState::Counting, "Bump", TallyState::Sealed))
        .rule(
            RuleBuilder::new()
                .from(TallyState::Counting)
                .on("Close")
                .to(TallyState::Sealed),
        )
        .unwrap()
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> TallyEvent {
        match variant {
            0 => TallyEvent::Open,
            1 => TallyEvent::Bump,
            _ => TallyEvent::Close,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> TallyState {
        match variant {
            0 => TallyState::Fresh,
            1 => TallyState::Counting,
            _ => TallyState::Sealed,
        }
    }
}

proptest! {
    #[test]
    fn count_is_monotone_and_never_passes_the_limit(
        events in prop::collection::vec(arbitrary_event(), 0..40),
        limit in 1u32..6,
    ) {
        let mut machine = tally_machine(limit);
        let mut count = 0u32;
        let mut previous = 0u32;

        for event in &events {
            machine.process_event(event, &mut count);
            prop_assert!(count >= previous);
            prop_assert!(count <= limit);
            previous = count;
        }
    }

    #[test]
    fn sealed_machines_ignore_every_event(
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let mut machine = tally_machine(3);
        let mut count = 0u32;

        for event in &events {
            machine.process_event(event, &mut count);
        }

        if machine.is_final() {
            let count_before = count;
            for event in [TallyEvent::Open, TallyEvent::Bump, TallyEvent::Close] {
                prop_assert_eq!(
                    machine.process_event(&event, &mut count),
                    EventOutcome::Ignored
                );
            }
            prop_assert_eq!(count, count_before);
        }
    }

    #[test]
    fn history_is_contiguous(
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let mut machine = tally_machine(2);
        let mut count = 0u32;

        for event in &events {
            machine.process_event(event, &mut count);
        }

        let transitions = machine.history().transitions();
        for pair in transitions.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        if let Some(first) = transitions.first() {
            prop_assert_eq!(&first.from, &TallyState::Fresh);
        }
        if let Some(last) = transitions.last() {
            prop_assert_eq!(&last.to, machine.current_state());
        }
    }

    #[test]
    fn guard_is_deterministic(count in 0u32..100) {
        let guard = Guard::new(|count: &u32| *count < 50);
        prop_assert_eq!(guard.check(&count), guard.check(&count));
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
    }

    #[test]
    fn state_round_trips_through_serde(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: TallyState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, back);
    }

    #[test]
    fn history_preserves_recording_order(
        states in prop::collection::vec(arbitrary_state(), 1..10),
    ) {
        let mut history = StateHistory::new();
        let mut expected_path = vec![TallyState::Fresh];

        for (i, to_state) in states.iter().enumerate() {
            let from_state = if i == 0 {
                TallyState::Fresh
            } else {
                states[i - 1].clone()
            };

            history = history.record(StateTransition {
                from: from_state,
                to: to_state.clone(),
                event: "Step".to_string(),
                timestamp: Utc::now(),
            });
            expected_path.push(to_state.clone());
        }

        let path = history.get_path();
        prop_assert_eq!(path.len(), expected_path.len());
        for (recorded, expected) in path.iter().zip(expected_path.iter()) {
            prop_assert_eq!(*recorded, expected);
        }
    }

    #[test]
    fn history_round_trips_through_serde(
        states in prop::collection::vec(arbitrary_state(), 0..5),
    ) {
        let mut history = StateHistory::new();
        for state in &states {
            history = history.record(StateTransition {
                from: TallyState::Fresh,
                to: state.clone(),
                event: "Step".to_string(),
                timestamp: Utc::now(),
            });
        }

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<TallyState> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(history.transitions().len(), back.transitions().len());
    }
}
