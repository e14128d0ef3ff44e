//! The goblin transition table.

use super::actions;
use super::{GoblinCtx, GoblinEvent, GoblinState};
use crate::builder::{route, BuildError, RuleBuilder, StateMachineBuilder};
use crate::engine::StateMachine;

/// Build the goblin lifecycle machine.
///
/// The table, in evaluation order:
///
/// | From    | Event        | Guard           | Actions                    | To         |
/// |---------|--------------|-----------------|----------------------------|------------|
/// | Unborn  | Birth        |                 | be_named, arm_kill_timer   | Killing    |
/// | Killing | KillOccurred |                 | score_kill                 | (internal) |
/// | Killing | RetryKill    | quota open      | arm_kill_timer             | (internal) |
/// | Killing | RetryKill    |                 |                            | Dead       |
/// | Killing | Die          |                 |                            | Dead       |
/// | Dead    | Forget       |                 | forget_me                  | Terminated |
///
/// plus an entry hook on Dead (death announcement + forget timer). The
/// kill timer raises KillOccurred and RetryKill back-to-back; splitting
/// the tally from the keep-going decision lets the guarded RetryKill row
/// shadow the unguarded one until the quota fills, under plain
/// first-match evaluation.
pub fn goblin_machine() -> Result<StateMachine<GoblinState, GoblinEvent, GoblinCtx>, BuildError> {
    StateMachineBuilder::new()
        .initial(GoblinState::Unborn)
        .rule(
            RuleBuilder::new()
                .from(GoblinState::Unborn)
                .on("Birth")
                .action(actions::be_named)
                .action(actions::arm_kill_timer)
                .to(GoblinState::Killing),
        )?
        .rule(
            RuleBuilder::new()
                .from(GoblinState::Killing)
                .on("KillOccurred")
                .action(actions::score_kill),
        )?
        .rule(
            RuleBuilder::new()
                .from(GoblinState::Killing)
                .on("RetryKill")
                .when(actions::quota_open)
                .action(actions::arm_kill_timer),
        )?
        .add_rule(route(GoblinState::Killing, "RetryKill", GoblinState::Dead))
        .add_rule(route(GoblinState::Killing, "Die", GoblinState::Dead))
        .on_entry(GoblinState::Dead, actions::enter_death)
        .rule(
            RuleBuilder::new()
                .from(GoblinState::Dead)
                .on("Forget")
                .action(actions::forget_me)
                .to(GoblinState::Terminated),
        )?
        .build()
}
