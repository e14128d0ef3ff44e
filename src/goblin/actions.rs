//! Actions and guards of the goblin machine.
//!
//! Each function takes its dependencies (the context and the triggering
//! event) as explicit parameters; nothing is captured.

use super::{GoblinCtx, GoblinEvent};
use tracing::warn;

/// Birth action: take the name from the event and say hello.
pub(super) fn be_named(ctx: &mut GoblinCtx, event: &GoblinEvent) {
    if let GoblinEvent::Birth(name) = event {
        ctx.sheet.name = name.clone();
        let line = format!("{} lives! grarrh!", ctx.sheet.name);
        ctx.announce(line);
    }
}

/// Arm (or rearm) the kill timer. When it fires, the worker feeds the
/// machine one kill and one keep-going question, in that order.
pub(super) fn arm_kill_timer(ctx: &mut GoblinCtx, _event: &GoblinEvent) {
    if let Err(error) = ctx.sender.schedule(
        ctx.config.kill_delay,
        vec![GoblinEvent::KillOccurred, GoblinEvent::RetryKill],
    ) {
        warn!(%error, "could not arm the kill timer");
    }
}

/// One more victim.
pub(super) fn score_kill(ctx: &mut GoblinCtx, _event: &GoblinEvent) {
    ctx.announce("yarrh! another dead!".to_string());
    ctx.sheet.kill_count += 1;
}

/// Guard: is there room left under the kill quota?
pub(super) fn quota_open(ctx: &GoblinCtx) -> bool {
    ctx.sheet.kill_count < ctx.config.kill_quota
}

/// Entry hook on Dead: announce the tally and arm the forget timer.
pub(super) fn enter_death(ctx: &mut GoblinCtx) {
    let line = format!(
        "{} died after killin' {} smelly 'umans",
        ctx.sheet.name, ctx.sheet.kill_count
    );
    ctx.announce(line);
    if let Err(error) = ctx
        .sender
        .schedule(ctx.config.forget_delay, vec![GoblinEvent::Forget])
    {
        warn!(%error, "could not arm the forget timer");
    }
}

/// Final action: say goodbye and release whoever is waiting.
pub(super) fn forget_me(ctx: &mut GoblinCtx, _event: &GoblinEvent) {
    let line = format!("{} has been forgotten...", ctx.sheet.name);
    ctx.announce(line);
    ctx.done.mark_done();
}
