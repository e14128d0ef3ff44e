//! Runs one goblin through its whole life and exits when the world has
//! forgotten it.

use lifespan::core::State;
use lifespan::dispatch::spawn_machine;
use lifespan::goblin::{goblin_machine, GoblinConfig, GoblinCtx, GoblinEvent};
use lifespan::signal::DoneSignal;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics stay off stdout's announcement stream unless asked for.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let done = Arc::new(DoneSignal::new());
    let machine = goblin_machine()?;

    let latch = Arc::clone(&done);
    let handle = spawn_machine(machine, move |sender| {
        GoblinCtx::new(GoblinConfig::default(), sender, latch)
    });

    handle.post(GoblinEvent::Birth("gobbo".to_string()))?;
    done.wait_until_done();

    let (machine, ctx) = handle.shutdown()?;
    debug!(
        state = machine.current_state().name(),
        kills = ctx.sheet.kill_count,
        "lifecycle complete"
    );

    Ok(())
}
