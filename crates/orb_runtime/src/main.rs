//! Orbfield Runtime
//!
//! Headless demo binary: boots the coordinator and a handful of simulated
//! window clients, runs the full heartbeat/tick/transfer pipeline for a few
//! seconds, then shuts everything down cleanly.
//!
//! Usage: `orb_runtime [settings.json]`

mod settings;
mod window_sim;

use anyhow::Result;
use orb_coord::Coordinator;
use std::path::PathBuf;

use settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Orbfield v{}", orb_core::VERSION);

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;
    tracing::info!(
        windows = settings.demo.windows,
        tick_ms = settings.coordinator.tick_period_ms,
        "starting demo"
    );

    let (coordinator, handle) = Coordinator::new(&settings.coordinator);
    let coordinator_task = tokio::spawn(coordinator.run());

    let mut windows = Vec::new();
    for index in 0..settings.demo.windows {
        windows.push(tokio::spawn(window_sim::run_window(
            index,
            handle.clone(),
            settings.demo.clone(),
        )));
    }
    // The coordinator stops once the last window drops its handle
    drop(handle);

    for window in windows {
        window.await??;
    }
    coordinator_task.await?;

    tracing::info!("demo finished");
    Ok(())
}
