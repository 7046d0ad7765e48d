//! Simulated window clients for the headless demo
//!
//! Each simulated window is one tokio task: it connects, heartbeats its
//! drifting bounds, periodically fires a particle at its right edge, and
//! logs whatever the coordinator pushes back. It is the same traffic a real
//! rendering host would generate, minus the pixels.

use anyhow::Result;
use orb_core::Rect;
use orb_coord::CoordinatorHandle;
use orb_proto::{Behavior, CoordinatorMessage, TransferPayload};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::settings::DemoSettings;

type Channel = mpsc::Sender<CoordinatorMessage>;

/// Fire a particle roughly once a second regardless of heartbeat rate
fn exits_per_heartbeat(heartbeat_ms: u64) -> u64 {
    (1000 / heartbeat_ms.max(1)).max(1)
}

/// Where window `index` sits at time `t`: a row of touching windows, each
/// drifting horizontally out of phase with its neighbors.
fn bounds_at(index: usize, t: f64, demo: &DemoSettings) -> Rect {
    let phase = index as f64 * std::f64::consts::FRAC_PI_2;
    let drift = demo.drift_amplitude * (t + phase).sin();
    Rect::new(
        index as f64 * demo.window_width + drift,
        100.0,
        demo.window_width,
        demo.window_height,
    )
}

/// Cosmetic behavior for the n-th particle a window emits. The set is closed;
/// clients cycle through it, the coordinator never looks at it.
fn behavior_for(n: u64) -> Behavior {
    match n % 4 {
        0 => Behavior::Orbit,
        1 => Behavior::Swirl,
        2 => Behavior::Scatter,
        _ => Behavior::Pulse,
    }
}

/// Drive one simulated window until the demo duration elapses.
pub async fn run_window(
    index: usize,
    handle: CoordinatorHandle<Channel>,
    demo: DemoSettings,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(256);
    let id = handle.connect(tx).await?;
    info!(%id, window = index, "window joined");

    let mut heartbeat = tokio::time::interval(Duration::from_millis(demo.heartbeat_ms));
    let exit_every = exits_per_heartbeat(demo.heartbeat_ms);
    let run_for = Duration::from_secs(demo.run_secs);
    let started = tokio::time::Instant::now();

    let mut beats: u64 = 0;
    let mut emitted: u64 = 0;
    let mut received: u64 = 0;

    loop {
        tokio::select! {
            _ = heartbeat.tick() => {
                if started.elapsed() >= run_for {
                    break;
                }

                let t = started.elapsed().as_secs_f64();
                let bounds = bounds_at(index, t, &demo);
                handle.heartbeat(id, bounds).await?;
                beats += 1;

                if beats % exit_every == 0 {
                    // Exit at the right edge, aimed at the next window over
                    let payload = TransferPayload {
                        x: demo.window_width,
                        y: demo.window_height / 2.0,
                        vx: 4.0,
                        vy: 0.0,
                        behavior: Some(behavior_for(emitted)),
                        offset: Some((emitted as f64) * 0.125 % 1.0),
                        hue: Some((index as f32) * 120.0),
                    };
                    handle.particle_exit(id, payload).await?;
                    emitted += 1;
                }
            }
            msg = rx.recv() => match msg {
                Some(CoordinatorMessage::UpdateState { gravity, neighbors }) => {
                    trace!(
                        %id,
                        fx = gravity.x,
                        fy = gravity.y,
                        neighbors = neighbors.len(),
                        "state update"
                    );
                }
                Some(CoordinatorMessage::SpawnParticle(p)) => {
                    received += 1;
                    debug!(%id, x = p.x, y = p.y, behavior = ?p.behavior, "particle arrived");
                }
                None => break,
            },
        }
    }

    handle.disconnect(id).await?;
    info!(%id, window = index, emitted, received, "window left");
    Ok(())
}
