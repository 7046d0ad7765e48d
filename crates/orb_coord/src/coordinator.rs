//! The coordinator event loop
//!
//! One tokio task owns the registry and multiplexes inbound client commands
//! with the fixed-period solver tick. Because every mutation and every
//! snapshot happens on this task, a tick or a routing decision always sees a
//! consistent registry. Outbound pushes never block; full or closed client
//! channels are skipped and counted.

use orb_core::time::TickClock;
use orb_core::{ClientId, Rect};
use orb_metrics::{
    Counters, TickTimer, DEGENERATE_PAIRS, SENDS_SKIPPED, TRANSFERS_DELIVERED, TRANSFERS_DROPPED,
};
use orb_proto::{ClientMessage, CoordinatorMessage, TransferPayload};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::channel::ClientChannel;
use crate::config::CoordinatorConfig;
use crate::registry::Registry;
use crate::router;
use crate::solver::{self, SolverParams};

/// The coordinator task has shut down (all handles dropped or task aborted)
#[derive(Debug, Error)]
#[error("coordinator is no longer running")]
pub struct CoordinatorClosed;

/// Inbound commands from host integrations
pub enum Command<C> {
    /// A new client connected; reply carries its assigned id
    Connect {
        channel: C,
        reply: oneshot::Sender<ClientId>,
    },
    /// Periodic bounds report
    Heartbeat { id: ClientId, bounds: Rect },
    /// A particle crossed the client's local boundary
    ParticleExit {
        id: ClientId,
        payload: TransferPayload,
    },
    /// Channel close, error, or explicit close notification
    Disconnect { id: ClientId },
}

/// Cloneable handle for talking to a running coordinator
pub struct CoordinatorHandle<C> {
    tx: mpsc::Sender<Command<C>>,
}

impl<C> Clone for CoordinatorHandle<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C> CoordinatorHandle<C> {
    /// Register a new client and wait for its assigned id.
    pub async fn connect(&self, channel: C) -> Result<ClientId, CoordinatorClosed> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Connect { channel, reply })
            .await
            .map_err(|_| CoordinatorClosed)?;
        rx.await.map_err(|_| CoordinatorClosed)
    }

    pub async fn heartbeat(&self, id: ClientId, bounds: Rect) -> Result<(), CoordinatorClosed> {
        self.tx
            .send(Command::Heartbeat { id, bounds })
            .await
            .map_err(|_| CoordinatorClosed)
    }

    pub async fn particle_exit(
        &self,
        id: ClientId,
        payload: TransferPayload,
    ) -> Result<(), CoordinatorClosed> {
        self.tx
            .send(Command::ParticleExit { id, payload })
            .await
            .map_err(|_| CoordinatorClosed)
    }

    pub async fn disconnect(&self, id: ClientId) -> Result<(), CoordinatorClosed> {
        self.tx
            .send(Command::Disconnect { id })
            .await
            .map_err(|_| CoordinatorClosed)
    }

    /// Forward a decoded wire message from an already-connected client.
    pub async fn deliver(&self, id: ClientId, msg: ClientMessage) -> Result<(), CoordinatorClosed> {
        match msg {
            ClientMessage::Heartbeat { bounds } => self.heartbeat(id, bounds).await,
            ClientMessage::ParticleExit(payload) => self.particle_exit(id, payload).await,
        }
    }
}

/// Registry plus solver/router state, everything the event loop mutates.
/// Split out from the loop so command handling and ticking stay synchronous
/// and directly testable.
struct CoordinatorCore<C: ClientChannel> {
    registry: Registry<C>,
    params: SolverParams,
    clock: TickClock,
    counters: Counters,
    tick_timer: TickTimer,
}

impl<C: ClientChannel> CoordinatorCore<C> {
    fn new(config: &CoordinatorConfig) -> Self {
        Self {
            registry: Registry::new(),
            params: config.solver_params(),
            clock: TickClock::new(config.tick_period()),
            counters: Counters::new(),
            tick_timer: TickTimer::new(config.tick_stats_window),
        }
    }

    fn handle_command(&mut self, cmd: Command<C>) {
        match cmd {
            Command::Connect { channel, reply } => {
                let id = self.registry.register(channel);
                info!(%id, clients = self.registry.len(), "client connected");
                // Caller may have given up waiting; that's its problem
                let _ = reply.send(id);
            }
            Command::Heartbeat { id, bounds } => {
                if !self.registry.update_bounds(id, bounds) {
                    trace!(%id, "heartbeat for unknown session dropped");
                }
            }
            Command::ParticleExit { id, payload } => {
                self.route_particle(id, payload);
            }
            Command::Disconnect { id } => {
                if self.registry.unregister(id) {
                    info!(%id, clients = self.registry.len(), "client disconnected");
                }
                // Second close notification for the same id is a no-op
            }
        }
    }

    /// Route one exiting particle to the sibling window containing its
    /// absolute exit point. Every failure mode drops the particle silently;
    /// the sender already removed it locally (fire-and-forget, no retries).
    fn route_particle(&mut self, sender: ClientId, payload: TransferPayload) -> bool {
        let snapshot = self.registry.snapshot();

        let Some(routed) = router::resolve(&snapshot, sender, &payload) else {
            self.counters.increment(TRANSFERS_DROPPED);
            debug!(from = %sender, "particle dropped: no window contains exit point");
            return false;
        };

        let Some(channel) = self.registry.channel(routed.dest) else {
            self.counters.increment(TRANSFERS_DROPPED);
            return false;
        };

        match channel.try_send(CoordinatorMessage::SpawnParticle(routed.payload)) {
            Ok(()) => {
                self.counters.increment(TRANSFERS_DELIVERED);
                debug!(from = %sender, to = %routed.dest, "particle transferred");
                true
            }
            Err(err) => {
                self.counters.increment(SENDS_SKIPPED);
                self.counters.increment(TRANSFERS_DROPPED);
                debug!(from = %sender, to = %routed.dest, %err, "transfer dropped at send");
                false
            }
        }
    }

    /// One solver tick: snapshot, all-pairs forces, push per-client updates.
    /// A dead client channel skips that delivery only, never the tick.
    fn tick(&mut self) {
        let snapshot = self.registry.snapshot();
        if snapshot.is_empty() {
            self.clock.advance_tick();
            return;
        }

        self.tick_timer.begin();
        let forces = solver::solve(&snapshot, &self.params);

        if forces.degenerate_pairs > 0 {
            self.counters.add(DEGENERATE_PAIRS, forces.degenerate_pairs);
            debug!(
                pairs = forces.degenerate_pairs,
                "coincident centers floored this tick"
            );
        }

        for update in forces.updates {
            let Some(channel) = self.registry.channel(update.id) else {
                continue;
            };
            let msg = CoordinatorMessage::UpdateState {
                gravity: update.gravity,
                neighbors: update.neighbors,
            };
            if channel.try_send(msg).is_err() {
                self.counters.increment(SENDS_SKIPPED);
            }
        }

        self.tick_timer.end();
        self.clock.advance_tick();

        if self.clock.tick_count() % 5000 == 0 {
            debug!(
                tick = self.clock.tick_count(),
                avg_us = format!("{:.1}", self.tick_timer.tick_time_us()),
                "tick timing"
            );
        }
    }

    fn log_summary(&self) {
        info!(
            ticks = self.clock.tick_count(),
            delivered = self.counters.get(TRANSFERS_DELIVERED),
            dropped = self.counters.get(TRANSFERS_DROPPED),
            degenerate = self.counters.get(DEGENERATE_PAIRS),
            skipped_sends = self.counters.get(SENDS_SKIPPED),
            "coordinator stopped"
        );
    }
}

/// The unified coordinator, generic over the client channel type.
///
/// The native-process and browser-worker deployments differ only in the `C`
/// they plug in; the registry, solver, router, and session protocol are the
/// same loop.
pub struct Coordinator<C: ClientChannel> {
    core: CoordinatorCore<C>,
    rx: mpsc::Receiver<Command<C>>,
    tick_period: std::time::Duration,
}

impl<C: ClientChannel> Coordinator<C> {
    pub fn new(config: &CoordinatorConfig) -> (Self, CoordinatorHandle<C>) {
        let (tx, rx) = mpsc::channel(config.command_buffer);
        let coordinator = Self {
            core: CoordinatorCore::new(config),
            rx,
            tick_period: config.tick_period(),
        };
        (coordinator, CoordinatorHandle { tx })
    }

    /// Drive the event loop until every handle is dropped.
    pub async fn run(self) {
        let Coordinator {
            mut core,
            mut rx,
            tick_period,
        } = self;

        let mut interval = tokio::time::interval(tick_period);
        // A stalled loop catches up by skipping, not by bursting ticks
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_ms = tick_period.as_millis() as u64, "coordinator running");

        loop {
            tokio::select! {
                maybe_cmd = rx.recv() => match maybe_cmd {
                    Some(cmd) => core.handle_command(cmd),
                    None => break,
                },
                _ = interval.tick() => core.tick(),
            }
        }

        core.log_summary();
    }
}
