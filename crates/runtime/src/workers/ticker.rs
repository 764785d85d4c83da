//! Fixed-period ticker that drives the avoidance tree.
//!
//! Each tick is one full synchronous evaluation from the root. The status the
//! root returns has no consumer; the effect of a tick is whatever commands
//! the reached leaves emitted.

use std::time::Duration;

use behavior_tree::Status;
use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::nodes::TickContext;
use crate::tree::AvoidanceTree;

/// Lifecycle of a [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    /// Built, not yet started.
    Idle,
    /// Evaluating the tree once per period.
    Running,
    /// Shutdown observed; no further ticks occur.
    Stopped,
}

/// Background task that ticks an [`AvoidanceTree`] on a fixed period.
///
/// Ticks run one after another inside a single task and never overlap. If an
/// evaluation overruns the period, the deadlines it missed are skipped rather
/// than replayed, and the overrun is logged and counted.
pub struct Ticker {
    tree: AvoidanceTree,
    ctx: TickContext,
    period: Duration,
    state_tx: watch::Sender<TickerState>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Ticker {
    pub fn new(
        tree: AvoidanceTree,
        ctx: TickContext,
        period: Duration,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            tree,
            ctx,
            period,
            state_tx: watch::channel(TickerState::Idle).0,
            shutdown_rx,
        }
    }

    pub fn state(&self) -> TickerState {
        *self.state_tx.borrow()
    }

    /// Receiver that follows the lifecycle once [`Ticker::run`] takes over.
    pub fn subscribe(&self) -> watch::Receiver<TickerState> {
        self.state_tx.subscribe()
    }

    /// Runs a single evaluation of the whole tree.
    pub fn tick_once(&mut self) -> Status {
        self.ctx.tick += 1;
        let tick = self.ctx.tick;

        let started = Instant::now();
        let status = self.tree.tick(&mut self.ctx);
        let elapsed = started.elapsed();

        self.ctx.metrics().record_tick();
        if elapsed > self.period {
            self.ctx.metrics().record_overrun();
            warn!(
                tick,
                ?elapsed,
                period = ?self.period,
                "tick overran its period, skipping missed deadlines"
            );
        }

        trace!(tick, ?status, "tick complete");
        status
    }

    /// Main ticker loop.
    ///
    /// Returns once shutdown is signalled (or the signal sender is dropped).
    /// The actuator publisher held by the context is released on return, so
    /// no command can be emitted after this future completes.
    pub async fn run(mut self) -> TickerState {
        if *self.shutdown_rx.borrow() {
            self.state_tx.send_replace(TickerState::Stopped);
            return TickerState::Stopped;
        }

        self.state_tx.send_replace(TickerState::Running);
        info!(period = ?self.period, "Ticker started");

        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        debug!("Ticker received shutdown signal");
                        break;
                    }
                }
                _ = interval.tick() => {
                    self.tick_once();
                }
            }
        }

        self.state_tx.send_replace(TickerState::Stopped);
        info!(ticks = self.ctx.tick, "Ticker stopped");
        TickerState::Stopped
    }
}
