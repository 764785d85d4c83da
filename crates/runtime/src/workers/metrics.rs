//! Tick and sensor counters.
//!
//! Uses atomics so the ticker, the sensor worker and observers can share one
//! instance without locking.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct TickMetrics {
    /// Completed tree evaluations
    ticks: AtomicU64,

    /// Evaluations that took longer than the tick period
    overruns: AtomicU64,

    /// Commands accepted by the actuator transport
    commands: AtomicU64,

    /// Commands the actuator transport rejected
    emit_failures: AtomicU64,

    /// Scans folded into the proximity observation
    scans: AtomicU64,

    /// Scans whose forward sector had no usable reading
    degenerate_scans: AtomicU64,
}

/// Point-in-time copy of [`TickMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    pub ticks: u64,
    pub overruns: u64,
    pub commands: u64,
    pub emit_failures: u64,
    pub scans: u64,
    pub degenerate_scans: u64,
}

impl TickMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed tick and returns its sequence number.
    pub fn record_tick(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_overrun(&self) {
        self.overruns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_command(&self) {
        self.commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_emit_failure(&self) {
        self.emit_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_degenerate_scan(&self) {
        self.degenerate_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> TickStats {
        TickStats {
            ticks: self.ticks.load(Ordering::Relaxed),
            overruns: self.overruns.load(Ordering::Relaxed),
            commands: self.commands.load(Ordering::Relaxed),
            emit_failures: self.emit_failures.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            degenerate_scans: self.degenerate_scans.load(Ordering::Relaxed),
        }
    }
}
