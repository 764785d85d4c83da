//! Sensor worker that folds range scans into the proximity observation.
//!
//! Scans arrive with no ordering guarantee relative to ticks. Only the latest
//! one matters, so each scan simply overwrites the shared cell.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, trace, warn};

use crate::observation::ProximityCell;
use crate::scan::{ForwardSector, RangeScan, ScanError};
use crate::workers::TickMetrics;

pub struct SensorWorker {
    cell: Arc<ProximityCell>,
    sector: ForwardSector,
    scan_rx: mpsc::Receiver<RangeScan>,
    metrics: Arc<TickMetrics>,
    shutdown_rx: watch::Receiver<bool>,
}

impl SensorWorker {
    pub fn new(
        cell: Arc<ProximityCell>,
        sector: ForwardSector,
        scan_rx: mpsc::Receiver<RangeScan>,
        metrics: Arc<TickMetrics>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            cell,
            sector,
            scan_rx,
            metrics,
            shutdown_rx,
        }
    }

    /// Main worker loop.
    ///
    /// Stops on shutdown or when every scan sender has been dropped.
    pub async fn run(mut self) {
        info!("SensorWorker started");

        loop {
            tokio::select! {
                biased;
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        debug!("SensorWorker received shutdown signal");
                        break;
                    }
                }
                scan = self.scan_rx.recv() => match scan {
                    Some(scan) => {
                        if let Err(e) = self.handle_scan(&scan) {
                            warn!("discarding scan: {}", e);
                        }
                    }
                    None => {
                        debug!("scan channel closed");
                        break;
                    }
                },
            }
        }

        info!("SensorWorker stopped");
    }

    /// Reduces one scan to its forward minimum and stores it.
    ///
    /// A scan without usable forward readings clears the observation, which
    /// the gate reads as "no obstacle", and is returned as an error for the
    /// caller to report.
    pub fn handle_scan(&self, scan: &RangeScan) -> Result<f32, ScanError> {
        self.metrics.record_scan();

        match scan.forward_min(self.sector) {
            Ok(distance) => {
                self.cell.store(distance);
                trace!(distance, readings = scan.len(), "proximity updated");
                Ok(distance)
            }
            Err(e) => {
                self.metrics.record_degenerate_scan();
                self.cell.clear();
                Err(e)
            }
        }
    }
}
