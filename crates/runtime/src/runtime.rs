//! High-level runtime orchestrator.
//!
//! The runtime owns the ticker and sensor workers, wires up the scan channel
//! and shutdown signal, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::AvoidanceConfig;
use crate::error::{Result, RuntimeError};
use crate::nodes::TickContext;
use crate::observation::ProximityCell;
use crate::scan::RangeScan;
use crate::transport::CommandPublisher;
use crate::tree::AvoidanceTree;
use crate::workers::{SensorWorker, TickMetrics, TickStats, Ticker, TickerState};

/// Running obstacle-avoidance tree.
///
/// Design: Runtime owns both background workers. Scans go in through
/// [`Runtime::scan_sender`]; commands come out through the publisher given to
/// the builder.
pub struct Runtime {
    cell: Arc<ProximityCell>,
    metrics: Arc<TickMetrics>,
    scan_tx: mpsc::Sender<RangeScan>,
    ticker_stop_tx: watch::Sender<bool>,
    sensor_stop_tx: watch::Sender<bool>,
    ticker_state: watch::Receiver<TickerState>,

    // Background workers
    ticker_handle: JoinHandle<TickerState>,
    sensor_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Sender for feeding range scans to the sensor worker.
    ///
    /// Can be cloned freely; the worker keeps only the latest reading.
    pub fn scan_sender(&self) -> mpsc::Sender<RangeScan> {
        self.scan_tx.clone()
    }

    /// Shared proximity observation read by the sensor gate.
    pub fn cell(&self) -> Arc<ProximityCell> {
        Arc::clone(&self.cell)
    }

    /// Shared tick and sensor counters.
    pub fn metrics(&self) -> Arc<TickMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Current lifecycle state of the ticker.
    pub fn ticker_state(&self) -> TickerState {
        *self.ticker_state.borrow()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the ticker first and waits for it, which releases the command
    /// publisher. Only then is the sensor worker stopped. Returns the final
    /// counters.
    pub async fn shutdown(self) -> Result<TickStats> {
        // Receivers may already be gone if a worker exited on its own.
        let _ = self.ticker_stop_tx.send(true);

        let state = self
            .ticker_handle
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                worker: "ticker",
                source,
            })?;
        debug!(?state, "ticker joined");

        let _ = self.sensor_stop_tx.send(true);
        self.sensor_handle
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                worker: "sensor",
                source,
            })?;
        drop(self.scan_tx);

        let stats = self.metrics.snapshot();
        info!(?stats, "Runtime shut down");
        Ok(stats)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: AvoidanceConfig,
    publisher: Option<Arc<dyn CommandPublisher>>,
    cell: Option<Arc<ProximityCell>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: AvoidanceConfig::default(),
            publisher: None,
            cell: None,
        }
    }

    /// Set the runtime configuration
    pub fn config(mut self, config: AvoidanceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the actuator transport (required)
    pub fn publisher(mut self, publisher: impl CommandPublisher + 'static) -> Self {
        self.publisher = Some(Arc::new(publisher));
        self
    }

    /// Share an existing proximity cell instead of creating a new one.
    pub fn cell(mut self, cell: Arc<ProximityCell>) -> Self {
        self.cell = Some(cell);
        self
    }

    /// Build the tree and start both workers.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let publisher = self.publisher.ok_or(RuntimeError::MissingPublisher)?;
        let cell = self.cell.unwrap_or_default();
        let tree = AvoidanceTree::build(&self.config, Arc::clone(&cell))?;

        let metrics = Arc::new(TickMetrics::new());
        let (scan_tx, scan_rx) = mpsc::channel::<RangeScan>(self.config.scan_buffer);
        let (ticker_stop_tx, ticker_stop_rx) = watch::channel(false);
        let (sensor_stop_tx, sensor_stop_rx) = watch::channel(false);

        let sensor = SensorWorker::new(
            Arc::clone(&cell),
            self.config.sector,
            scan_rx,
            Arc::clone(&metrics),
            sensor_stop_rx,
        );
        let sensor_handle = tokio::spawn(async move {
            sensor.run().await;
        });

        let ctx = TickContext::new(publisher, Arc::clone(&metrics));
        let ticker = Ticker::new(tree, ctx, self.config.tick_period, ticker_stop_rx);
        let ticker_state = ticker.subscribe();
        let ticker_handle = tokio::spawn(ticker.run());

        info!(
            period = ?self.config.tick_period,
            threshold = self.config.obstacle_threshold,
            "Runtime started"
        );

        Ok(Runtime {
            cell,
            metrics,
            scan_tx,
            ticker_stop_tx,
            sensor_stop_tx,
            ticker_state,
            ticker_handle,
            sensor_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
