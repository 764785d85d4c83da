//! Worker tasks that back the runtime orchestration.
//!
//! The ticker evaluates the tree on a fixed period, while the sensor worker
//! folds incoming scans into the shared proximity observation.

mod metrics;
mod sensor;
mod ticker;

pub use metrics::{TickMetrics, TickStats};
pub use sensor::SensorWorker;
pub use ticker::{Ticker, TickerState};
