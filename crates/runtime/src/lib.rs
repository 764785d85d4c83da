//! Runtime for a tick-driven obstacle-avoidance behavior tree.
//!
//! This crate wires range-scan input, the shared proximity observation, the
//! avoidance tree, and the fixed-period ticker into a cohesive runtime API.
//! Consumers embed [`Runtime`] to feed scans in and receive velocity commands
//! through a [`CommandPublisher`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`config`] holds tunable thresholds, speeds and the tick period
//! - [`scan`] and [`observation`] turn raw scans into the shared proximity value
//! - [`nodes`] contains the condition and action leaves
//! - [`tree`] assembles the avoidance tree
//! - [`workers`] keeps the ticker and sensor tasks
pub mod command;
pub mod config;
pub mod error;
pub mod nodes;
pub mod observation;
pub mod runtime;
pub mod scan;
pub mod transport;
pub mod tree;
pub mod workers;

pub use command::VelocityCommand;
pub use config::AvoidanceConfig;
pub use error::{PublishError, Result, RuntimeError};
pub use nodes::{ActuatorAction, SensorGate, TickContext};
pub use observation::ProximityCell;
pub use runtime::{Runtime, RuntimeBuilder};
pub use scan::{ForwardSector, RangeScan, ScanError};
pub use transport::{ChannelPublisher, CommandPublisher};
pub use tree::AvoidanceTree;
pub use workers::{SensorWorker, TickMetrics, TickStats, Ticker, TickerState};
