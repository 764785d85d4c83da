//! Per-tick context handed to every node.
use std::sync::Arc;

use crate::command::VelocityCommand;
use crate::error::PublishError;
use crate::transport::CommandPublisher;
use crate::workers::TickMetrics;

/// Context a tree is ticked against.
///
/// Holds the actuator transport and the metrics sink. The proximity
/// observation is owned by the [`SensorGate`](super::SensorGate) itself, so
/// the context carries nothing that changes between ticks except the tick
/// counter.
pub struct TickContext {
    /// Sequence number of the tick being evaluated, starting at 1.
    pub tick: u64,
    publisher: Arc<dyn CommandPublisher>,
    metrics: Arc<TickMetrics>,
}

impl TickContext {
    pub fn new(publisher: Arc<dyn CommandPublisher>, metrics: Arc<TickMetrics>) -> Self {
        Self {
            tick: 0,
            publisher,
            metrics,
        }
    }

    /// Hands `command` to the actuator transport and records the outcome.
    pub fn emit(&mut self, command: VelocityCommand) -> Result<(), PublishError> {
        let result = self.publisher.publish(command);
        match result {
            Ok(()) => self.metrics.record_command(),
            Err(_) => self.metrics.record_emit_failure(),
        }
        result
    }

    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }
}
