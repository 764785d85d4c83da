//! Condition nodes for the avoidance tree.

use std::sync::Arc;

use behavior_tree::{Behavior, Status};
use tracing::trace;

use crate::nodes::TickContext;
use crate::observation::ProximityCell;

/// Reports `Success` when something is closer than `threshold` ahead.
///
/// Reads the latest forward-sector minimum from the shared
/// [`ProximityCell`]. Until a usable scan has arrived the gate reports
/// `Failure`, i.e. "no known obstacle".
///
/// # Example
///
/// ```rust,ignore
/// // Turn only while an obstacle is ahead
/// Sequence::new(vec![
///     Box::new(SensorGate::new(cell, 0.5)),
///     Box::new(ActuatorAction::turn(0.5)),
/// ])
/// ```
pub struct SensorGate {
    cell: Arc<ProximityCell>,
    /// Distance below which the gate opens. The comparison is strict, so a
    /// reading exactly at the threshold does not count as an obstacle.
    pub threshold: f32,
}

impl SensorGate {
    pub fn new(cell: Arc<ProximityCell>, threshold: f32) -> Self {
        Self { cell, threshold }
    }

    /// Evaluates the gate against the current observation.
    pub fn obstacle_ahead(&self) -> bool {
        self.check(self.cell.load())
    }

    fn check(&self, observed: Option<f32>) -> bool {
        observed.is_some_and(|distance| distance < self.threshold)
    }
}

impl Behavior<TickContext> for SensorGate {
    fn tick(&self, ctx: &mut TickContext) -> Status {
        let observed = self.cell.load();
        if observed.is_none() {
            trace!(tick = ctx.tick, "no proximity observation yet");
        }

        if self.check(observed) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
