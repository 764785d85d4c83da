//! Assembly of the obstacle-avoidance tree.
//!
//! ```text
//! Selector "Root"
//!   ├─ Sequence "Avoid Obstacle"
//!   │    ├─ SensorGate   (obstacle closer than threshold?)
//!   │    └─ Turn         (rotate in place)
//!   └─ MoveForward       (drive straight)
//! ```
//!
//! The avoidance branch is declared first, so it preempts forward motion on
//! every tick where the gate is open.
use std::sync::Arc;

use behavior_tree::builder::{try_selector, try_sequence};
use behavior_tree::{Behavior, Status};
use tracing::debug;

use crate::config::AvoidanceConfig;
use crate::error::Result;
use crate::nodes::{ActuatorAction, SensorGate, TickContext};
use crate::observation::ProximityCell;

/// Root of a behavior tree ticked against a [`TickContext`].
pub struct AvoidanceTree {
    root: Box<dyn Behavior<TickContext>>,
}

impl AvoidanceTree {
    /// Builds the avoidance tree from `config`, reading proximity from `cell`.
    ///
    /// Fails if the configuration is invalid; no tree is produced in that case.
    pub fn build(config: &AvoidanceConfig, cell: Arc<ProximityCell>) -> Result<Self> {
        config.validate()?;

        let avoid = try_sequence::<TickContext>(vec![
            Box::new(SensorGate::new(cell, config.obstacle_threshold)),
            Box::new(ActuatorAction::turn(config.turn_angular_speed)),
        ])?;
        let root = try_selector::<TickContext>(vec![
            avoid,
            Box::new(ActuatorAction::move_forward(config.forward_linear_speed)),
        ])?;

        debug!(
            threshold = config.obstacle_threshold,
            turn = config.turn_angular_speed,
            forward = config.forward_linear_speed,
            "avoidance tree built"
        );
        Ok(Self { root })
    }

    /// Wraps an arbitrary root node.
    pub fn from_root(root: Box<dyn Behavior<TickContext>>) -> Self {
        Self { root }
    }

    /// Runs one full evaluation from the root.
    pub fn tick(&self, ctx: &mut TickContext) -> Status {
        self.root.tick(ctx)
    }
}
