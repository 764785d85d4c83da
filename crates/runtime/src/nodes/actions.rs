//! Action nodes for the avoidance tree.
//!
//! Each action emits exactly one velocity command per tick and reports
//! `Running`. They have no completion condition: the enclosing composites
//! keep selecting them for as long as their branch wins.

use behavior_tree::{Behavior, Status};
use tracing::{trace, warn};

use crate::command::VelocityCommand;
use crate::nodes::TickContext;

/// Leaf that drives the actuator with a fixed command.
///
/// # Example
///
/// ```rust,ignore
/// // Avoid if possible, otherwise keep driving
/// Selector::new(vec![
///     avoid_branch,
///     Box::new(ActuatorAction::move_forward(0.2)),
/// ])
/// ```
pub struct ActuatorAction {
    label: &'static str,
    command: VelocityCommand,
}

impl ActuatorAction {
    pub fn new(label: &'static str, command: VelocityCommand) -> Self {
        Self { label, command }
    }

    /// Rotate in place at `angular_z`.
    pub fn turn(angular_z: f64) -> Self {
        Self::new("Turn", VelocityCommand::turn(angular_z))
    }

    /// Drive straight at `linear_x`.
    pub fn move_forward(linear_x: f64) -> Self {
        Self::new("MoveForward", VelocityCommand::forward(linear_x))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn command(&self) -> VelocityCommand {
        self.command
    }
}

impl Behavior<TickContext> for ActuatorAction {
    fn tick(&self, ctx: &mut TickContext) -> Status {
        match ctx.emit(self.command) {
            Ok(()) => trace!(
                tick = ctx.tick,
                action = self.label,
                command = ?self.command,
                "command emitted"
            ),
            // The next tick emits a fresh command.
            Err(e) => warn!(
                tick = ctx.tick,
                action = self.label,
                "failed to emit command: {}",
                e
            ),
        }
        Status::Running
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::transport::ChannelPublisher;
    use crate::workers::TickMetrics;

    #[test]
    fn emits_once_per_tick_and_keeps_running() {
        let (publisher, mut rx) = ChannelPublisher::channel(4);
        let metrics = Arc::new(TickMetrics::new());
        let mut ctx = TickContext::new(Arc::new(publisher), Arc::clone(&metrics));
        let turn = ActuatorAction::turn(0.5);

        assert_eq!(turn.label(), "Turn");
        assert_eq!(turn.tick(&mut ctx), Status::Running);
        assert_eq!(rx.try_recv().unwrap(), turn.command());
        assert!(rx.try_recv().is_err());
        assert_eq!(metrics.snapshot().commands, 1);
    }

    #[test]
    fn move_forward_has_no_yaw() {
        let forward = ActuatorAction::move_forward(0.2);
        assert_eq!(forward.label(), "MoveForward");
        assert_eq!(forward.command(), VelocityCommand::new(0.2, 0.0));
    }
}
