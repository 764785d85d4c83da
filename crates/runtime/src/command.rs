//! Velocity command emitted by actuator actions.
use serde::{Deserialize, Serialize};

/// Planar velocity command: forward speed and yaw rate.
///
/// Constructed fresh for every emission and never retained by the tree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VelocityCommand {
    pub linear_x: f64,
    pub angular_z: f64,
}

impl VelocityCommand {
    pub const fn new(linear_x: f64, angular_z: f64) -> Self {
        Self {
            linear_x,
            angular_z,
        }
    }

    /// Rotate in place.
    pub const fn turn(angular_z: f64) -> Self {
        Self::new(0.0, angular_z)
    }

    /// Drive straight ahead.
    pub const fn forward(linear_x: f64) -> Self {
        Self::new(linear_x, 0.0)
    }
}
