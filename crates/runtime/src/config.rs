//! Tunable parameters of the avoidance tree and its scheduling.
use std::time::Duration;

use crate::error::{Result, RuntimeError};
use crate::scan::ForwardSector;

/// Configuration shared by the tree builder, the ticker and the sensor worker.
#[derive(Debug, Clone, PartialEq)]
pub struct AvoidanceConfig {
    /// Readings strictly closer than this trigger avoidance.
    pub obstacle_threshold: f32,
    /// Yaw rate sent while turning away from an obstacle.
    pub turn_angular_speed: f64,
    /// Forward speed sent when the way ahead is clear.
    pub forward_linear_speed: f64,
    /// Wall-clock period between ticks.
    pub tick_period: Duration,
    /// Window of each scan considered "ahead".
    pub sector: ForwardSector,
    /// Capacity of the scan channel feeding the sensor worker.
    pub scan_buffer: usize,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: 0.5,
            turn_angular_speed: 0.5,
            forward_linear_speed: 0.2,
            tick_period: Duration::from_millis(100),
            sector: ForwardSector::MIDDLE_THIRD,
            scan_buffer: 10,
        }
    }
}

impl AvoidanceConfig {
    /// Rejects values the tree cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.obstacle_threshold.is_finite() || self.obstacle_threshold <= 0.0 {
            return Err(RuntimeError::invalid(
                "obstacle_threshold",
                format!("must be a positive finite distance, got {}", self.obstacle_threshold),
            ));
        }
        if !self.turn_angular_speed.is_finite() {
            return Err(RuntimeError::invalid(
                "turn_angular_speed",
                format!("must be finite, got {}", self.turn_angular_speed),
            ));
        }
        if !self.forward_linear_speed.is_finite() {
            return Err(RuntimeError::invalid(
                "forward_linear_speed",
                format!("must be finite, got {}", self.forward_linear_speed),
            ));
        }
        if self.tick_period.is_zero() {
            return Err(RuntimeError::invalid("tick_period", "must be non-zero"));
        }
        if !self.sector.is_valid() {
            return Err(RuntimeError::invalid(
                "sector",
                format!(
                    "needs start < end <= parts, got {}..{} of {}",
                    self.sector.start, self.sector.end, self.sector.parts
                ),
            ));
        }
        if self.scan_buffer == 0 {
            return Err(RuntimeError::invalid("scan_buffer", "must be at least 1"));
        }
        Ok(())
    }
}
