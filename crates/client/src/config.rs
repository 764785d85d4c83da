//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::{AvoidanceConfig, ForwardSector};

/// Configuration required to wire the avoidance runtime to its transports.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub avoidance: AvoidanceConfig,
    /// Capacity of the channel between the ticker and the command writer.
    pub command_buffer: usize,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            avoidance: AvoidanceConfig::default(),
            command_buffer: 10,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OBSTACLE_THRESHOLD` - Avoidance distance (default: 0.5)
    /// - `TURN_ANGULAR_SPEED` - Yaw rate while avoiding (default: 0.5)
    /// - `FORWARD_LINEAR_SPEED` - Cruise speed (default: 0.2)
    /// - `TICK_PERIOD_MS` - Tick period in milliseconds (default: 100)
    /// - `SECTOR_START`, `SECTOR_END`, `SECTOR_PARTS` - Forward window (default: 1, 2, 3)
    /// - `SCAN_BUFFER` - Scan queue size (default: 10)
    /// - `COMMAND_BUFFER` - Command queue size (default: 10)
    /// - `LOG_DIR` - Also write logs to `LOG_DIR/obstacle-bt.log`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let avoidance = &mut config.avoidance;

        if let Some(threshold) = parse::<f32>(lookup("OBSTACLE_THRESHOLD")) {
            avoidance.obstacle_threshold = threshold;
        }
        if let Some(speed) = parse::<f64>(lookup("TURN_ANGULAR_SPEED")) {
            avoidance.turn_angular_speed = speed;
        }
        if let Some(speed) = parse::<f64>(lookup("FORWARD_LINEAR_SPEED")) {
            avoidance.forward_linear_speed = speed;
        }
        if let Some(millis) = parse::<u64>(lookup("TICK_PERIOD_MS")) {
            avoidance.tick_period = Duration::from_millis(millis);
        }

        let sector = avoidance.sector;
        avoidance.sector = ForwardSector::new(
            parse(lookup("SECTOR_START")).unwrap_or(sector.start),
            parse(lookup("SECTOR_END")).unwrap_or(sector.end),
            parse(lookup("SECTOR_PARTS")).unwrap_or(sector.parts),
        );

        if let Some(capacity) = parse::<usize>(lookup("SCAN_BUFFER")) {
            avoidance.scan_buffer = capacity.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("COMMAND_BUFFER")) {
            config.command_buffer = capacity.max(1);
        }

        config.log_dir = lookup("LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
