//! Obstacle-avoidance behavior tree binary.
//!
//! Reads range scans as JSON lines on stdin, ticks the avoidance tree every
//! period, and writes velocity commands as JSON lines on stdout. Logs go to
//! stderr. Stops cleanly on Ctrl-C.
//!
//! # Examples
//!
//! ```bash
//! echo '{"ranges":[2.0,2.0,2.0,2.0,0.3,2.0,2.0,2.0,2.0]}' | cargo run -p obstacle-client
//! ```

use std::io::BufReader;

use anyhow::Result;
use obstacle_client::{Client, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting obstacle-avoidance behavior tree");
    tracing::info!(
        "Threshold: {}, turn: {}, forward: {}, period: {:?}",
        config.avoidance.obstacle_threshold,
        config.avoidance.turn_angular_speed,
        config.avoidance.forward_linear_speed,
        config.avoidance.tick_period
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for interrupt: {}", e);
        }
    };

    let stats = Client::new(config)
        .run(
            BufReader::new(std::io::stdin()),
            tokio::io::stdout(),
            shutdown,
        )
        .await?;

    tracing::info!(?stats, "Shutdown complete");
    Ok(())
}
