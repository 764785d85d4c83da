//! Composition root wiring the avoidance runtime to its transports.
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON scans) ──► scan reader thread ──► Runtime ──► command writer ──► stdout
//! ```
//!
//! The [`Client`] owns nothing but configuration; everything it starts is
//! torn down before [`Client::run`] returns.

pub mod config;
pub mod logging;
pub mod transport;

use std::future::Future;
use std::io::BufRead;

pub use config::ClientConfig;

use anyhow::{Context, Result};
use runtime::{ChannelPublisher, Runtime, TickStats};
use tokio::io::AsyncWrite;
use tracing::info;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Start the command writer and the runtime
/// 2. Start the scan reader on its own thread
/// 3. Wait for the shutdown future
/// 4. Stop the runtime (ticker first), then let the writer drain and exit
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Run until `shutdown` resolves.
    ///
    /// Fails only if the runtime cannot be constructed or a worker panics.
    pub async fn run<R, W, F>(self, scans: R, commands: W, shutdown: F) -> Result<TickStats>
    where
        R: BufRead + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
        F: Future<Output = ()>,
    {
        let (publisher, command_rx) = ChannelPublisher::channel(self.config.command_buffer);
        let writer = tokio::spawn(transport::write_commands(command_rx, commands));

        let runtime = Runtime::builder()
            .config(self.config.avoidance.clone())
            .publisher(publisher)
            .build()
            .await
            .context("failed to construct behavior tree")?;

        // The reader may stay blocked on input after shutdown; it exits on
        // its next line because the scan channel is closed by then.
        let scan_tx = runtime.scan_sender();
        std::thread::Builder::new()
            .name("scan-reader".into())
            .spawn(move || transport::read_scans(scans, &scan_tx))
            .context("failed to spawn scan reader")?;

        shutdown.await;
        info!(ticker = ?runtime.ticker_state(), "Shutdown requested");

        let stats = runtime.shutdown().await?;
        let written = writer.await.context("command writer task failed")?;
        info!(written, "Command stream drained");

        Ok(stats)
    }
}
