//! JSON-lines transports for scans and commands.
//!
//! Scans arrive one JSON object per line (`{"ranges":[...]}`) and commands
//! leave the same way (`{"linear_x":0.2,"angular_z":0.0}`).
use std::io::BufRead;

use runtime::{RangeScan, VelocityCommand};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Reads scans from `reader` and forwards them to the sensor worker.
///
/// Blocking; run it on a dedicated thread. Malformed lines are skipped.
/// Returns the number of scans forwarded once input ends or the runtime
/// stops accepting scans.
pub fn read_scans<R: BufRead>(reader: R, scan_tx: &mpsc::Sender<RangeScan>) -> usize {
    let mut forwarded = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to read scan input: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<RangeScan>(line) {
            Ok(scan) => {
                if scan_tx.blocking_send(scan).is_err() {
                    debug!("scan channel closed, stopping reader");
                    break;
                }
                forwarded += 1;
            }
            Err(e) => warn!(line = index + 1, "skipping malformed scan: {}", e),
        }
    }

    info!(forwarded, "scan input finished");
    forwarded
}

/// Writes every command received on `rx` to `writer`, one per line.
///
/// A failed write is logged and the command dropped; the ticker sends a
/// fresh one on the next tick. Returns the number of commands written once
/// every publisher is gone.
pub async fn write_commands<W>(mut rx: mpsc::Receiver<VelocityCommand>, mut writer: W) -> u64
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;

    while let Some(command) = rx.recv().await {
        let mut line = match serde_json::to_vec(&command) {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to encode command: {}", e);
                continue;
            }
        };
        line.push(b'\n');

        let result = async {
            writer.write_all(&line).await?;
            writer.flush().await
        }
        .await;

        match result {
            Ok(()) => written += 1,
            Err(e) => warn!("failed to write command: {}", e),
        }
    }

    debug!(written, "command stream closed");
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::ForwardSector;
    use std::io::Cursor;

    #[test]
    fn forwards_valid_scans_and_skips_garbage() {
        let input = "{\"ranges\":[2.0,0.3,2.0]}\n\nnot json\n{\"ranges\":[]}\n";
        let (tx, mut rx) = mpsc::channel(8);

        assert_eq!(read_scans(Cursor::new(input), &tx), 2);
        assert_eq!(rx.try_recv().unwrap().ranges, vec![2.0, 0.3, 2.0]);
        assert!(rx.try_recv().unwrap().ranges.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn scans_with_no_return_readings_are_forwarded() {
        let mut ranges = vec![2.0; 9];
        ranges[0] = f32::INFINITY;
        ranges[3] = 0.3;
        ranges[4] = f32::INFINITY;
        let line = serde_json::to_string(&RangeScan::new(ranges)).unwrap();
        let (tx, mut rx) = mpsc::channel(8);

        assert_eq!(read_scans(Cursor::new(format!("{line}\n")), &tx), 1);
        let scan = rx.try_recv().unwrap();
        assert!(scan.ranges[0].is_infinite());
        assert_eq!(scan.forward_min(ForwardSector::default()), Ok(0.3));
    }

    #[test]
    fn stops_when_runtime_is_gone() {
        let input = "{\"ranges\":[1.0]}\n{\"ranges\":[1.0]}\n";
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        assert_eq!(read_scans(Cursor::new(input), &tx), 0);
    }

    #[tokio::test]
    async fn writes_one_json_object_per_line() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(VelocityCommand::turn(0.5)).await.unwrap();
        tx.send(VelocityCommand::forward(0.2)).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        assert_eq!(write_commands(rx, &mut out).await, 2);

        let lines: Vec<VelocityCommand> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![VelocityCommand::turn(0.5), VelocityCommand::forward(0.2)]
        );
    }
}
