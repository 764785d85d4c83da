//! End-to-end run of the client over in-memory transports.

use std::io::Cursor;
use std::time::Duration;

use obstacle_client::{Client, ClientConfig};
use runtime::VelocityCommand;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::test]
async fn obstacle_scan_turns_the_robot() {
    let mut config = ClientConfig::default();
    config.avoidance.tick_period = Duration::from_millis(10);

    let scans = Cursor::new(b"{\"ranges\":[2.0,2.0,2.0,2.0,0.3,2.0,2.0,2.0,2.0]}\n".to_vec());
    let (commands, observer) = tokio::io::duplex(4096);

    // Shut down as soon as the first turn command shows up on the wire.
    let shutdown = async move {
        let mut lines = BufReader::new(observer).lines();
        let saw_turn = tokio::time::timeout(Duration::from_secs(5), async {
            while let Ok(Some(line)) = lines.next_line().await {
                let command: VelocityCommand = serde_json::from_str(&line).unwrap();
                if command == VelocityCommand::turn(0.5) {
                    return true;
                }
                assert_eq!(command, VelocityCommand::forward(0.2));
            }
            false
        })
        .await
        .expect("no turn command within 5s");
        assert!(saw_turn);
    };

    let stats = Client::new(config)
        .run(scans, commands, shutdown)
        .await
        .unwrap();

    assert_eq!(stats.scans, 1);
    assert!(stats.ticks >= 1);
    assert_eq!(stats.emit_failures, 0);
}

#[tokio::test]
async fn invalid_config_fails_before_running() {
    let mut config = ClientConfig::default();
    config.avoidance.obstacle_threshold = -1.0;

    let (commands, _observer) = tokio::io::duplex(64);
    let result = Client::new(config)
        .run(Cursor::new(Vec::new()), commands, std::future::pending())
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to construct behavior tree"));
}
