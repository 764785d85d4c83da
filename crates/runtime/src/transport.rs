//! Actuator-side transport abstraction.
//!
//! The tree never talks to a concrete transport. Action leaves hand their
//! command to a [`CommandPublisher`], and the composition root decides where
//! commands go.
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::command::VelocityCommand;
use crate::error::PublishError;

/// Sink for velocity commands.
///
/// `publish` is called from inside a tick and must not block.
pub trait CommandPublisher: Send + Sync {
    fn publish(&self, command: VelocityCommand) -> Result<(), PublishError>;
}

/// Publisher backed by a bounded tokio channel.
///
/// A full channel drops the command instead of stalling the tick; the next
/// tick emits a fresh one.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    tx: mpsc::Sender<VelocityCommand>,
}

impl ChannelPublisher {
    pub fn new(tx: mpsc::Sender<VelocityCommand>) -> Self {
        Self { tx }
    }

    /// Creates a publisher and the receiving end of its channel.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<VelocityCommand>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }
}

impl CommandPublisher for ChannelPublisher {
    fn publish(&self, command: VelocityCommand) -> Result<(), PublishError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => PublishError::ChannelFull,
            TrySendError::Closed(_) => PublishError::ChannelClosed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_order() {
        let (publisher, mut rx) = ChannelPublisher::channel(4);
        publisher.publish(VelocityCommand::turn(0.5)).unwrap();
        publisher.publish(VelocityCommand::forward(0.2)).unwrap();

        assert_eq!(rx.try_recv().unwrap(), VelocityCommand::turn(0.5));
        assert_eq!(rx.try_recv().unwrap(), VelocityCommand::forward(0.2));
    }

    #[test]
    fn reports_full_and_closed_channels() {
        let (publisher, rx) = ChannelPublisher::channel(1);
        publisher.publish(VelocityCommand::forward(0.2)).unwrap();
        assert_eq!(
            publisher.publish(VelocityCommand::forward(0.2)),
            Err(PublishError::ChannelFull)
        );

        drop(rx);
        assert_eq!(
            publisher.publish(VelocityCommand::forward(0.2)),
            Err(PublishError::ChannelClosed)
        );
    }
}
