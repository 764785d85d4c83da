//! Error types surfaced by the runtime API.
//!
//! Steady-state failures (a dropped command, a degenerate scan) never leave a
//! tick; they are logged and counted. Only startup failures reach callers.
use behavior_tree::EmptyComposite;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("failed to build behavior tree")]
    Topology(#[from] EmptyComposite),

    #[error("runtime requires a command publisher before building")]
    MissingPublisher,

    #[error("{worker} worker join failed")]
    WorkerJoin {
        worker: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl RuntimeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RuntimeError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure to hand a velocity command to the actuator transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("command channel closed")]
    ChannelClosed,

    #[error("command channel full")]
    ChannelFull,
}
