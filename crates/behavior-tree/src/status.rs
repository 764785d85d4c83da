//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every tick is a fresh traversal from the root, so a status is never
/// stored between ticks. `Running` tells the parent that the node is still
/// acting and should be selected again on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    Failure,

    /// The behavior is still in progress.
    ///
    /// Actuator actions report this on every tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_exclusive() {
        for status in [Status::Success, Status::Failure, Status::Running] {
            let hits = [status.is_success(), status.is_failure(), status.is_running()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(hits, 1, "{status:?}");
        }
    }
}
