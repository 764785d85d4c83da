//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! Children are evaluated in declaration order, which is also their priority
//! order: the first-declared child always gets the first chance to run.

use std::fmt;

use crate::{Behavior, Status};

/// Returned when a composite is built without any children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyComposite {
    pub kind: &'static str,
}

impl fmt::Display for EmptyComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must have at least one child", self.kind)
    }
}

impl std::error::Error for EmptyComposite {}

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// Children after the one that stopped the sequence are not ticked at all.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. Use [`Sequence::try_new`] when the
    /// children come from configuration.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        match Self::try_new(children) {
            Ok(seq) => seq,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a new sequence, rejecting an empty child list.
    pub fn try_new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self, EmptyComposite> {
        if children.is_empty() {
            return Err(EmptyComposite { kind: "Sequence" });
        }
        Ok(Self { children })
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure, // Short-circuit
                Status::Running => return Status::Running, // Short-circuit
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is a priority fallback: lower-priority children only run when every
/// higher-priority child failed on this tick.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. Use [`Selector::try_new`] when the
    /// children come from configuration.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        match Self::try_new(children) {
            Ok(sel) => sel,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a new selector, rejecting an empty child list.
    pub fn try_new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self, EmptyComposite> {
        if children.is_empty() {
            return Err(EmptyComposite { kind: "Selector" });
        }
        Ok(Self { children })
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue, // Try next child
                status => return status,     // Success or Running
            }
        }
        Status::Failure
    }
}
