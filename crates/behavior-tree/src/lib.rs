//! Lightweight behavior tree engine for fixed-rate reactive control.
//!
//! Trees are re-evaluated from the root on every tick. No node keeps
//! evaluation state between ticks, so the outcome of a tick depends only on
//! the context handed to the root and the fixed child order.
//!
//! - **Three-valued status**: Success, Failure, Running
//! - **Priority by declaration order**: the first child is tried first
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{EmptyComposite, Selector, Sequence};
pub use status::Status;
