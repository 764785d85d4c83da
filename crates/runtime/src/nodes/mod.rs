//! Leaf nodes of the avoidance tree and the context they run against.
//!
//! Condition nodes read the shared proximity observation and never emit.
//! Action nodes emit one velocity command per tick and always report
//! `Running`.

mod actions;
mod conditions;
mod context;

pub use actions::ActuatorAction;
pub use conditions::SensorGate;
pub use context::TickContext;
