//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Behavior, EmptyComposite, Selector, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Fallible variant of [`sequence`].
pub fn try_sequence<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
) -> Result<Box<dyn Behavior<C>>, EmptyComposite> {
    Ok(Box::new(Sequence::try_new(children)?))
}

/// Fallible variant of [`selector`].
pub fn try_selector<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
) -> Result<Box<dyn Behavior<C>>, EmptyComposite> {
    Ok(Box::new(Selector::try_new(children)?))
}
