//! Lazy dispatch over resolved behaviors.

use std::{fmt, iter::FusedIterator, vec};
use switchboard_core::SharedBehavior;

/// A lazy, ordered sequence of behavior outputs.
///
/// Returned by [`BehaviorRegistry::dispatch`]. Every key has already been
/// resolved when this value exists; each call to `next` performs one
/// behavior, in the order the keys were given. The sequence keeps no cursor
/// into the registry, so later registrations do not affect it.
///
/// [`BehaviorRegistry::dispatch`]: crate::BehaviorRegistry::dispatch
pub struct Dispatch<O> {
    behaviors: vec::IntoIter<SharedBehavior<O>>,
}

impl<O: 'static> Dispatch<O> {
    pub(crate) fn new(behaviors: Vec<SharedBehavior<O>>) -> Self {
        Self {
            behaviors: behaviors.into_iter(),
        }
    }
}

impl<O: 'static> Iterator for Dispatch<O> {
    type Item = O;

    fn next(&mut self) -> Option<O> {
        self.behaviors.next().map(|behavior| behavior.perform())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.behaviors.size_hint()
    }
}

impl<O: 'static> ExactSizeIterator for Dispatch<O> {}

impl<O: 'static> FusedIterator for Dispatch<O> {}

impl<O: 'static> fmt::Debug for Dispatch<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("remaining", &self.behaviors.len())
            .finish()
    }
}
