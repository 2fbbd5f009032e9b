//! Testing utilities for switchboard.
//!
//! This module provides behaviors that make registry behavior observable in
//! tests.
//!
//! # Features
//!
//! - [`CountingBehavior`]: Counts how often it was performed
//! - [`RecordingBehavior`]: Appends its label to a shared log when performed

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use switchboard_core::Behavior;

// ============================================================================
// Counting Behavior
// ============================================================================

/// A behavior that counts invocations and returns a fixed output.
///
/// Clones share the counter, so keep one clone outside the registry to
/// observe how often the registered one ran.
///
/// # Example
///
/// ```rust
/// use switchboard_std::{BehaviorRegistry, testing::CountingBehavior};
///
/// let counter = CountingBehavior::new("roar");
/// let registry = BehaviorRegistry::new();
/// registry.register("lion", counter.clone());
///
/// let dispatch = registry.dispatch(&["lion", "lion"]).unwrap();
/// assert_eq!(counter.count(), 0);
///
/// assert_eq!(dispatch.count(), 2);
/// assert_eq!(counter.count(), 2);
/// ```
pub struct CountingBehavior<O> {
    count: Arc<AtomicUsize>,
    output: O,
}

impl<O> CountingBehavior<O> {
    /// Create a new counting behavior that returns `output`.
    pub fn new(output: O) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            output,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<O: Clone> Clone for CountingBehavior<O> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            output: self.output.clone(),
        }
    }
}

impl<O> Behavior for CountingBehavior<O>
where
    O: Clone + Send + Sync + 'static,
{
    type Output = O;

    fn perform(&self) -> O {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.output.clone()
    }
}

// ============================================================================
// Recording Behavior
// ============================================================================

/// A behavior that appends its label to a shared log when performed.
///
/// Useful for verifying the order in which a dispatch ran its behaviors.
///
/// # Example
///
/// ```rust
/// use switchboard_std::testing::RecordingBehavior;
/// use switchboard_core::Behavior;
///
/// let first = RecordingBehavior::new("first");
/// let second = first.sibling("second");
///
/// second.perform();
/// first.perform();
/// assert_eq!(first.log(), vec!["second", "first"]);
/// ```
pub struct RecordingBehavior {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingBehavior {
    /// Create a recording behavior with a fresh log.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create another recording behavior that writes to the same log.
    pub fn sibling(&self, label: &'static str) -> Self {
        Self {
            label,
            log: self.log.clone(),
        }
    }

    /// Get a clone of the recorded labels.
    pub fn log(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }

    /// Clear the shared log.
    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl Clone for RecordingBehavior {
    fn clone(&self) -> Self {
        self.sibling(self.label)
    }
}

impl Behavior for RecordingBehavior {
    type Output = &'static str;

    fn perform(&self) -> &'static str {
        self.log.lock().unwrap().push(self.label);
        self.label
    }
}
