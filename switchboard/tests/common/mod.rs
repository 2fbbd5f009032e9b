#![allow(dead_code)]

use switchboard::{Behavior, BehaviorRegistry, Category};

// ============================================================================
// Test Behaviors
// ============================================================================

pub struct Roar;

impl Behavior for Roar {
    type Output = String;

    fn perform(&self) -> String {
        "roar".to_string()
    }
}

pub struct Squeak;

impl Behavior for Squeak {
    type Output = String;

    fn perform(&self) -> String {
        "squeak".to_string()
    }
}

pub struct Hiss;

impl Behavior for Hiss {
    type Output = String;

    fn perform(&self) -> String {
        "hiss".to_string()
    }
}

/// Repeats a word, to tell apart two behaviors of the same type.
pub struct Repeat {
    pub word: &'static str,
    pub times: usize,
}

impl Behavior for Repeat {
    type Output = String;

    fn perform(&self) -> String {
        self.word.repeat(self.times)
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn category(name: &str) -> Category {
    Category::new(name).unwrap()
}

pub fn animals() -> BehaviorRegistry<Category, String> {
    let registry = BehaviorRegistry::new();
    registry.register(category("lion"), Roar);
    registry.register(category("mouse"), Squeak);
    registry
}
