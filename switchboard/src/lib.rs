//! # switchboard - Pluggable Behavior Registry
//!
//! `switchboard` binds category keys to interchangeable behaviors and
//! resolves them at call time. Adding a variant is one registration; the code
//! that runs behaviors never changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use switchboard::prelude::*;
//!
//! struct Roar;
//!
//! impl Behavior for Roar {
//!     type Output = &'static str;
//!
//!     fn perform(&self) -> Self::Output {
//!         "roar"
//!     }
//! }
//!
//! let registry = BehaviorRegistry::new();
//! registry.register(Category::from_static("lion"), Roar);
//! registry.register(Category::from_static("mouse"), || "squeak");
//!
//! let sounds: Vec<_> = registry.dispatch(["lion", "mouse"]).unwrap().collect();
//! assert_eq!(sounds, ["roar", "squeak"]);
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: log registrations, lookup misses and dispatches, and enable
//!   spans in [`Instrumented`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchboard_core::{
    // Behavior
    Behavior,
    // Keys
    Category,
    CategoryKey,
    // Error types
    KeyError,
    RegistryError,
    SharedBehavior,
    SwitchboardError,
};

pub use switchboard_std::{BehaviorRegistry, Dispatch, Instrumented, RegistryBuilder};

pub mod presets;

/// Testing utilities.
pub mod testing {
    pub use switchboard_std::testing::{CountingBehavior, RecordingBehavior};
}

/// Prelude module - common imports for switchboard.
///
/// # Usage
///
/// ```rust
/// use switchboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Behavior,
        // Registry
        BehaviorRegistry,
        // Keys
        Category,
        CategoryKey,
        Dispatch,
        // Errors
        RegistryError,
        RegistryBuilder,
        SharedBehavior,
    };
}
