//! # switchboard-core
//!
//! Core traits for the switchboard behavior registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only *provides* behaviors and does not need the registry
//! implementation in `switchboard-std`.
//!
//! # Building Blocks
//!
//! ## [`Behavior`]
//!
//! A unit of interchangeable logic with a single operation, `perform()`.
//! The output type is chosen by the implementation. Closures of the form
//! `Fn() -> O` are behaviors too.
//!
//! ## [`CategoryKey`] and [`Category`]
//!
//! The discriminator a registry uses to select a behavior. Any hashable,
//! comparable type works; [`Category`] is the provided string key and
//! refuses to be empty.
//!
//! # Error Types
//!
//! - [`SwitchboardError`] - Top-level error type
//! - [`RegistryError`] - Lookup and build errors
//! - [`KeyError`] - Invalid category keys

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod error;
mod key;

// Re-exports
pub use behavior::{Behavior, SharedBehavior};
pub use error::{KeyError, RegistryError, SwitchboardError};
pub use key::{Category, CategoryKey};
