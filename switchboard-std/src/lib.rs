//! # switchboard-std
//!
//! Standard implementations for the switchboard behavior registry.
//!
//! This crate provides:
//! - **Registry**: [`BehaviorRegistry`], a thread-safe key → behavior mapping
//! - **Construction**: [`RegistryBuilder`], with an opt-in strict mode
//! - **Dispatch**: [`Dispatch`], the lazy, ordered output sequence
//! - **Instrumentation**: [`Instrumented`], a `tracing` span around `perform`
//! - **Testing**: counting and recording behaviors in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchboard_core;

// Modules
#[cfg(all(test, feature = "tracing"))]
mod capture;
pub mod dispatch;
pub mod instrument;
pub mod registry;
pub mod testing;

pub use dispatch::Dispatch;
pub use instrument::Instrumented;
pub use registry::{BehaviorRegistry, RegistryBuilder};
