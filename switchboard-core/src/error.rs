//! Error types for switchboard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchboardError`] - Top-level error type for all switchboard operations
//! - [`RegistryError`] - Errors from resolving or building a registry
//! - [`KeyError`] - Errors from constructing a category key

use thiserror::Error;

/// Top-level error type for all switchboard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchboardError {
    /// An error occurred in a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A category key was rejected.
    #[error("key error: {0}")]
    Key(#[from] KeyError),
}

/// Errors that can occur when resolving against or building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No behavior is bound to the given key.
    #[error("no behavior registered for key: {0}")]
    UnknownKey(String),

    /// A strict builder saw the same key twice.
    #[error("behavior already registered for key: {0}")]
    DuplicateKey(String),
}

impl RegistryError {
    /// Build an [`UnknownKey`](RegistryError::UnknownKey) error from any debuggable key.
    pub fn unknown_key<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        RegistryError::UnknownKey(format!("{:?}", key))
    }

    /// Build a [`DuplicateKey`](RegistryError::DuplicateKey) error from any debuggable key.
    pub fn duplicate_key<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        RegistryError::DuplicateKey(format!("{:?}", key))
    }

    /// Returns true if this is a lookup miss.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, RegistryError::UnknownKey(_))
    }
}

/// Errors that can occur when constructing a [`Category`](crate::Category).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The category name was empty.
    #[error("category name must not be empty")]
    Empty,
}
