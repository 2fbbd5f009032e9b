//! Registry module for behavior management.
//!
//! This module provides a thread-safe registry that binds category keys to
//! behaviors, and a builder for assembling one up front.
//!
//! Resolution is a single hash lookup. Adding a variant is one `register`
//! call; no existing branch or registration has to change.

use crate::dispatch::Dispatch;
use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use switchboard_core::{Behavior, CategoryKey, RegistryError, SharedBehavior};

// ============================================================================
// BehaviorRegistry - thread-safe key -> behavior mapping
// ============================================================================

/// A thread-safe mapping from category keys to behaviors.
///
/// Every operation takes `&self`, so a registry can be shared through an
/// `Arc` or a `static` and updated while other threads resolve from it.
/// All operations are atomic with respect to one another: a single
/// `RwLock` guards the map, and no behavior is ever performed while the lock
/// is held.
///
/// # Example
/// ```rust
/// use switchboard_std::BehaviorRegistry;
///
/// let registry = BehaviorRegistry::new();
/// registry.register("lion", || "roar");
/// registry.register("mouse", || "squeak");
///
/// let sounds: Vec<_> = registry.dispatch(&["lion", "mouse"]).unwrap().collect();
/// assert_eq!(sounds, vec!["roar", "squeak"]);
/// ```
pub struct BehaviorRegistry<K, O> {
    map: RwLock<HashMap<K, SharedBehavior<O>>>,
}

impl<K, O> BehaviorRegistry<K, O>
where
    K: CategoryKey,
    O: 'static,
{
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty registry with room for `capacity` bindings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Bind `behavior` to `key`, replacing any previous binding.
    ///
    /// Registration never fails. The replaced binding, if there was one, is
    /// returned so callers that care can tell an insert from a replace.
    pub fn register<B>(&self, key: K, behavior: B) -> Option<SharedBehavior<O>>
    where
        B: Behavior<Output = O>,
    {
        self.register_shared(key, Arc::new(behavior))
    }

    /// Bind an already shared behavior to `key`, replacing any previous binding.
    ///
    /// The same `Arc` may be registered under several keys.
    pub fn register_shared(
        &self,
        key: K,
        behavior: SharedBehavior<O>,
    ) -> Option<SharedBehavior<O>> {
        // The key moves into the map, so render it first, and only if the
        // event will be recorded.
        #[cfg(feature = "tracing")]
        let label = tracing::enabled!(tracing::Level::DEBUG).then(|| format!("{:?}", key));

        let replaced = self.write().insert(key, behavior);

        #[cfg(feature = "tracing")]
        {
            if let Some(label) = label {
                tracing::debug!(
                    key = %label,
                    replaced = replaced.is_some(),
                    "registered behavior"
                );
            }
        }

        replaced
    }

    /// Remove the binding for `key`, returning it if present.
    pub fn unregister<Q>(&self, key: &Q) -> Option<SharedBehavior<O>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let removed = self.write().remove(key);

        #[cfg(feature = "tracing")]
        tracing::debug!(key = ?key, removed = removed.is_some(), "unregistered behavior");

        removed
    }

    /// Look up the behavior currently bound to `key`.
    ///
    /// Returns the registered handle itself, not a copy.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownKey`] if nothing is bound to `key`. The
    /// registry never substitutes a default.
    pub fn resolve<Q>(&self, key: &Q) -> Result<SharedBehavior<O>, RegistryError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        lookup(&*self.read(), key)
    }

    /// Resolve every key in order and return a lazy sequence of outputs.
    ///
    /// All keys are resolved under one read lock, so the sequence reflects a
    /// single consistent view of the registry. The key iterator is drained
    /// before that lock is taken, so it may itself call back into the
    /// registry. Behaviors are performed only as the returned [`Dispatch`]
    /// is advanced.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownKey`] for the first key with no binding. In
    /// that case nothing is performed.
    pub fn dispatch<'q, Q, I>(&self, keys: I) -> Result<Dispatch<O>, RegistryError>
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized + 'q,
    {
        let keys: Vec<&Q> = keys.into_iter().collect();

        let map = self.read();
        let behaviors = keys
            .into_iter()
            .map(|key| lookup(&*map, key))
            .collect::<Result<Vec<_>, _>>()?;
        drop(map);

        #[cfg(feature = "tracing")]
        tracing::trace!(count = behaviors.len(), "dispatching behaviors");

        Ok(Dispatch::new(behaviors))
    }

    /// Check if a behavior is bound to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A snapshot of the registered keys, in no particular order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.read().keys().cloned().collect()
    }

    // Every critical section is a single map operation, so a panic elsewhere
    // cannot leave the map half-updated and the guard is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, SharedBehavior<O>>> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, SharedBehavior<O>>> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lookup<K, Q, O>(
    map: &HashMap<K, SharedBehavior<O>>,
    key: &Q,
) -> Result<SharedBehavior<O>, RegistryError>
where
    K: CategoryKey + Borrow<Q>,
    Q: Hash + Eq + fmt::Debug + ?Sized,
    O: 'static,
{
    match map.get(key) {
        Some(behavior) => Ok(Arc::clone(behavior)),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = ?key, "no behavior registered");

            Err(RegistryError::unknown_key(key))
        }
    }
}

impl<K, O> Default for BehaviorRegistry<K, O>
where
    K: CategoryKey,
    O: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O> fmt::Debug for BehaviorRegistry<K, O>
where
    K: CategoryKey,
    O: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.read();
        f.debug_struct("BehaviorRegistry")
            .field("keys", &map.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a [`BehaviorRegistry`].
///
/// By default later registrations override earlier ones, exactly as
/// [`BehaviorRegistry::register`] does. Call [`strict`](Self::strict) to make
/// [`build`](Self::build) reject repeated keys instead.
///
/// # Example
/// ```rust
/// use switchboard_std::RegistryBuilder;
///
/// let registry = RegistryBuilder::new()
///     .register("lion", || "roar")
///     .register("mouse", || "squeak")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
pub struct RegistryBuilder<K, O> {
    map: HashMap<K, SharedBehavior<O>>,
    strict: bool,
    duplicate: Option<RegistryError>,
}

impl<K, O> RegistryBuilder<K, O>
where
    K: CategoryKey,
    O: 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            strict: false,
            duplicate: None,
        }
    }

    /// Reserve room for `capacity` bindings.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.map.reserve(capacity);
        self
    }

    /// Reject repeated keys at build time.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Register a behavior.
    pub fn register<B>(mut self, key: K, behavior: B) -> Self
    where
        B: Behavior<Output = O>,
    {
        self.register_mut(key, behavior);
        self
    }

    /// Register a behavior (mutable version).
    pub fn register_mut<B>(&mut self, key: K, behavior: B)
    where
        B: Behavior<Output = O>,
    {
        self.register_shared_mut(key, Arc::new(behavior));
    }

    /// Register an already shared behavior.
    pub fn register_shared(mut self, key: K, behavior: SharedBehavior<O>) -> Self {
        self.register_shared_mut(key, behavior);
        self
    }

    /// Register an already shared behavior (mutable version).
    pub fn register_shared_mut(&mut self, key: K, behavior: SharedBehavior<O>) {
        if self.duplicate.is_none() && self.map.contains_key(&key) {
            self.duplicate = Some(RegistryError::duplicate_key(&key));
        }
        self.map.insert(key, behavior);
    }

    /// Get the number of distinct keys registered so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the builder has no registrations.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// In strict mode, [`RegistryError::DuplicateKey`] naming the first key
    /// that was registered twice.
    pub fn build(self) -> Result<BehaviorRegistry<K, O>, RegistryError> {
        if self.strict {
            if let Some(err) = self.duplicate {
                return Err(err);
            }
        }
        Ok(BehaviorRegistry {
            map: RwLock::new(self.map),
        })
    }
}

impl<K, O> Default for RegistryBuilder<K, O>
where
    K: CategoryKey,
    O: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
