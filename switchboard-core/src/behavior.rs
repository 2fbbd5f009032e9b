//! # Behavior
//!
//! The interchangeable unit a registry hands out.
//!
//! A behavior exposes exactly one operation, [`Behavior::perform`]. Callers
//! that hold a behavior never learn its concrete type, which is what lets a
//! registry add new variants without touching the code that runs them.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl Behavior for Roar { ... }`
//! 2. **Direct closure**: `|| "roar".to_string()`
//! 3. **Injected collaborators**: a behavior may take any dependency through
//!    its constructor; the registry never constructs or manages them.

use std::sync::Arc;

/// A unit of interchangeable logic bound to a category key.
///
/// Behaviors are immutable once constructed: `perform` takes `&self`, and a
/// behavior shared through a registry may be performed from many threads at
/// once.
///
/// # Example
///
/// ```rust
/// use switchboard_core::Behavior;
///
/// struct Roar;
///
/// impl Behavior for Roar {
///     type Output = &'static str;
///
///     fn perform(&self) -> Self::Output {
///         "roar"
///     }
/// }
///
/// assert_eq!(Roar.perform(), "roar");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Behavior`",
    label = "missing `Behavior` implementation",
    note = "Implement `Behavior` with a `perform` method, or use a `Fn() -> Output` closure."
)]
pub trait Behavior: Send + Sync + 'static {
    /// The result of performing this behavior.
    type Output;

    /// Runs the behavior.
    fn perform(&self) -> Self::Output;
}

/// A type-erased, reference-counted behavior as stored in a registry.
///
/// Two handles to the same registration compare equal under [`Arc::ptr_eq`].
pub type SharedBehavior<O> = Arc<dyn Behavior<Output = O>>;

// Blanket impl for closures
impl<F, O> Behavior for F
where
    F: Fn() -> O + Send + Sync + 'static,
{
    type Output = O;

    fn perform(&self) -> Self::Output {
        (self)()
    }
}
