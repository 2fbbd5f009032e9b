//! Instrumentation wrapper for behaviors.

use switchboard_core::Behavior;

/// A behavior wrapper that instruments `perform` with a `tracing` span.
///
/// With the `tracing` feature disabled this is a transparent pass-through,
/// so wrapping costs nothing in builds that do not log.
pub struct Instrumented<B> {
    inner: B,
    name: &'static str,
}

impl<B> Instrumented<B> {
    /// Wrap `inner`, naming its span `name`.
    pub const fn new(inner: B, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get a reference to the wrapped behavior.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Unwrap the inner behavior.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Clone> Clone for Instrumented<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<B: Behavior> Behavior for Instrumented<B> {
    type Output = B::Output;

    #[cfg(feature = "tracing")]
    fn perform(&self) -> Self::Output {
        let span = tracing::debug_span!("perform", behavior = %self.name);
        let _entered = span.enter();
        self.inner.perform()
    }

    #[cfg(not(feature = "tracing"))]
    fn perform(&self) -> Self::Output {
        self.inner.perform()
    }
}

#[cfg(test)]
mod tests {
    use super::Instrumented;
    use crate::testing::CountingBehavior;
    use switchboard_core::Behavior;

    #[test]
    fn test_instrumented_passthrough() {
        let counter = CountingBehavior::new(5u8);
        let wrapped = Instrumented::new(counter.clone(), "five");

        assert_eq!(wrapped.name(), "five");
        assert_eq!(wrapped.perform(), 5);
        assert_eq!(wrapped.clone().perform(), 5);
        assert_eq!(counter.count(), 2);
        assert_eq!(wrapped.inner().count(), 2);
        assert_eq!(wrapped.into_inner().count(), 2);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_instrumented_opens_span() {
        use crate::capture::Capture;
        use tracing::Level;

        let capture = Capture::new(Level::DEBUG);
        let counter = CountingBehavior::new("roar");
        let wrapped = Instrumented::new(counter.clone(), "lion");

        let output = tracing::subscriber::with_default(capture.clone(), || wrapped.perform());

        assert_eq!(output, "roar");
        assert_eq!(counter.count(), 1);
        assert_eq!(capture.seen(), ["span:perform"]);
    }
}
