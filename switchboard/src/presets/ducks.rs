//! Quack strategies.
//!
//! A [`Duck`] does not decide how it quacks. It is handed a quack behavior
//! when it is built and only ever talks to it through [`Behavior`], so new
//! quacks never touch `Duck`.

use crate::{Behavior, BehaviorRegistry, Category, RegistryError, SharedBehavior};
use std::{fmt, sync::Arc};

/// The output of a quack behavior.
pub type QuackSound = &'static str;

/// A quack behavior, shared between ducks.
pub type Quack = SharedBehavior<QuackSound>;

/// The ordinary quack.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalQuack;

impl Behavior for NormalQuack {
    type Output = QuackSound;

    fn perform(&self) -> QuackSound {
        "Quack"
    }
}

/// A duck that cannot quack.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuteQuack;

impl Behavior for MuteQuack {
    type Output = QuackSound;

    fn perform(&self) -> QuackSound {
        "<< Silence >>"
    }
}

/// A rubber duck's quack.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqueakQuack;

impl Behavior for SqueakQuack {
    type Output = QuackSound;

    fn perform(&self) -> QuackSound {
        "Squeak"
    }
}

/// A duck with an injected quack behavior.
#[derive(Clone)]
pub struct Duck {
    quack: Quack,
}

impl Duck {
    /// Create a duck that quacks with `quack`.
    pub fn new<B>(quack: B) -> Self
    where
        B: Behavior<Output = QuackSound>,
    {
        Self {
            quack: Arc::new(quack),
        }
    }

    /// Create a duck from an already shared quack behavior.
    pub fn with_shared(quack: Quack) -> Self {
        Self { quack }
    }

    /// Create a duck of `kind`, taking its quack from `pond`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownKey`] if `pond` has no quack for `kind`.
    pub fn from_pond(pond: &Pond, kind: &str) -> Result<Self, RegistryError> {
        pond.resolve(kind).map(Self::with_shared)
    }

    /// Perform this duck's quack.
    pub fn behavior(&self) -> QuackSound {
        self.quack.perform()
    }

    /// The quack behavior this duck was given.
    pub fn quack(&self) -> &Quack {
        &self.quack
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck").finish_non_exhaustive()
    }
}

/// A registry of quack behaviors keyed by duck kind.
pub type Pond = BehaviorRegistry<Category, QuackSound>;

/// A pond with mallard, decoy and rubber ducks.
pub fn pond() -> Pond {
    let pond = Pond::with_capacity(3);
    pond.register(Category::from_static("mallard"), NormalQuack);
    pond.register(Category::from_static("decoy"), MuteQuack);
    pond.register(Category::from_static("rubber"), SqueakQuack);
    pond
}
