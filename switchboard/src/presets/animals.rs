//! Animal sounds, resolved by animal name.
//!
//! [`zoo`] is the registry version: each sound is its own behavior, and a new
//! animal is one more `register` call. [`branching`] is the hard-coded
//! version that matches on the name; supporting a new animal means editing
//! its `match`. The two share nothing.

use crate::{Behavior, BehaviorRegistry, Category};

/// The output of an animal behavior.
pub type Sound = &'static str;

/// A registry of animal sounds keyed by animal name.
pub type Zoo = BehaviorRegistry<Category, Sound>;

/// A lion's sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roar;

impl Behavior for Roar {
    type Output = Sound;

    fn perform(&self) -> Sound {
        "roar"
    }
}

/// A mouse's sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squeak;

impl Behavior for Squeak {
    type Output = Sound;

    fn perform(&self) -> Sound {
        "squeak"
    }
}

/// A snake's sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hiss;

impl Behavior for Hiss {
    type Output = Sound;

    fn perform(&self) -> Sound {
        "hiss"
    }
}

/// A zoo that knows the lion and the mouse.
///
/// ```rust
/// use switchboard::presets::animals::{Hiss, zoo};
/// use switchboard::Category;
///
/// let zoo = zoo();
/// zoo.register(Category::from_static("snake"), Hiss);
///
/// let sounds: Vec<_> = zoo.dispatch(["lion", "mouse", "snake"]).unwrap().collect();
/// assert_eq!(sounds, ["roar", "squeak", "hiss"]);
/// ```
pub fn zoo() -> Zoo {
    let zoo = Zoo::with_capacity(2);
    zoo.register(Category::from_static("lion"), Roar);
    zoo.register(Category::from_static("mouse"), Squeak);
    zoo
}

/// Animal sounds by hard-coded branching.
pub mod branching {
    use super::Sound;

    /// The sound for `name`, or `None` for an animal this function was never
    /// taught about.
    pub fn animal_sound(name: &str) -> Option<Sound> {
        match name {
            "lion" => Some("roar"),
            "mouse" => Some("squeak"),
            "snake" => Some("hiss"),
            _ => None,
        }
    }

    /// The sounds for `names`, in order. Unknown names produce nothing.
    pub fn animal_sounds<'a, I>(names: I) -> Vec<Sound>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().filter_map(animal_sound).collect()
    }
}
