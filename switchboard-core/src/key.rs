//! Category keys.

use crate::error::KeyError;
use std::{borrow::Borrow, fmt, hash::Hash, str::FromStr, sync::Arc};

/// A discriminator a registry can select behaviors by.
///
/// Implemented for every `Eq + Hash + Debug + Send + Sync + 'static` type, so
/// enums, integers and [`Category`] all work out of the box. No ordering is
/// implied.
pub trait CategoryKey: Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> CategoryKey for T where T: Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// A non-empty category name.
///
/// Emptiness is rejected at construction, so a registry keyed by `Category`
/// can never be handed an invalid key. Cloning is O(1).
///
/// `Category` borrows as `str`, so lookups accept plain string slices:
///
/// ```rust
/// use std::collections::HashMap;
/// use switchboard_core::Category;
///
/// let mut map = HashMap::new();
/// map.insert(Category::new("lion").unwrap(), 1);
/// assert_eq!(map.get("lion"), Some(&1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(Arc<str>);

impl Category {
    /// Create a category, rejecting empty names.
    pub fn new(name: impl AsRef<str>) -> Result<Self, KeyError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(Arc::from(name)))
    }

    /// Create a category from a string literal.
    ///
    /// # Panics
    ///
    /// If `name` is empty. Use [`Category::new`] for names that are not
    /// known at compile time.
    pub fn from_static(name: &'static str) -> Self {
        match Self::new(name) {
            Ok(category) => category,
            Err(_) => panic!("category name must not be empty"),
        }
    }

    /// The category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Debug renders like the underlying string so error messages stay readable.
impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Category {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Category {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Category {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, KeyError};

    #[test]
    fn test_empty_category_rejected() {
        assert_eq!(Category::new(""), Err(KeyError::Empty));
        assert_eq!("".parse::<Category>(), Err(KeyError::Empty));
        assert_eq!(Category::try_from(String::new()), Err(KeyError::Empty));
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_from_static_rejects_empty() {
        Category::from_static("");
    }

    #[test]
    fn test_category_formatting() {
        let lion = Category::new("lion").unwrap();
        assert_eq!(lion.as_str(), "lion");
        assert_eq!(lion.to_string(), "lion");
        assert_eq!(format!("{:?}", lion), "\"lion\"");
    }

    #[test]
    fn test_category_clone_shares_name() {
        let lion = Category::new("lion").unwrap();
        let other = lion.clone();
        assert_eq!(lion, other);
        assert!(std::ptr::eq(lion.as_str(), other.as_str()));
    }
}
