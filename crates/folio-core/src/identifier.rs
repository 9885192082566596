//! Component names backed by string interning.
//!
//! This module provides the [`Name`] type used as the key of every
//! [`Registry`](crate::registry::Registry) lookup.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for component names.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned component name.
///
/// Names are cheap to copy, hash and compare, which keeps registry lookups on
/// the render path free of string comparisons.
///
/// # Examples
///
/// ```
/// use folio_core::identifier::Name;
///
/// let wrapper = Name::new("wrapper");
/// let heading = Name::new("h2");
///
/// let qualified = wrapper.nested(heading);
/// assert_eq!(qualified, "wrapper.h2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(DefaultSymbol);

impl Name {
    /// Creates a `Name` from a string slice.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the name
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates the parent-qualified name `"<self>.<child>"`.
    ///
    /// Registries use qualified names to override a component only when it
    /// appears directly under a given parent, e.g. `p.strong`.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::identifier::Name;
    ///
    /// let nested = Name::new("p").nested(Name::new("inlineCode"));
    /// assert_eq!(nested, "p.inlineCode");
    /// ```
    pub fn nested(&self, child: Name) -> Self {
        let mut interner = interner();
        let qualified = format!(
            "{}.{}",
            interner.resolve(self.0).unwrap_or_default(),
            interner.resolve(child.0).unwrap_or_default()
        );
        Self(interner.get_or_intern(qualified))
    }

    /// Returns an owned copy of the underlying string.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl std::str::FromStr for Name {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for Name {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Name {
    /// Allows direct comparison with string slices: `name == "h2"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
