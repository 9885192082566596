//! Property bags passed into component invocations.
//!
//! A [`PropertyBag`] is an ordered map from [`PropKey`] to [`Value`]. Two kinds
//! of keys exist:
//!
//! - [`PropKey::Named`] keys are ordinary string keys.
//! - [`PropKey::Symbol`] keys are special keys that plain merges leave out.
//!   Only [`PropertyBag::merge_with_symbols`] copies them.
//!
//! Every entry is also either enumerable (the default) or hidden. Hidden
//! entries belong to the bag that defined them and are never copied.
//!
//! All operations allocate a fresh bag; inputs are never mutated.
//!
//! # Example
//!
//! ```
//! # use folio_core::props::PropertyBag;
//! let defaults = PropertyBag::new().with("id", "intro").with("level", 2);
//! let overrides = PropertyBag::new().with("level", 3);
//!
//! let merged = PropertyBag::merge([Some(&defaults), None, Some(&overrides)]);
//! assert_eq!(merged.get("level"), Some(&3.into()));
//! assert_eq!(merged.get("id"), Some(&"intro".into()));
//!
//! let rest = merged.without(&["level"]);
//! assert!(!rest.contains_key("level"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::value::Value;

/// Key of a [`PropertyBag`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropKey {
    /// Ordinary string key.
    Named(String),
    /// Special key, copied only by [`PropertyBag::merge_with_symbols`].
    Symbol(String),
}

impl PropKey {
    /// Returns the key name (the description for symbol keys).
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Symbol(name) => name,
        }
    }

    /// Returns `true` for [`PropKey::Symbol`].
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Symbol(name) => write!(f, "Symbol({name})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: Value,
    enumerable: bool,
}

/// Ordered mapping of named arguments passed into a render call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyBag {
    entries: IndexMap<PropKey, Entry>,
}

impl PropertyBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge of enumerable named keys.
    ///
    /// Later sources win on key collision. `None` sources are skipped, so the
    /// merge of nothing is the empty bag.
    pub fn merge<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a PropertyBag>>,
    {
        Self::merge_filtered(sources, |key| !key.is_symbol())
    }

    /// Like [`PropertyBag::merge`], but also copies enumerable symbol keys.
    pub fn merge_with_symbols<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a PropertyBag>>,
    {
        Self::merge_filtered(sources, |_| true)
    }

    fn merge_filtered<'a, I, F>(sources: I, include: F) -> Self
    where
        I: IntoIterator<Item = Option<&'a PropertyBag>>,
        F: Fn(&PropKey) -> bool,
    {
        let mut merged = Self::new();
        for source in sources.into_iter().flatten() {
            for (key, entry) in &source.entries {
                if entry.enumerable && include(key) {
                    // Re-inserting keeps the first position; the value is replaced.
                    merged.entries.insert(
                        key.clone(),
                        Entry {
                            value: entry.value.clone(),
                            enumerable: true,
                        },
                    );
                }
            }
        }
        merged
    }

    /// Returns a new bag with every enumerable entry except the excluded keys.
    ///
    /// Matching is by name, so a symbol key whose description equals an
    /// excluded name is skipped as well. Excluding an absent key is a no-op.
    pub fn without(&self, excluded: &[&str]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(key, entry)| entry.enumerable && !excluded.contains(&key.name()))
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();
        Self { entries }
    }

    /// Inserts an enumerable named entry, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(
            PropKey::Named(key.into()),
            Entry {
                value: value.into(),
                enumerable: true,
            },
        );
    }

    /// Inserts an enumerable symbol entry.
    pub fn insert_symbol(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(
            PropKey::Symbol(key.into()),
            Entry {
                value: value.into(),
                enumerable: true,
            },
        );
    }

    /// Defines a hidden entry that merges and exclusion never copy.
    pub fn define_hidden(&mut self, key: PropKey, value: impl Into<Value>) {
        self.entries.insert(
            key,
            Entry {
                value: value.into(),
                enumerable: false,
            },
        );
    }

    /// Builder-style [`PropertyBag::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value under the named key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entry(&PropKey::Named(key.to_owned()))
    }

    /// Returns the value under any key, hidden or not.
    pub fn entry(&self, key: &PropKey) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the string value under the named key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if the bag holds the named key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the key is present and enumerable.
    pub fn is_enumerable(&self, key: &PropKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.enumerable)
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropKey, &Value)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.value))
    }

    /// Iterates over enumerable named entries in insertion order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| match key {
                PropKey::Named(name) if entry.enumerable => Some((name.as_str(), &entry.value)),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(pairs: &[(&str, i32)]) -> PropertyBag {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_merge_right_most_wins() {
        let merged = PropertyBag::merge([
            Some(&bag(&[("x", 1)])),
            Some(&bag(&[("x", 2)])),
            Some(&bag(&[("x", 3)])),
        ]);

        assert_eq!(merged, bag(&[("x", 3)]));
    }

    #[test]
    fn test_merge_skips_absent_sources() {
        let a = bag(&[("a", 1)]);
        let merged = PropertyBag::merge([None, Some(&a), None]);

        assert_eq!(merged, a);
        assert!(PropertyBag::merge([None, None]).is_empty());
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let a = bag(&[("x", 1), ("y", 2)]);
        let b = bag(&[("y", 3), ("z", 4)]);
        let a_before = a.clone();
        let b_before = b.clone();

        let merged = PropertyBag::merge([Some(&a), Some(&b)]);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert_eq!(merged.get("y"), Some(&Value::from(3)));
    }

    #[test]
    fn test_merge_replaces_nested_values_wholesale() {
        let a = PropertyBag::new().with("list", vec![Value::from(1), Value::from(2)]);
        let b = PropertyBag::new().with("list", vec![Value::from(3)]);

        let merged = PropertyBag::merge([Some(&a), Some(&b)]);

        assert_eq!(merged.get("list"), Some(&Value::List(vec![Value::from(3)])));
    }

    #[test]
    fn test_merge_symbol_modes() {
        let mut a = PropertyBag::new().with("plain", 1);
        a.insert_symbol("marker", true);

        let plain = PropertyBag::merge([Some(&a)]);
        let with_symbols = PropertyBag::merge_with_symbols([Some(&a)]);

        assert_eq!(plain.len(), 1);
        assert_eq!(with_symbols.len(), 2);
        assert_eq!(
            with_symbols.entry(&PropKey::Symbol("marker".into())),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_hidden_entries_are_not_copied() {
        let mut a = PropertyBag::new().with("shown", 1);
        a.define_hidden(PropKey::Named("hidden".into()), 2);
        a.define_hidden(PropKey::Symbol("secret".into()), 3);

        assert!(!a.is_enumerable(&PropKey::Named("hidden".into())));
        assert_eq!(PropertyBag::merge_with_symbols([Some(&a)]).len(), 1);
        assert_eq!(a.without(&[]).len(), 1);
    }

    #[test]
    fn test_merge_keeps_first_position() {
        let a = bag(&[("a", 1), ("b", 2)]);
        let b = bag(&[("a", 3)]);

        let merged = PropertyBag::merge([Some(&a), Some(&b)]);
        let keys: Vec<_> = merged.named().map(|(k, _)| k).collect();

        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_without_skips_excluded_and_symbols_with_same_name() {
        let mut a = bag(&[("components", 1), ("id", 2), ("parentName", 3)]);
        a.insert_symbol("mdxType", "h2");
        a.insert_symbol("keep", true);

        let rest = a.without(&["components", "mdxType", "parentName"]);

        assert_eq!(rest.len(), 2);
        assert_eq!(rest.get("id"), Some(&Value::from(2)));
        assert!(rest.entry(&PropKey::Symbol("keep".into())).is_some());
        assert!(a.contains_key("components"));
    }

    #[test]
    fn test_without_absent_key_is_noop() {
        let a = bag(&[("x", 1)]);
        assert_eq!(a.without(&["missing"]), a);
    }

    #[test]
    fn test_get_str() {
        let a = PropertyBag::new().with("mdxType", "p").with("n", 1);
        assert_eq!(a.get_str("mdxType"), Some("p"));
        assert_eq!(a.get_str("n"), None);
        assert_eq!(a.get_str("missing"), None);
    }
}
