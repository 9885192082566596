//! Component registries mapping names to implementations.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{component::Component, identifier::Name};

/// Mapping from component name to a concrete implementation.
///
/// A registry is cheap to clone (entries are reference counted) and is never
/// mutated once shared: overriding produces a new registry through
/// [`Registry::merged`].
#[derive(Clone, Default)]
pub struct Registry {
    components: HashMap<Name, Arc<dyn Component>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<Name>, component: Arc<dyn Component>) {
        self.components.insert(name.into(), component);
    }

    /// Builder-style [`Registry::insert`].
    pub fn with(mut self, name: impl Into<Name>, component: Arc<dyn Component>) -> Self {
        self.insert(name, component);
        self
    }

    /// Returns the implementation registered under `name`.
    pub fn get(&self, name: Name) -> Option<&Arc<dyn Component>> {
        self.components.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.components.contains_key(&name)
    }

    /// Returns a new registry holding `self` overridden by `overrides`.
    ///
    /// Neither input is modified. Entries of `overrides` win on collision.
    pub fn merged(&self, overrides: &Registry) -> Registry {
        let mut components = self.components.clone();
        components.extend(
            overrides
                .components
                .iter()
                .map(|(name, component)| (*name, Arc::clone(component))),
        );
        Registry { components }
    }

    /// Iterates over registered names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.components.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl PartialEq for Registry {
    /// Two registries are equal when every name maps to the same implementation.
    fn eq(&self, other: &Self) -> bool {
        self.components.len() == other.components.len()
            && self.components.iter().all(|(name, component)| {
                other
                    .components
                    .get(name)
                    .is_some_and(|candidate| Arc::ptr_eq(component, candidate))
            })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.names().map(|name| name.to_string()).collect();
        names.sort();
        f.debug_set().entries(names).finish()
    }
}
