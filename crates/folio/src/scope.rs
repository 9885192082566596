//! Scoped registry propagation.
//!
//! A [`Scope`] is the registry snapshot visible at one position of the render
//! tree. Scopes are passed down explicitly; a provider derives a child scope
//! and hands it to the subtree, leaving its own scope untouched. Leaving the
//! subtree, on any path, therefore restores the previous view without any
//! cleanup step, and sibling subtrees never observe each other's overrides.

use std::sync::Arc;

use log::trace;

use folio_core::{node::Overrides, registry::Registry};

/// Registry view at one render position.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    registry: Arc<Registry>,
}

impl Scope {
    /// Root scope with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root scope seeded with `registry`.
    pub fn with_root(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the registry visible at this position.
    pub fn current_registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Derives the scope seen by a subtree below a provider.
    ///
    /// Empty map overrides keep the very same registry allocation, so
    /// descendants can detect an unchanged view with [`Arc::ptr_eq`].
    pub fn provide(&self, overrides: &Overrides) -> Scope {
        match overrides {
            Overrides::Map(map) if map.is_empty() => self.clone(),
            Overrides::Map(map) => {
                trace!(overrides = map.len(); "Merging registry overrides");
                Scope {
                    registry: Arc::new(self.registry.merged(map)),
                }
            }
            Overrides::With(compute) => Scope {
                registry: Arc::new(compute(&self.registry)),
            },
        }
    }

    /// Runs `render_subtree` with `overrides` visible, returning its result.
    ///
    /// `self` is borrowed immutably, so the caller's view is the same before
    /// and after the call regardless of how the closure exits.
    pub fn with_registry<T, F>(&self, overrides: impl Into<Overrides>, render_subtree: F) -> T
    where
        F: FnOnce(&Scope) -> T,
    {
        let child = self.provide(&overrides.into());
        render_subtree(&child)
    }
}
