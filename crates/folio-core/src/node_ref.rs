//! Reference-forwarding handles.

use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Identifier of a host element in a rendered document.
///
/// Ids are assigned in document order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle through which a caller obtains the host element an
/// invocation finally rendered into.
///
/// Clones share the same cell. The renderer fills the cell when the host
/// element materializes; re-rendering overwrites it.
#[derive(Clone, Default)]
pub struct NodeRef {
    target: Arc<Mutex<Option<ElementId>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attached element, if the handle has been rendered.
    pub fn get(&self) -> Option<ElementId> {
        *self.target.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Attaches the handle to `id`.
    pub fn attach(&self, id: ElementId) {
        *self.target.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(id);
    }

    /// Returns `true` if both handles share the same cell.
    pub fn same_handle(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}
