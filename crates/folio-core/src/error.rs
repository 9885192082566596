//! Errors raised while resolving and rendering components.

use thiserror::Error;

/// Error raised during a single render call.
///
/// Rendering stops at the first error; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// A named reference matched no registry entry and no built-in.
    #[error("no component registered for `{name}`")]
    Unresolved { name: String },

    /// A routing hint held something other than a component name.
    #[error("routing key `{key}` must hold a component name")]
    InvalidReference { key: String },

    /// A host element carried a malformed tag name.
    #[error("`{tag}` is not a valid element name")]
    InvalidTag { tag: String },

    #[error("render depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },

    /// Raised by a component implementation.
    #[error("component `{name}` failed: {message}")]
    Component { name: String, message: String },
}

impl RenderError {
    /// Creates a [`RenderError::Component`] error.
    pub fn component(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Component {
            name: name.into(),
            message: message.into(),
        }
    }
}
