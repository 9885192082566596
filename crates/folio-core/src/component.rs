//! The [`Component`] trait implemented by every rendering implementation.

use std::{fmt, sync::Arc};

use crate::{error::RenderError, node::RenderNode, node_ref::NodeRef, props::PropertyBag};

/// Arguments of a single component invocation.
///
/// `props` has already been stripped of routing keys. `children` are the
/// trailing node descriptors of the call, forwarded verbatim and in order.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub props: PropertyBag,
    pub children: Vec<RenderNode>,
    /// Reference handle to forward to whatever host element this renders into.
    pub node_ref: Option<NodeRef>,
}

impl Invocation {
    pub fn new(props: PropertyBag, children: Vec<RenderNode>) -> Self {
        Self {
            props,
            children,
            node_ref: None,
        }
    }

    pub fn with_node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }
}

/// A concrete rendering implementation.
///
/// Implementations return a [`RenderNode`] which the renderer expands further,
/// so a component may return other (named or direct) elements.
pub trait Component: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Renders one invocation.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the implementation cannot render the
    /// given arguments.
    fn render(&self, invocation: Invocation) -> Result<RenderNode, RenderError>;
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.name())
    }
}

/// A [`Component`] backed by a closure.
pub struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> Component for FnComponent<F>
where
    F: Fn(Invocation) -> Result<RenderNode, RenderError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, invocation: Invocation) -> Result<RenderNode, RenderError> {
        (self.render)(invocation)
    }
}

/// Wraps a closure into a shareable [`Component`].
///
/// # Examples
///
/// ```
/// use folio_core::{component::component_fn, node::RenderNode};
///
/// let shout = component_fn("Shout", |invocation| {
///     let text = invocation.props.get_str("text").unwrap_or_default().to_uppercase();
///     Ok(RenderNode::from(text))
/// });
/// assert_eq!(shout.name(), "Shout");
/// ```
pub fn component_fn<F>(name: impl Into<String>, render: F) -> Arc<dyn Component>
where
    F: Fn(Invocation) -> Result<RenderNode, RenderError> + Send + Sync + 'static,
{
    Arc::new(FnComponent {
        name: name.into(),
        render,
    })
}
