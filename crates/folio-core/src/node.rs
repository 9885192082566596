//! Render tree nodes.
//!
//! A content unit describes its body as a tree of [`RenderNode`]s. Composite
//! [`Element`]s still need to be resolved through a registry; [`HostElement`]s
//! are plain DOM elements whose children may still contain unresolved nodes.

use std::{fmt, sync::Arc};

use crate::{
    component::Component, identifier::Name, node_ref::NodeRef, props::PropertyBag,
    registry::Registry, value::format_number,
};

/// Reference to the implementation of a composite node.
///
/// The variant tag decides how a reference is resolved: a [`ComponentRef::Named`]
/// reference always goes through the registry, a [`ComponentRef::Direct`]
/// reference is an implementation already.
#[derive(Clone)]
pub enum ComponentRef {
    Named(Name),
    Direct(Arc<dyn Component>),
}

impl ComponentRef {
    /// Returns the name for [`ComponentRef::Named`].
    pub fn name(&self) -> Option<Name> {
        match self {
            Self::Named(name) => Some(*name),
            Self::Direct(_) => None,
        }
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "Named({name})"),
            Self::Direct(component) => write!(f, "Direct({})", component.name()),
        }
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::Named(Name::new(name))
    }
}

impl From<Name> for ComponentRef {
    fn from(name: Name) -> Self {
        Self::Named(name)
    }
}

impl From<Arc<dyn Component>> for ComponentRef {
    fn from(component: Arc<dyn Component>) -> Self {
        Self::Direct(component)
    }
}

/// A composite node awaiting resolution.
#[derive(Debug, Clone)]
pub struct Element {
    pub component: ComponentRef,
    pub props: PropertyBag,
    pub children: Vec<RenderNode>,
    pub node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(component: impl Into<ComponentRef>, props: PropertyBag) -> Self {
        Self {
            component: component.into(),
            props,
            children: Vec::new(),
            node_ref: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

/// A resolved DOM element.
#[derive(Debug, Clone)]
pub struct HostElement {
    pub tag: String,
    pub attributes: PropertyBag,
    pub children: Vec<RenderNode>,
    pub node_ref: Option<NodeRef>,
}

impl HostElement {
    pub fn new(tag: impl Into<String>, attributes: PropertyBag) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            node_ref: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Registry override applied by a [`Provider`].
#[derive(Clone)]
pub enum Overrides {
    /// Entries merged over the registry visible at the provider.
    Map(Registry),
    /// Computes the child registry from the registry visible at the provider.
    With(Arc<dyn Fn(&Registry) -> Registry + Send + Sync>),
}

impl Overrides {
    /// Returns `true` for an empty [`Overrides::Map`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Map(registry) if registry.is_empty())
    }
}

impl Default for Overrides {
    fn default() -> Self {
        Self::Map(Registry::new())
    }
}

impl From<Registry> for Overrides {
    fn from(registry: Registry) -> Self {
        Self::Map(registry)
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(registry) => f.debug_tuple("Map").field(registry).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

/// Makes an overridden registry visible to its children only.
#[derive(Debug, Clone, Default)]
pub struct Provider {
    pub overrides: Overrides,
    pub children: Vec<RenderNode>,
}

/// A node of the render tree.
#[derive(Debug, Clone, Default)]
pub enum RenderNode {
    /// Renders nothing.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Element(Element),
    Host(HostElement),
    Fragment(Vec<RenderNode>),
    Provider(Provider),
}

impl RenderNode {
    /// Creates a provider node scoping `overrides` to `children`.
    pub fn provider(
        overrides: impl Into<Overrides>,
        children: impl IntoIterator<Item = RenderNode>,
    ) -> Self {
        Self::Provider(Provider {
            overrides: overrides.into(),
            children: children.into_iter().collect(),
        })
    }

    /// Returns the text of primitive nodes.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

impl From<&str> for RenderNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RenderNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RenderNode {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<HostElement> for RenderNode {
    fn from(element: HostElement) -> Self {
        Self::Host(element)
    }
}
