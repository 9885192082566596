//! Built-in default components.
//!
//! Every name a compiled markdown page emits has a default implementation
//! here, so a page renders even when the caller supplies no registry at all.

use std::sync::{Arc, OnceLock};

use folio_core::{
    component::{Component, Invocation},
    error::RenderError,
    identifier::Name,
    node::{HostElement, RenderNode},
    props::PropertyBag,
    registry::Registry,
};

/// Host tags rendered as themselves.
const HOST_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "code", "strong", "em", "del", "a", "img",
    "ul", "ol", "li", "blockquote", "hr", "br", "table", "thead", "tbody", "tr", "th", "td", "div",
    "span", "sup",
];

/// Markdown node names mapped onto a host tag.
const ALIASES: &[(&str, &str)] = &[
    ("inlineCode", "code"),
    ("delete", "del"),
    ("thematicBreak", "hr"),
];

/// Renders its invocation as a plain DOM element.
///
/// Attributes configured on the component act as defaults; invocation props
/// override them.
#[derive(Debug, Clone)]
pub struct HostComponent {
    tag: String,
    attributes: PropertyBag,
}

impl HostComponent {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: PropertyBag::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: PropertyBag) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Component for HostComponent {
    fn name(&self) -> &str {
        &self.tag
    }

    fn render(&self, invocation: Invocation) -> Result<RenderNode, RenderError> {
        let attributes = PropertyBag::merge_with_symbols([
            Some(&self.attributes),
            Some(&invocation.props),
        ]);
        Ok(RenderNode::Host(HostElement {
            tag: self.tag.clone(),
            attributes,
            children: invocation.children,
            node_ref: invocation.node_ref,
        }))
    }
}

/// Renders its children without a wrapping element.
///
/// This is the default `wrapper`: the layout of a page is left to whoever
/// registers a `wrapper` component.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fragment;

impl Component for Fragment {
    fn name(&self) -> &str {
        "Fragment"
    }

    fn render(&self, invocation: Invocation) -> Result<RenderNode, RenderError> {
        Ok(RenderNode::Fragment(invocation.children))
    }
}

/// Returns the built-in registry.
pub fn builtins() -> &'static Registry {
    static BUILTINS: OnceLock<Registry> = OnceLock::new();
    BUILTINS.get_or_init(|| {
        let mut registry = Registry::new();
        for tag in HOST_TAGS {
            registry.insert(*tag, Arc::new(HostComponent::new(*tag)) as Arc<dyn Component>);
        }
        for (name, tag) in ALIASES {
            registry.insert(*name, Arc::new(HostComponent::new(*tag)) as Arc<dyn Component>);
        }
        registry.insert("wrapper", Arc::new(Fragment) as Arc<dyn Component>);
        registry
    })
}

/// Looks up the built-in default for `name`.
pub fn builtin(name: Name) -> Option<&'static Arc<dyn Component>> {
    builtins().get(name)
}

/// Returns whether `tag` is a well-formed element name: an ASCII letter
/// followed by ASCII alphanumerics or `-`.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Host element for a name that nothing is registered under.
///
/// Only lowercase tag names qualify. Capitalized or dotted names denote
/// components and stay unresolved.
pub fn host_fallback(name: Name) -> Option<Arc<dyn Component>> {
    let tag = name.as_string();
    if !is_valid_tag(&tag) || !tag.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    Some(Arc::new(HostComponent::new(tag)))
}
