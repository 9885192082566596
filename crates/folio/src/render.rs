//! Depth-first expansion of render trees into documents.

use log::{debug, trace};

use folio_core::{error::RenderError, node::RenderNode, node_ref::ElementId, value::format_number};

use crate::{
    builtins,
    dom::{Document, DomElement, DomNode},
    resolve,
    scope::Scope,
};

/// Default bound on nesting, counted in expansion steps.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest nesting bound a renderer accepts. Expansion recurses on the call
/// stack, so larger bounds could overflow it before `DepthExceeded` is raised.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Expands [`RenderNode`] trees into [`Document`]s.
///
/// The renderer holds no per-render state, so one instance can serve any
/// number of independent renders.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Renderer {
    /// Creates a renderer; `max_depth` is capped at [`MAX_DEPTH_LIMIT`].
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Renders `node` with `scope` as the root registry view.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError`] raised while resolving or invoking a
    /// component; no partial document is returned.
    pub fn render(&self, node: RenderNode, scope: &Scope) -> Result<Document, RenderError> {
        let mut pass = Pass {
            max_depth: self.max_depth,
            next_id: 0,
        };
        let mut nodes = Vec::new();
        pass.expand(node, scope, 0, &mut nodes)?;
        debug!(elements = pass.next_id; "Render pass finished");
        Ok(Document::new(nodes))
    }
}

/// State of a single render call.
struct Pass {
    max_depth: usize,
    next_id: usize,
}

impl Pass {
    fn expand(
        &mut self,
        node: RenderNode,
        scope: &Scope,
        depth: usize,
        out: &mut Vec<DomNode>,
    ) -> Result<(), RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        match node {
            RenderNode::Empty => {}
            RenderNode::Text(text) => out.push(DomNode::Text(text)),
            RenderNode::Number(n) => out.push(DomNode::Text(format_number(n))),
            RenderNode::Fragment(children) => {
                for child in children {
                    self.expand(child, scope, depth + 1, out)?;
                }
            }
            RenderNode::Provider(provider) => {
                let child_scope = scope.provide(&provider.overrides);
                for child in provider.children {
                    self.expand(child, &child_scope, depth + 1, out)?;
                }
            }
            RenderNode::Element(element) => {
                let rendered = resolve::dispatch(scope, element)?;
                self.expand(rendered, scope, depth + 1, out)?;
            }
            RenderNode::Host(host) => {
                if !builtins::is_valid_tag(&host.tag) {
                    return Err(RenderError::InvalidTag { tag: host.tag });
                }
                let id = ElementId::new(self.next_id);
                self.next_id += 1;
                if let Some(node_ref) = &host.node_ref {
                    node_ref.attach(id);
                }
                trace!(tag = host.tag.as_str(), id = id.index(); "Materializing host element");

                let mut children = Vec::with_capacity(host.children.len());
                for child in host.children {
                    self.expand(child, scope, depth + 1, &mut children)?;
                }
                out.push(DomNode::Element(DomElement {
                    id,
                    tag: host.tag,
                    attributes: host.attributes,
                    children,
                }));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core::{
        component::{Component, component_fn},
        node::{ComponentRef, Element, HostElement},
        node_ref::NodeRef,
        props::PropertyBag,
        registry::Registry,
    };

    use super::*;
    use crate::mdx;

    #[test]
    fn test_primitives_and_fragments_flatten() {
        let node = RenderNode::Fragment(vec![
            "a".into(),
            RenderNode::Empty,
            RenderNode::Fragment(vec![RenderNode::Number(1.0), "b".into()]),
        ]);

        let document = Renderer::default().render(node, &Scope::new()).unwrap();

        assert_eq!(document.nodes().len(), 3);
        assert_eq!(document.text_content(), "a1b");
    }

    #[test]
    fn test_named_elements_resolve_to_builtins() {
        let node = mdx(
            "p",
            PropertyBag::new(),
            [
                "Install ".into(),
                mdx("inlineCode", PropertyBag::new().with("parentName", "p"), ["cmake".into()]),
            ],
        );

        let document = Renderer::default().render(node, &Scope::new()).unwrap();

        let paragraph = document.elements().next().unwrap();
        assert_eq!(paragraph.tag, "p");
        let code = paragraph.child_elements().next().unwrap();
        assert_eq!(code.tag, "code");
        assert_eq!(code.text_content(), "cmake");
        assert!(code.attributes.is_empty());
    }

    #[test]
    fn test_provider_scopes_overrides_to_subtree() {
        let bold = component_fn("Bold", |invocation| {
            Ok(HostElement::new("b", invocation.props)
                .with_children(invocation.children)
                .into())
        });
        let node = RenderNode::Fragment(vec![
            RenderNode::provider(
                Registry::new().with("strong", bold),
                [mdx("strong", PropertyBag::new(), ["inside".into()])],
            ),
            mdx("strong", PropertyBag::new(), ["outside".into()]),
        ]);

        let document = Renderer::default().render(node, &Scope::new()).unwrap();

        let tags: Vec<_> = document.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["b", "strong"]);
    }

    #[test]
    fn test_components_returning_named_elements_are_expanded() {
        let note = component_fn("Note", |invocation| {
            Ok(mdx(
                "div",
                PropertyBag::new().with("className", "note"),
                invocation.children,
            ))
        });
        let scope = Scope::with_root(Registry::new().with("Note", note));

        let document = Renderer::default()
            .render(mdx("Note", PropertyBag::new(), ["careful".into()]), &scope)
            .unwrap();

        let div = document.elements().next().unwrap();
        assert_eq!(div.tag, "div");
        assert_eq!(div.attributes.get_str("className"), Some("note"));
    }

    #[test]
    fn test_node_ref_is_forwarded_to_host_element() {
        let node_ref = NodeRef::new();
        let forward: Arc<dyn Component> = component_fn("Section", |invocation| {
            let mut host =
                HostElement::new("section", invocation.props).with_children(invocation.children);
            host.node_ref = invocation.node_ref;
            Ok(host.into())
        });
        let element = Element::new(ComponentRef::Direct(forward), PropertyBag::new())
            .with_children([mdx("h2", PropertyBag::new(), ["Title".into()])])
            .with_node_ref(node_ref.clone());

        let document = Renderer::default()
            .render(RenderNode::Element(element), &Scope::new())
            .unwrap();

        let id = node_ref.get().expect("Handle should be attached");
        let target = document.element(id).unwrap();
        assert_eq!(target.tag, "section");
        assert_eq!(target.text_content(), "Title");
    }

    #[test]
    fn test_builtin_host_receives_node_ref() {
        let node_ref = NodeRef::new();
        let element =
            Element::new("pre", PropertyBag::new()).with_node_ref(node_ref.clone());

        let document = Renderer::default()
            .render(
                mdx("div", PropertyBag::new(), [RenderNode::Element(element)]),
                &Scope::new(),
            )
            .unwrap();

        let id = node_ref.get().unwrap();
        assert_eq!(id.index(), 1);
        assert_eq!(document.element(id).unwrap().tag, "pre");
    }

    #[test]
    fn test_unlisted_tag_renders_as_host_element() {
        let node = mdx(
            "p",
            PropertyBag::new(),
            [
                "press ".into(),
                mdx("kbd", PropertyBag::new().with("parentName", "p"), ["Ctrl".into()]),
            ],
        );

        let document = Renderer::default().render(node, &Scope::new()).unwrap();

        let paragraph = document.elements().next().unwrap();
        let kbd = paragraph.child_elements().next().unwrap();
        assert_eq!(kbd.tag, "kbd");
        assert_eq!(kbd.text_content(), "Ctrl");
        assert!(kbd.attributes.is_empty());
    }

    #[test]
    fn test_invalid_host_tag_aborts_render() {
        let node = RenderNode::Host(HostElement::new("p><script", PropertyBag::new()));

        let result = Renderer::default().render(node, &Scope::new());

        assert_eq!(
            result.err(),
            Some(RenderError::InvalidTag {
                tag: "p><script".to_string()
            })
        );
    }

    #[test]
    fn test_clamps_max_depth() {
        assert_eq!(Renderer::new(usize::MAX).max_depth(), MAX_DEPTH_LIMIT);
        assert_eq!(Renderer::new(16).max_depth(), 16);
    }

    /// Capitalized names denote components, so they never fall back to a tag.
    #[test]
    fn test_unresolved_component_aborts_render() {
        let node = mdx("p", PropertyBag::new(), [mdx("Admonition", PropertyBag::new(), [])]);

        let result = Renderer::default().render(node, &Scope::new());

        assert_eq!(
            result.err(),
            Some(RenderError::Unresolved {
                name: "Admonition".to_string()
            })
        );
    }

    #[test]
    fn test_self_recursive_component_hits_depth_limit() {
        let recurse = component_fn("Loop", |_| Ok(mdx("Loop", PropertyBag::new(), [])));
        let scope = Scope::with_root(Registry::new().with("Loop", recurse));

        let result = Renderer::new(16).render(mdx("Loop", PropertyBag::new(), []), &scope);

        assert_eq!(result.err(), Some(RenderError::DepthExceeded { limit: 16 }));
    }

    #[test]
    fn test_element_ids_follow_document_order() {
        let node = mdx(
            "div",
            PropertyBag::new(),
            [
                mdx("p", PropertyBag::new(), ["one".into()]),
                mdx("p", PropertyBag::new(), ["two".into()]),
            ],
        );

        let document = Renderer::default().render(node, &Scope::new()).unwrap();

        let div = document.elements().next().unwrap();
        let ids: Vec<_> = div.child_elements().map(|e| e.id.index()).collect();
        assert_eq!(div.id.index(), 0);
        assert_eq!(ids, [1, 2]);
    }
}
