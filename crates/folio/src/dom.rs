//! Fully resolved output tree.

use folio_core::{node_ref::ElementId, props::PropertyBag};

/// A node of a rendered [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Text(String),
    Element(DomElement),
}

impl DomNode {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&DomElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.text_content(),
        }
    }
}

/// A host element after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    pub id: ElementId,
    pub tag: String,
    pub attributes: PropertyBag,
    pub children: Vec<DomNode>,
}

impl DomElement {
    pub fn text_content(&self) -> String {
        self.children.iter().map(DomNode::text_content).collect()
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &DomElement> {
        self.children.iter().filter_map(DomNode::as_element)
    }

    fn find(&self, id: ElementId) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(id))
    }
}

/// The output of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<DomNode>,
}

impl Document {
    pub fn new(nodes: Vec<DomNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in document order.
    pub fn nodes(&self) -> &[DomNode] {
        &self.nodes
    }

    /// Top-level elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &DomElement> {
        self.nodes.iter().filter_map(DomNode::as_element)
    }

    /// Finds the element with `id` anywhere in the document.
    pub fn element(&self, id: ElementId) -> Option<&DomElement> {
        self.elements().find_map(|element| element.find(id))
    }

    pub fn text_content(&self) -> String {
        self.nodes.iter().map(DomNode::text_content).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
