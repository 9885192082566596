//! HTML serialization of rendered documents.
//!
//! # Example
//!
//! ```
//! # use folio::{Renderer, Scope, mdx, export::html::HtmlExporter};
//! # use folio_core::props::PropertyBag;
//! let node = mdx("p", PropertyBag::new().with("className", "lead"), ["a < b".into()]);
//! let document = Renderer::default().render(node, &Scope::new()).unwrap();
//!
//! let html = HtmlExporter::new().to_html(&document);
//! assert_eq!(html, r#"<p class="lead">a &lt; b</p>"#);
//! ```

use std::io;

use log::warn;

use folio_core::value::{Value, format_number};

use super::Error;
use crate::dom::{Document, DomElement, DomNode};

/// Elements without content or closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Elements followed by a line break in pretty output.
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "ul", "ol", "li", "blockquote", "hr", "table",
    "thead", "tbody", "tr", "div",
];

/// Writes a [`Document`] as HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter {
    pretty: bool,
    doctype: bool,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a line break after every block-level element.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Prefixes the output with `<!DOCTYPE html>`.
    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.doctype = doctype;
        self
    }

    /// Serializes `document` to a string.
    pub fn to_html(&self, document: &Document) -> String {
        let mut out = String::new();
        if self.doctype {
            out.push_str("<!DOCTYPE html>");
            if self.pretty {
                out.push('\n');
            }
        }
        for node in document.nodes() {
            self.write_node(node, &mut out);
        }
        out
    }

    /// Serializes `document` into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_to(&self, document: &Document, writer: &mut impl io::Write) -> Result<(), Error> {
        writer.write_all(self.to_html(document).as_bytes())?;
        Ok(())
    }

    fn write_node(&self, node: &DomNode, out: &mut String) {
        match node {
            DomNode::Text(text) => escape_into(text, false, out),
            DomNode::Element(element) => self.write_element(element, out),
        }
    }

    fn write_element(&self, element: &DomElement, out: &mut String) {
        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in element.attributes.named() {
            write_attribute(name, value, out);
        }
        out.push('>');

        let tag = element.tag.as_str();
        if !VOID_TAGS.contains(&tag) {
            for child in &element.children {
                self.write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        if self.pretty && BLOCK_TAGS.contains(&tag) {
            out.push('\n');
        }
    }
}

fn attribute_name(name: &str) -> &str {
    match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

/// Returns whether `name` can be written as an attribute name: non-empty,
/// without whitespace, control characters or any of `"'<>/=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn write_attribute(name: &str, value: &Value, out: &mut String) {
    if !is_valid_attribute_name(name) {
        warn!(attribute = name; "Skipping malformed attribute name");
        return;
    }
    let rendered = match value {
        Value::Null | Value::Bool(false) => return,
        Value::Bool(true) => None,
        Value::Number(n) => Some(format_number(*n)),
        Value::String(s) => Some(s.clone()),
        Value::List(_) | Value::Map(_) | Value::Components(_) => return,
    };

    out.push(' ');
    out.push_str(attribute_name(name));
    if let Some(rendered) = rendered {
        out.push_str("=\"");
        escape_into(&rendered, true, out);
        out.push('"');
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
