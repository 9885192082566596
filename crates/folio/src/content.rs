//! Compiled documentation pages.
//!
//! A [`ContentUnit`] bundles passthrough page data (front matter, metadata,
//! table of contents) with a render function producing the page body as a
//! [`RenderNode`] tree. The data is opaque to the renderer and only forwarded.

mod get_started;

pub use get_started::GetStarted;

use serde::{Deserialize, Serialize};

use folio_core::{node::RenderNode, props::PropertyBag};

/// Front matter declared at the top of the page source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub id: String,
    pub title: String,
    pub slug: String,
}

/// Link to a neighbouring page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub permalink: String,
}

/// Site metadata describing where a page lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub unversioned_id: String,
    pub id: String,
    pub is_docs_home_page: bool,
    pub title: String,
    pub description: String,
    pub source: String,
    pub source_dir_name: String,
    pub slug: String,
    pub permalink: String,
    pub edit_url: String,
    pub version: String,
    pub front_matter: FrontMatter,
    pub sidebar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<NavLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavLink>,
}

/// Entry of a page's table of contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocEntry {
    pub value: String,
    pub id: String,
    #[serde(default)]
    pub children: Vec<TocEntry>,
}

/// A compiled page.
pub trait ContentUnit: Send + Sync {
    fn front_matter(&self) -> &FrontMatter;

    fn metadata(&self) -> &Metadata;

    fn toc(&self) -> &[TocEntry];

    /// Builds the page body.
    ///
    /// `props` may carry a partial registry under `components`; it applies to
    /// the whole page. Other props are forwarded to the `wrapper`.
    fn render(&self, props: &PropertyBag) -> RenderNode;

    /// Marks units whose body is built from registry-resolved components.
    fn is_mdx_component(&self) -> bool {
        true
    }
}

/// Returns every bundled page.
pub fn all() -> Vec<Box<dyn ContentUnit>> {
    vec![Box::new(GetStarted::new())]
}

/// Finds a bundled page by slug, permalink or id.
pub fn lookup(key: &str) -> Option<Box<dyn ContentUnit>> {
    all().into_iter().find(|unit| {
        let metadata = unit.metadata();
        metadata.slug == key || metadata.permalink == key || metadata.id == key
    })
}
