//! Folio - Renders compiled documentation pages through a scoped component registry.
//!
//! A compiled page describes its body as a tree of [`node::RenderNode`]s that
//! reference components by name. Names are resolved at render time against a
//! registry that callers and nested [`scope::Scope`]s can override, with
//! built-in HTML defaults as the last resort.

pub mod builtins;
pub mod config;
pub mod content;
pub mod dom;
pub mod export;
pub mod render;
pub mod resolve;
pub mod scope;

mod error;

pub use folio_core::{component, identifier, node, node_ref, props, registry, value};

pub use error::FolioError;
pub use render::Renderer;
pub use resolve::{ROUTING_KEYS, dispatch, mdx, resolve};
pub use scope::Scope;

use std::{fmt::Write, sync::Arc};

use log::{debug, info, trace};

use folio_core::{props::PropertyBag, registry::Registry};

use builtins::HostComponent;
use config::AppConfig;
use content::{ContentUnit, TocEntry};
use dom::Document;
use export::html::HtmlExporter;

/// Builder for rendering Folio pages.
///
/// This provides an API for turning a [`ContentUnit`] into a document, HTML or
/// serialized metadata using the settings of an [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use folio::{PageBuilder, config::AppConfig, content, props::PropertyBag};
///
/// let page = content::lookup("/").expect("Bundled page");
///
/// // With custom config
/// let builder = PageBuilder::new(AppConfig::default());
///
/// let html = builder
///     .render_html(page.as_ref(), &PropertyBag::new())
///     .expect("Failed to render");
/// assert!(html.starts_with(r#"<h2 id="building-the-project">"#));
///
/// // Or use default config
/// let builder = PageBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct PageBuilder {
    config: AppConfig,
}

impl PageBuilder {
    /// Create a new page builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the root registry from the configured component overrides.
    ///
    /// Each entry becomes a [`HostComponent`] registered under its configured
    /// name, which may be parent-qualified such as `"p.strong"`.
    pub fn registry(&self) -> Registry {
        self.config
            .components()
            .iter()
            .fold(Registry::new(), |registry, (name, entry)| {
                let component = HostComponent::new(entry.tag())
                    .with_attributes(entry.attributes().clone());
                registry.with(name.as_str(), Arc::new(component))
            })
    }

    /// Render a page to a document.
    ///
    /// # Arguments
    ///
    /// * `unit` - The page to render
    /// * `props` - Props handed to the page; a `components` entry overrides
    ///   the configured registry for the whole page
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Render` when a component cannot be resolved, fails
    /// or nests deeper than the configured limit.
    pub fn render(
        &self,
        unit: &dyn ContentUnit,
        props: &PropertyBag,
    ) -> Result<Document, FolioError> {
        let metadata = unit.metadata();
        info!(page = metadata.id.as_str(), permalink = metadata.permalink.as_str(); "Rendering page");

        let registry = self.registry();
        debug!(overrides = registry.len(); "Root registry built");

        let scope = Scope::with_root(registry);
        let renderer = Renderer::new(self.config.render().max_depth());
        let node = unit.render(props);
        trace!(node:?; "Page tree");

        let document = renderer.render(node, &scope)?;
        info!(nodes = document.nodes().len(); "Page rendered successfully");
        Ok(document)
    }

    /// Render a page to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Render` for the same conditions as
    /// [`PageBuilder::render`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use folio::{PageBuilder, content::GetStarted, props::PropertyBag};
    ///
    /// let html = PageBuilder::default()
    ///     .render_html(&GetStarted::new(), &PropertyBag::new())
    ///     .expect("Failed to render page");
    ///
    /// assert!(html.contains("<code>cmake</code>"));
    /// ```
    pub fn render_html(
        &self,
        unit: &dyn ContentUnit,
        props: &PropertyBag,
    ) -> Result<String, FolioError> {
        let document = self.render(unit, props)?;
        Ok(self.exporter().to_html(&document))
    }

    /// Serialize a page's metadata as TOML.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Export` if the metadata cannot be serialized.
    pub fn metadata_toml(&self, unit: &dyn ContentUnit) -> Result<String, FolioError> {
        let toml = toml::to_string(unit.metadata())?;
        Ok(toml)
    }

    /// Format a page's table of contents as an indented outline.
    pub fn toc_text(&self, unit: &dyn ContentUnit) -> String {
        let mut out = String::new();
        write_toc(unit.toc(), 0, &mut out);
        out
    }

    fn exporter(&self) -> HtmlExporter {
        let output = self.config.output();
        HtmlExporter::new()
            .with_pretty(output.pretty())
            .with_doctype(output.doctype())
    }
}

fn write_toc(entries: &[TocEntry], level: usize, out: &mut String) {
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:indent$}- {} (#{})",
            "",
            entry.value,
            entry.id,
            indent = level * 2
        );
        write_toc(&entry.children, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use folio_core::value::Value;

    use super::*;
    use config::{ComponentOverride, OutputConfig, RenderConfig};
    use content::GetStarted;

    #[test]
    fn test_registry_from_config() {
        let config = AppConfig::default()
            .with_component(
                "h2",
                ComponentOverride::new("h2", PropertyBag::new().with("className", "anchor")),
            )
            .with_component("p.strong", ComponentOverride::new("b", PropertyBag::new()));

        let registry = PageBuilder::new(config).registry();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("p.strong".into()));
    }

    #[test]
    fn test_configured_overrides_apply_to_page() {
        let config = AppConfig::default()
            .with_component("p.strong", ComponentOverride::new("b", PropertyBag::new()));

        let html = PageBuilder::new(config)
            .render_html(&GetStarted::new(), &PropertyBag::new())
            .unwrap();

        assert!(html.contains("<b>LLVM 10.0.x</b>"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_caller_components_override_config() {
        let config = AppConfig::default()
            .with_component("h2", ComponentOverride::new("h2", PropertyBag::new()));
        let components = Registry::new().with(
            "h2",
            Arc::new(HostComponent::new("h3")) as Arc<dyn component::Component>,
        );
        let props = PropertyBag::new().with("components", Value::Components(components));

        let html = PageBuilder::new(config)
            .render_html(&GetStarted::new(), &props)
            .unwrap();

        assert!(html.starts_with(r#"<h3 id="building-the-project">"#));
    }

    #[test]
    fn test_depth_limit_from_config() {
        let config = AppConfig::new(RenderConfig::new(2), OutputConfig::default());

        let result = PageBuilder::new(config).render(&GetStarted::new(), &PropertyBag::new());

        assert!(matches!(result, Err(FolioError::Render(_))));
    }

    #[test]
    fn test_toc_text() {
        let toc = PageBuilder::default().toc_text(&GetStarted::new());

        assert_eq!(toc, "- Building the Project (#building-the-project)\n");
    }

    #[test]
    fn test_metadata_toml() {
        let toml = PageBuilder::default().metadata_toml(&GetStarted::new()).unwrap();

        assert!(toml.contains("permalink = \"/OpenRace/\""));
    }
}
