//! Configuration types for Folio page rendering.
//!
//! This module provides configuration structures that control how pages are
//! rendered and serialized. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`RenderConfig`] - Controls the renderer, e.g. the nesting limit.
//! - [`OutputConfig`] - Controls HTML serialization.
//! - [`ComponentOverride`] - Registers a host element under a component name.
//!
//! # Example
//!
//! ```
//! # use folio::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [output]
//!     pretty = true
//!
//!     [components.h2]
//!     tag = "h2"
//!     attributes = { className = "anchor" }
//! "#).unwrap();
//!
//! assert!(config.output().pretty());
//! assert_eq!(config.components().len(), 1);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use folio_core::props::PropertyBag;

use crate::render::DEFAULT_MAX_DEPTH;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Component overrides keyed by (possibly parent-qualified) name.
    #[serde(default)]
    components: IndexMap<String, ComponentOverride>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `render` - Renderer settings.
    /// * `output` - HTML serialization settings.
    pub fn new(render: RenderConfig, output: OutputConfig) -> Self {
        Self {
            render,
            output,
            components: IndexMap::new(),
        }
    }

    /// Adds a component override, replacing one registered under the same name.
    pub fn with_component(mut self, name: impl Into<String>, entry: ComponentOverride) -> Self {
        self.components.insert(name.into(), entry);
        self
    }

    /// Replaces the output section.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the configured component overrides in declaration order.
    pub fn components(&self) -> &IndexMap<String, ComponentOverride> {
        &self.components
    }
}

/// Renderer settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Maximum nesting of expansion steps before rendering fails.
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// HTML serialization settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Break lines after block-level elements.
    #[serde(default)]
    pretty: bool,

    /// Emit `<!DOCTYPE html>` before the document.
    #[serde(default)]
    doctype: bool,
}

impl OutputConfig {
    pub fn new(pretty: bool, doctype: bool) -> Self {
        Self { pretty, doctype }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn doctype(&self) -> bool {
        self.doctype
    }
}

/// A host element registered under a component name.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentOverride {
    /// HTML tag to render.
    tag: String,

    /// Default attributes; invocation props take precedence.
    #[serde(default)]
    attributes: PropertyBag,
}

impl ComponentOverride {
    pub fn new(tag: impl Into<String>, attributes: PropertyBag) -> Self {
        Self {
            tag: tag.into(),
            attributes,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &PropertyBag {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use folio_core::value::Value;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.render().max_depth(), DEFAULT_MAX_DEPTH);
        assert!(!config.output().pretty());
        assert!(!config.output().doctype());
        assert!(config.components().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            max_depth = 32

            [output]
            pretty = true
            doctype = true

            [components.h2]
            tag = "h2"
            attributes = { className = "anchor", tabIndex = -1 }

            [components."p.strong"]
            tag = "b"
            "#,
        )
        .unwrap();

        assert_eq!(config.render().max_depth(), 32);
        assert!(config.output().doctype());

        let names: Vec<_> = config.components().keys().map(String::as_str).collect();
        assert_eq!(names, ["h2", "p.strong"]);

        let h2 = &config.components()["h2"];
        assert_eq!(h2.tag(), "h2");
        assert_eq!(h2.attributes().get_str("className"), Some("anchor"));
        assert_eq!(h2.attributes().get("tabIndex"), Some(&Value::Number(-1.0)));
        assert!(config.components()["p.strong"].attributes().is_empty());
    }

    #[test]
    fn test_partial_render_section_uses_default_depth() {
        let config: AppConfig = toml::from_str("[render]\n").unwrap();
        assert_eq!(config.render().max_depth(), DEFAULT_MAX_DEPTH);
    }
}
