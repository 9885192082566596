//! Renders the bundled "Get Started" page with a custom heading component.
//!
//! Run with `cargo run --example render_page`.

use folio::{
    PageBuilder,
    component::component_fn,
    config::{AppConfig, OutputConfig, RenderConfig},
    content::GetStarted,
    node::HostElement,
    props::PropertyBag,
    registry::Registry,
    value::Value,
};

fn main() -> Result<(), folio::FolioError> {
    let anchored = component_fn("AnchoredHeading", |invocation| {
        let mut props = invocation.props;
        if let Some(id) = props.get_str("id").map(str::to_string) {
            props.insert("data-anchor", format!("#{id}"));
        }
        Ok(HostElement::new("h2", props)
            .with_children(invocation.children)
            .into())
    });

    let config = AppConfig::new(RenderConfig::default(), OutputConfig::new(true, true));
    let props = PropertyBag::new().with(
        "components",
        Value::Components(Registry::new().with("h2", anchored)),
    );

    let html = PageBuilder::new(config).render_html(&GetStarted::new(), &props)?;
    println!("{html}");

    Ok(())
}
