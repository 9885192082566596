//! Component resolution and dispatch.
//!
//! A composite node is resolved to an implementation in priority order:
//!
//! 1. the parent-qualified name `"<parentName>.<name>"` in the registry,
//! 2. the plain name in the registry,
//! 3. the built-in default for the name,
//! 4. the original reference: a [`ComponentRef::Direct`] implementation is
//!    returned unchanged, a lowercase tag name becomes a plain host element.
//!
//! Any other name that matches nothing is a configuration error and is
//! reported as [`RenderError::Unresolved`].

use std::sync::Arc;

use log::trace;

use folio_core::{
    component::{Component, Invocation},
    error::RenderError,
    identifier::Name,
    node::{ComponentRef, Element, RenderNode},
    props::PropertyBag,
    registry::Registry,
    value::Value,
};

use crate::{builtins, scope::Scope};

/// Props that only steer resolution and are never forwarded to an implementation.
pub const ROUTING_KEYS: [&str; 4] = ["components", "mdxType", "originalType", "parentName"];

/// Looks up `name` through the registry and the built-ins.
fn lookup(registry: &Registry, name: Name, parent_name: Option<Name>) -> Option<Arc<dyn Component>> {
    parent_name
        .and_then(|parent| registry.get(parent.nested(name)))
        .or_else(|| registry.get(name))
        .or_else(|| builtins::builtin(name))
        .cloned()
}

/// Falls back to the original reference once every lookup has missed.
fn original_or_host(original: &ComponentRef, name: Name) -> Result<Arc<dyn Component>, RenderError> {
    match original {
        ComponentRef::Direct(component) => Ok(Arc::clone(component)),
        ComponentRef::Named(_) => {
            builtins::host_fallback(name).ok_or_else(|| RenderError::Unresolved {
                name: name.to_string(),
            })
        }
    }
}

/// Resolves `reference` against `registry`.
///
/// # Errors
///
/// Returns [`RenderError::Unresolved`] for a name that is neither registered,
/// built in, nor a lowercase tag name.
pub fn resolve(
    registry: &Registry,
    reference: &ComponentRef,
    parent_name: Option<Name>,
) -> Result<Arc<dyn Component>, RenderError> {
    match reference {
        ComponentRef::Direct(component) => Ok(Arc::clone(component)),
        ComponentRef::Named(name) => match lookup(registry, *name, parent_name) {
            Some(found) => Ok(found),
            None => original_or_host(reference, *name),
        },
    }
}

/// Reads a string routing hint from `props`.
fn routing_name(props: &PropertyBag, key: &str) -> Result<Option<Name>, RenderError> {
    match props.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => Ok(Some(Name::new(name))),
        Some(_) => Err(RenderError::InvalidReference {
            key: key.to_string(),
        }),
    }
}

/// Reads the element's own registry overrides from `props`.
fn own_components(props: &PropertyBag) -> Result<Option<&Registry>, RenderError> {
    match props.get("components") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Components(registry)) => Ok(Some(registry)),
        Some(_) => Err(RenderError::InvalidReference {
            key: "components".to_string(),
        }),
    }
}

/// Resolves `element` in `scope` and invokes the implementation.
///
/// The element's own `components` prop is merged over the scope registry for
/// this lookup, and is forwarded to the implementation. An `mdxType` hint takes
/// precedence over the element's name; a direct implementation is the
/// fallback when the hint matches nothing.
///
/// # Errors
///
/// Returns a [`RenderError`] when resolution fails or the implementation
/// itself fails.
pub fn dispatch(scope: &Scope, element: Element) -> Result<RenderNode, RenderError> {
    let Element {
        component: original,
        props,
        children,
        node_ref,
    } = element;

    let components = own_components(&props)?;
    let merged;
    let registry: &Registry = match components {
        Some(overrides) if !overrides.is_empty() => {
            merged = scope.current_registry().merged(overrides);
            &merged
        }
        _ => scope.current_registry().as_ref(),
    };

    let parent_name = routing_name(&props, "parentName")?;
    let implementation = match routing_name(&props, "mdxType")?.or_else(|| original.name()) {
        Some(name) => match lookup(registry, name, parent_name) {
            Some(found) => found,
            None => original_or_host(&original, name)?,
        },
        None => resolve(registry, &original, parent_name)?,
    };

    let mut rest = props.without(&ROUTING_KEYS);
    if let Some(components) = components {
        rest.insert("components", Value::Components(components.clone()));
    }

    trace!(component = implementation.name(); "Invoking component");
    implementation.render(Invocation::new(rest, children).with_node_ref(node_ref))
}

/// Builds a composite node, forwarding every trailing descriptor in `rest`
/// verbatim as a child.
///
/// A named reference is recorded as the `mdxType` routing key, overriding any
/// hint already present in `props`. A direct reference keeps `props` as given,
/// so an explicit `mdxType` hint still lets the registry replace it.
///
/// # Examples
///
/// ```
/// use folio::mdx;
/// use folio_core::props::PropertyBag;
///
/// let paragraph = mdx(
///     "p",
///     PropertyBag::new(),
///     ["Coderrect requires ".into(), mdx("strong", PropertyBag::new().with("parentName", "p"), ["LLVM 10.0.x".into()])],
/// );
/// ```
pub fn mdx(
    reference: impl Into<ComponentRef>,
    props: PropertyBag,
    rest: impl IntoIterator<Item = RenderNode>,
) -> RenderNode {
    let reference = reference.into();
    let props = match &reference {
        ComponentRef::Named(name) => props.with("mdxType", name.to_string()),
        ComponentRef::Direct(_) => props,
    };
    RenderNode::Element(Element::new(reference, props).with_children(rest))
}
