//! Folio Core Types and Definitions
//!
//! This crate provides the data model shared by the Folio renderer:
//!
//! - **Names**: interned component names ([`identifier::Name`])
//! - **Properties**: shallow-merge property bags ([`props::PropertyBag`], [`value::Value`])
//! - **Components**: the [`component::Component`] trait and the name-keyed
//!   [`registry::Registry`]
//! - **Render tree**: [`node::RenderNode`] and reference handles ([`node_ref::NodeRef`])
//! - **Errors**: [`error::RenderError`]

pub mod component;
pub mod error;
pub mod identifier;
pub mod node;
pub mod node_ref;
pub mod props;
pub mod registry;
pub mod value;
