//! Property values carried by a [`PropertyBag`].

use std::fmt;

use serde::Deserialize;

use crate::{props::PropertyBag, registry::Registry};

/// An opaque property value.
///
/// Values are shallow: merging two bags replaces a nested [`Value::List`] or
/// [`Value::Map`] wholesale instead of combining them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value. Skipped when emitted as an HTML attribute.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(PropertyBag),
    /// A partial component registry, passed under the `components` key.
    #[serde(skip_deserializing)]
    Components(Registry),
}

impl Value {
    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the registry if this is a [`Value::Components`].
    pub fn as_components(&self) -> Option<&Registry> {
        match self {
            Self::Components(registry) => Some(registry),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    /// Formats scalar values the way they appear in rendered text.
    ///
    /// Integral numbers print without a fractional part. Composite values
    /// print as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::List(_) | Self::Map(_) | Self::Components(_) => Ok(()),
        }
    }
}

/// Formats a number without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<PropertyBag> for Value {
    fn from(value: PropertyBag) -> Self {
        Self::Map(value)
    }
}

impl From<Registry> for Value {
    fn from(value: Registry) -> Self {
        Self::Components(value)
    }
}
