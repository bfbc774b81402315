//! Attribute values and style fragments.

use std::collections::BTreeMap;
use std::fmt;

/// The value of a plain (non-handler, non-class, non-style) attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text value.
    Str(String),
    /// Integer value (`tabIndex`, `aria-level`).
    Int(i64),
    /// Boolean value (`aria-selected`, `data-active`).
    Bool(bool),
    /// Floating point value.
    Float(f64),
}

impl AttrValue {
    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Int(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(n.into())
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        AttrValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Float(n)
    }
}

/// A style fragment: property name to CSS-like value text.
///
/// Merging two fragments is a shallow union where the later fragment wins on
/// conflicting property names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Create an empty style fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a single property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Whether the fragment has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of properties in the fragment.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(property, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Shallow union; properties in `later` override same-named ones here.
    pub fn merged(&self, later: &Style) -> Style {
        let mut out = self.clone();
        for (property, value) in &later.0 {
            out.0.insert(property.clone(), value.clone());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_later_wins() {
        let a = Style::new().with("color", "red").with("margin", "0");
        let b = Style::new().with("color", "blue");
        let merged = a.merged(&b);
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.get("margin"), Some("0"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(AttrValue::from(-1).as_int(), Some(-1));
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from("tree").as_str(), Some("tree"));
        assert_eq!(AttrValue::from(3usize).to_string(), "3");
    }
}
