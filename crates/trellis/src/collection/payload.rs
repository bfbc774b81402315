//! Opaque node content.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased content carried by a collection node.
///
/// The engine never inspects payloads beyond [`text_value`](Self::text_value)
/// for debug output and typeahead-style lookups; renderers downcast
/// [`Payload::Custom`] to their own types.
#[derive(Clone, Default)]
pub enum Payload {
    /// No content.
    #[default]
    None,
    /// Text content.
    Text(String),
    /// Integer content.
    Int(i64),
    /// Boolean content.
    Bool(bool),
    /// Custom content (type-erased, shared).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Payload {
    /// Creates custom content from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Payload::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `Payload::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    /// Attempts to get the content as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the content as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Payload::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the content as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Payload::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to downcast custom content to a specific type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Payload::Custom(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// A textual rendering of the content, if it has one.
    pub fn text_value(&self) -> Option<String> {
        match self {
            Payload::None | Payload::Custom(_) => None,
            Payload::Text(s) => Some(s.clone()),
            Payload::Int(n) => Some(n.to_string()),
            Payload::Bool(b) => Some(b.to_string()),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => write!(f, "None"),
            Payload::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Payload::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Payload::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Payload::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<i64> for Payload {
    fn from(n: i64) -> Self {
        Payload::Int(n)
    }
}

impl From<bool> for Payload {
    fn from(b: bool) -> Self {
        Payload::Bool(b)
    }
}
