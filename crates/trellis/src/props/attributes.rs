//! Typed attribute bags.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::event::{Event, EventKind};
use super::handler::Handler;
use super::value::{AttrValue, Style};

/// A bag of attributes contributed to a single rendered node.
///
/// Attributes fall into four typed groups, each with its own merge rule
/// (see [`merge_props`](super::merge_props)):
///
/// - plain values (`role`, `aria-*`, `tabIndex`, `data-*`, `id`)
/// - event handlers, keyed by [`EventKind`]
/// - a class name
/// - a style fragment
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    values: BTreeMap<Cow<'static, str>, AttrValue>,
    handlers: BTreeMap<EventKind, Handler>,
    class_name: Option<String>,
    style: Option<Style>,
}

impl Attributes {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bag contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
            && self.handlers.is_empty()
            && self.class_name.is_none()
            && self.style.is_none()
    }

    // =========================================================================
    // Plain values
    // =========================================================================

    /// Builder-style setter for a plain value.
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a plain value.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a plain value.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.values.remove(name)
    }

    /// Get a plain value.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Get a plain value as text.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Get a plain value as an integer.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(AttrValue::as_int)
    }

    /// Get a plain value as a boolean.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(AttrValue::as_bool)
    }

    /// Whether a plain value is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over plain values in name order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// A copy of this bag with the named plain values removed.
    pub fn without(&self, names: &[&str]) -> Self {
        let mut out = self.clone();
        for name in names {
            out.values.remove(*name);
        }
        out
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Builder-style handler subscription.
    pub fn on<F>(mut self, kind: EventKind, f: F) -> Self
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        self.set_handler(kind, Handler::new(f));
        self
    }

    /// Set the handler for an event kind, replacing any existing one.
    pub fn set_handler(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    /// The handler for an event kind.
    pub fn handler(&self, kind: EventKind) -> Option<&Handler> {
        self.handlers.get(&kind)
    }

    /// Event kinds this bag subscribes to, in a stable order.
    pub fn handler_kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.handlers.keys().copied()
    }

    /// Deliver an event to the matching handler.
    ///
    /// Returns `false` if the bag has no handler for the event's kind.
    pub fn dispatch(&self, event: &mut Event) -> bool {
        match self.handlers.get(&event.kind) {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Class and style
    // =========================================================================

    /// Builder-style class name setter.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The class name, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Builder-style style setter.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// The style fragment, if any.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge `later` over this bag.
    ///
    /// Handlers for the same event kind are chained (this bag's first), class
    /// names are joined with a space, styles are shallow-unioned with `later`
    /// winning, and every other value in `later` replaces the one here.
    pub fn merge(&self, later: &Attributes) -> Attributes {
        let mut out = self.clone();

        for (name, value) in &later.values {
            out.values.insert(name.clone(), value.clone());
        }

        for (kind, handler) in &later.handlers {
            let merged = match out.handlers.remove(kind) {
                Some(earlier) => Handler::chain([earlier, handler.clone()]),
                None => handler.clone(),
            };
            out.handlers.insert(*kind, merged);
        }

        out.class_name = match (out.class_name.take(), &later.class_name) {
            (Some(a), Some(b)) => Some(format!("{a} {b}")),
            (a, b) => b.clone().or(a),
        };

        out.style = match (out.style.take(), &later.style) {
            (Some(a), Some(b)) => Some(a.merged(b)),
            (a, b) => b.clone().or(a),
        };

        out
    }
}

/// Extend with plain values.
impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut out = Attributes::new();
        for (name, value) in iter {
            out.set(name, value);
        }
        out
    }
}
