//! Declarative collection input.
//!
//! Authors describe a collection as a tree of [`Element`]s. Only keyed
//! items and sections are built into nodes; static content and unkeyed
//! entries are skipped.
//!
//! # Example
//!
//! ```
//! use trellis::collection::{Element, Item, Section};
//!
//! let children: Vec<Element> = vec![
//!     Section::new("fruit", "Fruit")
//!         .with_children([Item::new("apple", "Apple"), Item::new("pear", "Pear")])
//!         .into(),
//!     Item::new("bread", "Bread").into(),
//! ];
//! assert_eq!(children.len(), 2);
//! ```

use std::borrow::Cow;

use super::key::Key;
use super::node::NodeKind;
use super::payload::Payload;
use crate::props::{AttrValue, Attributes};

/// What a describable element contributes to the build.
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    /// Item or section.
    pub kind: NodeKind,
    /// Item content or section title.
    pub payload: &'a Payload,
    /// Nested declarative children.
    pub children: &'a [Element],
    /// Author-supplied attributes.
    pub attributes: &'a Attributes,
}

/// Something the builder can turn into a node.
pub trait Describe {
    /// Stable identity, if the element has one.
    fn key(&self) -> Option<&Key>;

    /// The element's contribution, if it takes part in the collection.
    fn describe(&self) -> Option<Description<'_>>;
}

/// A single declarative child.
#[derive(Debug, Clone)]
pub enum Element {
    /// A focusable item, possibly with nested children.
    Item(Item),
    /// A titled group.
    Section(Section),
    /// Content that takes no part in the collection.
    Static(Payload),
}

impl Describe for Element {
    fn key(&self) -> Option<&Key> {
        match self {
            Element::Item(item) => item.key.as_ref(),
            Element::Section(section) => section.key.as_ref(),
            Element::Static(_) => None,
        }
    }

    fn describe(&self) -> Option<Description<'_>> {
        match self {
            Element::Item(item) => Some(Description {
                kind: NodeKind::Item,
                payload: &item.payload,
                children: &item.children,
                attributes: &item.attributes,
            }),
            Element::Section(section) => Some(Description {
                kind: NodeKind::Section,
                payload: &section.title,
                children: &section.children,
                attributes: &section.attributes,
            }),
            Element::Static(_) => None,
        }
    }
}

impl From<Item> for Element {
    fn from(item: Item) -> Self {
        Element::Item(item)
    }
}

impl From<Section> for Element {
    fn from(section: Section) -> Self {
        Element::Section(section)
    }
}

/// A declarative item.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Identity. Unkeyed items are skipped by the builder.
    pub key: Option<Key>,
    /// Content.
    pub payload: Payload,
    /// Author-supplied attributes.
    pub attributes: Attributes,
    /// Nested children.
    pub children: Vec<Element>,
}

impl Item {
    /// A keyed item.
    pub fn new(key: impl Into<Key>, payload: impl Into<Payload>) -> Self {
        Self {
            key: Some(key.into()),
            payload: payload.into(),
            ..Default::default()
        }
    }

    /// An item with no identity.
    pub fn unkeyed(payload: impl Into<Payload>) -> Self {
        Self {
            payload: payload.into(),
            ..Default::default()
        }
    }

    /// Replace the nested children.
    pub fn with_children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Append one nested child.
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set one author attribute.
    pub fn with_attribute(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replace the author attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A declarative section.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Identity. Unkeyed sections are skipped by the builder.
    pub key: Option<Key>,
    /// Title content.
    pub title: Payload,
    /// Author-supplied attributes for the wrapper.
    pub attributes: Attributes,
    /// Grouped children.
    pub children: Vec<Element>,
}

impl Section {
    /// A keyed section.
    pub fn new(key: impl Into<Key>, title: impl Into<Payload>) -> Self {
        Self {
            key: Some(key.into()),
            title: title.into(),
            ..Default::default()
        }
    }

    /// A section with no identity.
    pub fn unkeyed(title: impl Into<Payload>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Replace the grouped children.
    pub fn with_children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set one author attribute.
    pub fn with_attribute(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}
