//! Built collection nodes.

use std::sync::Arc;

use super::key::Key;
use super::payload::Payload;
use super::role::Role;
use crate::props::{Attributes, Style, names};

/// Whether a node is a focusable item or a labelled grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A focusable, selectable item.
    Item,
    /// A titled group of items. Never focusable.
    Section,
}

/// Accessibility attributes computed for a node at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAria {
    /// The node's role. Sections have none.
    pub role: Option<Role>,
    /// Nesting level, for tree items.
    pub level: Option<usize>,
    /// Expanded hint, for tree items with nested items.
    pub expanded: Option<bool>,
    /// Initial roving tab index, honoured while nothing is active.
    pub initial_tab_index: Option<i32>,
}

impl NodeAria {
    /// Whether nothing was computed.
    pub fn is_empty(&self) -> bool {
        *self == NodeAria::default()
    }

    /// The attributes as an attribute bag.
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(role) = self.role {
            attrs.set(names::ROLE, role.as_str());
        }
        if let Some(level) = self.level {
            attrs.set(names::ARIA_LEVEL, level);
        }
        if let Some(expanded) = self.expanded {
            attrs.set(names::ARIA_EXPANDED, expanded);
        }
        if let Some(tab_index) = self.initial_tab_index {
            attrs.set(names::TAB_INDEX, tab_index);
        }
        attrs
    }
}

/// Structural roles for the three parts of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRoles {
    /// The outer wrapper.
    pub wrapper: Role,
    /// The title element.
    pub title: Role,
    /// The element grouping the section's items.
    pub group: Role,
}

impl Default for SectionRoles {
    fn default() -> Self {
        Self {
            wrapper: Role::Presentation,
            title: Role::Presentation,
            group: Role::Group,
        }
    }
}

/// A node of the built collection tree.
#[derive(Debug, Clone)]
pub struct CollectionNode {
    /// Identity, unique among focusable items.
    pub key: Key,
    /// Item or section.
    pub kind: NodeKind,
    /// Nesting depth, starting at 1.
    pub level: usize,
    /// Key of the enclosing item or section.
    pub parent_key: Option<Key>,
    /// Position among built siblings.
    pub index: usize,
    /// Precomputed accessibility attributes.
    pub aria: NodeAria,
    /// Left indentation in pixels, when nested.
    pub indent: Option<u32>,
    /// Built children, in declaration order.
    pub child_nodes: Vec<Arc<CollectionNode>>,
    /// Opaque content. For sections this is the title.
    pub payload: Payload,
    /// Attributes supplied by the author.
    pub source_attributes: Attributes,
    /// Structural roles, for sections only.
    pub section_roles: Option<SectionRoles>,
}

impl CollectionNode {
    /// Whether this node is a section.
    pub fn is_section(&self) -> bool {
        self.kind == NodeKind::Section
    }

    /// Whether this node is a focusable item.
    pub fn is_item(&self) -> bool {
        self.kind == NodeKind::Item
    }

    /// Whether any children were built under this node.
    pub fn has_child_nodes(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    /// The indentation as a style-only attribute bag. Empty at level 1.
    pub fn indent_attributes(&self) -> Attributes {
        match self.indent {
            Some(px) => Attributes::new().with_style(Style::new().with(names::PADDING_LEFT, format!("{px}px"))),
            None => Attributes::new(),
        }
    }

    /// The id of a section's title element, used to label its group.
    pub fn heading_id(&self) -> Option<String> {
        self.is_section().then(|| format!("section-{}", self.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, indent: Option<u32>) -> CollectionNode {
        CollectionNode {
            key: Key::from("k"),
            kind,
            level: 2,
            parent_key: None,
            index: 0,
            aria: NodeAria::default(),
            indent,
            child_nodes: Vec::new(),
            payload: Payload::None,
            source_attributes: Attributes::new(),
            section_roles: None,
        }
    }

    #[test]
    fn test_indent_attributes() {
        let attrs = node(NodeKind::Item, Some(24)).indent_attributes();
        assert_eq!(attrs.style().and_then(|s| s.get("padding-left")), Some("24px"));
        assert!(node(NodeKind::Item, None).indent_attributes().is_empty());
    }

    #[test]
    fn test_heading_id_only_for_sections() {
        assert_eq!(node(NodeKind::Section, None).heading_id().as_deref(), Some("section-k"));
        assert_eq!(node(NodeKind::Item, None).heading_id(), None);
    }

    #[test]
    fn test_aria_to_attributes() {
        let aria = NodeAria {
            role: Some(Role::TreeItem),
            level: Some(2),
            expanded: Some(true),
            initial_tab_index: Some(0),
        };
        let attrs = aria.to_attributes();
        assert_eq!(attrs.get_str("role"), Some("treeitem"));
        assert_eq!(attrs.get_int("aria-level"), Some(2));
        assert_eq!(attrs.get_bool("aria-expanded"), Some(true));
        assert_eq!(attrs.get_int("tabIndex"), Some(0));
        assert!(NodeAria::default().to_attributes().is_empty());
    }
}
