//! Item renderer: turns a built collection into render-ready nodes.
//!
//! The renderer walks the node tree and, for every node, merges the
//! attribute bags contributed by each layer into the single bag a paint or
//! markup layer consumes. For items, in order:
//!
//! 1. indentation style
//! 2. author attributes, minus `role` and `aria-level`
//! 3. the builder's accessibility attributes
//! 4. roving-tabindex attributes from [`KeyboardNavigation`]
//! 5. selection attributes from [`SelectionModel`], when selection is on
//!
//! Sections produce three bags: the wrapper, the title and the group holding
//! the section's items.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::collection::{BuildOptions, CollectionState, Element, Item, Pattern};
//! use trellis::interaction::{KeyboardNavigation, NavigationOptions};
//! use trellis::renderer::ItemRenderer;
//!
//! let children: Vec<Element> = vec![Item::new("a", "Alpha").into(), Item::new("b", "Beta").into()];
//! let state = Arc::new(CollectionState::build(&children, &BuildOptions::for_pattern(Some(Pattern::Listbox), 24)));
//! let navigation = KeyboardNavigation::new(state.clone(), NavigationOptions::default());
//!
//! let rendered = ItemRenderer::new(navigation, None).render(&state);
//! assert_eq!(rendered[0].attributes().get_str("role"), Some("option"));
//! ```

use trellis_core::logging::{span_names, targets};

use crate::collection::{CollectionNode, CollectionState, Key, Payload, Role};
use crate::interaction::{KeyboardNavigation, SelectionMode, SelectionModel};
use crate::props::{Attributes, merge_props, names};

/// A node ready for painting.
#[derive(Debug, Clone)]
pub enum RenderedNode {
    /// A focusable item.
    Item {
        /// Item key.
        key: Key,
        /// Item content.
        payload: Payload,
        /// The merged attribute bag.
        attributes: Attributes,
        /// Attributes for the element wrapping `children`, when there are any.
        group: Option<Attributes>,
        /// Rendered child nodes.
        children: Vec<RenderedNode>,
    },
    /// A titled group of items.
    Section {
        /// Section key.
        key: Key,
        /// Section title.
        title: Payload,
        /// Attributes for the outer wrapper.
        wrapper: Attributes,
        /// Attributes for the title element.
        heading: Attributes,
        /// Attributes for the element wrapping `children`.
        group: Attributes,
        /// Rendered child nodes.
        children: Vec<RenderedNode>,
    },
}

impl RenderedNode {
    /// The node's key.
    pub fn key(&self) -> &Key {
        match self {
            RenderedNode::Item { key, .. } | RenderedNode::Section { key, .. } => key,
        }
    }

    /// The item bag, or the wrapper bag for sections.
    pub fn attributes(&self) -> &Attributes {
        match self {
            RenderedNode::Item { attributes, .. } => attributes,
            RenderedNode::Section { wrapper, .. } => wrapper,
        }
    }

    /// Rendered children.
    pub fn children(&self) -> &[RenderedNode] {
        match self {
            RenderedNode::Item { children, .. } | RenderedNode::Section { children, .. } => children,
        }
    }

    /// Whether this is an item.
    pub fn is_item(&self) -> bool {
        matches!(self, RenderedNode::Item { .. })
    }

    /// Depth-first search for `key` in this subtree.
    pub fn find(&self, key: &Key) -> Option<&RenderedNode> {
        if self.key() == key {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(key))
    }
}

/// Search a rendered forest for `key`.
pub fn find_rendered<'a>(nodes: &'a [RenderedNode], key: &Key) -> Option<&'a RenderedNode> {
    nodes.iter().find_map(|node| node.find(key))
}

/// Merges per-layer attribute bags into render-ready nodes.
#[derive(Debug, Clone)]
pub struct ItemRenderer {
    navigation: KeyboardNavigation,
    selection: Option<SelectionModel>,
}

impl ItemRenderer {
    /// Create a renderer. A selection model in [`SelectionMode::None`]
    /// contributes nothing.
    pub fn new(navigation: KeyboardNavigation, selection: Option<SelectionModel>) -> Self {
        let selection = selection.filter(|s| s.mode() != SelectionMode::None);
        Self { navigation, selection }
    }

    /// Render every top-level node of `state`.
    pub fn render(&self, state: &CollectionState) -> Vec<RenderedNode> {
        let _span = tracing::trace_span!(target: targets::BUILDER, "render", name = span_names::RENDER).entered();
        state.collection().iter().map(|node| self.render_node(node)).collect()
    }

    /// Render one node and its subtree.
    pub fn render_node(&self, node: &CollectionNode) -> RenderedNode {
        let children = node.child_nodes.iter().map(|child| self.render_node(child)).collect();

        if node.is_section() {
            let roles = node.section_roles.unwrap_or_default();
            let heading_id = node.heading_id().unwrap_or_default();
            return RenderedNode::Section {
                key: node.key.clone(),
                title: node.payload.clone(),
                wrapper: Attributes::new()
                    .with(names::ROLE, roles.wrapper.as_str())
                    .merge(&node.source_attributes),
                heading: Attributes::new()
                    .with(names::ID, heading_id.clone())
                    .with(names::ROLE, roles.title.as_str()),
                group: Attributes::new()
                    .with(names::ROLE, roles.group.as_str())
                    .with(names::ARIA_LABELLEDBY, heading_id),
                children,
            };
        }

        RenderedNode::Item {
            key: node.key.clone(),
            payload: node.payload.clone(),
            attributes: self.item_attributes(node),
            group: node
                .has_child_nodes()
                .then(|| Attributes::new().with(names::ROLE, Role::Group.as_str())),
            children,
        }
    }

    /// The merged attribute bag for an item.
    pub fn item_attributes(&self, node: &CollectionNode) -> Attributes {
        let indent = node.indent_attributes();
        let source = node.source_attributes.without(&[names::ROLE, names::ARIA_LEVEL]);
        let aria = node.aria.to_attributes();
        let navigation = self.navigation.item_props(&node.key, node.aria.initial_tab_index);
        let selection = self
            .selection
            .as_ref()
            .map(|s| s.item_selection_props(&node.key, Some(node.payload.clone())))
            .unwrap_or_default();

        merge_props([&indent, &source, &aria, &navigation, &selection])
    }
}
