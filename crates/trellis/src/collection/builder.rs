//! The node builder.
//!
//! [`build_collection`] walks the declarative tree once, in pre-order, and
//! produces both the hierarchical node tree and the flat list of focusable
//! items used for keyboard navigation. An item is placed in the flat list
//! before any of its descendants.

use std::collections::HashSet;
use std::sync::Arc;

use trellis_core::PerfSpan;
use trellis_core::logging::{span_names, targets};

use super::descriptor::{Describe, Element};
use super::key::Key;
use super::node::{CollectionNode, NodeAria, NodeKind, SectionRoles};
use super::pattern::Pattern;
use super::role::Role;

/// Default indentation per nesting level, in pixels.
pub const DEFAULT_INDENT_SIZE: u32 = 24;

/// Inputs to a build besides the declarative children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// The collection pattern, if any.
    pub pattern: Option<Pattern>,
    /// Role given to every item.
    pub item_role: Option<Role>,
    /// Pixels of indentation per level beyond the first.
    pub indent_size: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            item_role: None,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl BuildOptions {
    /// Options taking the item role from the pattern registry.
    pub fn for_pattern(pattern: Option<Pattern>, indent_size: u32) -> Self {
        Self {
            pattern,
            item_role: pattern.and_then(|p| p.config().item_role),
            indent_size,
        }
    }
}

/// The output of a build.
#[derive(Debug, Clone, Default)]
pub struct BuiltCollection {
    /// Top-level nodes, with nested `child_nodes`.
    pub collection: Vec<Arc<CollectionNode>>,
    /// Focusable items in pre-order.
    pub items: Vec<Arc<CollectionNode>>,
}

/// Build the node tree and the flat focusable list from declarative children.
pub fn build_collection(children: &[Element], options: &BuildOptions) -> BuiltCollection {
    if children.is_empty() {
        return BuiltCollection::default();
    }

    let _span = PerfSpan::new(span_names::BUILD);

    let mut builder = Builder {
        options,
        slots: Vec::new(),
        seen: HashSet::new(),
        first_marked: false,
    };
    let collection = builder.traverse(children, 1, None);
    let items: Vec<Arc<CollectionNode>> = builder.slots.into_iter().flatten().collect();

    tracing::debug!(
        target: targets::BUILDER,
        top_level = collection.len(),
        focusable = items.len(),
        "built collection"
    );

    BuiltCollection { collection, items }
}

struct Builder<'a> {
    options: &'a BuildOptions,
    /// Flat list slots, reserved in pre-order and filled once a node's
    /// subtree is built.
    slots: Vec<Option<Arc<CollectionNode>>>,
    seen: HashSet<Key>,
    first_marked: bool,
}

impl Builder<'_> {
    fn traverse(
        &mut self,
        children: &[Element],
        level: usize,
        parent_key: Option<&Key>,
    ) -> Vec<Arc<CollectionNode>> {
        let mut nodes = Vec::new();

        for child in children {
            let (Some(key), Some(description)) = (child.key(), child.describe()) else {
                tracing::trace!(target: targets::BUILDER, "skipping child without identity");
                continue;
            };

            let is_section = description.kind == NodeKind::Section;

            if !is_section && !self.seen.insert(key.clone()) {
                tracing::warn!(target: targets::BUILDER, %key, "duplicate item key, dropping later occurrence");
                continue;
            }

            let has_children = description.children.iter().any(|c| c.describe().is_some());

            let is_first_focusable =
                !self.first_marked && !is_section && self.options.pattern == Some(Pattern::Tree);
            if is_first_focusable {
                self.first_marked = true;
            }

            let aria = self.node_aria(level, is_section, has_children, is_first_focusable);

            // Reserve this item's flat position before descending.
            let slot = (!is_section).then(|| {
                self.slots.push(None);
                self.slots.len() - 1
            });

            let child_level = if is_section { level } else { level + 1 };
            let child_nodes = if has_children {
                self.traverse(description.children, child_level, Some(key))
            } else {
                Vec::new()
            };

            let node = Arc::new(CollectionNode {
                key: key.clone(),
                kind: description.kind,
                level,
                parent_key: parent_key.cloned(),
                index: nodes.len(),
                aria,
                indent: (level > 1).then(|| (level as u32 - 1).saturating_mul(self.options.indent_size)),
                child_nodes,
                payload: description.payload.clone(),
                source_attributes: description.attributes.clone(),
                section_roles: is_section.then(SectionRoles::default),
            });

            if let Some(slot) = slot {
                self.slots[slot] = Some(node.clone());
            }
            nodes.push(node);
        }

        nodes
    }

    fn node_aria(
        &self,
        level: usize,
        is_section: bool,
        has_children: bool,
        is_first_focusable: bool,
    ) -> NodeAria {
        let mut aria = NodeAria::default();
        let Some(item_role) = self.options.item_role.filter(|_| !is_section) else {
            return aria;
        };

        aria.role = Some(item_role);
        if self.options.pattern == Some(Pattern::Tree) {
            aria.level = Some(level);
            if has_children {
                aria.expanded = Some(true);
            }
            if is_first_focusable {
                aria.initial_tab_index = Some(0);
            }
        }
        aria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Item, Payload, Section};

    fn keys(nodes: &[Arc<CollectionNode>]) -> Vec<&str> {
        nodes.iter().map(|n| n.key.as_str()).collect()
    }

    fn tree() -> Vec<Element> {
        vec![
            Item::new("docs", "Docs")
                .with_children([
                    Item::new("guide", "Guide").with_child(Item::new("intro", "Intro")),
                    Item::new("api", "API"),
                ])
                .into(),
            Item::new("blog", "Blog").into(),
        ]
    }

    #[test]
    fn test_empty_input() {
        let built = build_collection(&[], &BuildOptions::default());
        assert!(built.collection.is_empty());
        assert!(built.items.is_empty());
    }

    #[test]
    fn test_flat_list_is_preorder() {
        let built = build_collection(&tree(), &BuildOptions::for_pattern(Some(Pattern::Tree), 24));
        assert_eq!(keys(&built.items), vec!["docs", "guide", "intro", "api", "blog"]);
        assert_eq!(keys(&built.collection), vec!["docs", "blog"]);
    }

    #[test]
    fn test_levels_parents_and_indices() {
        let built = build_collection(&tree(), &BuildOptions::for_pattern(Some(Pattern::Tree), 24));
        let intro = &built.items[2];
        assert_eq!(intro.level, 3);
        assert_eq!(intro.parent_key.as_ref().map(Key::as_str), Some("guide"));
        assert_eq!(intro.indent, Some(48));

        let api = &built.items[3];
        assert_eq!(api.index, 1);
        assert_eq!(built.items[0].indent, None);
    }

    #[test]
    fn test_huge_indent_size_saturates() {
        let built = build_collection(&tree(), &BuildOptions::for_pattern(Some(Pattern::Tree), u32::MAX));
        assert_eq!(built.items[1].indent, Some(u32::MAX));
        assert_eq!(built.items[2].indent, Some(u32::MAX));
    }

    #[test]
    fn test_tree_aria() {
        let built = build_collection(&tree(), &BuildOptions::for_pattern(Some(Pattern::Tree), 24));
        let docs = &built.items[0];
        assert_eq!(docs.aria.role, Some(Role::TreeItem));
        assert_eq!(docs.aria.level, Some(1));
        assert_eq!(docs.aria.expanded, Some(true));
        assert_eq!(docs.aria.initial_tab_index, Some(0));

        let api = &built.items[3];
        assert_eq!(api.aria.expanded, None);
        assert_eq!(api.aria.initial_tab_index, None);
        assert_eq!(api.aria.level, Some(2));

        let hinted = built.items.iter().filter(|n| n.aria.initial_tab_index.is_some()).count();
        assert_eq!(hinted, 1);
    }

    #[test]
    fn test_non_tree_items_get_role_only() {
        let built = build_collection(&tree(), &BuildOptions::for_pattern(Some(Pattern::Menu), 24));
        let docs = &built.items[0];
        assert_eq!(docs.aria.role, Some(Role::MenuItem));
        assert_eq!(docs.aria.level, None);
        assert_eq!(docs.aria.expanded, None);
        assert_eq!(docs.aria.initial_tab_index, None);
    }

    #[test]
    fn test_sections_keep_level_and_have_no_aria() {
        let children: Vec<Element> = vec![
            Section::new("fruit", "Fruit")
                .with_children([Item::new("apple", "Apple"), Item::new("pear", "Pear")])
                .into(),
        ];
        let built = build_collection(&children, &BuildOptions::for_pattern(Some(Pattern::Tree), 24));
        let section = &built.collection[0];
        assert!(section.is_section());
        assert!(section.aria.is_empty());
        assert_eq!(section.section_roles, Some(SectionRoles::default()));
        assert_eq!(section.payload.as_str(), Some("Fruit"));

        assert_eq!(keys(&built.items), vec!["apple", "pear"]);
        assert_eq!(built.items[0].level, 1);
        assert_eq!(built.items[0].parent_key.as_ref().map(Key::as_str), Some("fruit"));
        assert_eq!(built.items[0].aria.initial_tab_index, Some(0));
    }

    #[test]
    fn test_children_without_identity_are_skipped() {
        let children = vec![
            Element::Static(Payload::from("divider")),
            Item::unkeyed("anonymous").into(),
            Item::new("a", "A").into(),
        ];
        let built = build_collection(&children, &BuildOptions::default());
        assert_eq!(keys(&built.items), vec!["a"]);
        assert_eq!(built.items[0].index, 0);
    }

    #[test]
    fn test_static_children_do_not_count_as_nested_items() {
        let children = vec![
            Item::new("a", "A")
                .with_child(Element::Static(Payload::from("note")))
                .into(),
        ];
        let built = build_collection(&children, &BuildOptions::for_pattern(Some(Pattern::Tree), 24));
        assert_eq!(built.items[0].aria.expanded, None);
        assert!(!built.items[0].has_child_nodes());
    }

    #[test]
    fn test_duplicate_item_keys_keep_first() {
        let children = vec![
            Item::new("a", "first").into(),
            Item::new("a", "second").into(),
            Item::new("b", "B").into(),
        ];
        let built = build_collection(&children, &BuildOptions::default());
        assert_eq!(keys(&built.items), vec!["a", "b"]);
        assert_eq!(built.items[0].payload.as_str(), Some("first"));
        assert_eq!(built.items[1].index, 1);
    }

    #[test]
    fn test_source_attributes_preserved() {
        let children = vec![Item::new("a", "A").with_attribute("title", "tip").into()];
        let built = build_collection(&children, &BuildOptions::default());
        assert_eq!(built.items[0].source_attributes.get_str("title"), Some("tip"));
    }
}
