//! Built collection state and neighbour queries.

use std::collections::HashMap;
use std::sync::Arc;

use super::aria::CollectionAriaOptions;
use super::builder::{BuildOptions, build_collection};
use super::descriptor::Element;
use super::key::Key;
use super::node::CollectionNode;
use super::pattern::{Pattern, PatternConfig};
use crate::props::Attributes;

/// An ordered sequence of unique keys with neighbour queries.
///
/// This is the only view of a collection the navigation engine needs.
pub trait KeyedCollection: Send + Sync {
    /// Number of keys.
    fn len(&self) -> usize;

    /// The key at a position.
    fn key_at(&self, index: usize) -> Option<Key>;

    /// The position of a key.
    fn index_of(&self, key: &Key) -> Option<usize>;

    /// Whether there are no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a key is present.
    fn contains(&self, key: &Key) -> bool {
        self.index_of(key).is_some()
    }

    /// The first key, if any.
    fn first_key(&self) -> Option<Key> {
        self.key_at(0)
    }

    /// The last key, if any.
    fn last_key(&self) -> Option<Key> {
        self.len().checked_sub(1).and_then(|i| self.key_at(i))
    }

    /// The key immediately before `key`. Absent at the start or for unknown keys.
    fn key_before(&self, key: &Key) -> Option<Key> {
        let index = self.index_of(key)?;
        index.checked_sub(1).and_then(|i| self.key_at(i))
    }

    /// The key immediately after `key`. Absent at the end or for unknown keys.
    fn key_after(&self, key: &Key) -> Option<Key> {
        let index = self.index_of(key)?;
        self.key_at(index + 1)
    }

    /// All keys, in order.
    fn keys(&self) -> Vec<Key> {
        (0..self.len()).filter_map(|i| self.key_at(i)).collect()
    }
}

/// A plain ordered key list.
#[derive(Debug, Clone, Default)]
pub struct KeyList {
    keys: Vec<Key>,
    positions: HashMap<Key, usize>,
}

impl KeyList {
    /// Create a list. Later duplicates of a key are ignored.
    pub fn new(keys: impl IntoIterator<Item = impl Into<Key>>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyList {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = KeyList::default();
        for key in iter {
            let key = key.into();
            if !list.positions.contains_key(&key) {
                list.positions.insert(key.clone(), list.keys.len());
                list.keys.push(key);
            }
        }
        list
    }
}

impl KeyedCollection for KeyList {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn key_at(&self, index: usize) -> Option<Key> {
        self.keys.get(index).cloned()
    }

    fn index_of(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

/// A built collection: the node tree, the focusable list and lookups.
///
/// Rebuilt wholesale whenever the declarative description changes.
#[derive(Debug, Clone, Default)]
pub struct CollectionState {
    collection: Vec<Arc<CollectionNode>>,
    items: Vec<Arc<CollectionNode>>,
    positions: HashMap<Key, usize>,
    pattern: Option<Pattern>,
}

impl CollectionState {
    /// An empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from declarative children.
    pub fn build(children: &[Element], options: &BuildOptions) -> Self {
        let built = build_collection(children, options);
        let positions = built
            .items
            .iter()
            .enumerate()
            .map(|(i, node)| (node.key.clone(), i))
            .collect();

        Self {
            collection: built.collection,
            items: built.items,
            positions,
            pattern: options.pattern,
        }
    }

    /// Top-level nodes.
    pub fn collection(&self) -> &[Arc<CollectionNode>] {
        &self.collection
    }

    /// Focusable items, in pre-order.
    pub fn items(&self) -> &[Arc<CollectionNode>] {
        &self.items
    }

    /// The focusable item with this key.
    pub fn item(&self, key: &Key) -> Option<&Arc<CollectionNode>> {
        self.positions.get(key).map(|&i| &self.items[i])
    }

    /// The pattern this collection was built for.
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// The registry entry for this collection's pattern.
    pub fn pattern_config(&self) -> Option<&'static PatternConfig> {
        self.pattern.map(Pattern::config)
    }

    /// Container attributes for this collection.
    ///
    /// The pattern in `options` is replaced by the collection's own.
    pub fn collection_props(&self, options: &CollectionAriaOptions) -> Attributes {
        CollectionAriaOptions {
            pattern: self.pattern,
            ..options.clone()
        }
        .to_attributes()
    }
}

impl KeyedCollection for CollectionState {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn key_at(&self, index: usize) -> Option<Key> {
        self.items.get(index).map(|node| node.key.clone())
    }

    fn index_of(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

static_assertions::assert_impl_all!(CollectionState: Send, Sync);
