//! Selection state for collections.
//!
//! [`SelectionModel`] tracks which items are selected under a
//! [`SelectionMode`]. Storage is resolved once, at construction:
//!
//! - **Uncontrolled**: the model owns the selected set, updates it on every
//!   selection event, then reports the result.
//! - **Controlled**: the caller owns the set. The model computes the next
//!   set and reports it through [`SelectionModel::selection_changed`], but
//!   never changes what it reads until the caller pushes a new value with
//!   [`SelectionModel::sync_controlled`].
//!
//! # Example
//!
//! ```
//! use trellis::collection::{Key, Pattern};
//! use trellis::interaction::{SelectionMode, SelectionModel, SelectionOptions};
//!
//! let selection = SelectionModel::new(
//!     SelectionOptions::new(SelectionMode::Single).with_pattern(Pattern::Listbox),
//! );
//! selection.selection_changed().connect(|change| {
//!     println!("selected: {:?}", change.selected_keys);
//! });
//!
//! selection.toggle(&Key::from("a"));
//! selection.toggle(&Key::from("b"));
//! assert_eq!(selection.selected_keys(), vec![Key::from("b")]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use trellis_core::logging::targets;
use trellis_core::{Property, Signal};

use crate::collection::{Key, Pattern, Payload, SelectionAttribute};
use crate::props::{Attributes, Event, EventKind, names};

/// How many items may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Selection is disabled.
    #[default]
    None,
    /// At most one item.
    Single,
    /// Any number of items.
    Multiple,
}

/// Who owns the selected set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// The caller owns the set; this is its current value.
    Controlled(Vec<Key>),
    /// The model owns the set; this is its initial value.
    Uncontrolled(Vec<Key>),
}

impl Default for SelectionSource {
    fn default() -> Self {
        SelectionSource::Uncontrolled(Vec::new())
    }
}

/// A selection change report.
#[derive(Debug, Clone)]
pub struct SelectionChange {
    /// The full resulting selection, in selection order.
    pub selected_keys: Vec<Key>,
    /// The key that triggered the change, for item toggles.
    pub key: Option<Key>,
    /// The payload of the item that triggered the change, when known.
    pub item: Option<Payload>,
}

type ChangeCallback = Arc<dyn Fn(&SelectionChange) + Send + Sync>;

/// Selection configuration.
#[derive(Clone, Default)]
pub struct SelectionOptions {
    /// Selection mode.
    pub mode: SelectionMode,
    /// Storage ownership and initial value.
    pub source: SelectionSource,
    /// Pattern whose selection attribute is emitted.
    pub pattern: Option<Pattern>,
    on_change: Option<ChangeCallback>,
}

impl SelectionOptions {
    /// Uncontrolled options with an empty initial selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Use caller-owned storage with this current value.
    pub fn controlled(mut self, selected: impl IntoIterator<Item = impl Into<Key>>) -> Self {
        self.source = SelectionSource::Controlled(selected.into_iter().map(Into::into).collect());
        self
    }

    /// Use model-owned storage with this initial value.
    pub fn with_default_selected(mut self, selected: impl IntoIterator<Item = impl Into<Key>>) -> Self {
        self.source = SelectionSource::Uncontrolled(selected.into_iter().map(Into::into).collect());
        self
    }

    /// Set the pattern whose selection attribute is emitted.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Register a change callback, connected at construction.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&SelectionChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for SelectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionOptions")
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("pattern", &self.pattern)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// An insertion-ordered set of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedKeys {
    order: Vec<Key>,
    members: HashSet<Key>,
}

impl SelectedKeys {
    /// Whether `key` is a member.
    pub fn contains(&self, key: &Key) -> bool {
        self.members.contains(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Members in insertion order.
    pub fn to_vec(&self) -> Vec<Key> {
        self.order.clone()
    }

    fn insert(&mut self, key: Key) {
        if self.members.insert(key.clone()) {
            self.order.push(key);
        }
    }

    fn remove(&mut self, key: &Key) {
        if self.members.remove(key) {
            self.order.retain(|k| k != key);
        }
    }
}

impl FromIterator<Key> for SelectedKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = SelectedKeys::default();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

enum Storage {
    Controlled(RwLock<SelectedKeys>),
    Uncontrolled(Property<SelectedKeys>),
}

impl Storage {
    fn read<R>(&self, f: impl FnOnce(&SelectedKeys) -> R) -> R {
        match self {
            Storage::Controlled(keys) => f(&keys.read()),
            Storage::Uncontrolled(keys) => keys.with(f),
        }
    }
}

struct Inner {
    mode: SelectionMode,
    attribute: Option<SelectionAttribute>,
    storage: Storage,
    selection_changed: Signal<SelectionChange>,
}

/// Selection state for one collection.
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct SelectionModel {
    inner: Arc<Inner>,
}

impl SelectionModel {
    /// Create a selection model.
    pub fn new(options: SelectionOptions) -> Self {
        let storage = match options.source {
            SelectionSource::Controlled(keys) => Storage::Controlled(RwLock::new(keys.into_iter().collect())),
            SelectionSource::Uncontrolled(keys) => Storage::Uncontrolled(Property::new(keys.into_iter().collect())),
        };

        let selection_changed = Signal::new();
        if let Some(callback) = options.on_change {
            selection_changed.connect(move |change| callback(change));
        }

        Self {
            inner: Arc::new(Inner {
                mode: options.mode,
                attribute: options.pattern.and_then(|p| p.config().selection_attribute),
                storage,
                selection_changed,
            }),
        }
    }

    /// A model with selection disabled.
    pub fn disabled() -> Self {
        Self::new(SelectionOptions::new(SelectionMode::None))
    }

    /// Emitted after every selection event, with the full resulting set.
    pub fn selection_changed(&self) -> &Signal<SelectionChange> {
        &self.inner.selection_changed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.inner.mode
    }

    /// Whether the caller owns the selected set.
    pub fn is_controlled(&self) -> bool {
        matches!(self.inner.storage, Storage::Controlled(_))
    }

    /// The attribute carrying selection state, if any.
    pub fn selection_attribute(&self) -> Option<SelectionAttribute> {
        self.inner.attribute
    }

    /// The selected keys, in selection order.
    pub fn selected_keys(&self) -> Vec<Key> {
        self.inner.storage.read(SelectedKeys::to_vec)
    }

    /// Whether `key` is selected.
    pub fn is_selected(&self, key: &Key) -> bool {
        self.inner.storage.read(|keys| keys.contains(key))
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selection_count() > 0
    }

    /// Number of selected keys.
    pub fn selection_count(&self) -> usize {
        self.inner.storage.read(SelectedKeys::len)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Toggle `key`.
    ///
    /// In single mode a selected key is deselected (clearing the selection)
    /// and any other key replaces the selection. In multiple mode only the
    /// membership of `key` flips.
    pub fn toggle(&self, key: &Key) {
        self.toggle_item(key, None);
    }

    /// Toggle `key`, reporting `item` as the trigger.
    pub fn toggle_item(&self, key: &Key, item: Option<Payload>) {
        let next = match self.inner.mode {
            SelectionMode::None => return,
            SelectionMode::Single => {
                if self.is_selected(key) {
                    SelectedKeys::default()
                } else {
                    std::iter::once(key.clone()).collect()
                }
            }
            SelectionMode::Multiple => {
                let mut next = self.inner.storage.read(SelectedKeys::clone);
                if next.contains(key) {
                    next.remove(key);
                } else {
                    next.insert(key.clone());
                }
                next
            }
        };
        self.commit(next, Some(key.clone()), item);
    }

    /// Deselect everything.
    pub fn clear_selection(&self) {
        if self.inner.mode == SelectionMode::None {
            return;
        }
        self.commit(SelectedKeys::default(), None, None);
    }

    /// Select exactly `keys`. Multiple mode only.
    pub fn select_all(&self, keys: impl IntoIterator<Item = Key>) {
        if self.inner.mode != SelectionMode::Multiple {
            return;
        }
        self.commit(keys.into_iter().collect(), None, None);
    }

    /// Select exactly `key`.
    pub fn replace_selection(&self, key: &Key) {
        if self.inner.mode == SelectionMode::None {
            return;
        }
        self.commit(std::iter::once(key.clone()).collect(), None, None);
    }

    /// Push the caller's current value into controlled storage.
    ///
    /// Ignored for uncontrolled models.
    pub fn sync_controlled(&self, keys: impl IntoIterator<Item = Key>) {
        match &self.inner.storage {
            Storage::Controlled(stored) => *stored.write() = keys.into_iter().collect(),
            Storage::Uncontrolled(_) => {
                tracing::debug!(target: targets::SELECTION, "sync_controlled on uncontrolled selection ignored");
            }
        }
    }

    fn commit(&self, next: SelectedKeys, key: Option<Key>, item: Option<Payload>) {
        let selected_keys = next.to_vec();
        if let Storage::Uncontrolled(stored) = &self.inner.storage {
            stored.set(next);
        }
        tracing::debug!(
            target: targets::SELECTION,
            count = selected_keys.len(),
            controlled = self.is_controlled(),
            "selection changed"
        );
        self.inner.selection_changed.emit(SelectionChange {
            selected_keys,
            key,
            item,
        });
    }

    // =========================================================================
    // Attribute bags
    // =========================================================================

    /// Click and Enter/Space handlers that toggle `key`.
    ///
    /// Both handlers consume the event so enclosing items do not also toggle.
    pub fn item_handlers(&self, key: &Key, item: Option<Payload>) -> Attributes {
        if self.inner.mode == SelectionMode::None {
            return Attributes::new();
        }

        let on_click = {
            let selection = self.clone();
            let key = key.clone();
            let item = item.clone();
            move |event: &mut Event| {
                event.prevent_default();
                event.stop_propagation();
                selection.toggle_item(&key, item.clone());
            }
        };
        let on_key_down = {
            let selection = self.clone();
            let key = key.clone();
            move |event: &mut Event| {
                if event.key.is_some_and(|k| k.is_activation()) {
                    event.prevent_default();
                    event.stop_propagation();
                    selection.toggle_item(&key, item.clone());
                }
            }
        };

        Attributes::new()
            .on(EventKind::Click, on_click)
            .on(EventKind::KeyDown, on_key_down)
    }

    /// The selection attribute for `key`, if the pattern has one.
    pub fn item_aria_props(&self, key: &Key) -> Attributes {
        match (self.inner.mode, self.inner.attribute) {
            (SelectionMode::None, _) | (_, None) => Attributes::new(),
            (_, Some(attribute)) => Attributes::new().with(attribute.name(), self.is_selected(key)),
        }
    }

    /// Handlers, selection attribute and `data-selected` for `key`.
    ///
    /// Empty when selection is disabled.
    pub fn item_selection_props(&self, key: &Key, item: Option<Payload>) -> Attributes {
        if self.inner.mode == SelectionMode::None {
            return Attributes::new();
        }
        self.item_handlers(key, item)
            .merge(&self.item_aria_props(key))
            .with(names::DATA_SELECTED, self.is_selected(key))
    }
}

impl fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("mode", &self.inner.mode)
            .field("controlled", &self.is_controlled())
            .field("selected", &self.selected_keys())
            .finish()
    }
}

static_assertions::assert_impl_all!(SelectionModel: Send, Sync);
