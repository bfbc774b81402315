//! Roving-focus keyboard navigation.
//!
//! [`KeyboardNavigation`] owns the active key of a collection and turns key
//! presses into movements over the collection's flat focusable order. It
//! supports vertical and horizontal lists as well as two-dimensional grids,
//! whose column count can be inferred from live geometry through a
//! [`LayoutProbe`].
//!
//! The engine never moves platform focus itself. When the active key changes
//! because of navigation it asks the installed [`FocusOracle`] to do so, and
//! it reports every change through [`KeyboardNavigation::active_changed`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::collection::{KeyList, Orientation};
//! use trellis::interaction::{KeyboardNavigation, NavKey, NavigationOptions};
//!
//! let items = Arc::new(KeyList::new(["a", "b", "c"]));
//! let nav = KeyboardNavigation::new(items, NavigationOptions::default());
//!
//! nav.active_changed().connect(|(new, old)| {
//!     println!("active: {old:?} -> {new:?}");
//! });
//!
//! // Nothing is active yet, so any navigation key lands on the first item.
//! nav.handle_key(NavKey::ArrowDown);
//! assert_eq!(nav.active_key().unwrap().as_str(), "a");
//!
//! nav.handle_key(NavKey::ArrowDown);
//! assert_eq!(nav.active_key().unwrap().as_str(), "b");
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use trellis_core::logging::{span_names, targets};
use trellis_core::{Property, Signal};

use super::grid::{GridPosition, LayoutProbe, detect_grid_columns, grid_target, page_target};
use super::keys::{Intent, NavKey, intent_for};
use crate::collection::{Key, KeyList, KeyedCollection, Orientation};
use crate::props::{Attributes, Event, EventKind, names};

/// Moves platform focus on behalf of the engine.
pub trait FocusOracle: Send + Sync {
    /// Move focus onto the item with this key.
    fn focus_key(&self, key: &Key);
}

/// What happens to the active key when a rebuild removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveKeyFallback {
    /// The item now at the removed item's position, clamped to the end.
    #[default]
    Nearest,
    /// The first item.
    First,
    /// No active item.
    Clear,
}

/// Navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Navigation axis.
    pub orientation: Orientation,
    /// Whether movement past either end wraps.
    pub loop_navigation: bool,
    /// Column count hint for grids.
    pub columns_count: usize,
    /// Initially active key.
    pub default_active_key: Option<Key>,
    /// Whether navigation is disabled.
    pub disabled: bool,
    /// Policy when a rebuild removes the active key.
    pub fallback: ActiveKeyFallback,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            loop_navigation: true,
            columns_count: 1,
            default_active_key: None,
            disabled: false,
            fallback: ActiveKeyFallback::default(),
        }
    }
}

impl NavigationOptions {
    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set whether movement wraps.
    pub fn with_loop(mut self, loop_navigation: bool) -> Self {
        self.loop_navigation = loop_navigation;
        self
    }

    /// Set the column count hint.
    pub fn with_columns(mut self, columns_count: usize) -> Self {
        self.columns_count = columns_count;
        self
    }

    /// Set the initially active key.
    pub fn with_default_active_key(mut self, key: impl Into<Key>) -> Self {
        self.default_active_key = Some(key.into());
        self
    }

    /// Disable navigation.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the removal policy.
    pub fn with_fallback(mut self, fallback: ActiveKeyFallback) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Whether a change of active key should move platform focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusMove {
    Move,
    Stay,
}

struct Inner {
    options: NavigationOptions,
    items: RwLock<Arc<dyn KeyedCollection>>,
    active_key: Property<Option<Key>>,
    columns: Property<usize>,
    probe: RwLock<Option<Arc<dyn LayoutProbe>>>,
    focus: RwLock<Option<Arc<dyn FocusOracle>>>,
    active_changed: Signal<(Option<Key>, Option<Key>)>,
    columns_changed: Signal<usize>,
}

/// Keyboard navigation state for one collection.
///
/// Cloning yields another handle to the same state; handlers placed in
/// attribute bags hold such handles.
#[derive(Clone)]
pub struct KeyboardNavigation {
    inner: Arc<Inner>,
}

impl KeyboardNavigation {
    /// Create navigation over a collection.
    ///
    /// A default active key that is not in the collection is ignored.
    pub fn new(items: Arc<dyn KeyedCollection>, options: NavigationOptions) -> Self {
        let active = options
            .default_active_key
            .clone()
            .filter(|key| items.contains(key));
        if active.is_none() {
            if let Some(key) = &options.default_active_key {
                tracing::debug!(target: targets::NAVIGATION, %key, "default active key not in collection");
            }
        }

        let columns = options.columns_count.max(1);
        Self {
            inner: Arc::new(Inner {
                items: RwLock::new(items),
                active_key: Property::new(active),
                columns: Property::new(columns),
                probe: RwLock::new(None),
                focus: RwLock::new(None),
                active_changed: Signal::new(),
                columns_changed: Signal::new(),
                options,
            }),
        }
    }

    /// Navigation over an empty collection.
    pub fn empty(options: NavigationOptions) -> Self {
        Self::new(Arc::new(KeyList::default()), options)
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted with `(new, old)` whenever the active key changes.
    pub fn active_changed(&self) -> &Signal<(Option<Key>, Option<Key>)> {
        &self.inner.active_changed
    }

    /// Emitted with the new count whenever the effective column count changes.
    pub fn columns_changed(&self) -> &Signal<usize> {
        &self.inner.columns_changed
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Install the geometry oracle and re-infer the column count.
    pub fn set_layout_probe(&self, probe: Arc<dyn LayoutProbe>) {
        *self.inner.probe.write() = Some(probe);
        self.refresh_columns();
    }

    /// Install the focus oracle.
    pub fn set_focus_oracle(&self, oracle: Arc<dyn FocusOracle>) {
        *self.inner.focus.write() = Some(oracle);
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The navigation options.
    pub fn options(&self) -> &NavigationOptions {
        &self.inner.options
    }

    /// Whether navigation is disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.options.disabled
    }

    /// The active key, if any.
    pub fn active_key(&self) -> Option<Key> {
        self.inner.active_key.get()
    }

    /// Whether `key` is the active key.
    pub fn is_active(&self, key: &Key) -> bool {
        self.inner.active_key.with(|active| active.as_ref() == Some(key))
    }

    /// Index of the active key in the flat order.
    pub fn active_index(&self) -> Option<usize> {
        let key = self.active_key()?;
        self.items().index_of(&key)
    }

    /// The effective column count.
    pub fn columns_count(&self) -> usize {
        self.inner.columns.get()
    }

    /// Grid position of `key`, using the effective column count.
    pub fn current_position(&self, key: &Key) -> Option<GridPosition> {
        let index = self.items().index_of(key)?;
        Some(GridPosition::of(index, self.columns_count()))
    }

    fn items(&self) -> Arc<dyn KeyedCollection> {
        self.inner.items.read().clone()
    }

    // =========================================================================
    // Neighbour queries
    // =========================================================================

    /// The key after the active one, wrapping when looping is enabled.
    pub fn get_next_key(&self) -> Option<Key> {
        let items = self.items();
        let next = self.active_key().and_then(|key| items.key_after(&key));
        next.or_else(|| self.inner.options.loop_navigation.then(|| items.first_key()).flatten())
    }

    /// The key before the active one, wrapping when looping is enabled.
    pub fn get_prev_key(&self) -> Option<Key> {
        let items = self.items();
        let prev = self.active_key().and_then(|key| items.key_before(&key));
        prev.or_else(|| self.inner.options.loop_navigation.then(|| items.last_key()).flatten())
    }

    /// The first key.
    pub fn get_first_key(&self) -> Option<Key> {
        self.items().first_key()
    }

    /// The last key.
    pub fn get_last_key(&self) -> Option<Key> {
        self.items().last_key()
    }

    /// The key a movement would land on, without moving.
    ///
    /// With no active key every movement lands on the first item.
    pub fn target_for(&self, intent: Intent) -> Option<Key> {
        let items = self.items();
        let Some(index) = self.active_key().and_then(|key| items.index_of(&key)) else {
            return items.first_key();
        };

        let count = items.len();
        let target = match (self.inner.options.orientation, intent) {
            (_, Intent::First) => Some(0),
            (_, Intent::Last) => count.checked_sub(1),
            (Orientation::Both, _) => grid_target(
                index,
                intent,
                self.columns_count(),
                count,
                self.inner.options.loop_navigation,
            ),
            (_, Intent::PageUp | Intent::PageDown) => page_target(index, intent, count),
            (_, Intent::Next) => return self.get_next_key(),
            (_, Intent::Previous) => return self.get_prev_key(),
            (_, Intent::Up | Intent::Down | Intent::Left | Intent::Right) => None,
        };

        target.and_then(|i| items.key_at(i))
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Make `key` active and move focus onto it.
    ///
    /// No-op when disabled, when `key` is not in the collection, or when
    /// `key` is already active: [`active_changed`](Self::active_changed)
    /// fires and focus moves only on a real transition.
    pub fn navigate_to(&self, key: &Key) {
        self.navigate(key, FocusMove::Move);
    }

    /// Make `key` active without moving platform focus.
    pub fn set_active_key(&self, key: &Key) {
        self.navigate(key, FocusMove::Stay);
    }

    fn navigate(&self, key: &Key, focus: FocusMove) {
        if self.is_disabled() {
            return;
        }
        if !self.items().contains(key) {
            tracing::debug!(target: targets::NAVIGATION, %key, "ignoring navigation to unknown key");
            return;
        }

        let Some(old) = self.inner.active_key.replace(Some(key.clone())) else {
            return;
        };
        tracing::trace!(target: targets::NAVIGATION, %key, ?old, "active key changed");
        self.inner.active_changed.emit((Some(key.clone()), old));

        if focus == FocusMove::Move {
            let oracle = self.inner.focus.read().clone();
            if let Some(oracle) = oracle {
                oracle.focus_key(key);
            }
        }
    }

    /// Handle a key press. Returns `true` if the key moved (or tried to move)
    /// the active item.
    pub fn handle_key(&self, key: NavKey) -> bool {
        if self.is_disabled() {
            return false;
        }
        let Some(intent) = intent_for(key, self.inner.options.orientation) else {
            return false;
        };
        let _span =
            tracing::trace_span!(target: targets::NAVIGATION, "navigate", name = span_names::NAVIGATE, ?intent).entered();
        match self.target_for(intent) {
            Some(target) => {
                self.navigate_to(&target);
                true
            }
            None => false,
        }
    }

    /// Handle a key-down event, consuming it when it navigated.
    pub fn handle_key_event(&self, event: &mut Event) {
        if event.kind != EventKind::KeyDown {
            return;
        }
        if let Some(key) = event.key {
            if self.handle_key(key) {
                event.prevent_default();
                event.stop_propagation();
            }
        }
    }

    // =========================================================================
    // Collection and layout changes
    // =========================================================================

    /// Replace the collection after a rebuild.
    ///
    /// If the active key is gone it is replaced according to the
    /// [`ActiveKeyFallback`] policy and [`active_changed`](Self::active_changed)
    /// is emitted; platform focus is not moved.
    pub fn set_collection(&self, items: Arc<dyn KeyedCollection>) {
        let old_items = std::mem::replace(&mut *self.inner.items.write(), items.clone());

        if old_items.len() != items.len() {
            self.refresh_columns();
        }

        let Some(active) = self.active_key() else {
            return;
        };
        if items.contains(&active) {
            return;
        }

        let replacement = match self.inner.options.fallback {
            ActiveKeyFallback::Clear => None,
            ActiveKeyFallback::First => items.first_key(),
            ActiveKeyFallback::Nearest => {
                let old_index = old_items.index_of(&active).unwrap_or(0);
                items
                    .len()
                    .checked_sub(1)
                    .and_then(|last| items.key_at(old_index.min(last)))
            }
        };

        tracing::debug!(
            target: targets::NAVIGATION,
            removed = %active,
            ?replacement,
            "active key removed by rebuild"
        );
        if let Some(old) = self.inner.active_key.replace(replacement.clone()) {
            self.inner.active_changed.emit((replacement, old));
        }
    }

    /// Re-infer the column count after the container was resized.
    pub fn handle_resize(&self) {
        if !self.is_disabled() {
            self.refresh_columns();
        }
    }

    fn refresh_columns(&self) {
        let hint = self.inner.options.columns_count.max(1);
        let columns = if self.inner.options.orientation == Orientation::Both {
            let probe = self.inner.probe.read().clone();
            match probe {
                Some(probe) => detect_grid_columns(probe.as_ref(), &self.items().keys(), hint),
                None => hint,
            }
        } else {
            hint
        };

        if self.inner.columns.set(columns) {
            tracing::debug!(target: targets::GRID, columns, "column count changed");
            self.inner.columns_changed.emit(columns);
        }
    }

    // =========================================================================
    // Attribute bags
    // =========================================================================

    /// Attributes for the collection container: a key-down handler.
    ///
    /// Empty when disabled.
    pub fn collection_props(&self) -> Attributes {
        if self.is_disabled() {
            return Attributes::new();
        }
        let nav = self.clone();
        Attributes::new().on(EventKind::KeyDown, move |event| nav.handle_key_event(event))
    }

    /// Roving-tabindex attributes for one item.
    ///
    /// The active item is tabbable (`tabIndex = 0`) and every other item is
    /// not (`-1`). While nothing is active, `initial_tab_index` is used when
    /// given. Focus arriving directly on the item (not bubbled from a nested
    /// collection) makes it active. Empty when disabled.
    pub fn item_props(&self, key: &Key, initial_tab_index: Option<i32>) -> Attributes {
        if self.is_disabled() {
            return Attributes::new();
        }

        let is_active = self.is_active(key);
        let tab_index = match (is_active, self.active_key().is_none(), initial_tab_index) {
            (true, _, _) => 0,
            (false, true, Some(initial)) => initial,
            _ => -1,
        };

        let nav = self.clone();
        let item_key = key.clone();
        Attributes::new()
            .with(names::TAB_INDEX, tab_index)
            .with(names::DATA_ACTIVE, is_active)
            .on(EventKind::Focus, move |event| {
                if event.is_at_target() && !nav.is_active(&item_key) {
                    nav.navigate(&item_key, FocusMove::Stay);
                }
            })
    }
}

impl fmt::Debug for KeyboardNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardNavigation")
            .field("options", &self.inner.options)
            .field("active_key", &self.active_key())
            .field("columns", &self.columns_count())
            .field("len", &self.items().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(KeyboardNavigation: Send, Sync);
