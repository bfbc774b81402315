//! A complete collection: built state, navigation, selection and rendering.
//!
//! [`CollectionController`] wires the engine's pieces together the way a
//! list or tree view would. It owns the current [`CollectionState`], keeps
//! [`KeyboardNavigation`] in step with every rebuild, and renders nodes
//! through an [`ItemRenderer`].
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let children: Vec<Element> = vec![
//!     Item::new("a", "Alpha").into(),
//!     Item::new("b", "Beta").into(),
//! ];
//! let config = CollectionConfig::new()
//!     .with_pattern("listbox")
//!     .with_selection_mode(SelectionMode::Single);
//! let controller = CollectionController::new(config, &children).unwrap();
//!
//! controller.navigation().handle_key(NavKey::ArrowDown);
//! assert_eq!(controller.navigation().active_key(), Some(Key::from("a")));
//!
//! controller.selection().toggle(&Key::from("b"));
//! assert!(controller.selection().is_selected(&Key::from("b")));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use trellis_core::TreeFormatOptions;
use trellis_core::logging::targets;

use crate::collection::{BuildOptions, CollectionNode, CollectionState, Element, Key, KeyedCollection, Pattern};
use crate::config::CollectionConfig;
use crate::error::Result;
use crate::interaction::{KeyboardNavigation, SelectionModel};
use crate::props::Attributes;
use crate::renderer::{ItemRenderer, RenderedNode};

/// Owns one collection's state and interaction models.
pub struct CollectionController {
    config: CollectionConfig,
    pattern: Option<Pattern>,
    build_options: BuildOptions,
    state: RwLock<Arc<CollectionState>>,
    navigation: KeyboardNavigation,
    selection: SelectionModel,
    renderer: ItemRenderer,
}

impl CollectionController {
    /// Create a controller with uncontrolled selection.
    pub fn new(config: CollectionConfig, children: &[Element]) -> Result<Self> {
        let pattern = config.validate()?;
        let selection = SelectionModel::new(config.selection_options(pattern));
        Ok(Self::assemble(config, pattern, selection, children))
    }

    /// Create a controller whose selection is owned by the caller.
    ///
    /// `selected` is the caller's current value; push later values with
    /// [`SelectionModel::sync_controlled`].
    pub fn new_controlled(
        config: CollectionConfig,
        children: &[Element],
        selected: impl IntoIterator<Item = Key>,
    ) -> Result<Self> {
        let pattern = config.validate()?;
        let selection = SelectionModel::new(config.selection_options(pattern).controlled(selected));
        Ok(Self::assemble(config, pattern, selection, children))
    }

    fn assemble(config: CollectionConfig, pattern: Option<Pattern>, selection: SelectionModel, children: &[Element]) -> Self {
        let build_options = config.build_options(pattern);
        let state = Arc::new(CollectionState::build(children, &build_options));
        let navigation = KeyboardNavigation::new(state.clone(), config.navigation_options(pattern));
        let renderer = ItemRenderer::new(navigation.clone(), Some(selection.clone()));

        let controller = Self {
            config,
            pattern,
            build_options,
            state: RwLock::new(state),
            navigation,
            selection,
            renderer,
        };
        controller.activate_first_if_configured();
        controller
    }

    /// Rebuild from a new declarative description.
    ///
    /// Navigation keeps its active key when it survives; otherwise the
    /// configured fallback applies.
    pub fn rebuild(&self, children: &[Element]) {
        let state = Arc::new(CollectionState::build(children, &self.build_options));
        tracing::debug!(target: targets::BUILDER, items = state.len(), "collection rebuilt");
        *self.state.write() = state.clone();
        self.navigation.set_collection(state);
        self.activate_first_if_configured();
    }

    fn activate_first_if_configured(&self) {
        if !self.config.activate_first_item || self.navigation.active_key().is_some() {
            return;
        }
        if let Some(first) = self.navigation.get_first_key() {
            self.navigation.set_active_key(&first);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The configuration this controller was created with.
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// The resolved pattern.
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// The current built collection.
    pub fn state(&self) -> Arc<CollectionState> {
        self.state.read().clone()
    }

    /// Keyboard navigation.
    pub fn navigation(&self) -> &KeyboardNavigation {
        &self.navigation
    }

    /// Selection.
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// The focusable item with this key.
    pub fn item(&self, key: &Key) -> Option<Arc<CollectionNode>> {
        self.state.read().item(key).cloned()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Attributes for the container element.
    pub fn container_props(&self) -> Attributes {
        let aria = self.state.read().collection_props(&self.config.aria_options(self.pattern));
        aria.merge(&self.navigation.collection_props())
    }

    /// Render the current collection.
    pub fn render(&self) -> Vec<RenderedNode> {
        self.renderer.render(&self.state())
    }

    /// The node tree as indented text.
    pub fn debug_tree(&self) -> String {
        self.state.read().debug_tree(TreeFormatOptions::detailed())
    }
}

impl std::fmt::Debug for CollectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionController")
            .field("pattern", &self.pattern)
            .field("items", &self.state.read().len())
            .field("navigation", &self.navigation)
            .field("selection", &self.selection)
            .finish()
    }
}

static_assertions::assert_impl_all!(CollectionController: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Item;
    use crate::error::Error;
    use crate::interaction::{NavKey, SelectionMode};
    use crate::props::{Event, EventKind, names};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn items(keys: &[&str]) -> Vec<Element> {
        keys.iter().map(|k| Item::new(*k, k.to_uppercase()).into()).collect()
    }

    #[test]
    fn test_rejects_unknown_pattern() {
        let err = CollectionController::new(CollectionConfig::new().with_pattern("wheel"), &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(_)));
    }

    #[test]
    fn test_container_props() {
        let config = CollectionConfig::new()
            .with_pattern("listbox")
            .with_selection_mode(SelectionMode::Multiple)
            .with_label("Fruit");
        let controller = CollectionController::new(config, &items(&["a", "b"])).unwrap();
        let props = controller.container_props();

        assert_eq!(props.get_str(names::ROLE), Some("listbox"));
        assert_eq!(props.get_bool(names::ARIA_MULTISELECTABLE), Some(true));
        assert_eq!(props.get_str(names::ARIA_LABEL), Some("Fruit"));
        assert!(!props.contains(names::ARIA_ORIENTATION));
        assert!(props.handler(EventKind::KeyDown).is_some());
    }

    #[test]
    fn test_container_handler_moves_focus() {
        let controller =
            CollectionController::new(CollectionConfig::new().with_pattern("list"), &items(&["a", "b", "c"])).unwrap();
        let props = controller.container_props();

        // Nothing active yet: any navigation key lands on the first item.
        let mut event = Event::container_key_down(NavKey::End);
        props.dispatch(&mut event);
        assert_eq!(controller.navigation().active_key(), Some(Key::from("a")));
        assert!(event.is_default_prevented());

        props.dispatch(&mut Event::container_key_down(NavKey::End));
        assert_eq!(controller.navigation().active_key(), Some(Key::from("c")));
    }

    #[test]
    fn test_menu_activates_first_item() {
        let controller = CollectionController::new(CollectionConfig::menu(), &items(&["new", "open"])).unwrap();
        assert_eq!(controller.navigation().active_key(), Some(Key::from("new")));

        let rendered = controller.render();
        assert_eq!(rendered[0].attributes().get_str(names::ROLE), Some("menuitem"));
        assert_eq!(rendered[0].attributes().get_int(names::TAB_INDEX), Some(0));
        assert_eq!(rendered[0].attributes().get_bool(names::ARIA_CHECKED), Some(false));
    }

    #[test]
    fn test_menu_reactivates_after_emptying() {
        let controller = CollectionController::new(CollectionConfig::menu(), &[]).unwrap();
        assert_eq!(controller.navigation().active_key(), None);

        controller.rebuild(&items(&["cut", "copy"]));
        assert_eq!(controller.navigation().active_key(), Some(Key::from("cut")));
    }

    #[test]
    fn test_rebuild_replaces_state() {
        let controller =
            CollectionController::new(CollectionConfig::new().with_pattern("listbox"), &items(&["a", "b", "c"])).unwrap();
        controller.navigation().navigate_to(&Key::from("c"));

        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        controller.navigation().active_changed().connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        controller.rebuild(&items(&["a", "b"]));
        assert_eq!(controller.state().len(), 2);
        assert!(controller.item(&Key::from("c")).is_none());
        assert_eq!(controller.navigation().active_key(), Some(Key::from("b")));
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_controlled_selection() {
        let config = CollectionConfig::new()
            .with_pattern("listbox")
            .with_selection_mode(SelectionMode::Single);
        let controller = CollectionController::new_controlled(config, &items(&["a", "b"]), [Key::from("a")]).unwrap();

        assert!(controller.selection().is_controlled());
        controller.selection().toggle(&Key::from("b"));
        assert_eq!(controller.selection().selected_keys(), vec![Key::from("a")]);
    }

    #[test]
    fn test_debug_tree() {
        let controller = CollectionController::new(CollectionConfig::new().with_pattern("tree"), &items(&["a"])).unwrap();
        assert!(controller.debug_tree().contains("A [a] (item)"));
    }
}
