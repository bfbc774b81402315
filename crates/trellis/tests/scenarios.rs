//! End-to-end scenarios: building, grid navigation and selection.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use trellis::interaction::GridPosition;
use trellis::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn filter_panel() -> Vec<Element> {
    vec![
        Section::new("categories", "Categories")
            .with_children([
                Item::new("books", "Books"),
                Item::new("music", "Music"),
                Item::new("film", "Film"),
                Item::new("games", "Games"),
            ])
            .into(),
        Section::new("prices", "Price Ranges")
            .with_children([
                Item::new("under-10", "Under $10"),
                Item::new("10-50", "$10 to $50"),
                Item::new("over-50", "Over $50"),
            ])
            .into(),
    ]
}

#[test]
fn test_sections_flatten_in_declared_order() {
    init_logging();
    let state = CollectionState::build(&filter_panel(), &BuildOptions::for_pattern(Some(Pattern::Listbox), 24));

    let keys: Vec<String> = state.keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(
        keys,
        ["books", "music", "film", "games", "under-10", "10-50", "over-50"]
    );
    assert_eq!(state.collection().len(), 2);
    assert!(state.collection().iter().all(|node| node.is_section()));

    assert_eq!(state.key_after(&Key::from("games")), Some(Key::from("under-10")));
    assert_eq!(state.key_before(&Key::from("under-10")), Some(Key::from("games")));
    assert_eq!(state.first_key(), Some(Key::from("books")));
    assert_eq!(state.last_key(), Some(Key::from("over-50")));
}

#[test]
fn test_sections_render_grouped() {
    let controller = CollectionController::new(CollectionConfig::new().with_pattern("listbox"), &filter_panel()).unwrap();
    let rendered = controller.render();

    let RenderedNode::Section { group, children, .. } = &rendered[1] else {
        panic!("expected a section");
    };
    assert_eq!(group.get_str("aria-labelledby"), Some("section-prices"));
    assert_eq!(children.len(), 3);
    assert!(children.iter().all(RenderedNode::is_item));
}

/// Six 100x40 cells laid out three to a row.
struct SixCells(HashMap<Key, Rect>);

impl SixCells {
    fn new() -> Self {
        Self(
            (0..6usize)
                .map(|i| {
                    let pos = GridPosition::of(i, 3);
                    (Key::from(i), Rect::new(pos.col as f32 * 100.0, pos.row as f32 * 40.0, 100.0, 40.0))
                })
                .collect(),
        )
    }
}

impl LayoutProbe for SixCells {
    fn rect_for_key(&self, key: &Key) -> Option<Rect> {
        self.0.get(key).copied()
    }
}

fn grid_controller(loop_navigation: bool) -> CollectionController {
    let cells: Vec<Element> = (0..6usize).map(|i| Item::new(i, format!("Cell {i}")).into()).collect();
    let config = CollectionConfig::new()
        .with_pattern("grid")
        .with_columns(3)
        .with_loop(loop_navigation);
    let controller = CollectionController::new(config, &cells).unwrap();
    controller.navigation().set_layout_probe(Arc::new(SixCells::new()));
    controller
}

#[test]
fn test_grid_down_clamps_without_loop() {
    let controller = grid_controller(false);
    let nav = controller.navigation();
    assert_eq!(nav.columns_count(), 3);

    nav.navigate_to(&Key::from(1usize));
    nav.handle_key(NavKey::ArrowDown);
    assert_eq!(nav.active_index(), Some(4));
    assert_eq!(nav.current_position(&Key::from(4usize)), Some(GridPosition { index: 4, row: 1, col: 1 }));

    nav.handle_key(NavKey::ArrowDown);
    assert_eq!(nav.active_index(), Some(4));
}

#[test]
fn test_grid_down_wraps_with_loop() {
    let controller = grid_controller(true);
    let nav = controller.navigation();

    nav.navigate_to(&Key::from(1usize));
    nav.handle_key(NavKey::ArrowDown);
    nav.handle_key(NavKey::ArrowDown);
    assert_eq!(nav.active_index(), Some(1));
}

#[test]
fn test_grid_container_has_no_orientation() {
    let controller = grid_controller(true);
    let props = controller.container_props();
    assert_eq!(props.get_str("role"), Some("grid"));
    assert!(!props.contains("aria-orientation"));
}

#[test]
fn test_single_selection_replaces() {
    let config = CollectionConfig::new()
        .with_pattern("listbox")
        .with_selection_mode(SelectionMode::Single);
    let children: Vec<Element> = vec![Item::new("A", "A").into(), Item::new("B", "B").into()];
    let controller = CollectionController::new(config, &children).unwrap();

    let reports = Arc::new(Mutex::new(Vec::new()));
    let reports_clone = reports.clone();
    controller.selection().selection_changed().connect(move |change| {
        reports_clone.lock().push(change.selected_keys.clone());
    });

    let rendered = controller.render();
    for key in ["A", "B"] {
        let node = rendered.iter().find(|n| n.key().as_str() == key).unwrap();
        node.attributes().dispatch(&mut Event::click(key));
    }

    assert_eq!(controller.selection().selected_keys(), vec![Key::from("B")]);
    assert_eq!(*reports.lock(), vec![vec![Key::from("A")], vec![Key::from("B")]]);
}
