//! Configuration loading and event flow through rendered attribute bags.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use trellis::prelude::*;

fn folders() -> Vec<Element> {
    vec![
        Item::new("docs", "Documents")
            .with_children([Item::new("cv", "cv.pdf"), Item::new("notes", "notes.txt")])
            .into(),
        Item::new("pics", "Pictures").into(),
    ]
}

#[test]
fn test_toml_config_drives_controller() {
    let config = CollectionConfig::from_toml_str(
        r#"
        pattern = "tree"
        indent_size = 16
        selection_mode = "multiple"
        default_selected_keys = ["pics"]
        default_active_key = "notes"
        label = "Files"
        "#,
    )
    .unwrap();
    let controller = CollectionController::new(config, &folders()).unwrap();

    assert_eq!(controller.navigation().active_key(), Some(Key::from("notes")));
    assert!(controller.selection().is_selected(&Key::from("pics")));

    let container = controller.container_props();
    assert_eq!(container.get_str("role"), Some("tree"));
    assert_eq!(container.get_bool("aria-multiselectable"), Some(true));
    assert_eq!(container.get_str("aria-label"), Some("Files"));

    let rendered = controller.render();
    let notes = trellis::renderer::find_rendered(&rendered, &Key::from("notes")).unwrap();
    assert_eq!(notes.attributes().get_int("aria-level"), Some(2));
    assert_eq!(notes.attributes().get_int("tabIndex"), Some(0));
    assert_eq!(
        notes.attributes().style().and_then(|s| s.get("padding-left")),
        Some("16px")
    );
}

#[test]
fn test_json_config_with_unknown_pattern_fails_on_validate() {
    let config = CollectionConfig::from_json_str(r#"{ "pattern": "carousel" }"#).unwrap();
    let err = CollectionController::new(config, &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownPattern(_)));
    assert!(err.to_string().contains("carousel"));
}

#[test]
fn test_invalid_default_active_key_is_ignored() {
    let config = CollectionConfig::new().with_pattern("tree").with_default_active_key("missing");
    let controller = CollectionController::new(config, &folders()).unwrap();
    assert_eq!(controller.navigation().active_key(), None);

    // The first tree item stays tabbable until something is active.
    let rendered = controller.render();
    assert_eq!(rendered[0].attributes().get_int("tabIndex"), Some(0));
    assert_eq!(rendered[1].attributes().get_int("tabIndex"), Some(-1));
}

#[test]
fn test_nested_click_toggles_only_innermost_item() {
    let config = CollectionConfig::new()
        .with_pattern("tree")
        .with_selection_mode(SelectionMode::Multiple);
    let controller = CollectionController::new(config, &folders()).unwrap();
    let rendered = controller.render();

    let docs = trellis::renderer::find_rendered(&rendered, &Key::from("docs")).unwrap();
    let cv = trellis::renderer::find_rendered(&rendered, &Key::from("cv")).unwrap();

    // Bubble the click from "cv" outwards until a handler stops it.
    let mut event = Event::click("cv");
    for node in [cv, docs] {
        if event.is_propagation_stopped() {
            break;
        }
        let mut bubbled = event.clone().bubbled_to(node.key().clone());
        node.attributes().dispatch(&mut bubbled);
        event = bubbled;
    }

    assert_eq!(controller.selection().selected_keys(), vec![Key::from("cv")]);
}

#[test]
fn test_bubbled_focus_does_not_steal_active_key() {
    let controller = CollectionController::new(CollectionConfig::new().with_pattern("tree"), &folders()).unwrap();
    controller.navigation().navigate_to(&Key::from("cv"));
    let rendered = controller.render();
    let docs = trellis::renderer::find_rendered(&rendered, &Key::from("docs")).unwrap();

    docs.attributes().dispatch(&mut Event::focus("cv").bubbled_to("docs"));
    assert_eq!(controller.navigation().active_key(), Some(Key::from("cv")));

    docs.attributes().dispatch(&mut Event::focus("docs"));
    assert_eq!(controller.navigation().active_key(), Some(Key::from("docs")));
}

struct RecordingFocus(Mutex<Vec<Key>>);

impl FocusOracle for RecordingFocus {
    fn focus_key(&self, key: &Key) {
        self.0.lock().push(key.clone());
    }
}

#[test]
fn test_keyboard_moves_platform_focus_but_rebuild_does_not() {
    let controller = CollectionController::new(CollectionConfig::new().with_pattern("listbox"), &folders()).unwrap();
    let focus = Arc::new(RecordingFocus(Mutex::new(Vec::new())));
    controller.navigation().set_focus_oracle(focus.clone());

    let moves = Arc::new(AtomicUsize::new(0));
    let moves_clone = moves.clone();
    controller.navigation().active_changed().connect(move |_| {
        moves_clone.fetch_add(1, Ordering::SeqCst);
    });

    controller.navigation().handle_key(NavKey::End);
    controller.navigation().handle_key(NavKey::End);
    assert_eq!(controller.navigation().active_key(), Some(Key::from("pics")));

    controller.rebuild(&[Item::new("docs", "Documents").into()]);
    assert_eq!(controller.navigation().active_key(), Some(Key::from("docs")));

    assert_eq!(*focus.0.lock(), vec![Key::from("docs"), Key::from("pics")]);
    assert_eq!(moves.load(Ordering::SeqCst), 3);
}
