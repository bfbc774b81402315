//! Text dumps of a built collection.

use std::sync::Arc;

use trellis_core::{TreeDebug, TreeFormatOptions, TreeNodeView};

use super::node::{CollectionNode, NodeKind};
use super::state::CollectionState;

impl TreeNodeView for CollectionNode {
    fn label(&self) -> String {
        self.payload
            .text_value()
            .unwrap_or_else(|| self.key.to_string())
    }

    fn id_text(&self) -> String {
        self.key.to_string()
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Item => "item",
            NodeKind::Section => "section",
        }
    }

    fn properties(&self) -> Vec<String> {
        let mut props = vec![format!("level={}", self.level), format!("index={}", self.index)];
        props.extend(self.aria.to_attributes().values().map(|(name, value)| format!("{name}={value}")));
        if let Some(indent) = self.indent {
            props.push(format!("indent={indent}px"));
        }
        props
    }

    fn children(&self) -> Vec<&Self> {
        self.child_nodes.iter().map(Arc::as_ref).collect()
    }
}

impl CollectionState {
    /// Render the node tree as indented text.
    pub fn debug_tree(&self, options: TreeFormatOptions) -> String {
        let roots: Vec<&CollectionNode> = self.collection().iter().map(Arc::as_ref).collect();
        TreeDebug::with_options(options).format_roots("Collection", &roots)
    }
}
