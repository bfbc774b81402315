//! Logging and debugging facilities for Trellis.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output by subsystem
//! - [`TreeDebug`], a text visualiser for any hierarchy implementing [`TreeNodeView`]
//! - [`PerfSpan`], a guard that keeps a tracing span entered for its lifetime
//!
//! # Tracing Integration
//!
//! Trellis uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis::navigation=trace,trellis::selection=debug")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

/// Span names used throughout Trellis for tracing.
pub mod span_names {
    /// Collection rebuild span.
    pub const BUILD: &str = "trellis::build";
    /// Keyboard navigation span.
    pub const NAVIGATE: &str = "trellis::navigate";
    /// Grid column detection span.
    pub const GRID_DETECT: &str = "trellis::grid_detect";
    /// Item rendering span.
    pub const RENDER: &str = "trellis::render";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Performance spans target.
    pub const PERF: &str = "trellis::perf";
    /// Collection builder target.
    pub const BUILDER: &str = "trellis::builder";
    /// Keyboard navigation target.
    pub const NAVIGATION: &str = "trellis::navigation";
    /// Grid layout target.
    pub const GRID: &str = "trellis::grid";
    /// Selection target.
    pub const SELECTION: &str = "trellis::selection";
    /// Configuration target.
    pub const CONFIG: &str = "trellis::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node identifiers.
    pub show_ids: bool,
    /// Whether to show node type names.
    pub show_types: bool,
    /// Whether to show per-node properties.
    pub show_properties: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            show_properties: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_properties: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_properties: false,
            ..Default::default()
        }
    }
}

/// A node that can be printed by [`TreeDebug`].
pub trait TreeNodeView {
    /// Human readable label.
    fn label(&self) -> String;

    /// Stable identifier, shown when [`TreeFormatOptions::show_ids`] is set.
    fn id_text(&self) -> String;

    /// Short type name, shown when [`TreeFormatOptions::show_types`] is set.
    fn type_name(&self) -> &'static str;

    /// `name=value` strings, shown when [`TreeFormatOptions::show_properties`] is set.
    fn properties(&self) -> Vec<String> {
        Vec::new()
    }

    /// Ordered children.
    fn children(&self) -> Vec<&Self>;
}

/// Debug utility for visualizing hierarchies.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a forest of root nodes under a titled header.
    pub fn format_roots<N: TreeNodeView>(&self, title: &str, roots: &[&N]) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{title}:");

        if roots.is_empty() {
            output.push_str("  (empty)\n");
        } else {
            for root in roots {
                self.format_subtree_into(*root, 0, true, &mut output);
            }
        }

        output
    }

    /// Format a subtree starting from a specific node.
    pub fn format_subtree<N: TreeNodeView>(&self, root: &N) -> String {
        let mut output = String::new();
        self.format_subtree_into(root, 0, true, &mut output);
        output
    }

    fn format_subtree_into<N: TreeNodeView>(
        &self,
        node: &N,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) {
        if let Some(max) = self.options.max_depth {
            if depth > max {
                return;
            }
        }

        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(&node.label());

        if self.options.show_ids {
            let _ = write!(output, " [{}]", node.id_text());
        }
        if self.options.show_types {
            let _ = write!(output, " ({})", node.type_name());
        }
        output.push('\n');

        if self.options.show_properties {
            let prefix = self.build_property_prefix(depth);
            for property in node.properties() {
                let _ = writeln!(output, "{prefix}  .{property}");
            }
        }

        let children = node.children();
        let child_count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.format_subtree_into(child, depth + 1, i == child_count - 1, output);
        }
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }

    fn build_property_prefix(&self, depth: usize) -> String {
        let branch = match self.options.style {
            TreeStyle::Ascii => "|",
            TreeStyle::Unicode => "\u{2502}",
            TreeStyle::Compact => "",
        };

        let mut prefix = String::new();
        for _ in 0..depth {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        name: &'static str,
        children: Vec<Node>,
    }

    impl TreeNodeView for Node {
        fn label(&self) -> String {
            self.name.to_string()
        }

        fn id_text(&self) -> String {
            format!("#{}", self.name)
        }

        fn type_name(&self) -> &'static str {
            "Node"
        }

        fn properties(&self) -> Vec<String> {
            vec![format!("children={}", self.children.len())]
        }

        fn children(&self) -> Vec<&Self> {
            self.children.iter().collect()
        }
    }

    fn sample() -> Node {
        Node {
            name: "root",
            children: vec![
                Node { name: "a", children: vec![] },
                Node {
                    name: "b",
                    children: vec![Node { name: "b1", children: vec![] }],
                },
            ],
        }
    }

    #[test]
    fn test_format_roots_empty() {
        let output = TreeDebug::new().format_roots::<Node>("Collection", &[]);
        assert!(output.contains("Collection:"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_hierarchy() {
        let output = TreeDebug::new().format_subtree(&sample());
        assert!(output.starts_with("root [#root] (Node)"));
        assert!(output.contains("\u{251c}\u{2500}\u{2500} a"));
        assert!(output.contains("\u{2514}\u{2500}\u{2500} b"));
        assert!(output.contains("b1"));
    }

    #[test]
    fn test_format_minimal() {
        let output = TreeDebug::with_options(TreeFormatOptions::minimal()).format_subtree(&sample());
        assert!(output.contains("root"));
        assert!(!output.contains("(Node)"));
        assert!(!output.contains("[#"));
    }

    #[test]
    fn test_max_depth() {
        let options = TreeFormatOptions {
            max_depth: Some(1),
            ..TreeFormatOptions::minimal()
        };
        let output = TreeDebug::with_options(options).format_subtree(&sample());
        assert!(output.contains("b"));
        assert!(!output.contains("b1"));
    }

    #[test]
    fn test_properties_shown_when_detailed() {
        let output = TreeDebug::with_options(TreeFormatOptions::detailed()).format_subtree(&sample());
        assert!(output.contains(".children=2"));
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }
}
