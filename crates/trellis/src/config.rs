//! Collection configuration.
//!
//! [`CollectionConfig`] gathers every knob of a collection in one
//! serializable struct. It can be built in code with the `with_*` methods or
//! loaded from TOML or JSON. Missing fields take their defaults.
//!
//! # Example
//!
//! ```
//! use trellis::config::CollectionConfig;
//! use trellis::interaction::SelectionMode;
//!
//! let config = CollectionConfig::from_toml_str(r#"
//!     pattern = "listbox"
//!     selection_mode = "multiple"
//!     default_selected_keys = ["apple"]
//!     label = "Fruit"
//! "#).unwrap();
//!
//! assert_eq!(config.selection_mode, SelectionMode::Multiple);
//! assert_eq!(config.indent_size, 24);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use trellis_core::logging::targets;

use crate::collection::{BuildOptions, CollectionAriaOptions, DEFAULT_INDENT_SIZE, Key, Orientation, Pattern};
use crate::error::{Error, Result};
use crate::interaction::{ActiveKeyFallback, NavigationOptions, SelectionMode, SelectionOptions};

/// Configuration for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Pattern name, resolved through the registry by [`validate`](Self::validate).
    pub pattern: Option<String>,
    /// Navigation axis. Defaults to the pattern's.
    pub orientation: Option<Orientation>,
    /// Pixels of indentation per nesting level.
    pub indent_size: u32,
    /// Whether navigation wraps past either end.
    pub loop_navigation: bool,
    /// Column count hint for grids.
    pub columns_count: usize,
    /// How many items may be selected.
    pub selection_mode: SelectionMode,
    /// Initial selection for uncontrolled collections.
    pub default_selected_keys: Vec<Key>,
    /// Initially active item.
    pub default_active_key: Option<Key>,
    /// Activate the first item after each rebuild when nothing is active.
    pub activate_first_item: bool,
    /// What happens to the active key when a rebuild removes it.
    pub active_key_fallback: ActiveKeyFallback,
    /// Disable keyboard navigation.
    pub disabled: bool,
    /// `aria-label` for the container.
    pub label: Option<String>,
    /// `aria-labelledby` for the container.
    pub labelled_by: Option<String>,
    /// `aria-describedby` for the container.
    pub described_by: Option<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            orientation: None,
            indent_size: DEFAULT_INDENT_SIZE,
            loop_navigation: true,
            columns_count: 1,
            selection_mode: SelectionMode::None,
            default_selected_keys: Vec::new(),
            default_active_key: None,
            activate_first_item: false,
            active_key_fallback: ActiveKeyFallback::default(),
            disabled: false,
            label: None,
            labelled_by: None,
            described_by: None,
        }
    }
}

impl CollectionConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu preset: no indentation, single selection, first item active.
    pub fn menu() -> Self {
        Self {
            pattern: Some(Pattern::Menu.name().to_string()),
            indent_size: 0,
            selection_mode: SelectionMode::Single,
            activate_first_item: true,
            ..Self::default()
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Parse from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, pattern = ?config.pattern, "loaded TOML config");
        Ok(config)
    }

    /// Parse from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, pattern = ?config.pattern, "loaded JSON config");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set the pattern by name.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set the indentation per level.
    pub fn with_indent_size(mut self, indent_size: u32) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Enable or disable wrapping.
    pub fn with_loop(mut self, loop_navigation: bool) -> Self {
        self.loop_navigation = loop_navigation;
        self
    }

    /// Set the column count hint.
    pub fn with_columns(mut self, columns_count: usize) -> Self {
        self.columns_count = columns_count;
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the initial selection.
    pub fn with_default_selected(mut self, keys: impl IntoIterator<Item = impl Into<Key>>) -> Self {
        self.default_selected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initially active item.
    pub fn with_default_active_key(mut self, key: impl Into<Key>) -> Self {
        self.default_active_key = Some(key.into());
        self
    }

    /// Activate the first item after rebuilds when nothing is active.
    pub fn with_activate_first_item(mut self, activate: bool) -> Self {
        self.activate_first_item = activate;
        self
    }

    /// Set the removed-active-key policy.
    pub fn with_active_key_fallback(mut self, fallback: ActiveKeyFallback) -> Self {
        self.active_key_fallback = fallback;
        self
    }

    /// Disable keyboard navigation.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set `aria-label`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set `aria-labelledby`.
    pub fn with_labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    /// Set `aria-describedby`.
    pub fn with_described_by(mut self, id: impl Into<String>) -> Self {
        self.described_by = Some(id.into());
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Check the configuration and resolve the pattern.
    ///
    /// Fails on an unknown pattern name, a zero column hint, or several
    /// default selections in single mode.
    pub fn validate(&self) -> Result<Option<Pattern>> {
        let pattern = self.pattern.as_deref().map(str::parse::<Pattern>).transpose()?;

        if self.columns_count == 0 {
            return Err(Error::InvalidConfig("columns_count must be at least 1".into()));
        }
        if self.selection_mode == SelectionMode::Single && self.default_selected_keys.len() > 1 {
            return Err(Error::InvalidConfig(format!(
                "single selection mode with {} default selected keys",
                self.default_selected_keys.len()
            )));
        }

        Ok(pattern)
    }

    /// The orientation in effect: explicit, else the pattern's, else vertical.
    pub fn resolved_orientation(&self, pattern: Option<Pattern>) -> Orientation {
        self.orientation
            .or_else(|| pattern.map(|p| p.config().orientation))
            .unwrap_or_default()
    }

    /// Builder options for `pattern`.
    pub fn build_options(&self, pattern: Option<Pattern>) -> BuildOptions {
        BuildOptions::for_pattern(pattern, self.indent_size)
    }

    /// Navigation options for `pattern`.
    pub fn navigation_options(&self, pattern: Option<Pattern>) -> NavigationOptions {
        let options = NavigationOptions::default()
            .with_orientation(self.resolved_orientation(pattern))
            .with_loop(self.loop_navigation)
            .with_columns(self.columns_count)
            .with_disabled(self.disabled)
            .with_fallback(self.active_key_fallback);
        match &self.default_active_key {
            Some(key) => options.with_default_active_key(key.clone()),
            None => options,
        }
    }

    /// Uncontrolled selection options for `pattern`.
    pub fn selection_options(&self, pattern: Option<Pattern>) -> SelectionOptions {
        let options = SelectionOptions::new(self.selection_mode).with_default_selected(self.default_selected_keys.clone());
        match pattern {
            Some(pattern) => options.with_pattern(pattern),
            None => options,
        }
    }

    /// Container accessibility options for `pattern`.
    pub fn aria_options(&self, pattern: Option<Pattern>) -> CollectionAriaOptions {
        CollectionAriaOptions {
            pattern,
            selection_mode: self.selection_mode,
            orientation: Some(self.resolved_orientation(pattern)),
            label: self.label.clone(),
            labelled_by: self.labelled_by.clone(),
            described_by: self.described_by.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CollectionConfig::default();
        assert_eq!(config.indent_size, 24);
        assert!(config.loop_navigation);
        assert_eq!(config.columns_count, 1);
        assert_eq!(config.selection_mode, SelectionMode::None);
        assert_eq!(config.validate().ok(), Some(None));
        assert_eq!(config.resolved_orientation(None), Orientation::Vertical);
    }

    #[test]
    fn test_toml_partial_document() {
        let config = CollectionConfig::from_toml_str(
            r#"
            pattern = "grid"
            columns_count = 4
            loop_navigation = false
            active_key_fallback = "first"
            "#,
        )
        .unwrap();

        assert_eq!(config.validate().unwrap(), Some(Pattern::Grid));
        assert_eq!(config.resolved_orientation(Some(Pattern::Grid)), Orientation::Both);
        assert_eq!(config.active_key_fallback, ActiveKeyFallback::First);
        assert_eq!(config.indent_size, 24);

        let nav = config.navigation_options(Some(Pattern::Grid));
        assert_eq!(nav.columns_count, 4);
        assert!(!nav.loop_navigation);
    }

    #[test]
    fn test_toml_syntax_error() {
        let err = CollectionConfig::from_toml_str("pattern = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_json_roundtrip_keeps_keys() {
        let config = CollectionConfig::new()
            .with_pattern("listbox")
            .with_selection_mode(SelectionMode::Multiple)
            .with_default_selected(["a", "b"])
            .with_default_active_key("b");
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"multiple\""));

        let parsed = CollectionConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_type_error() {
        let err = CollectionConfig::from_json_str(r#"{"indent_size": "wide"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_pattern() {
        let err = CollectionConfig::new().with_pattern("carousel").validate().unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(ref name) if name == "carousel"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = CollectionConfig::new().with_columns(0).validate();
        assert!(matches!(zero, Err(Error::InvalidConfig(_))));

        let many = CollectionConfig::new()
            .with_selection_mode(SelectionMode::Single)
            .with_default_selected(["a", "b"])
            .validate();
        assert!(matches!(many, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_menu_preset() {
        let config = CollectionConfig::menu();
        assert_eq!(config.validate().unwrap(), Some(Pattern::Menu));
        assert_eq!(config.indent_size, 0);
        assert_eq!(config.selection_mode, SelectionMode::Single);
        assert!(config.activate_first_item);
    }

    #[test]
    fn test_explicit_orientation_wins() {
        let config = CollectionConfig::new().with_orientation(Orientation::Horizontal);
        assert_eq!(config.resolved_orientation(Some(Pattern::Listbox)), Orientation::Horizontal);

        let aria = config.with_label("Fruit").aria_options(Some(Pattern::Listbox));
        assert_eq!(aria.orientation, Some(Orientation::Horizontal));
        assert_eq!(aria.label.as_deref(), Some("Fruit"));
    }
}
