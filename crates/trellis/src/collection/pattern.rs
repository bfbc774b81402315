//! The pattern registry.
//!
//! A [`Pattern`] names a semantic collection kind (list, menu, tree, grid and
//! so on). Each pattern resolves to a static [`PatternConfig`] describing the
//! container role, the item role, which attribute carries selection state,
//! and the default navigation orientation.
//!
//! # Example
//!
//! ```
//! use trellis::collection::{Orientation, Pattern, Role, SelectionAttribute};
//!
//! let pattern: Pattern = "listbox".parse().unwrap();
//! let config = pattern.config();
//! assert_eq!(config.container_role, Role::Listbox);
//! assert_eq!(config.item_role, Some(Role::Option));
//! assert_eq!(config.selection_attribute, Some(SelectionAttribute::AriaSelected));
//! assert_eq!(config.orientation, Orientation::Vertical);
//!
//! assert!("carousel".parse::<Pattern>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::Error;
use crate::props::names;

/// Navigation axis of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items flow left to right.
    Horizontal,
    /// Items form a two-dimensional grid.
    Both,
}

impl Orientation {
    /// The `aria-orientation` token, if this orientation has one.
    pub fn aria_value(self) -> Option<&'static str> {
        match self {
            Orientation::Vertical => Some("vertical"),
            Orientation::Horizontal => Some("horizontal"),
            Orientation::Both => None,
        }
    }
}

/// The attribute that reports an item's selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAttribute {
    /// `aria-selected`
    AriaSelected,
    /// `aria-checked`
    AriaChecked,
}

impl SelectionAttribute {
    /// The attribute name.
    pub fn name(self) -> &'static str {
        match self {
            SelectionAttribute::AriaSelected => names::ARIA_SELECTED,
            SelectionAttribute::AriaChecked => names::ARIA_CHECKED,
        }
    }
}

/// Static description of a collection pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Role of the collection container.
    pub container_role: Role,
    /// Role given to every non-section node, if any.
    pub item_role: Option<Role>,
    /// Attribute carrying selection state, if the pattern is selectable.
    pub selection_attribute: Option<SelectionAttribute>,
    /// Default navigation orientation.
    pub orientation: Orientation,
    /// Whether the container may report `aria-multiselectable`.
    pub supports_multiselectable: bool,
}

/// A semantic collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `list` / `listitem`.
    List,
    /// `listbox` / `option`.
    Listbox,
    /// `menu` / `menuitem`.
    Menu,
    /// `menubar` / `menuitem`.
    Menubar,
    /// `tree` / `treeitem`.
    Tree,
    /// `grid` / `gridcell`.
    Grid,
    /// `tablist` / `tab`.
    Tabs,
    /// `radiogroup` / `radio`.
    RadioGroup,
    /// `group` / `checkbox`.
    CheckboxGroup,
    /// `toolbar`, items keep their own roles.
    Toolbar,
}

const LIST: PatternConfig = PatternConfig {
    container_role: Role::List,
    item_role: Some(Role::ListItem),
    selection_attribute: None,
    orientation: Orientation::Vertical,
    supports_multiselectable: false,
};

const LISTBOX: PatternConfig = PatternConfig {
    container_role: Role::Listbox,
    item_role: Some(Role::Option),
    selection_attribute: Some(SelectionAttribute::AriaSelected),
    orientation: Orientation::Vertical,
    supports_multiselectable: true,
};

const MENU: PatternConfig = PatternConfig {
    container_role: Role::Menu,
    item_role: Some(Role::MenuItem),
    selection_attribute: Some(SelectionAttribute::AriaChecked),
    orientation: Orientation::Vertical,
    supports_multiselectable: false,
};

const MENUBAR: PatternConfig = PatternConfig {
    container_role: Role::MenuBar,
    item_role: Some(Role::MenuItem),
    selection_attribute: Some(SelectionAttribute::AriaChecked),
    orientation: Orientation::Horizontal,
    supports_multiselectable: false,
};

const TREE: PatternConfig = PatternConfig {
    container_role: Role::Tree,
    item_role: Some(Role::TreeItem),
    selection_attribute: Some(SelectionAttribute::AriaSelected),
    orientation: Orientation::Vertical,
    supports_multiselectable: true,
};

const GRID: PatternConfig = PatternConfig {
    container_role: Role::Grid,
    item_role: Some(Role::GridCell),
    selection_attribute: Some(SelectionAttribute::AriaSelected),
    orientation: Orientation::Both,
    supports_multiselectable: true,
};

const TABS: PatternConfig = PatternConfig {
    container_role: Role::TabList,
    item_role: Some(Role::Tab),
    selection_attribute: Some(SelectionAttribute::AriaSelected),
    orientation: Orientation::Horizontal,
    supports_multiselectable: false,
};

const RADIO_GROUP: PatternConfig = PatternConfig {
    container_role: Role::RadioGroup,
    item_role: Some(Role::Radio),
    selection_attribute: Some(SelectionAttribute::AriaChecked),
    orientation: Orientation::Vertical,
    supports_multiselectable: false,
};

const CHECKBOX_GROUP: PatternConfig = PatternConfig {
    container_role: Role::Group,
    item_role: Some(Role::Checkbox),
    selection_attribute: Some(SelectionAttribute::AriaChecked),
    orientation: Orientation::Vertical,
    supports_multiselectable: false,
};

const TOOLBAR: PatternConfig = PatternConfig {
    container_role: Role::Toolbar,
    item_role: None,
    selection_attribute: None,
    orientation: Orientation::Horizontal,
    supports_multiselectable: false,
};

impl Pattern {
    /// Every registered pattern.
    pub const ALL: [Pattern; 10] = [
        Pattern::List,
        Pattern::Listbox,
        Pattern::Menu,
        Pattern::Menubar,
        Pattern::Tree,
        Pattern::Grid,
        Pattern::Tabs,
        Pattern::RadioGroup,
        Pattern::CheckboxGroup,
        Pattern::Toolbar,
    ];

    /// The registry entry for this pattern.
    pub fn config(self) -> &'static PatternConfig {
        match self {
            Pattern::List => &LIST,
            Pattern::Listbox => &LISTBOX,
            Pattern::Menu => &MENU,
            Pattern::Menubar => &MENUBAR,
            Pattern::Tree => &TREE,
            Pattern::Grid => &GRID,
            Pattern::Tabs => &TABS,
            Pattern::RadioGroup => &RADIO_GROUP,
            Pattern::CheckboxGroup => &CHECKBOX_GROUP,
            Pattern::Toolbar => &TOOLBAR,
        }
    }

    /// The registry name of this pattern.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::List => "list",
            Pattern::Listbox => "listbox",
            Pattern::Menu => "menu",
            Pattern::Menubar => "menubar",
            Pattern::Tree => "tree",
            Pattern::Grid => "grid",
            Pattern::Tabs => "tabs",
            Pattern::RadioGroup => "radiogroup",
            Pattern::CheckboxGroup => "checkboxgroup",
            Pattern::Toolbar => "toolbar",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}
