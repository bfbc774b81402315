//! Accessibility roles for collection containers and items.

use std::fmt;

use super::pattern::Orientation;

/// The accessibility role of a collection container, item or structural node.
///
/// This is the subset of WAI-ARIA roles the collection engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    /// A plain list.
    List,
    /// An item of a plain list.
    ListItem,
    /// A list of selectable options.
    Listbox,
    /// A selectable option.
    Option,
    /// A menu of actions.
    Menu,
    /// A horizontal menu bar.
    MenuBar,
    /// A menu action.
    MenuItem,
    /// A checkable menu action.
    MenuItemCheckbox,
    /// A mutually exclusive menu action.
    MenuItemRadio,
    /// A hierarchical list.
    Tree,
    /// An item of a tree.
    TreeItem,
    /// A hierarchical grid.
    TreeGrid,
    /// A two-dimensional grid.
    Grid,
    /// A cell within a grid.
    GridCell,
    /// A row within a grid.
    Row,
    /// A list of tabs.
    TabList,
    /// A single tab.
    Tab,
    /// A group of radio buttons.
    RadioGroup,
    /// A radio button.
    Radio,
    /// A checkbox.
    Checkbox,
    /// A toolbar of controls.
    Toolbar,
    /// A generic group of related nodes.
    Group,
    /// A node whose semantics are removed.
    Presentation,
}

impl Role {
    /// The ARIA role token, as written in a `role` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::List => "list",
            Role::ListItem => "listitem",
            Role::Listbox => "listbox",
            Role::Option => "option",
            Role::Menu => "menu",
            Role::MenuBar => "menubar",
            Role::MenuItem => "menuitem",
            Role::MenuItemCheckbox => "menuitemcheckbox",
            Role::MenuItemRadio => "menuitemradio",
            Role::Tree => "tree",
            Role::TreeItem => "treeitem",
            Role::TreeGrid => "treegrid",
            Role::Grid => "grid",
            Role::GridCell => "gridcell",
            Role::Row => "row",
            Role::TabList => "tablist",
            Role::Tab => "tab",
            Role::RadioGroup => "radiogroup",
            Role::Radio => "radio",
            Role::Checkbox => "checkbox",
            Role::Toolbar => "toolbar",
            Role::Group => "group",
            Role::Presentation => "presentation",
        }
    }

    /// Whether `aria-multiselectable` is meaningful on this role.
    pub fn supports_multiselectable(self) -> bool {
        matches!(
            self,
            Role::Listbox | Role::Tree | Role::Grid | Role::TreeGrid
        )
    }

    /// Whether `aria-orientation` is meaningful on this role.
    pub fn supports_orientation(self) -> bool {
        matches!(
            self,
            Role::Listbox
                | Role::Menu
                | Role::MenuBar
                | Role::RadioGroup
                | Role::TabList
                | Role::Toolbar
                | Role::Tree
                | Role::TreeGrid
        )
    }

    /// The implicit orientation of this role, if it has one.
    pub fn default_orientation(self) -> Option<Orientation> {
        match self {
            Role::Listbox | Role::Menu | Role::RadioGroup | Role::Tree | Role::TreeGrid => {
                Some(Orientation::Vertical)
            }
            Role::MenuBar | Role::TabList | Role::Toolbar => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
