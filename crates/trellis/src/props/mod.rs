//! Attribute bags and the property merge utility.
//!
//! The builder, the navigation engine and the selection engine each
//! contribute an [`Attributes`] bag for every rendered node, independently of
//! one another. [`merge_props`] folds those contributions, left to right, into
//! the single bag the renderer applies:
//!
//! - handlers for the same [`EventKind`] are chained, each contributor
//!   invoked once in merge order with the same event
//! - class names are concatenated with a separating space
//! - style fragments are shallow-unioned, later properties winning
//! - every other attribute is taken from the later bag when present there
//!
//! # Example
//!
//! ```
//! use trellis::props::{Attributes, Event, EventKind, Style, merge_props, names};
//!
//! let base = Attributes::new()
//!     .with_style(Style::new().with("padding-left", "24px"))
//!     .with_class("item");
//! let aria = Attributes::new().with(names::ROLE, "treeitem").with(names::ARIA_LEVEL, 2);
//! let nav = Attributes::new()
//!     .with(names::TAB_INDEX, -1)
//!     .on(EventKind::Focus, |_| println!("focused"));
//!
//! let merged = merge_props([&base, &aria, &nav]);
//! assert_eq!(merged.get_str(names::ROLE), Some("treeitem"));
//! assert_eq!(merged.get_int(names::TAB_INDEX), Some(-1));
//! assert_eq!(merged.class_name(), Some("item"));
//! merged.dispatch(&mut Event::focus("a"));
//! ```

mod attributes;
mod event;
mod handler;
mod value;

pub use attributes::Attributes;
pub use event::{Event, EventKind};
pub use handler::Handler;
pub use value::{AttrValue, Style};

/// Attribute names emitted by the engine.
pub mod names {
    /// `role`
    pub const ROLE: &str = "role";
    /// `id`
    pub const ID: &str = "id";
    /// `tabIndex`
    pub const TAB_INDEX: &str = "tabIndex";
    /// `aria-level`
    pub const ARIA_LEVEL: &str = "aria-level";
    /// `aria-expanded`
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    /// `aria-selected`
    pub const ARIA_SELECTED: &str = "aria-selected";
    /// `aria-checked`
    pub const ARIA_CHECKED: &str = "aria-checked";
    /// `aria-multiselectable`
    pub const ARIA_MULTISELECTABLE: &str = "aria-multiselectable";
    /// `aria-orientation`
    pub const ARIA_ORIENTATION: &str = "aria-orientation";
    /// `aria-label`
    pub const ARIA_LABEL: &str = "aria-label";
    /// `aria-labelledby`
    pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
    /// `aria-describedby`
    pub const ARIA_DESCRIBEDBY: &str = "aria-describedby";
    /// `aria-busy`
    pub const ARIA_BUSY: &str = "aria-busy";
    /// `data-active`
    pub const DATA_ACTIVE: &str = "data-active";
    /// `data-selected`
    pub const DATA_SELECTED: &str = "data-selected";
    /// Style property used for indentation.
    pub const PADDING_LEFT: &str = "padding-left";
}

/// Merge attribute bags left to right.
///
/// An empty iterator yields an empty bag; a single bag is returned unchanged.
pub fn merge_props<'a>(bags: impl IntoIterator<Item = &'a Attributes>) -> Attributes {
    let mut bags = bags.into_iter();
    let Some(first) = bags.next() else {
        return Attributes::new();
    };
    bags.fold(first.clone(), |acc, bag| acc.merge(bag))
}
