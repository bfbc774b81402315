//! Keyboard navigation and selection.
//!
//! - [`KeyboardNavigation`]: roving focus over a collection's flat item list,
//!   one-dimensional or as an inferred grid
//! - [`SelectionModel`]: controlled or uncontrolled selection under a
//!   [`SelectionMode`]
//!
//! Both hand out attribute bags ([`crate::props::Attributes`]) for the
//! container and each item; the renderer merges them with user attributes.

mod grid;
mod keys;
mod navigation;
mod selection;

pub use grid::{
    GridPosition, LayoutProbe, MIN_SAMPLE, PAGE_STRIDE, ROW_TOLERANCE, Rect, detect_grid_columns, grid_target,
    page_target,
};
pub use keys::{Intent, NavKey, intent_for};
pub use navigation::{ActiveKeyFallback, FocusOracle, KeyboardNavigation, NavigationOptions};
pub use selection::{SelectedKeys, SelectionChange, SelectionMode, SelectionModel, SelectionOptions, SelectionSource};
