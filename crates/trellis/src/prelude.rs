//! Prelude module for Trellis.
//!
//! ```
//! use trellis::prelude::*;
//! ```
//!
//! This provides access to:
//! - Declarative input (`Element`, `Item`, `Section`, `Key`, `Payload`)
//! - The pattern registry (`Pattern`, `Role`, `Orientation`)
//! - Interaction models (`KeyboardNavigation`, `SelectionModel`, `NavKey`)
//! - Attribute bags (`Attributes`, `Event`, `merge_props`)
//! - The controller and its configuration

// ============================================================================
// Errors
// ============================================================================

pub use crate::{Error, Result};

// ============================================================================
// Collections
// ============================================================================

pub use crate::collection::{
    BuildOptions, CollectionNode, CollectionState, Element, Item, Key, KeyedCollection, Orientation, Pattern,
    Payload, Role, Section,
};

// ============================================================================
// Interaction
// ============================================================================

pub use crate::interaction::{
    ActiveKeyFallback, FocusOracle, KeyboardNavigation, LayoutProbe, NavKey, NavigationOptions, Rect,
    SelectionChange, SelectionMode, SelectionModel, SelectionOptions,
};

// ============================================================================
// Attribute Bags
// ============================================================================

pub use crate::props::{AttrValue, Attributes, Event, EventKind, merge_props};

// ============================================================================
// Rendering and Configuration
// ============================================================================

pub use crate::config::CollectionConfig;
pub use crate::controller::CollectionController;
pub use crate::renderer::{ItemRenderer, RenderedNode};

// ============================================================================
// Core
// ============================================================================

pub use trellis_core::{Property, Signal};
