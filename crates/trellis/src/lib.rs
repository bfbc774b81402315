//! Trellis - a headless, accessible collection engine.
//!
//! Trellis turns a declarative description of items and sections into a
//! built collection with hierarchy, accessibility attributes and a flat list
//! of focusable items, then drives keyboard navigation and selection over it.
//! It never paints anything: every layer hands out attribute bags that a
//! renderer merges and applies.
//!
//! # Modules
//!
//! - [`collection`]: declarative input, the node builder and the pattern registry
//! - [`interaction`]: roving focus, grid navigation and selection
//! - [`props`]: attribute bags and the merge utility
//! - [`renderer`]: merges every layer's bags into render-ready nodes
//! - [`config`]: serializable collection configuration
//! - [`controller`]: all of the above wired together
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let children: Vec<Element> = vec![
//!     Section::new("fruit", "Fruit")
//!         .with_children([Item::new("apple", "Apple"), Item::new("pear", "Pear")])
//!         .into(),
//!     Item::new("bread", "Bread").into(),
//! ];
//!
//! let controller = CollectionController::new(
//!     CollectionConfig::new().with_pattern("listbox").with_selection_mode(SelectionMode::Multiple),
//!     &children,
//! )?;
//!
//! controller.navigation().navigate_to(&Key::from("pear"));
//! controller.navigation().handle_key(NavKey::ArrowDown);
//! assert_eq!(controller.navigation().active_key(), Some(Key::from("bread")));
//!
//! let rendered = controller.render();
//! assert_eq!(rendered.len(), 2);
//! # Ok::<(), trellis::Error>(())
//! ```

pub mod collection;
pub mod config;
pub mod controller;
mod error;
pub mod interaction;
pub mod prelude;
pub mod props;
pub mod renderer;

pub use error::{Error, Result};
