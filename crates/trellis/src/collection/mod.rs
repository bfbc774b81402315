//! Collections: declarative input, built nodes and the pattern registry.
//!
//! # Core Types
//!
//! - [`Element`], [`Item`], [`Section`]: the declarative description
//! - [`CollectionNode`]: a built node with level, parent, index and ARIA
//! - [`CollectionState`]: the node tree plus the flat focusable list
//! - [`Pattern`] / [`PatternConfig`]: the pattern registry
//! - [`KeyedCollection`]: neighbour queries used by navigation
//!
//! # Example
//!
//! ```
//! use trellis::collection::{
//!     BuildOptions, CollectionState, Element, Item, KeyedCollection, Pattern, Section,
//! };
//!
//! let children: Vec<Element> = vec![
//!     Section::new("fruit", "Fruit")
//!         .with_children([Item::new("apple", "Apple"), Item::new("pear", "Pear")])
//!         .into(),
//!     Item::new("bread", "Bread").into(),
//! ];
//!
//! let state = CollectionState::build(&children, &BuildOptions::for_pattern(Some(Pattern::Listbox), 24));
//! assert_eq!(state.len(), 3);
//! assert_eq!(state.first_key().unwrap().as_str(), "apple");
//! ```

mod aria;
mod builder;
mod debug;
mod descriptor;
mod key;
mod node;
mod pattern;
mod payload;
mod role;
mod state;

pub use aria::CollectionAriaOptions;
pub use builder::{BuildOptions, BuiltCollection, DEFAULT_INDENT_SIZE, build_collection};
pub use descriptor::{Describe, Description, Element, Item, Section};
pub use key::Key;
pub use node::{CollectionNode, NodeAria, NodeKind, SectionRoles};
pub use pattern::{Orientation, Pattern, PatternConfig, SelectionAttribute};
pub use payload::Payload;
pub use role::Role;
pub use state::{CollectionState, KeyList, KeyedCollection};
