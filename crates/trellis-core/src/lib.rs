//! Core systems for Trellis.
//!
//! This crate provides the foundational, domain-agnostic pieces of the
//! Trellis collection engine:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notifications
//! - **Property System**: Change-detecting state cells
//! - **Logging**: Tracing targets, span guards and tree visualisation
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::{Property, Signal};
//!
//! let selection_changed = Signal::<Vec<String>>::new();
//! selection_changed.connect(|keys| println!("now selected: {keys:?}"));
//!
//! let selected = Property::new(Vec::<String>::new());
//! if selected.set(vec!["apples".to_string()]) {
//!     selection_changed.emit(selected.get());
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{PerfSpan, TreeDebug, TreeFormatOptions, TreeNodeView, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
