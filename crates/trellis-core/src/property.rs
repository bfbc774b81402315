//! Change-detecting state cells.
//!
//! [`Property<T>`] wraps a value behind a lock and reports whether a write
//! actually changed it, so owners only emit notifications for real
//! transitions. The navigation engine keeps its active key in a `Property`,
//! and uncontrolled selection storage is a `Property` of the selected set.
//!
//! # Example
//!
//! ```
//! use trellis_core::{Property, Signal};
//!
//! struct ActiveKey {
//!     value: Property<Option<String>>,
//!     changed: Signal<Option<String>>,
//! }
//!
//! impl ActiveKey {
//!     fn set(&self, key: Option<String>) {
//!         if self.value.set(key.clone()) {
//!             self.changed.emit(key);
//!         }
//!     }
//! }
//!
//! let active = ActiveKey { value: Property::new(None), changed: Signal::new() };
//! active.set(Some("first".into()));
//! assert_eq!(active.value.get().as_deref(), Some("first"));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed. The caller emits the associated notification
/// when it does.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
