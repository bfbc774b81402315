//! Container accessibility attributes.

use super::pattern::{Orientation, Pattern};
use super::role::Role;
use crate::interaction::SelectionMode;
use crate::props::{Attributes, names};

/// Inputs for the container's accessibility attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionAriaOptions {
    /// The collection pattern, if any.
    pub pattern: Option<Pattern>,
    /// Explicit container role, overriding the pattern's.
    pub role: Option<Role>,
    /// Selection mode, for `aria-multiselectable`.
    pub selection_mode: SelectionMode,
    /// Navigation orientation. Defaults to the pattern's.
    pub orientation: Option<Orientation>,
    /// `aria-label`
    pub label: Option<String>,
    /// `aria-labelledby`
    pub labelled_by: Option<String>,
    /// `aria-describedby`
    pub described_by: Option<String>,
    /// `aria-busy`, when known.
    pub busy: Option<bool>,
    /// Whether this collection is nested inside another item.
    pub nested: bool,
}

impl CollectionAriaOptions {
    /// The role the container is announced with.
    pub fn effective_role(&self) -> Option<Role> {
        if self.nested && self.pattern == Some(Pattern::Tree) {
            return Some(Role::Group);
        }
        self.role
            .or_else(|| self.pattern.map(|p| p.config().container_role))
    }

    /// The container's accessibility attributes.
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        let role = self.effective_role();

        if let Some(role) = role {
            attrs.set(names::ROLE, role.as_str());

            if self.selection_mode == SelectionMode::Multiple && role.supports_multiselectable() {
                attrs.set(names::ARIA_MULTISELECTABLE, true);
            }

            let orientation = self
                .orientation
                .or_else(|| self.pattern.map(|p| p.config().orientation));
            if let Some(orientation) = orientation {
                if let Some(value) = orientation.aria_value() {
                    if role.supports_orientation() && role.default_orientation() != Some(orientation) {
                        attrs.set(names::ARIA_ORIENTATION, value);
                    }
                }
            }
        }

        if let Some(label) = &self.label {
            attrs.set(names::ARIA_LABEL, label.clone());
        }
        if let Some(labelled_by) = &self.labelled_by {
            attrs.set(names::ARIA_LABELLEDBY, labelled_by.clone());
        }
        if let Some(described_by) = &self.described_by {
            attrs.set(names::ARIA_DESCRIBEDBY, described_by.clone());
        }
        if let Some(busy) = self.busy {
            attrs.set(names::ARIA_BUSY, busy);
        }

        attrs
    }
}
