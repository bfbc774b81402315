//! Input events delivered to attribute-bag handlers.

use crate::collection::Key;
use crate::interaction::NavKey;

/// The kind of event a handler subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Pointer activation.
    Click,
    /// Key press.
    KeyDown,
    /// Focus received.
    Focus,
    /// Focus lost.
    Blur,
}

impl EventKind {
    /// The conventional `on<Event>` attribute name for this kind.
    pub fn prop_name(self) -> &'static str {
        match self {
            EventKind::Click => "onClick",
            EventKind::KeyDown => "onKeyDown",
            EventKind::Focus => "onFocus",
            EventKind::Blur => "onBlur",
        }
    }
}

/// An input event as seen by one node's handlers.
///
/// `target` is the node the event originated on; `current_target` is the node
/// whose handlers are running. They differ when the event bubbles up from a
/// nested node.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// The key pressed, for [`EventKind::KeyDown`].
    pub key: Option<NavKey>,
    /// The node the event originated on.
    pub target: Option<Key>,
    /// The node whose handlers are running.
    pub current_target: Option<Key>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create an event with no key and no targets.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            key: None,
            target: None,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// A click that originated on `target`.
    pub fn click(target: impl Into<Key>) -> Self {
        Self::new(EventKind::Click).on_target(target)
    }

    /// A key press that originated on `target`.
    pub fn key_down(key: NavKey, target: impl Into<Key>) -> Self {
        let mut event = Self::new(EventKind::KeyDown).on_target(target);
        event.key = Some(key);
        event
    }

    /// A key press delivered to a container with no specific item target.
    pub fn container_key_down(key: NavKey) -> Self {
        let mut event = Self::new(EventKind::KeyDown);
        event.key = Some(key);
        event
    }

    /// A focus event that originated on `target`.
    pub fn focus(target: impl Into<Key>) -> Self {
        Self::new(EventKind::Focus).on_target(target)
    }

    /// Set both the originating and current node to `target`.
    pub fn on_target(mut self, target: impl Into<Key>) -> Self {
        let target = target.into();
        self.current_target = Some(target.clone());
        self.target = Some(target);
        self
    }

    /// Mark the event as bubbling through `current_target`.
    pub fn bubbled_to(mut self, current_target: impl Into<Key>) -> Self {
        self.current_target = Some(current_target.into());
        self
    }

    /// Whether the event is being handled on the node it originated on.
    pub fn is_at_target(&self) -> bool {
        self.target.is_some() && self.target == self.current_target
    }

    /// Suppress the platform's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching ancestor nodes.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubbled_event_not_at_target() {
        let event = Event::focus("child").bubbled_to("parent");
        assert!(!event.is_at_target());
        assert!(Event::focus("child").is_at_target());
        assert!(!Event::new(EventKind::Focus).is_at_target());
    }

    #[test]
    fn test_flags() {
        let mut event = Event::key_down(NavKey::Enter, "a");
        assert!(!event.is_default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
    }
}
