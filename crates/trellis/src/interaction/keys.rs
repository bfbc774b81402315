//! Navigation keys and their mapping to movement intents.

use crate::collection::Orientation;

/// A key relevant to collection interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any other printable character.
    Character(char),
}

impl NavKey {
    /// Parse a DOM-style key name (`"ArrowDown"`, `"Enter"`, `" "`).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowUp" => NavKey::ArrowUp,
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            "PageUp" => NavKey::PageUp,
            "PageDown" => NavKey::PageDown,
            "Enter" => NavKey::Enter,
            " " | "Space" | "Spacebar" => NavKey::Space,
            "Escape" | "Esc" => NavKey::Escape,
            "Tab" => NavKey::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => NavKey::Character(c),
                    _ => return None,
                }
            }
        })
    }

    /// Whether this key activates (selects) the focused item.
    pub fn is_activation(self) -> bool {
        matches!(self, NavKey::Enter | NavKey::Space)
    }
}

/// A movement requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Next item in the flat order.
    Next,
    /// Previous item in the flat order.
    Previous,
    /// First item.
    First,
    /// Last item.
    Last,
    /// Ten items back, clamped.
    PageUp,
    /// Ten items forward, clamped.
    PageDown,
    /// One row up, in a grid.
    Up,
    /// One row down, in a grid.
    Down,
    /// One cell left, in a grid.
    Left,
    /// One cell right, in a grid.
    Right,
}

/// Map a key to an intent under an orientation.
///
/// Keys on the inactive axis of a one-dimensional collection are not
/// handled. In a grid, Page Up and Page Down move by one row.
pub fn intent_for(key: NavKey, orientation: Orientation) -> Option<Intent> {
    use NavKey::*;

    match (orientation, key) {
        (_, Home) => Some(Intent::First),
        (_, End) => Some(Intent::Last),

        (Orientation::Vertical, ArrowDown) => Some(Intent::Next),
        (Orientation::Vertical, ArrowUp) => Some(Intent::Previous),
        (Orientation::Horizontal, ArrowRight) => Some(Intent::Next),
        (Orientation::Horizontal, ArrowLeft) => Some(Intent::Previous),
        (Orientation::Vertical | Orientation::Horizontal, PageUp) => Some(Intent::PageUp),
        (Orientation::Vertical | Orientation::Horizontal, PageDown) => Some(Intent::PageDown),

        (Orientation::Both, ArrowRight) => Some(Intent::Right),
        (Orientation::Both, ArrowLeft) => Some(Intent::Left),
        (Orientation::Both, ArrowDown | PageDown) => Some(Intent::Down),
        (Orientation::Both, ArrowUp | PageUp) => Some(Intent::Up),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_mapping() {
        let v = Orientation::Vertical;
        assert_eq!(intent_for(NavKey::ArrowDown, v), Some(Intent::Next));
        assert_eq!(intent_for(NavKey::ArrowUp, v), Some(Intent::Previous));
        assert_eq!(intent_for(NavKey::Home, v), Some(Intent::First));
        assert_eq!(intent_for(NavKey::End, v), Some(Intent::Last));
        assert_eq!(intent_for(NavKey::ArrowRight, v), None);
        assert_eq!(intent_for(NavKey::PageDown, v), Some(Intent::PageDown));
    }

    #[test]
    fn test_horizontal_mapping() {
        let h = Orientation::Horizontal;
        assert_eq!(intent_for(NavKey::ArrowRight, h), Some(Intent::Next));
        assert_eq!(intent_for(NavKey::ArrowLeft, h), Some(Intent::Previous));
        assert_eq!(intent_for(NavKey::ArrowDown, h), None);
    }

    #[test]
    fn test_grid_mapping() {
        let b = Orientation::Both;
        assert_eq!(intent_for(NavKey::ArrowRight, b), Some(Intent::Right));
        assert_eq!(intent_for(NavKey::ArrowUp, b), Some(Intent::Up));
        assert_eq!(intent_for(NavKey::PageDown, b), Some(Intent::Down));
        assert_eq!(intent_for(NavKey::PageUp, b), Some(Intent::Up));
    }

    #[test]
    fn test_non_navigation_keys() {
        assert_eq!(intent_for(NavKey::Enter, Orientation::Vertical), None);
        assert_eq!(intent_for(NavKey::Character('a'), Orientation::Both), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(NavKey::from_name("ArrowDown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_name(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_name("x"), Some(NavKey::Character('x')));
        assert_eq!(NavKey::from_name("F13"), None);
        assert!(NavKey::Space.is_activation());
        assert!(!NavKey::Tab.is_activation());
    }
}
