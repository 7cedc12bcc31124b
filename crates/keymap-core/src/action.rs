// Keymap Actions
// The static catalog of emulated phone-keypad inputs

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::KeyId;

/// A logical input of the emulated handset.
///
/// The string identifiers ("UP", "KEY_5", ...) are stable: they are the keys
/// of the persisted `mappings` object, so renaming one orphans saved bindings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "UP")]
    Up,
    #[strum(serialize = "DOWN")]
    Down,
    #[strum(serialize = "LEFT")]
    Left,
    #[strum(serialize = "RIGHT")]
    Right,
    #[strum(serialize = "OK")]
    Select,
    #[strum(serialize = "SOFT_LEFT")]
    SoftLeft,
    #[strum(serialize = "SOFT_RIGHT")]
    SoftRight,
    #[strum(serialize = "MENU")]
    Menu,
    #[strum(serialize = "KEY_0")]
    Key0,
    #[strum(serialize = "KEY_1")]
    Key1,
    #[strum(serialize = "KEY_2")]
    Key2,
    #[strum(serialize = "KEY_3")]
    Key3,
    #[strum(serialize = "KEY_4")]
    Key4,
    #[strum(serialize = "KEY_5")]
    Key5,
    #[strum(serialize = "KEY_6")]
    Key6,
    #[strum(serialize = "KEY_7")]
    Key7,
    #[strum(serialize = "KEY_8")]
    Key8,
    #[strum(serialize = "KEY_9")]
    Key9,
    #[strum(serialize = "STAR")]
    Star,
    #[strum(serialize = "HASH")]
    Hash,
}

impl Action {
    /// Stable string identifier
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Parse an identifier; case-sensitive, returns None for anything outside the catalog
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    /// Human-readable label shown by front ends
    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "D-Pad Up",
            Action::Down => "D-Pad Down",
            Action::Left => "D-Pad Left",
            Action::Right => "D-Pad Right",
            Action::Select => "OK/Select",
            Action::SoftLeft => "Left Soft Key",
            Action::SoftRight => "Right Soft Key",
            Action::Menu => "Menu/Back",
            Action::Key0 => "Number 0",
            Action::Key1 => "Number 1",
            Action::Key2 => "Number 2",
            Action::Key3 => "Number 3",
            Action::Key4 => "Number 4",
            Action::Key5 => "Number 5",
            Action::Key6 => "Number 6",
            Action::Key7 => "Number 7",
            Action::Key8 => "Number 8",
            Action::Key9 => "Number 9",
            Action::Star => "Star (*)",
            Action::Hash => "Hash (#)",
        }
    }

    /// Catalog default key identifiers, never empty
    pub fn default_keys(self) -> &'static [&'static str] {
        match self {
            Action::Up => &["ArrowUp"],
            Action::Down => &["ArrowDown"],
            Action::Left => &["ArrowLeft"],
            Action::Right => &["ArrowRight"],
            Action::Select => &["Enter"],
            Action::SoftLeft => &["F1"],
            Action::SoftRight => &["F2"],
            Action::Menu => &["Escape"],
            Action::Key0 => &["Digit0", "Numpad0"],
            Action::Key1 => &["Digit1", "Numpad1"],
            Action::Key2 => &["Digit2", "Numpad2"],
            Action::Key3 => &["Digit3", "Numpad3"],
            Action::Key4 => &["Digit4", "Numpad4"],
            Action::Key5 => &["Digit5", "Numpad5"],
            Action::Key6 => &["Digit6", "Numpad6"],
            Action::Key7 => &["Digit7", "Numpad7"],
            Action::Key8 => &["Digit8", "Numpad8"],
            Action::Key9 => &["Digit9", "Numpad9"],
            Action::Star => &["NumpadMultiply"],
            Action::Hash => &["NumpadDivide"],
        }
    }

    /// Catalog defaults as owned key identifiers
    pub fn defaults(self) -> Vec<KeyId> {
        self.default_keys().iter().copied().map(KeyId::from).collect()
    }

    /// Every action, in catalog order
    pub fn all() -> impl Iterator<Item = Action> {
        Action::iter()
    }
}

/// Catalog entry as handed to front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    pub action: Action,
    pub label: &'static str,
    pub default_keys: Vec<KeyId>,
}

impl From<Action> for ActionInfo {
    fn from(action: Action) -> Self {
        Self {
            action,
            label: action.label(),
            default_keys: action.defaults(),
        }
    }
}

/// The full catalog with labels and defaults
pub fn catalog() -> Vec<ActionInfo> {
    Action::all().map(ActionInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::EnumCount;

    #[test]
    fn test_action_ids_round_trip() {
        for action in Action::all() {
            assert_eq!(Action::from_id(action.id()), Some(action));
            assert_eq!(action.to_string(), action.id());
        }
        assert_eq!(Action::Key5.id(), "KEY_5");
        assert_eq!(Action::SoftLeft.id(), "SOFT_LEFT");
    }

    #[test]
    fn test_from_id_rejects_unknown() {
        assert_eq!(Action::from_id("up"), None);
        assert_eq!(Action::from_id("KEY_10"), None);
        assert_eq!(Action::from_id(""), None);
    }

    #[test]
    fn test_catalog_order_and_size() {
        let ids: Vec<&str> = Action::all().map(Action::id).collect();
        assert_eq!(ids.len(), Action::COUNT);
        assert_eq!(ids.first(), Some(&"UP"));
        assert_eq!(ids.last(), Some(&"HASH"));
        assert_eq!(catalog().len(), 20);
    }

    #[test]
    fn test_defaults_non_empty_and_disjoint() {
        let mut seen = HashSet::new();
        for action in Action::all() {
            assert!(!action.default_keys().is_empty(), "{} has no defaults", action);
            for key in action.default_keys() {
                assert!(seen.insert(*key), "{} is a default of two actions", key);
            }
        }
    }
}
