// Keymap Key Identifier
// Layout-independent physical key codes ("ArrowUp", "KeyW", "Digit5", ...)

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical key identifier.
///
/// The values follow the web `KeyboardEvent.code` naming so that bindings
/// saved by the browser front end stay valid here. The store treats them as
/// opaque strings; only [`KeyId::friendly_name`] looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short display name ("↑", "W", "Num 5", ...)
    pub fn friendly_name(&self) -> String {
        friendly_key_name(&self.0)
    }
}

impl From<&str> for KeyId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for KeyId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for KeyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for KeyId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable name for a key code
pub fn friendly_key_name(code: &str) -> String {
    let fixed = match code {
        "ArrowUp" => Some("↑"),
        "ArrowDown" => Some("↓"),
        "ArrowLeft" => Some("←"),
        "ArrowRight" => Some("→"),
        "Escape" => Some("Esc"),
        "NumpadMultiply" => Some("*"),
        "NumpadDivide" => Some("#"),
        _ => None,
    };
    if let Some(name) = fixed {
        return name.to_string();
    }

    if let Some(digit) = code.strip_prefix("Digit") {
        return digit.to_string();
    }
    if let Some(rest) = code.strip_prefix("Numpad") {
        return format!("Num {}", rest);
    }
    if let Some(letter) = code.strip_prefix("Key") {
        if !letter.is_empty() {
            return letter.to_string();
        }
    }

    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_friendly_names() {
        assert_eq!(friendly_key_name("ArrowUp"), "↑");
        assert_eq!(friendly_key_name("ArrowRight"), "→");
        assert_eq!(friendly_key_name("Escape"), "Esc");
        assert_eq!(friendly_key_name("Digit7"), "7");
        assert_eq!(friendly_key_name("Numpad3"), "Num 3");
        assert_eq!(friendly_key_name("NumpadEnter"), "Num Enter");
        assert_eq!(friendly_key_name("KeyW"), "W");
        assert_eq!(friendly_key_name("Enter"), "Enter");
        assert_eq!(friendly_key_name("F2"), "F2");
    }

    #[test]
    fn test_numpad_symbols_win_over_prefix() {
        assert_eq!(friendly_key_name("NumpadMultiply"), "*");
        assert_eq!(friendly_key_name("NumpadDivide"), "#");
    }

    #[test]
    fn test_bare_key_prefix_passes_through() {
        assert_eq!(friendly_key_name("Key"), "Key");
    }

    #[test]
    fn test_borrow_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(KeyId::from("KeyS"), 1);
        assert_eq!(map.get("KeyS"), Some(&1));
        assert_eq!(map.get("KeyD"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let key = KeyId::from("Numpad0");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Numpad0\"");
        let back: KeyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
