// Keymap Capture Filter
// Decides which captured key presses may be offered to the binding store

use crate::KeyId;

/// Key that aborts a capture
pub const CANCEL_KEY: &str = "Escape";

/// Keys the host keeps for itself (reload, developer tools)
pub const HOST_RESERVED_KEYS: &[&str] = &["F5", "F12"];

/// Modifier-only presses never complete a capture
pub const MODIFIER_KEYS: &[&str] = &[
    "ShiftLeft",
    "ShiftRight",
    "ControlLeft",
    "ControlRight",
    "AltLeft",
    "AltRight",
    "MetaLeft",
    "MetaRight",
];

/// Result of classifying one key press during capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Stop capturing without binding anything
    Cancel,
    /// Not bindable; keep waiting for another key
    Ignore,
    /// Hand this key to the store
    Accept(KeyId),
}

/// Reserved-key policy shared by the capture front ends.
///
/// The binding store never filters; anything that talks to users goes
/// through here first.
#[derive(Debug, Clone)]
pub struct CaptureFilter {
    reserved: Vec<KeyId>,
}

impl CaptureFilter {
    pub fn new() -> Self {
        Self {
            reserved: HOST_RESERVED_KEYS.iter().copied().map(KeyId::from).collect(),
        }
    }

    /// Built-in policy plus extra reserved keys (from settings)
    pub fn with_reserved<I, K>(extra: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyId>,
    {
        let mut filter = Self::new();
        for key in extra {
            let key = key.into();
            if !filter.reserved.contains(&key) {
                filter.reserved.push(key);
            }
        }
        filter
    }

    pub fn classify(&self, code: &str) -> CaptureOutcome {
        if code == CANCEL_KEY {
            return CaptureOutcome::Cancel;
        }
        if code.is_empty() || self.is_reserved(code) {
            return CaptureOutcome::Ignore;
        }
        CaptureOutcome::Accept(KeyId::from(code))
    }

    /// True for modifiers and reserved keys; the cancel key is handled separately
    pub fn is_reserved(&self, code: &str) -> bool {
        MODIFIER_KEYS.contains(&code) || self.reserved.iter().any(|k| k == code)
    }

    pub fn reserved(&self) -> &[KeyId] {
        &self.reserved
    }
}

impl Default for CaptureFilter {
    fn default() -> Self {
        Self::new()
    }
}
