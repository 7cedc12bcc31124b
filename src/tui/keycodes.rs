use crossterm::event::{KeyCode, KeyEvent, KeyEventState, ModifierKeyCode};

use keymap_core::KeyId;

/// Translate a terminal key event into a web-style physical key identifier.
///
/// Terminals report characters, not scan codes, so shifted symbols are folded
/// back onto the US-layout key that produces them ('*' -> "Digit8"). Keypad
/// keys are only told apart when the terminal reports `KeyEventState::KEYPAD`.
/// Returns None for keys with no sensible identifier.
pub fn key_id_from_event(event: &KeyEvent) -> Option<KeyId> {
    let keypad = event.state.contains(KeyEventState::KEYPAD);
    let code = match event.code {
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Enter if keypad => "NumpadEnter".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::CapsLock => "CapsLock".to_string(),
        KeyCode::ScrollLock => "ScrollLock".to_string(),
        KeyCode::NumLock => "NumLock".to_string(),
        KeyCode::PrintScreen => "PrintScreen".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::Menu => "ContextMenu".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(c) if keypad => keypad_code(c)?,
        KeyCode::Char(c) => char_code(c)?,
        KeyCode::Modifier(modifier) => modifier_code(modifier)?.to_string(),
        _ => return None,
    };
    Some(KeyId::from(code))
}

fn keypad_code(c: char) -> Option<String> {
    let code = match c {
        '0'..='9' => format!("Numpad{}", c),
        '*' => "NumpadMultiply".to_string(),
        '/' => "NumpadDivide".to_string(),
        '+' => "NumpadAdd".to_string(),
        '-' => "NumpadSubtract".to_string(),
        '.' | ',' => "NumpadDecimal".to_string(),
        '=' => "NumpadEqual".to_string(),
        _ => return char_code(c),
    };
    Some(code)
}

fn char_code(c: char) -> Option<String> {
    if c.is_ascii_alphabetic() {
        return Some(format!("Key{}", c.to_ascii_uppercase()));
    }
    if c.is_ascii_digit() {
        return Some(format!("Digit{}", c));
    }
    let code = match c {
        ' ' => "Space",
        ')' => "Digit0",
        '!' => "Digit1",
        '@' => "Digit2",
        '#' => "Digit3",
        '$' => "Digit4",
        '%' => "Digit5",
        '^' => "Digit6",
        '&' => "Digit7",
        '*' => "Digit8",
        '(' => "Digit9",
        '-' | '_' => "Minus",
        '=' | '+' => "Equal",
        '[' | '{' => "BracketLeft",
        ']' | '}' => "BracketRight",
        '\\' | '|' => "Backslash",
        ';' | ':' => "Semicolon",
        '\'' | '"' => "Quote",
        ',' | '<' => "Comma",
        '.' | '>' => "Period",
        '/' | '?' => "Slash",
        '`' | '~' => "Backquote",
        _ => return None,
    };
    Some(code.to_string())
}

fn modifier_code(modifier: ModifierKeyCode) -> Option<&'static str> {
    let code = match modifier {
        ModifierKeyCode::LeftShift => "ShiftLeft",
        ModifierKeyCode::RightShift => "ShiftRight",
        ModifierKeyCode::LeftControl => "ControlLeft",
        ModifierKeyCode::RightControl => "ControlRight",
        ModifierKeyCode::LeftAlt => "AltLeft",
        ModifierKeyCode::RightAlt => "AltRight",
        ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => "MetaLeft",
        ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => "MetaRight",
        _ => return None,
    };
    Some(code)
}
