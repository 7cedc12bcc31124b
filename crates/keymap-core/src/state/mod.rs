// Keymap State
// The binding store and its rejection type

mod bindings;

pub use bindings::{BindingError, KeyBindingStore};
