use std::collections::HashSet;

use jungle_core::input::InputSnapshot;

use crate::config::KeyBindings;

/// Keyboard state, updated from key events as they arrive.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Key codes currently held down.
    pub keys_down: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, code: impl Into<String>) {
        self.keys_down.insert(code.into());
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Sample the held keys through `bindings` for one simulation tick.
    pub fn snapshot(&self, bindings: &KeyBindings) -> InputSnapshot {
        InputSnapshot {
            left: self.is_key_down(&bindings.left),
            right: self.is_key_down(&bindings.right),
            jump_primary: self.is_key_down(&bindings.jump_primary),
            jump_secondary: self.is_key_down(&bindings.jump_secondary),
        }
    }
}
