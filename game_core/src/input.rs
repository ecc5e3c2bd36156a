//! Logical controls and their pressed state

use std::collections::HashMap;

/// Logical control identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Jump,
}

impl Control {
    /// Map a host key code (`KeyboardEvent.code`) to a control
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" | "ArrowUp" | "KeyW" => Some(Control::Jump),
            _ => None,
        }
    }
}

/// Pressed/released state per control, written by key events and read once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashMap<Control, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, down: bool) {
        self.pressed.insert(control, down);
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.get(&control).copied().unwrap_or(false)
    }

    /// Handle key down event. Returns true if the key maps to a control.
    pub fn key_down(&mut self, code: &str) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.set(control, true);
                true
            }
            None => false,
        }
    }

    /// Handle key up event. Returns true if the key maps to a control.
    pub fn key_up(&mut self, code: &str) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.set(control, false);
                true
            }
            None => false,
        }
    }
}
