//! Held-key input state
//!
//! Key handlers write into this, the simulation reads it once per tick.
//! Only level-triggered queries exist: a key is either held or not.

use std::collections::HashSet;

/// Logical keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::MoveLeft => "move-left",
            Key::MoveRight => "move-right",
            Key::Jump => "jump",
        }
    }
}

/// Current up/down status of the logical keys. Absent means not held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Set a key's held state directly (keydown = true, keyup = false)
    pub fn set(&mut self, key: Key, held: bool) {
        if held {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_not_held() {
        let input = InputState::new();
        assert!(!input.is_held(Key::MoveLeft));
        assert!(!input.is_held(Key::MoveRight));
        assert!(!input.is_held(Key::Jump));
    }

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        input.set(Key::Jump, true);
        assert!(input.is_held(Key::Jump));

        // Repeated keydown events are harmless
        input.press(Key::Jump);
        input.set(Key::Jump, false);
        assert!(!input.is_held(Key::Jump));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::MoveLeft.as_str(), "move-left");
        assert_eq!(Key::MoveRight.as_str(), "move-right");
        assert_eq!(Key::Jump.as_str(), "jump");
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.press(Key::MoveLeft);
        input.press(Key::MoveRight);
        input.clear();
        assert!(!input.is_held(Key::MoveLeft));
        assert!(!input.is_held(Key::MoveRight));
    }
}
