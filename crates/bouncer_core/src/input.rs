//! Keyboard state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` returns true every frame the key
//!   is physically down. Used for continuous actions like acceleration.
//!
//! - **Edge-triggered (just_pressed / just_released):** These are true only during
//!   the frame the transition happened, and are cleared by `end_frame()` at the
//!   end of each loop iteration. The pause toggle relies on this: one physical
//!   press flips the flag exactly once no matter how many frames the key stays
//!   down, with no wait-for-release loop.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
}

pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
    just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.is_held(Key::Left));
        assert!(input.is_just_pressed(Key::Left));
    }

    #[test]
    fn key_up_clears_held_sets_just_released() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_up(Key::Left);
        assert!(!input.is_held(Key::Left));
        assert!(input.is_just_released(Key::Left));
    }

    #[test]
    fn key_down_repeat_does_not_double_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        assert!(input.is_just_pressed(Key::Space));
        // OS key repeat delivers more key_down events while held; the key is
        // already in held (HashSet::insert returns false) so nothing changes.
        input.key_down(Key::Space);
        assert!(input.is_held(Key::Space));
        assert!(input.is_just_pressed(Key::Space));
    }

    #[test]
    fn key_up_without_down_is_no_op() {
        let mut input = InputState::new();
        input.key_up(Key::Up);
        assert!(!input.is_just_released(Key::Up));
        assert!(!input.is_held(Key::Up));
    }

    #[test]
    fn end_frame_clears_transient_state() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Space);
        input.end_frame();
        assert!(!input.is_just_pressed(Key::Left));
        assert!(!input.is_just_pressed(Key::Space));
        // Held state persists across frames.
        assert!(input.is_held(Key::Left));
        assert!(input.is_held(Key::Space));
    }

    #[test]
    fn end_frame_clears_just_released() {
        let mut input = InputState::new();
        input.key_down(Key::Down);
        input.key_up(Key::Down);
        assert!(input.is_just_released(Key::Down));
        input.end_frame();
        assert!(!input.is_just_released(Key::Down));
    }

    #[test]
    fn multiple_keys_independent() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        assert!(input.is_held(Key::Left));
        assert!(input.is_held(Key::Right));

        input.key_up(Key::Left);
        assert!(!input.is_held(Key::Left));
        assert!(input.is_just_released(Key::Left));
        assert!(input.is_held(Key::Right));
        assert!(!input.is_just_released(Key::Right));
    }

    #[test]
    fn default_state_is_empty() {
        let input = InputState::new();
        assert!(!input.is_held(Key::Escape));
        assert!(!input.is_just_pressed(Key::Escape));
        assert!(!input.is_just_released(Key::Escape));
    }
}
