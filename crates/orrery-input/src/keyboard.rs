//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates winit [`KeyEvent`]s during a frame and
//! answers two questions for any physical key: is it held, and was it just
//! pressed this frame. Physical key codes are used throughout so WASD movement
//! works identically regardless of keyboard layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal description of a key event, platform-independent and test-friendly.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is a repeat event.
    pub repeat: bool,
}

/// Tracks per-frame keyboard state using physical (scan-code) keys.
///
/// Forward every [`KeyEvent`] to [`process_event`](Self::process_event), query
/// with [`is_pressed`](Self::is_pressed) / [`just_pressed`](Self::just_pressed),
/// and call [`clear_transients`](Self::clear_transients) at the end of each
/// frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating internal state.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`]. Repeat events are ignored so a held key
    /// registers as just-pressed only once.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.pressed.insert(event.key);
                self.just_pressed.insert(event.key);
            }
            ElementState::Released => {
                self.pressed.remove(&event.key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Clears the `just_pressed` set. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn raw(code: KeyCode, state: ElementState, repeat: bool) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat,
        }
    }

    #[test]
    fn test_initial_state_no_keys_pressed() {
        let kb = KeyboardState::new();
        for k in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::F1, KeyCode::Escape] {
            let pk = PhysicalKey::Code(k);
            assert!(!kb.is_pressed(pk));
            assert!(!kb.just_pressed(pk));
        }
    }

    #[test]
    fn test_press_event_sets_pressed() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        let pk = PhysicalKey::Code(KeyCode::KeyW);
        assert!(kb.is_pressed(pk));
        assert!(kb.just_pressed(pk));
    }

    #[test]
    fn test_release_clears_pressed() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Released, false));
        assert!(!kb.is_pressed(PhysicalKey::Code(KeyCode::KeyW)));
    }

    #[test]
    fn test_just_pressed_true_for_one_frame_only() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::F1, ElementState::Pressed, false));
        let pk = PhysicalKey::Code(KeyCode::F1);
        assert!(kb.just_pressed(pk));
        kb.clear_transients();
        assert!(!kb.just_pressed(pk));
        assert!(kb.is_pressed(pk));
    }

    #[test]
    fn test_held_key_stays_pressed_across_frames() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Pressed, false));
        for _ in 0..3 {
            kb.clear_transients();
            assert!(kb.is_pressed(PhysicalKey::Code(KeyCode::KeyD)));
        }
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, false));
        kb.clear_transients();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, true));
        let pk = PhysicalKey::Code(KeyCode::KeyA);
        assert!(!kb.just_pressed(pk));
        assert!(kb.is_pressed(pk));
    }

    #[test]
    fn test_multiple_keys_tracked_independently() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Released, false));
        assert!(!kb.is_pressed(PhysicalKey::Code(KeyCode::KeyW)));
        assert!(kb.is_pressed(PhysicalKey::Code(KeyCode::KeyD)));
    }
}
