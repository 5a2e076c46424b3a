//! Per-frame input dispatch: maps tracker state onto the camera and the
//! overlay flag.

use winit::keyboard::{KeyCode, PhysicalKey};

use orrery_camera::CameraMovement;
use orrery_config::{InputConfig, ProgramState};

use crate::{KeyboardState, MouseState};

/// What the frame's input asked of the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOutcome {
    /// Escape was pressed this frame.
    pub close_requested: bool,
}

/// Drains one frame of input into `state`.
///
/// Held W/A/S/D keys move the camera every frame (polled, not edge-triggered).
/// Cursor deltas rotate the camera only while mouse-look is enabled; scroll
/// always adjusts zoom. F1 is edge-triggered: it toggles the overlay and, when
/// enabling it, forces mouse-look off so overlay interaction does not steer
/// the camera. The caller clears tracker transients after this returns.
pub fn dispatch(
    keyboard: &KeyboardState,
    mouse: &MouseState,
    dt: f32,
    state: &mut ProgramState,
    input_config: &InputConfig,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    if keyboard.just_pressed(PhysicalKey::Code(KeyCode::Escape)) {
        outcome.close_requested = true;
    }

    if keyboard.just_pressed(PhysicalKey::Code(KeyCode::F1)) {
        state.overlay_enabled = !state.overlay_enabled;
        if state.overlay_enabled {
            state.mouse_look_enabled = false;
        }
    }

    let camera = &mut state.camera;
    if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyW)) {
        camera.process_keyboard(CameraMovement::Forward, dt);
    }
    if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyS)) {
        camera.process_keyboard(CameraMovement::Backward, dt);
    }
    if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyA)) {
        camera.process_keyboard(CameraMovement::Left, dt);
    }
    if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyD)) {
        camera.process_keyboard(CameraMovement::Right, dt);
    }

    if state.mouse_look_enabled {
        let delta = mouse.delta();
        if delta != glam::Vec2::ZERO {
            let dx = delta.x * input_config.mouse_sensitivity;
            // Window-space Y grows downward; looking up means a negative delta.
            let mut dy = -delta.y * input_config.mouse_sensitivity;
            if input_config.invert_y {
                dy = -dy;
            }
            state.camera.process_mouse_movement(dx, dy);
        }
    }

    let scroll = mouse.scroll();
    if scroll != 0.0 {
        state.camera.process_mouse_scroll(scroll);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawKeyEvent;
    use approx::assert_relative_eq;
    use winit::event::ElementState;

    fn press(kb: &mut KeyboardState, code: KeyCode) {
        kb.process_raw(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        });
    }

    fn frame(
        kb: &mut KeyboardState,
        ms: &mut MouseState,
        dt: f32,
        state: &mut ProgramState,
    ) -> DispatchOutcome {
        let outcome = dispatch(kb, ms, dt, state, &InputConfig::default());
        kb.clear_transients();
        ms.clear_transients();
        outcome
    }

    #[test]
    fn test_escape_requests_close() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        press(&mut kb, KeyCode::Escape);
        let outcome = frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(outcome.close_requested);
    }

    #[test]
    fn test_f1_toggles_overlay_once_while_held() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();

        press(&mut kb, KeyCode::F1);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.overlay_enabled);

        // Key still held in later frames; no further edge, no further toggle.
        frame(&mut kb, &mut ms, 0.016, &mut state);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.overlay_enabled);
    }

    #[test]
    fn test_enabling_overlay_disables_mouse_look() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        assert!(state.mouse_look_enabled);

        press(&mut kb, KeyCode::F1);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.overlay_enabled);
        assert!(!state.mouse_look_enabled);
    }

    #[test]
    fn test_disabling_overlay_leaves_mouse_look_untouched() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        state.overlay_enabled = true;
        state.mouse_look_enabled = true;

        press(&mut kb, KeyCode::F1);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(!state.overlay_enabled);
        assert!(state.mouse_look_enabled);
    }

    #[test]
    fn test_held_w_moves_camera_every_frame() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        let start = state.camera.position;

        press(&mut kb, KeyCode::KeyW);
        frame(&mut kb, &mut ms, 0.1, &mut state);
        let after_one = state.camera.position;
        frame(&mut kb, &mut ms, 0.1, &mut state);
        let after_two = state.camera.position;

        let step = (after_one - start).length();
        assert!(step > 0.0);
        assert_relative_eq!((after_two - after_one).length(), step, epsilon = 1e-5);
    }

    #[test]
    fn test_mouse_delta_rotates_only_when_look_enabled() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        let start_yaw = state.camera.yaw;

        state.mouse_look_enabled = false;
        ms.on_cursor_moved(100.0, 100.0);
        ms.on_cursor_moved(150.0, 100.0);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert_relative_eq!(state.camera.yaw, start_yaw);

        state.mouse_look_enabled = true;
        ms.on_cursor_moved(200.0, 100.0);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.camera.yaw > start_yaw);
    }

    #[test]
    fn test_upward_cursor_motion_raises_pitch() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();

        ms.on_cursor_moved(100.0, 100.0);
        ms.on_cursor_moved(100.0, 60.0); // cursor moved up the window
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.camera.pitch > 0.0);
    }

    #[test]
    fn test_scroll_zooms_regardless_of_mouse_look() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        state.mouse_look_enabled = false;
        let start_zoom = state.camera.zoom;

        ms.on_scroll(winit::event::MouseScrollDelta::LineDelta(0.0, 2.0));
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert!(state.camera.zoom < start_zoom);
    }

    #[test]
    fn test_first_cursor_event_causes_no_rotation() {
        let mut kb = KeyboardState::new();
        let mut ms = MouseState::new();
        let mut state = ProgramState::default();
        let (yaw, pitch) = (state.camera.yaw, state.camera.pitch);

        ms.on_cursor_moved(700.0, 500.0);
        frame(&mut kb, &mut ms, 0.016, &mut state);
        assert_relative_eq!(state.camera.yaw, yaw);
        assert_relative_eq!(state.camera.pitch, pitch);
    }
}
