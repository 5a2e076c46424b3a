//! Frame-coherent mouse state tracker.
//!
//! [`MouseState`] accumulates cursor and scroll events during a frame. The
//! first cursor event after startup only seeds the reference position — no
//! delta is produced — so the camera does not take a large spurious jump when
//! the cursor first enters the window.

use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Frame-coherent mouse state.
///
/// Forward winit events via the `on_*` methods during event collection, query
/// with [`delta`](Self::delta) / [`scroll`](Self::scroll), and call
/// [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Last seen cursor position; `None` until the first event seeds it.
    position: Option<Vec2>,
    delta: Vec2,
    scroll: f32,
}

impl MouseState {
    /// Creates a new `MouseState` with no position reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event. The first event seeds the reference
    /// position instead of producing a delta.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        if let Some(position) = self.position {
            self.delta += new_pos - position;
        }
        self.position = Some(new_pos);
    }

    /// Process a `MouseWheel` event.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => {
                self.scroll += y;
            }
            MouseScrollDelta::PixelDelta(pos) => {
                // Normalize pixel delta: ~40 pixels per scroll line.
                self.scroll += (pos.y / 40.0) as f32;
            }
        }
    }

    /// Clears per-frame transients: delta and scroll.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll = 0.0;
    }

    /// Current cursor position, if any event has been seen.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Cursor movement accumulated since the last frame clear.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Scroll accumulated this frame (positive = scroll up).
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }
}
