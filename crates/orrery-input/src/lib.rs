//! Input handling: frame-coherent event trackers and the per-frame dispatcher.
//!
//! Window events are accumulated into [`KeyboardState`] and [`MouseState`]
//! during event delivery and drained exactly once per frame by
//! [`dispatch`](dispatch::dispatch), keeping single-threaded, in-order
//! semantics without platform callbacks mutating shared state.

mod dispatch;
mod keyboard;
mod mouse;

pub use dispatch::{DispatchOutcome, dispatch};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
