//! Diagnostic overlay: egui panels over the runtime state, layered on top of
//! the scene each frame while enabled.

mod panels;
mod renderer;

pub use panels::draw_panels;
pub use renderer::Overlay;
