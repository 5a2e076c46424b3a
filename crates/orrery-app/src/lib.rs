//! Application framework for the orrery viewer: window and event loop
//! handling, the frame clock, and the scene renderer that owns all GPU
//! resources.

pub mod app;
pub mod frame_clock;
pub mod scene_renderer;


pub use app::App;
pub use frame_clock::FrameClock;
pub use scene_renderer::SceneRenderer;
