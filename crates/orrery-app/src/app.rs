//! Window creation and event handling via winit.
//!
//! [`App`] implements winit's [`ApplicationHandler`]: it owns the window, the
//! GPU context, the scene renderer, the overlay, the input trackers, and the
//! program state. One thread owns everything; the loop runs until a close is
//! requested, then persists the program state and exits.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::{Config, ProgramState};
use orrery_input::{KeyboardState, MouseState, dispatch};
use orrery_overlay::Overlay;
use orrery_render::{RenderContext, SurfaceError, init_render_context_blocking};

use crate::frame_clock::FrameClock;
use crate::scene_renderer::SceneRenderer;

/// Saves the program state to disk at most once across the exit paths.
fn save_state_once(state: &ProgramState, path: &std::path::Path, saved: &mut bool) {
    if *saved {
        return;
    }
    match state.save(path) {
        Ok(()) => {
            info!("Saved program state to {}", path.display());
            *saved = true;
        }
        Err(err) => error!("{err}"),
    }
}

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Application state driving the render loop.
pub struct App {
    config: Config,
    state: ProgramState,
    state_path: PathBuf,
    resources_dir: PathBuf,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    scene: Option<SceneRenderer>,
    overlay: Option<Overlay>,
    keyboard: KeyboardState,
    mouse: MouseState,
    clock: FrameClock,
    state_saved: bool,
    /// Set when GPU or window initialization fails, so `main` can exit
    /// nonzero after the loop unwinds.
    pub startup_failed: bool,
}

impl App {
    /// Creates the application with configuration and pre-loaded state.
    pub fn new(
        config: Config,
        state: ProgramState,
        state_path: PathBuf,
        resources_dir: PathBuf,
    ) -> Self {
        Self {
            config,
            state,
            state_path,
            resources_dir,
            window: None,
            gpu: None,
            scene: None,
            overlay: None,
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            clock: FrameClock::new(),
            state_saved: false,
            startup_failed: false,
        }
    }

    /// Writes the program state file once, no matter how many exit paths run.
    fn persist_state(&mut self) {
        save_state_once(&self.state, &self.state_path, &mut self.state_saved);
    }

    /// One frame: time, input, scene pass, overlay pass, present.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();

        let outcome = dispatch(
            &self.keyboard,
            &self.mouse,
            dt,
            &mut self.state,
            &self.config.input,
        );
        self.keyboard.clear_transients();
        self.mouse.clear_transients();

        if outcome.close_requested {
            info!("Escape pressed, shutting down");
            self.persist_state();
            event_loop.exit();
            return;
        }

        let (Some(gpu), Some(scene), Some(window)) = (&self.gpu, &self.scene, &self.window) else {
            return;
        };

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, shutting down");
                save_state_once(&self.state, &self.state_path, &mut self.state_saved);
                event_loop.exit();
                return;
            }
            Err(err) => {
                warn!("Skipping frame: {err}");
                window.request_redraw();
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        scene.render(gpu, &mut encoder, &view, &self.state, self.clock.elapsed());

        if self.state.overlay_enabled
            && let Some(overlay) = &mut self.overlay
        {
            overlay.draw_frame(
                window,
                &gpu.device,
                &gpu.queue,
                &mut encoder,
                &view,
                gpu.surface_config.width,
                gpu.surface_config.height,
                &mut self.state,
            );
        }

        gpu.queue.submit([encoder.finish()]);
        surface_texture.present();
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("Failed to create window: {err}");
                self.startup_failed = true;
                event_loop.exit();
                return;
            }
        };

        let gpu = match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => gpu,
            Err(err) => {
                error!("GPU initialization failed: {err}");
                self.startup_failed = true;
                event_loop.exit();
                return;
            }
        };

        let scene = SceneRenderer::new(&gpu, &self.resources_dir);
        let overlay = Overlay::new(&window, &gpu.device, gpu.surface_format);

        info!(
            "Window and renderer ready: {}x{}",
            gpu.surface_config.width, gpu.surface_config.height
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.scene = Some(scene);
        self.overlay = Some(overlay);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The overlay sees every event so its widgets track hover and focus;
        // the trackers see every event too, matching the original chained
        // callbacks. Camera steering is gated by the mouse-look flag, not by
        // event routing.
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            let _ = overlay.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.persist_state();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let (w, h) = (new_size.width, new_size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(w, h);
                }
                if let (Some(scene), Some(gpu)) = (&mut self.scene, &self.gpu) {
                    scene.resize(&gpu.device, w.max(1), h.max(1));
                }
                info!("Window resized to {}x{}", w, h);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.on_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.persist_state();
    }
}
