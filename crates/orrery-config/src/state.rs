//! Persisted runtime state: the user-adjustable values that survive restarts.
//!
//! The on-disk format is a flat text file of ten whitespace-separated numeric
//! fields in fixed order: clear color R, G, B; overlay-enabled (0/1); camera
//! position X, Y, Z; camera front X, Y, Z. Loading is deliberately lenient —
//! a missing file keeps defaults, and a short or malformed file fills fields
//! in order until the first bad token and leaves the rest untouched. The
//! overlay rewrites this file on every run, so a stale default costs at most
//! one visible frame.

use std::path::Path;

use glam::Vec3;

use orrery_camera::FlyCamera;

/// Point-light tuning parameters, world space.
///
/// The diffuse term is intentionally far above unit range to read as a bright
/// sun at scene distances. Attenuation coefficients are overlay-adjustable
/// within [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct PointLightParams {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for PointLightParams {
    fn default() -> Self {
        Self {
            position: Vec3::new(-7.0, 14.5, 35.0),
            ambient: Vec3::new(1.2, 1.2, 1.2),
            diffuse: Vec3::new(50.0, 50.0, 50.0),
            specular: Vec3::new(1.0, 1.0, 1.0),
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// Process-wide runtime state, owned by the application loop and passed by
/// reference to input dispatch, the scene composer, and the overlay.
#[derive(Debug, Clone)]
pub struct ProgramState {
    /// Background clear color, each channel in [0, 1].
    pub clear_color: Vec3,
    /// Whether the diagnostic overlay is shown.
    pub overlay_enabled: bool,
    /// Viewer camera. Position and front direction are persisted.
    pub camera: FlyCamera,
    /// Whether cursor deltas steer the camera. Forced off when the overlay
    /// opens; re-enabled from the overlay's camera panel. Not persisted.
    pub mouse_look_enabled: bool,
    /// Placement for a user object. Unused by the current scene; kept for
    /// forward compatibility and editable in the overlay.
    pub object_position: Vec3,
    /// Scale for the user object. Same status as `object_position`.
    pub object_scale: f32,
    /// Point-light parameters, overlay-tunable.
    pub point_light: PointLightParams,
}

/// Errors writing the state file. Loading never errors by design.
#[derive(Debug, thiserror::Error)]
pub enum StateFileError {
    /// Failed to write the state file to disk.
    #[error("failed to write state file: {0}")]
    Write(#[source] std::io::Error),
}

impl Default for ProgramState {
    fn default() -> Self {
        Self {
            clear_color: Vec3::ZERO,
            overlay_enabled: false,
            camera: FlyCamera::default(),
            mouse_look_enabled: true,
            object_position: Vec3::splat(10.0),
            object_scale: 5.0,
            point_light: PointLightParams::default(),
        }
    }
}

impl ProgramState {
    /// Overwrites persisted fields from `path`, in order, stopping at the
    /// first missing or unparsable token. A missing file keeps defaults.
    pub fn load(&mut self, path: &Path) {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                log::debug!("No state file at {}: {err}", path.display());
                return;
            }
        };

        let mut tokens = contents.split_whitespace();
        let mut next_f32 = || tokens.next().and_then(|t| t.parse::<f32>().ok());

        for i in 0..3 {
            match next_f32() {
                Some(value) => self.clear_color[i] = value,
                None => return,
            }
        }
        match next_f32() {
            Some(value) => self.overlay_enabled = value != 0.0,
            None => return,
        }

        let mut position = self.camera.position;
        for i in 0..3 {
            match next_f32() {
                Some(value) => position[i] = value,
                None => {
                    self.camera.position = position;
                    return;
                }
            }
        }
        self.camera.position = position;

        let mut front = self.camera.front;
        for i in 0..3 {
            match next_f32() {
                Some(value) => front[i] = value,
                None => {
                    self.camera.set_front(front);
                    return;
                }
            }
        }
        self.camera.set_front(front);

        log::info!("Loaded program state from {}", path.display());
    }

    /// Writes the ten persisted fields to `path`, one value per line.
    pub fn save(&self, path: &Path) -> Result<(), StateFileError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(StateFileError::Write)?;
        }

        let camera = &self.camera;
        let contents = format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
            self.clear_color.x,
            self.clear_color.y,
            self.clear_color.z,
            self.overlay_enabled as u8,
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.front.x,
            camera.front.y,
            camera.front.z,
        );
        std::fs::write(path, contents).map_err(StateFileError::Write)
    }
}
