//! Camera model: viewer pose, input-driven pose updates, and matrix generation.

mod fly_camera;

pub use fly_camera::{
    CameraMovement, FlyCamera, PITCH_LIMIT_DEG, ZOOM_MAX_DEG, ZOOM_MIN_DEG,
};
