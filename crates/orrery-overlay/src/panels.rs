//! The overlay's two windows: editable settings and read-only camera
//! telemetry.

use glam::Vec3;

use orrery_config::ProgramState;

/// Draws both overlay windows. Widget-level clamping is the only validation:
/// attenuation drags are restricted to [0, 1], object scale to [0.1, 4.0].
pub fn draw_panels(ctx: &egui::Context, state: &mut ProgramState) {
    egui::Window::new("Settings").show(ctx, |ui| {
        let mut color = state.clear_color.to_array();
        ui.horizontal(|ui| {
            ui.label("Background color");
            if ui.color_edit_button_rgb(&mut color).changed() {
                state.clear_color = Vec3::from_array(color);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Object position");
            ui.add(egui::DragValue::new(&mut state.object_position.x).speed(0.05));
            ui.add(egui::DragValue::new(&mut state.object_position.y).speed(0.05));
            ui.add(egui::DragValue::new(&mut state.object_position.z).speed(0.05));
        });
        ui.horizontal(|ui| {
            ui.label("Object scale");
            ui.add(
                egui::DragValue::new(&mut state.object_scale)
                    .speed(0.05)
                    .range(0.1..=4.0),
            );
        });

        ui.separator();

        let light = &mut state.point_light;
        ui.horizontal(|ui| {
            ui.label("Light constant");
            ui.add(
                egui::DragValue::new(&mut light.constant)
                    .speed(0.05)
                    .range(0.0..=1.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Light linear");
            ui.add(
                egui::DragValue::new(&mut light.linear)
                    .speed(0.05)
                    .range(0.0..=1.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Light quadratic");
            ui.add(
                egui::DragValue::new(&mut light.quadratic)
                    .speed(0.05)
                    .range(0.0..=1.0),
            );
        });
    });

    egui::Window::new("Camera info").show(ctx, |ui| {
        let camera = &state.camera;
        ui.label(format!(
            "Position: ({:.3}, {:.3}, {:.3})",
            camera.position.x, camera.position.y, camera.position.z
        ));
        ui.label(format!(
            "(Yaw, Pitch): ({:.1}, {:.1})",
            camera.yaw, camera.pitch
        ));
        ui.label(format!(
            "Front: ({:.3}, {:.3}, {:.3})",
            camera.front.x, camera.front.y, camera.front.z
        ));
        ui.checkbox(&mut state.mouse_look_enabled, "Camera mouse update");
    });
}
