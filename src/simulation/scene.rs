use crate::physics::BlackHole;
use crate::rendering::{Camera, CameraController};
use crate::simulation::{InputState, TimeState};
use glam::Vec3;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

const ORBIT_DISTANCE: f32 = 5.0;

/// Top-level application state: the one black hole, the camera and its
/// controller, input, and timing. Owned by `main`, updated once per frame.
pub struct Scene {
    pub camera: Camera,
    pub controller: CameraController,
    pub input: InputState,
    pub time: TimeState,
    pub black_hole: BlackHole,
    // Latest absolute cursor position; drag sessions anchor here on press.
    cursor: (f32, f32),
}

impl Scene {
    pub fn new(aspect: f32) -> Self {
        let black_hole = BlackHole::with_solar_masses(1.0);
        let controller = CameraController::new(Vec3::ZERO, ORBIT_DISTANCE);
        let camera = Camera::new(controller.orbit_position(), controller.target, aspect);
        Self {
            camera,
            controller,
            input: InputState::default(),
            time: TimeState::default(),
            black_hole,
            cursor: (0.0, 0.0),
        }
    }

    /// Per-frame update: advance the clock, rederive the camera pose, and
    /// sample FPS once per second.
    pub fn update(&mut self) {
        self.time.update();
        self.controller
            .update(&self.input, self.time.delta_time, &mut self.camera);
        if let Some(fps) = self.time.fps_sample() {
            log::info!("FPS: {:.1}", fps);
        }
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.height > 0 {
            self.camera.aspect = size.width as f32 / size.height as f32;
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::KeyO) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        self.controller.toggle_mode();
                        log::info!("camera mode: {:?}", self.controller.mode);
                    }
                }
                self.input.handle_keyboard(event);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.controller.begin_drag(self.cursor.0, self.cursor.1);
                }
                ElementState::Released => self.controller.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.controller.cursor_moved(self.cursor.0, self.cursor.1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn initial_camera_matches_default_orbit() {
        let scene = Scene::new(16.0 / 9.0);
        assert_abs_diff_eq!(scene.camera.position.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(scene.camera.position.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(scene.camera.position.z, ORBIT_DISTANCE, epsilon = 1e-4);
    }

    #[test]
    fn black_hole_scale_is_unit_for_one_solar_mass() {
        let scene = Scene::new(1.0);
        assert_abs_diff_eq!(scene.black_hole.display_radius(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn update_keeps_orbit_distance() {
        let mut scene = Scene::new(1.0);
        scene.controller.begin_drag(0.0, 0.0);
        scene.controller.cursor_moved(123.0, -45.0);
        scene.update();
        let d = (scene.camera.position - scene.controller.target).length();
        assert_abs_diff_eq!(d, ORBIT_DISTANCE, epsilon = 1e-4);
    }
}
