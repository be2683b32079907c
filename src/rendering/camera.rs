use glam::{Mat4, Vec3};

/// Pitch bound keeping the view direction off the world up axis.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Primary perspective camera. Right-handed system; pose is rewritten every
/// frame by a [`CameraController`].
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        let forward = (target - position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        Self {
            position,
            forward,
            up,
            fov_y: 60f32.to_radians(),
            aspect,
            near: 0.01,
            far: 10_000.0,
        }
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect.max(1e-6), self.near, self.far)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    /// Yaw/pitch orbit around a fixed target at fixed distance.
    Orbit,
    /// First-person camera moved by the keyboard.
    Free,
}

/// Owns the yaw/pitch angles, the drag session, and the free-fly position,
/// and derives the camera pose from them once per frame.
///
/// Angles are stored in degrees; yaw is unbounded (trigonometry wraps it),
/// pitch is clamped to avoid the gimbal flip at the poles.
pub struct CameraController {
    pub mode: CameraMode,
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub sensitivity: f32,
    pub fly_position: Vec3,
    dragging: bool,
    last_cursor: (f32, f32),
}

impl CameraController {
    pub fn new(target: Vec3, distance: f32) -> Self {
        let mut ctl = Self {
            mode: CameraMode::Orbit,
            target,
            distance,
            yaw: -90.0,
            pitch: 0.0,
            move_speed: 2.5,
            sensitivity: 0.1,
            fly_position: Vec3::ZERO,
            dragging: false,
            last_cursor: (0.0, 0.0),
        };
        ctl.fly_position = ctl.orbit_position();
        ctl
    }

    /// Button press over the viewport opens a drag session anchored at the
    /// cursor.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_cursor = (x, y);
    }

    /// Button release closes the session; later cursor motion is ignored.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Cursor motion steers the angles only mid-drag. Vertical motion is
    /// inverted so dragging upward tilts the view down onto the target.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last_cursor.0;
        let dy = y - self.last_cursor.1;
        self.last_cursor = (x, y);

        self.yaw += dx * self.sensitivity;
        self.pitch =
            (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Switch between orbit and free-fly. Entering free-fly starts from the
    /// current orbit position so the view does not jump.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CameraMode::Orbit => {
                self.fly_position = self.orbit_position();
                CameraMode::Free
            }
            CameraMode::Free => CameraMode::Orbit,
        };
    }

    /// Unit view direction from the yaw/pitch pair.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// World-space camera position in orbit mode.
    pub fn orbit_position(&self) -> Vec3 {
        self.target - self.direction() * self.distance
    }

    /// Recompute the camera pose. Pure function of controller state; runs
    /// every frame whether or not input arrived.
    pub fn update(&mut self, input: &crate::simulation::InputState, dt: f32, cam: &mut Camera) {
        match self.mode {
            CameraMode::Orbit => {
                cam.position = self.orbit_position();
                cam.forward = (self.target - cam.position).normalize();
            }
            CameraMode::Free => {
                let forward = self.direction();
                let right = forward.cross(Vec3::Y).normalize();
                let mut dir = Vec3::ZERO;
                if input.forward {
                    dir += forward;
                }
                if input.backward {
                    dir -= forward;
                }
                if input.right {
                    dir += right;
                }
                if input.left {
                    dir -= right;
                }
                if input.up {
                    dir += Vec3::Y;
                }
                if input.down {
                    dir -= Vec3::Y;
                }
                if dir.length_squared() > 0.0 {
                    self.fly_position += dir.normalize() * self.move_speed * dt;
                }
                cam.position = self.fly_position;
                cam.forward = forward;
            }
        }
        // Pitch clamping keeps forward off the poles, so right is well-defined.
        let right = cam.forward.cross(Vec3::Y).normalize_or_zero();
        cam.up = right.cross(cam.forward).normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::InputState;
    use approx::assert_abs_diff_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn default_view_sits_on_positive_z() {
        let ctl = CameraController::new(Vec3::ZERO, 5.0);
        assert_vec3_eq(ctl.orbit_position(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn horizontal_drag_accumulates_yaw_only() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        let (yaw0, pitch0) = (ctl.yaw, ctl.pitch);
        ctl.begin_drag(100.0, 100.0);
        ctl.cursor_moved(110.0, 100.0);
        ctl.cursor_moved(120.0, 100.0);
        ctl.end_drag();
        assert_abs_diff_eq!(ctl.yaw, yaw0 + 20.0 * ctl.sensitivity, epsilon = 1e-5);
        assert_abs_diff_eq!(ctl.pitch, pitch0, epsilon = 1e-6);
    }

    #[test]
    fn motion_outside_a_drag_is_ignored() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        let (yaw0, pitch0) = (ctl.yaw, ctl.pitch);
        ctl.cursor_moved(500.0, 500.0);
        assert_eq!(ctl.yaw, yaw0);
        assert_eq!(ctl.pitch, pitch0);

        ctl.begin_drag(0.0, 0.0);
        ctl.end_drag();
        ctl.cursor_moved(500.0, 500.0);
        assert_eq!(ctl.yaw, yaw0);
        assert_eq!(ctl.pitch, pitch0);
    }

    #[test]
    fn pitch_clamps_under_runaway_drags() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        ctl.begin_drag(0.0, 0.0);
        for step in 1..200 {
            ctl.cursor_moved(0.0, -(step as f32) * 50.0);
            assert!(ctl.pitch <= PITCH_LIMIT_DEG);
        }
        assert_abs_diff_eq!(ctl.pitch, PITCH_LIMIT_DEG, epsilon = 1e-5);

        ctl.cursor_moved(0.0, 1.0e6);
        assert_abs_diff_eq!(ctl.pitch, -PITCH_LIMIT_DEG, epsilon = 1e-5);
    }

    #[test]
    fn orbit_update_looks_at_the_target() {
        let mut ctl = CameraController::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        let mut cam = Camera::new(ctl.orbit_position(), ctl.target, 16.0 / 9.0);
        ctl.begin_drag(0.0, 0.0);
        ctl.cursor_moved(37.0, -12.0);
        ctl.update(&InputState::default(), 0.016, &mut cam);
        assert_vec3_eq(cam.position, ctl.orbit_position());
        assert_vec3_eq(cam.forward, (ctl.target - cam.position).normalize());
        assert_abs_diff_eq!(
            (cam.position - ctl.target).length(),
            ctl.distance,
            epsilon = 1e-4
        );
    }

    #[test]
    fn free_fly_moves_along_forward() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        ctl.toggle_mode();
        assert_eq!(ctl.mode, CameraMode::Free);
        let start = ctl.fly_position;
        let mut cam = Camera::new(start, Vec3::ZERO, 1.0);
        let mut input = InputState::default();
        input.forward = true;
        ctl.update(&input, 0.5, &mut cam);
        let expected = start + ctl.direction() * ctl.move_speed * 0.5;
        assert_vec3_eq(cam.position, expected);
    }

    #[test]
    fn mode_toggle_preserves_angles() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        ctl.begin_drag(0.0, 0.0);
        ctl.cursor_moved(30.0, 10.0);
        let (yaw, pitch) = (ctl.yaw, ctl.pitch);
        ctl.toggle_mode();
        ctl.toggle_mode();
        assert_eq!(ctl.mode, CameraMode::Orbit);
        assert_eq!(ctl.yaw, yaw);
        assert_eq!(ctl.pitch, pitch);
    }

    #[test]
    fn orbit_keeps_keyboard_input_inert() {
        let mut ctl = CameraController::new(Vec3::ZERO, 5.0);
        let mut cam = Camera::new(ctl.orbit_position(), Vec3::ZERO, 1.0);
        let mut input = InputState::default();
        input.forward = true;
        input.left = true;
        ctl.update(&input, 1.0, &mut cam);
        assert_vec3_eq(cam.position, ctl.orbit_position());
    }
}
