//! Simulation module for scene state and frame timing
//!
//! This module ties input, timing, and the camera together; there is no
//! physics stepping, only per-frame state updates.

pub mod scene;

// Re-export scene only
pub use scene::Scene;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Polled key-down state for the free-fly camera.
#[derive(Debug, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn handle_keyboard(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.apply(code, event.state == ElementState::Pressed);
        }
    }

    pub fn apply(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.backward = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.down = pressed,
            _ => {}
        }
    }
}

/// Wall-clock frame timing. Movement scales by the delta between successive
/// loop iterations; there is no fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct TimeState {
    pub delta_time: f32,
    pub last_frame_time: std::time::Instant,
    pub frame_count: u64,
    pub last_fps_instant: std::time::Instant,
}

impl Default for TimeState {
    fn default() -> Self {
        Self {
            delta_time: 0.0,
            last_frame_time: std::time::Instant::now(),
            frame_count: 0,
            last_fps_instant: std::time::Instant::now(),
        }
    }
}

impl TimeState {
    pub fn update(&mut self) {
        let now = std::time::Instant::now();
        self.delta_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.frame_count += 1;
    }

    /// Frames-per-second averaged over the last second, once per second.
    pub fn fps_sample(&mut self) -> Option<f32> {
        let now = std::time::Instant::now();
        let elapsed = now.duration_since(self.last_fps_instant).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_instant = now;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_to_axes() {
        let mut input = InputState::default();
        input.apply(KeyCode::KeyW, true);
        input.apply(KeyCode::KeyA, true);
        assert!(input.forward && input.left);
        input.apply(KeyCode::KeyW, false);
        assert!(!input.forward && input.left);
    }

    #[test]
    fn space_and_shift_map_vertically() {
        let mut input = InputState::default();
        input.apply(KeyCode::Space, true);
        input.apply(KeyCode::ShiftLeft, true);
        assert!(input.up && input.down);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut input = InputState::default();
        input.apply(KeyCode::KeyZ, true);
        assert!(!(input.forward || input.backward || input.left || input.right));
    }

    #[test]
    fn time_update_advances() {
        let mut time = TimeState::default();
        time.update();
        assert!(time.delta_time >= 0.0);
        assert_eq!(time.frame_count, 1);
    }
}
