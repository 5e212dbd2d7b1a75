//! Input mapper: held arrow keys accelerate the quad, Space toggles pause.
//!
//! The pause toggle is edge-triggered through `InputState::is_just_pressed`,
//! replacing the original's blocking wait-for-release loop; no nested event
//! pump is needed and the flag flips exactly once per physical press.

use glam::Vec2;

use crate::input::{InputState, Key};

#[derive(Debug, Clone, Copy)]
pub struct MapperConfig {
    /// Velocity delta added per frame while a direction key is held.
    pub acceleration: f32,
    /// Per-component velocity cap, applied after acceleration.
    pub max_speed: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            acceleration: 0.00005,
            max_speed: 0.00015,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper {
    pub config: MapperConfig,
}

impl InputMapper {
    /// Fold the current key state into velocity and the pause flag.
    ///
    /// Opposing keys held together partially cancel (both deltas apply).
    /// Both components are clamped independently to `[-max_speed, max_speed]`
    /// after acceleration, so any mapper call restores the speed invariant.
    pub fn apply(&self, input: &InputState, velocity: &mut Vec2, paused: &mut bool) {
        let accel = self.config.acceleration;
        if input.is_held(Key::Left) {
            velocity.x -= accel;
        }
        if input.is_held(Key::Right) {
            velocity.x += accel;
        }
        if input.is_held(Key::Down) {
            velocity.y -= accel;
        }
        if input.is_held(Key::Up) {
            velocity.y += accel;
        }

        if input.is_just_pressed(Key::Space) {
            *paused = !*paused;
        }

        let max = self.config.max_speed;
        velocity.x = velocity.x.clamp(-max, max);
        velocity.y = velocity.y.clamp(-max, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_left_accelerates_until_speed_cap() {
        let mapper = InputMapper::default();
        let mut input = InputState::new();
        let mut velocity = Vec2::ZERO;
        let mut paused = false;

        input.key_down(Key::Left);
        input.end_frame();

        // Growth phase: |v.x| == n * acceleration while below the cap.
        for frame in 1..=2 {
            mapper.apply(&input, &mut velocity, &mut paused);
            let expected = -(frame as f32) * mapper.config.acceleration;
            assert!((velocity.x - expected).abs() < 1e-9);
        }

        // Plateau: once the cap is exceeded, clamp pins it exactly.
        for _ in 0..5 {
            mapper.apply(&input, &mut velocity, &mut paused);
        }
        assert_eq!(velocity.x, -mapper.config.max_speed);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn velocity_never_exceeds_cap_under_any_sequence() {
        let mapper = InputMapper::default();
        let mut input = InputState::new();
        let mut velocity = Vec2::new(0.0001, -0.0001);
        let mut paused = false;

        input.key_down(Key::Right);
        input.key_down(Key::Down);
        for _ in 0..1000 {
            mapper.apply(&input, &mut velocity, &mut paused);
            input.end_frame();
            let max = mapper.config.max_speed;
            assert!(velocity.x.abs() <= max);
            assert!(velocity.y.abs() <= max);
        }
    }

    #[test]
    fn opposing_keys_cancel() {
        let mapper = InputMapper::default();
        let mut input = InputState::new();
        let mut velocity = Vec2::ZERO;
        let mut paused = false;

        input.key_down(Key::Left);
        input.key_down(Key::Right);
        mapper.apply(&input, &mut velocity, &mut paused);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn pause_toggles_once_while_key_stays_held() {
        let mapper = InputMapper::default();
        let mut input = InputState::new();
        let mut velocity = Vec2::ZERO;
        let mut paused = false;

        input.key_down(Key::Space);
        // Pressed then held across many polling frames: only the press frame
        // carries the just_pressed edge.
        for _ in 0..20 {
            mapper.apply(&input, &mut velocity, &mut paused);
            input.end_frame();
        }
        assert!(paused);

        // Release and press again: flips back.
        input.key_up(Key::Space);
        input.end_frame();
        input.key_down(Key::Space);
        mapper.apply(&input, &mut velocity, &mut paused);
        assert!(!paused);
    }

    #[test]
    fn apply_without_keys_is_identity() {
        let mapper = InputMapper::default();
        let input = InputState::new();
        let mut velocity = Vec2::new(0.0001, -0.00005);
        let mut paused = true;

        mapper.apply(&input, &mut velocity, &mut paused);
        assert_eq!(velocity, Vec2::new(0.0001, -0.00005));
        assert!(paused);
    }
}
