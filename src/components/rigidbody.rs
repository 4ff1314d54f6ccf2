//! Kinematic body with a fixed movement speed.
//!
//! The [`RigidBody`] component stores the current velocity and the fixed
//! speed the entity moves at. There is no acceleration model: velocity
//! components are always `0` or `±speed`, or `direction * speed` when set
//! from a direction vector. The movement system integrates position from
//! this velocity each frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 200.0;

/// Velocity holder for entities moved by the movement system.
///
/// The coordinate convention is raylib's: Y grows downward, so "up" is
/// negative Y.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Fixed movement speed applied by the directional setters.
    pub speed: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl RigidBody {
    /// Create a body at rest with the given fixed speed.
    pub fn new(speed: f32) -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            speed,
        }
    }

    /// Set velocity to `direction * speed`.
    ///
    /// The caller normalizes `direction` first if diagonal movement must not
    /// be faster than axis movement.
    pub fn set_direction(&mut self, direction: Vector2) {
        self.velocity = direction.scale_by(self.speed);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn move_up(&mut self) {
        self.velocity.y = -self.speed;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn move_down(&mut self) {
        self.velocity.y = self.speed;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn move_left(&mut self) {
        self.velocity.x = -self.speed;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn move_right(&mut self) {
        self.velocity.x = self.speed;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stop_x(&mut self) {
        self.velocity.x = 0.0;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stop_y(&mut self) {
        self.velocity.y = 0.0;
    }

    /// True when either velocity component is non-zero.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_body_is_at_rest() {
        let rb = RigidBody::new(150.0);
        assert!(!rb.is_moving());
        assert!(approx_eq(rb.speed, 150.0));
    }

    #[test]
    fn default_body_uses_default_speed() {
        let rb = RigidBody::default();
        assert!(approx_eq(rb.speed, DEFAULT_SPEED));
    }

    #[test]
    fn set_direction_scales_by_speed() {
        let mut rb = RigidBody::new(200.0);
        rb.set_direction(Vector2 { x: 1.0, y: 0.0 });
        assert!(approx_eq(rb.velocity.x, 200.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn set_direction_keeps_normalized_diagonal_speed() {
        let mut rb = RigidBody::new(200.0);
        let diag = Vector2 { x: 1.0, y: 1.0 }.normalized();
        rb.set_direction(diag);
        assert!(approx_eq(rb.velocity.length(), 200.0));
    }

    #[test]
    fn directional_helpers_set_single_axis() {
        let mut rb = RigidBody::new(200.0);
        rb.move_up();
        assert!(approx_eq(rb.velocity.y, -200.0));
        assert!(approx_eq(rb.velocity.x, 0.0));

        rb.move_right();
        assert!(approx_eq(rb.velocity.x, 200.0));
        // Y axis untouched by the X helper
        assert!(approx_eq(rb.velocity.y, -200.0));

        rb.move_down();
        assert!(approx_eq(rb.velocity.y, 200.0));
        rb.move_left();
        assert!(approx_eq(rb.velocity.x, -200.0));
    }

    #[test]
    fn stop_helpers_zero_one_axis() {
        let mut rb = RigidBody::new(200.0);
        rb.move_right();
        rb.move_down();
        rb.stop_x();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 200.0));
        rb.stop_y();
        assert!(!rb.is_moving());
    }
}
