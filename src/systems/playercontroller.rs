//! Keyboard-to-velocity controller for the player.
//!
//! Builds a direction vector from the WASD snapshot in
//! [`InputState`](crate::resources::input::InputState), normalizes it so
//! diagonals are not faster than axis movement, and hands it to the
//! [`RigidBody`](crate::components::rigidbody::RigidBody).
//!
//! Scheduled only in play mode; in edit mode the body keeps whatever
//! velocity it last had.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each player entity's velocity from the current input state.
pub fn player_controller(
    mut query: Query<&mut RigidBody, With<Player>>,
    input: Res<InputState>,
) {
    let mut direction = Vector2 { x: 0.0, y: 0.0 };
    if input.move_up.active {
        direction.y -= 1.0;
    }
    if input.move_down.active {
        direction.y += 1.0;
    }
    if input.move_left.active {
        direction.x -= 1.0;
    }
    if input.move_right.active {
        direction.x += 1.0;
    }
    if direction.length() > 0.0 {
        direction = direction.normalized();
    }

    for mut body in query.iter_mut() {
        body.set_direction(direction);
    }
}
