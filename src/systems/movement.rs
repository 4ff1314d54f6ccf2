//! Position integration with wall collision response.
//!
//! Positions advance by `velocity * delta` every frame regardless of mode.
//! Entities carrying a [`BoxCollider`] are kept out of walls by resolving
//! each axis separately: the X and Y motion components are applied
//! independently and an axis is rejected when its candidate position would
//! overlap a wall cell, so sliding along a wall still works.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::colliding_with_walls;

pub fn movement(
    mut query: Query<(&mut MapPosition, &RigidBody, Option<&BoxCollider>)>,
    grid: Res<TileGrid>,
    time: Res<WorldTime>,
) {
    for (mut position, body, collider) in query.iter_mut() {
        let delta = body.velocity.scale_by(time.delta);
        match collider {
            None => {
                position.pos += delta;
            }
            Some(collider) => {
                let mut pos = position.pos;

                let candidate = Vector2 {
                    x: pos.x + delta.x,
                    y: pos.y,
                };
                if !colliding_with_walls(collider.min(candidate), collider.size, &grid) {
                    pos.x = candidate.x;
                }

                let candidate = Vector2 {
                    x: pos.x,
                    y: pos.y + delta.y,
                };
                if !colliding_with_walls(collider.min(candidate), collider.size, &grid) {
                    pos.y = candidate.y;
                }

                position.pos = pos;
            }
        }
    }
}
