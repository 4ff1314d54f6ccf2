//! Camera zoom and follow systems.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::{Camera, FOLLOW_FACTOR};
use crate::resources::input::InputState;

/// Zoom step applied per frame while an arrow key is held. Per-frame like
/// the follow factor, not time-scaled.
const ZOOM_STEP: f32 = 0.01;

/// Nudge the zoom level while the up/down arrows are held.
///
/// Active in both modes. Clamping happens inside [`Camera::set_zoom`].
pub fn camera_zoom(input: Res<InputState>, mut camera: ResMut<Camera>) {
    if input.zoom_in.active {
        let zoom = camera.zoom();
        camera.set_zoom(zoom + ZOOM_STEP);
    }
    if input.zoom_out.active {
        let zoom = camera.zoom();
        camera.set_zoom(zoom - ZOOM_STEP);
    }
}

/// Smoothly follow the player. Scheduled only in play mode.
pub fn camera_follow(
    query: Query<&MapPosition, With<Player>>,
    mut camera: ResMut<Camera>,
) {
    if let Some(position) = query.iter().next() {
        camera.lerp_follow(position.pos, FOLLOW_FACTOR);
    }
}
