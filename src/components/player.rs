use bevy_ecs::prelude::Component;

/// Marker for the entity driven by keyboard input and followed by the camera.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;
