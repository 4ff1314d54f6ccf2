use bevy_ecs::prelude::Resource;

/// Simulation clock updated once per frame.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds covered by the current frame.
    pub delta: f32,
    /// Multiplier applied to the raw frame delta.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
