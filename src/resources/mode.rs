//! Application mode shared by the editor, controllers, and renderer.
//!
//! A single resource owns the edit/play split so input routing and the
//! editor can never disagree about the current mode.

use bevy_ecs::prelude::Resource;

/// Current application mode.
///
/// - `Edit`: mouse input authors the tile grid, grid lines are drawn, the
///   player controller is inactive.
/// - `Play`: keyboard drives the player and the camera follows it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Edit,
    #[default]
    Play,
}

impl Mode {
    pub fn is_edit(self) -> bool {
        matches!(self, Mode::Edit)
    }

    pub fn is_play(self) -> bool {
        matches!(self, Mode::Play)
    }
}
