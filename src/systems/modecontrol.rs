//! Mode switching and the run conditions derived from the mode.

use bevy_ecs::prelude::*;

use crate::events::mode::ModeChangedEvent;
use crate::resources::input::InputState;
use crate::resources::mode::Mode;

/// Switch between edit and play on the E/P keys.
///
/// Only an actual change triggers a [`ModeChangedEvent`]; holding the key of
/// the current mode is a no-op.
pub fn mode_controller(
    input: Res<InputState>,
    mut mode: ResMut<Mode>,
    mut commands: Commands,
) {
    let requested = if input.mode_edit.just_pressed {
        Some(Mode::Edit)
    } else if input.mode_play.just_pressed {
        Some(Mode::Play)
    } else {
        None
    };

    if let Some(next) = requested
        && next != *mode
    {
        let from = *mode;
        *mode = next;
        commands.trigger(ModeChangedEvent { from, to: next });
    }
}

/// Run condition: the application is in play mode.
pub fn mode_is_play(mode: Res<Mode>) -> bool {
    mode.is_play()
}

/// Run condition: the application is in edit mode.
pub fn mode_is_edit(mode: Res<Mode>) -> bool {
    mode.is_edit()
}
