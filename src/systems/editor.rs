//! Tile authoring system.
//!
//! Routes mouse and hotkey input to the [`TileGrid`] while the application
//! is in edit mode: left button places a wall under the cursor, right
//! button clears it, F5/F9 save and load the configured map file. The grid
//! itself is not mode-gated; this system is the only edit path and is
//! scheduled with the edit-mode run condition.

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::tilegrid::TileGrid;

/// Apply cursor edits and persistence hotkeys to the grid.
pub fn editor_controller(
    input: Res<InputState>,
    mut grid: ResMut<TileGrid>,
    config: Res<GameConfig>,
) {
    if input.place_tile {
        grid.place_wall(input.cursor_world.x, input.cursor_world.y);
    }
    if input.clear_tile {
        grid.remove_wall(input.cursor_world.x, input.cursor_world.y);
    }

    if input.save_map.just_pressed {
        match grid.save_to_file(&config.map_path) {
            Ok(()) => {}
            Err(e) => error!("Failed to save {}: {e}", config.map_path.display()),
        }
    }
    if input.load_map.just_pressed {
        match grid.load_from_file(&config.map_path) {
            Ok(()) => info!("Reloaded map, grid replaced"),
            Err(e) => error!("Failed to load {}: {e}", config.map_path.display()),
        }
    }
}
