//! Per-frame input snapshot resource.
//!
//! Captures the keyboard, mouse-button, and cursor state the game cares
//! about and exposes it to systems via [`InputState`]. Only the polling
//! system in [`crate::systems::input`] touches raylib; everything else reads
//! this resource, which keeps the controllers testable headless.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{KeyboardKey, Vector2};

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

/// Per-frame snapshot of the inputs relevant to the game.
///
/// Movement on WASD, zoom on the vertical arrows, mode switches on E/P,
/// persistence hotkeys on F5/F9, tile authoring on the mouse buttons.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub zoom_in: BoolState,
    pub zoom_out: BoolState,
    pub mode_edit: BoolState,
    pub mode_play: BoolState,
    pub save_map: BoolState,
    pub load_map: BoolState,
    /// Left mouse button held: place a wall under the cursor.
    pub place_tile: bool,
    /// Right mouse button held: clear the tile under the cursor.
    pub clear_tile: bool,
    /// Cursor position in screen pixels.
    pub cursor: Vector2,
    /// Cursor position converted through the camera into world space.
    pub cursor_world: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_W),
            move_down: BoolState::bound_to(KeyboardKey::KEY_S),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            zoom_in: BoolState::bound_to(KeyboardKey::KEY_UP),
            zoom_out: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            mode_edit: BoolState::bound_to(KeyboardKey::KEY_E),
            mode_play: BoolState::bound_to(KeyboardKey::KEY_P),
            save_map: BoolState::bound_to(KeyboardKey::KEY_F5),
            load_map: BoolState::bound_to(KeyboardKey::KEY_F9),
            place_tile: false,
            clear_tile: false,
            cursor: Vector2 { x: 0.0, y: 0.0 },
            cursor_world: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
