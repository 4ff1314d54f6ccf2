//! Input polling system.
//!
//! Reads hardware input from raylib once per frame and writes the results
//! into [`InputState`]. This is the only per-frame system that touches the
//! raylib handle for input; controllers downstream consume the snapshot.

use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::camera::Camera;
use crate::resources::input::{BoolState, InputState};

fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
}

/// Poll raylib for keyboard, mouse, and cursor state.
///
/// The cursor is also converted to world space through the camera so the
/// editor can place tiles under the pointer regardless of pan and zoom.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    camera: Res<Camera>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    poll(&mut input.move_up, &rl);
    poll(&mut input.move_down, &rl);
    poll(&mut input.move_left, &rl);
    poll(&mut input.move_right, &rl);
    poll(&mut input.zoom_in, &rl);
    poll(&mut input.zoom_out, &rl);
    poll(&mut input.mode_edit, &rl);
    poll(&mut input.mode_play, &rl);
    poll(&mut input.save_map, &rl);
    poll(&mut input.load_map, &rl);

    input.place_tile = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    input.clear_tile = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT);
    input.cursor = rl.get_mouse_position();
    input.cursor_world = camera.screen_to_world(input.cursor);
}
