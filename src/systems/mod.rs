//! Engine systems.
//!
//! Submodules overview
//! - [`cameracontrol`] – zoom nudging and smooth player follow
//! - [`collision`] – stateless AABB and wall-grid overlap tests
//! - [`editor`] – route mouse/hotkey input to the tile grid in edit mode
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`modecontrol`] – edit/play switching and mode run conditions
//! - [`movement`] – integrate positions, rejecting motion into walls
//! - [`playercontroller`] – translate WASD input into player velocity
//! - [`render`] – draw world and HUD using raylib
//! - [`time`] – update simulation time and delta

pub mod cameracontrol;
pub mod collision;
pub mod editor;
pub mod input;
pub mod modecontrol;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
