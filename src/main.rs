//! Gridbound main entry point.
//!
//! A small 2D sandbox written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A textured player sprite moves under keyboard control inside a
//! camera-followed viewport, and a wall grid can be authored in-place by
//! switching between edit and play modes.
//!
//! # Main loop
//!
//! 1. Load configuration, initialize the raylib window and the ECS world
//! 2. Load textures and the tile map (if present), spawn the player
//! 3. Run the schedule each frame:
//!    input → mode/velocity/zoom updates → movement → camera follow → render

mod components;
mod events;
mod mathutils;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::mode::observe_mode_change;
use crate::resources::camera::Camera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mode::Mode;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldtime::WorldTime;
use crate::systems::cameracontrol::{camera_follow, camera_zoom};
use crate::systems::editor::editor_controller;
use crate::systems::input::update_input_state;
use crate::systems::modecontrol::{mode_controller, mode_is_edit, mode_is_play};
use crate::systems::movement::movement;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::{WALL_TEX_KEY, render_system};
use crate::systems::time::update_world_time;

const PLAYER_TEX_KEY: &str = "character";

/// Gridbound 2D sandbox
#[derive(Parser)]
#[command(version, about = "A 2D sprite sandbox with an in-place tile editor")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tile map file loaded at startup and targeted by the F5/F9 hotkeys.
    /// Overrides the configured path.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default config: {e}");
    }
    if let Some(map) = cli.map {
        config.map_path = map;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Gridbound")
        .build();
    rl.set_target_fps(config.target_fps);

    let mut tex_store = TextureStore::new();
    for (key, path) in [
        (PLAYER_TEX_KEY, "assets/character.png"),
        (WALL_TEX_KEY, "assets/wall.png"),
    ] {
        match rl.load_texture(&thread, path) {
            Ok(texture) => tex_store.insert(key, texture),
            Err(e) => log::error!("Failed to load texture {path}: {e}"),
        }
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Mode::default());
    world.insert_resource(Camera::new(
        config.window_width as f32,
        config.window_height as f32,
    ));

    let mut grid = TileGrid::new(config.grid_width, config.grid_height, config.tile_size);
    if config.map_path.exists() {
        if let Err(e) = grid.load_from_file(&config.map_path) {
            log::error!("Failed to load {}: {e}", config.map_path.display());
        }
    }
    world.insert_resource(grid);
    world.insert_resource(tex_store);

    world.spawn((
        Player,
        MapPosition::new(
            config.window_width as f32 / 2.0,
            config.window_height as f32 / 2.0,
        ),
        RigidBody::new(config.player_speed),
        BoxCollider::centered_square(config.player_size),
        Sprite::centered_square(PLAYER_TEX_KEY, config.player_size),
    ));

    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_mode_change));
    // observers must be registered before any system triggers events
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(mode_controller.after(update_input_state));
    update.add_systems(camera_zoom.after(update_input_state));
    update.add_systems(
        player_controller
            .run_if(mode_is_play)
            .after(mode_controller),
    );
    update.add_systems(editor_controller.run_if(mode_is_edit).after(mode_controller));
    update.add_systems(movement.after(player_controller));
    update.add_systems(camera_follow.run_if(mode_is_play).after(movement));
    update.add_systems(
        render_system
            .after(camera_follow)
            .after(editor_controller),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Gridbound up, starting in play mode");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
}
