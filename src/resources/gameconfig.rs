//! Game configuration resource.
//!
//! Settings loaded from an INI file with safe defaults: an 800x600 window
//! over a 40x30 grid of 20 px tiles and a 200 units/s player.
//!
//! # Configuration file format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 120
//!
//! [grid]
//! width = 40
//! height = 30
//! tile_size = 20.0
//!
//! [player]
//! speed = 200.0
//! size = 100.0
//!
//! [map]
//! path = ./map.txt
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_GRID_WIDTH: usize = 40;
const DEFAULT_GRID_HEIGHT: usize = 30;
const DEFAULT_TILE_SIZE: f32 = 20.0;
const DEFAULT_PLAYER_SPEED: f32 = 200.0;
const DEFAULT_PLAYER_SIZE: f32 = 100.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_MAP_PATH: &str = "./map.txt";

/// Window, grid, and player settings.
///
/// Values not present in the INI file keep their defaults; a missing file is
/// not an error.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Grid width in tiles.
    pub grid_width: usize,
    /// Grid height in tiles.
    pub grid_height: usize,
    /// Tile edge length in world units.
    pub tile_size: f32,
    /// Player movement speed in world units per second.
    pub player_speed: f32,
    /// Player sprite/collider edge length in world units.
    pub player_size: f32,
    /// Tile map file used by startup load and the save/load hotkeys.
    pub map_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_size: DEFAULT_PLAYER_SIZE,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration that reads from a custom INI path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [grid] section
        if let Some(width) = config.getuint("grid", "width").ok().flatten() {
            self.grid_width = width as usize;
        }
        if let Some(height) = config.getuint("grid", "height").ok().flatten() {
            self.grid_height = height as usize;
        }
        if let Some(size) = config.getfloat("grid", "tile_size").ok().flatten() {
            self.tile_size = size as f32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(size) = config.getfloat("player", "size").ok().flatten() {
            self.player_size = size as f32;
        }

        // [map] section
        if let Some(path) = config.get("map", "path") {
            self.map_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, {}x{} grid of {} px tiles, map {}",
            self.window_width,
            self.window_height,
            self.grid_width,
            self.grid_height,
            self.tile_size,
            self.map_path.display()
        );

        Ok(())
    }
}
