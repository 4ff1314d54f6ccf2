//! Authorable tile grid and its flat-file persistence.
//!
//! The grid is the editor's backing store and the collision surface for
//! wall tests. Dimensions and tile size are fixed at construction; cells
//! only ever hold [`Tile::Empty`] or [`Tile::Wall`].
//!
//! # File format
//!
//! ```text
//! <width> <height>
//! <row0col0> <row0col1> ... <row0col(width-1)>
//! ...
//! ```
//!
//! One header line, then `height` lines of `width` space-separated integer
//! codes (`0` empty, `1` wall). Rows iterate the Y dimension, values within
//! a row iterate X. The loader requires the header to match the grid's own
//! dimensions and never mutates the grid on any failure.

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::Vector2;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

impl Tile {
    fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Wall => 1,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }
}

/// Errors from tile-map save/load. All of them leave the grid unchanged.
#[derive(Debug, Error)]
pub enum GridFileError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("map is {found_width}x{found_height} but the grid is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
    #[error("malformed map data: {0}")]
    Malformed(String),
}

/// Fixed-size 2D grid of tiles, indexed by column/row.
///
/// World coordinates map to cells by integer division with `tile_size`;
/// out-of-bounds placement and removal are silent no-ops.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    /// Column-major: cell (x, y) lives at `x * height + y`.
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Tile at cell `(x, y)`, or `None` when out of bounds.
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            Some(self.tiles[x * self.height + y])
        } else {
            None
        }
    }

    /// True when cell `(x, y)` is in bounds and holds a wall.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.tile(x, y) == Some(Tile::Wall)
    }

    /// World-space top-left corner of cell `(x, y)`.
    ///
    /// Inverse of the coordinate mapping used by [`place_wall`]; the render
    /// system uses it so the visual and logical grids stay aligned.
    ///
    /// [`place_wall`]: Self::place_wall
    pub fn cell_origin(&self, x: usize, y: usize) -> Vector2 {
        Vector2 {
            x: x as f32 * self.tile_size,
            y: y as f32 * self.tile_size,
        }
    }

    /// Mark the cell containing world point `(x, y)` as a wall.
    pub fn place_wall(&mut self, x: f32, y: f32) {
        self.set_world(x, y, Tile::Wall);
    }

    /// Clear the cell containing world point `(x, y)`.
    pub fn remove_wall(&mut self, x: f32, y: f32) {
        self.set_world(x, y, Tile::Empty);
    }

    fn set_world(&mut self, x: f32, y: f32, tile: Tile) {
        let cell_x = (x / self.tile_size).floor();
        let cell_y = (y / self.tile_size).floor();
        // negative coordinates are out of bounds, not cell 0
        if cell_x < 0.0 || cell_y < 0.0 {
            return;
        }
        let (cell_x, cell_y) = (cell_x as usize, cell_y as usize);
        if cell_x < self.width && cell_y < self.height {
            self.tiles[cell_x * self.height + cell_y] = tile;
        }
    }

    /// Write the grid to `path` in the flat text format.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), GridFileError> {
        let path = path.as_ref();
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.width, self.height);
        for y in 0..self.height {
            let row: Vec<String> = (0..self.width)
                .map(|x| self.tiles[x * self.height + y].code().to_string())
                .collect();
            let _ = writeln!(out, "{}", row.join(" "));
        }
        std::fs::write(path, out)?;
        info!("Saved tile map to {}", path.display());
        Ok(())
    }

    /// Replace the grid contents with the map stored at `path`.
    ///
    /// The file's declared dimensions must equal this grid's. On any error
    /// (I/O, mismatched dimensions, non-integer or unknown tile codes, short
    /// or overlong data) the grid is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), GridFileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut tokens = text.split_whitespace();

        let mut read_number = |what: &str| -> Result<u32, GridFileError> {
            let token = tokens
                .next()
                .ok_or_else(|| GridFileError::Malformed(format!("missing {what}")))?;
            token
                .parse::<u32>()
                .map_err(|_| GridFileError::Malformed(format!("invalid {what}: {token:?}")))
        };

        let found_width = read_number("width")? as usize;
        let found_height = read_number("height")? as usize;
        if found_width != self.width || found_height != self.height {
            return Err(GridFileError::DimensionMismatch {
                width: self.width,
                height: self.height,
                found_width,
                found_height,
            });
        }

        // parse everything into a scratch buffer before touching the grid
        let mut tiles = vec![Tile::Empty; self.width * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                let code = read_number("tile")?;
                let tile = Tile::from_code(code).ok_or_else(|| {
                    GridFileError::Malformed(format!("unknown tile code {code} at ({x}, {y})"))
                })?;
                tiles[x * self.height + y] = tile;
            }
        }
        if tokens.next().is_some() {
            return Err(GridFileError::Malformed(
                "trailing data after tile matrix".to_string(),
            ));
        }

        self.tiles = tiles;
        info!("Loaded tile map from {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = TileGrid::new(4, 3, 20.0);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(grid.tile(x, y), Some(Tile::Empty));
            }
        }
        assert_eq!(grid.tile(4, 0), None);
        assert_eq!(grid.tile(0, 3), None);
    }

    #[test]
    fn place_wall_sets_exactly_one_cell() {
        let mut grid = TileGrid::new(3, 2, 10.0);
        grid.place_wall(5.0, 5.0);
        assert!(grid.is_wall(0, 0));
        let walls = (0..3)
            .flat_map(|x| (0..2).map(move |y| (x, y)))
            .filter(|&(x, y)| grid.is_wall(x, y))
            .count();
        assert_eq!(walls, 1);
    }

    #[test]
    fn world_to_cell_uses_floor_division() {
        let mut grid = TileGrid::new(4, 4, 20.0);
        grid.place_wall(39.9, 20.0);
        assert!(grid.is_wall(1, 1));
        assert!(!grid.is_wall(2, 1));
    }

    #[test]
    fn out_of_bounds_placement_is_ignored() {
        let mut grid = TileGrid::new(3, 2, 10.0);
        let before = grid.clone();
        grid.place_wall(31.0, 5.0);
        grid.place_wall(5.0, 21.0);
        grid.place_wall(-1.0, 5.0);
        grid.place_wall(5.0, -0.1);
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(grid.tile(x, y), before.tile(x, y));
            }
        }
    }

    #[test]
    fn remove_wall_clears_cell() {
        let mut grid = TileGrid::new(3, 2, 10.0);
        grid.place_wall(15.0, 5.0);
        assert!(grid.is_wall(1, 0));
        grid.remove_wall(15.0, 5.0);
        assert!(!grid.is_wall(1, 0));
    }

    #[test]
    fn cell_origin_inverts_placement_mapping() {
        let grid = TileGrid::new(4, 4, 20.0);
        let origin = grid.cell_origin(2, 3);
        assert_eq!(origin, Vector2 { x: 40.0, y: 60.0 });
    }

    #[test]
    fn save_writes_rows_outer_columns_inner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");

        let mut grid = TileGrid::new(3, 2, 10.0);
        grid.place_wall(5.0, 5.0);
        grid.save_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "3 2\n1 0 0\n0 0 0\n");
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");

        let mut grid = TileGrid::new(5, 4, 16.0);
        grid.place_wall(0.0, 0.0);
        grid.place_wall(70.0, 50.0);
        grid.place_wall(64.0, 48.0);
        grid.save_to_file(&path).unwrap();

        let mut loaded = TileGrid::new(5, 4, 16.0);
        loaded.load_from_file(&path).unwrap();
        for x in 0..5 {
            for y in 0..4 {
                assert_eq!(loaded.tile(x, y), grid.tile(x, y), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn load_rejects_mismatched_dimensions_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "2 2\n1 1\n1 1\n").unwrap();

        let mut grid = TileGrid::new(3, 2, 10.0);
        grid.place_wall(5.0, 5.0);
        let before = grid.clone();

        let err = grid.load_from_file(&path).unwrap_err();
        assert!(matches!(err, GridFileError::DimensionMismatch { .. }));
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(grid.tile(x, y), before.tile(x, y));
            }
        }
    }

    #[test]
    fn load_rejects_short_data_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "3 2\n1 0 0\n").unwrap();

        let mut grid = TileGrid::new(3, 2, 10.0);
        let err = grid.load_from_file(&path).unwrap_err();
        assert!(matches!(err, GridFileError::Malformed(_)));
        assert!(!grid.is_wall(0, 0));
    }

    #[test]
    fn load_rejects_non_integer_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "3 2\n1 x 0\n0 0 0\n").unwrap();

        let mut grid = TileGrid::new(3, 2, 10.0);
        let err = grid.load_from_file(&path).unwrap_err();
        assert!(matches!(err, GridFileError::Malformed(_)));
    }

    #[test]
    fn load_rejects_unknown_tile_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "2 1\n0 7\n").unwrap();

        let mut grid = TileGrid::new(2, 1, 10.0);
        let err = grid.load_from_file(&path).unwrap_err();
        assert!(matches!(err, GridFileError::Malformed(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let mut grid = TileGrid::new(2, 2, 10.0);
        let err = grid.load_from_file("/no/such/dir/map.txt").unwrap_err();
        assert!(matches!(err, GridFileError::Io(_)));
    }
}
