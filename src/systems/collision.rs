//! AABB overlap tests against pairs of rectangles and the wall grid.
//!
//! Stateless helpers used by the movement system to keep entities out of
//! walls. Rectangles are given by their top-left corner and extents.

use raylib::prelude::Vector2;

use crate::resources::tilegrid::TileGrid;

/// True iff the two rectangles overlap on both axes.
///
/// Strict inequalities: rectangles that merely touch at an edge or corner do
/// not collide.
pub fn check_aabb_collision(
    pos_a: Vector2,
    size_a: Vector2,
    pos_b: Vector2,
    size_b: Vector2,
) -> bool {
    pos_a.x + size_a.x > pos_b.x
        && pos_b.x + size_b.x > pos_a.x
        && pos_a.y + size_a.y > pos_b.y
        && pos_b.y + size_b.y > pos_a.y
}

/// True iff the rectangle at `pos` with `size` overlaps any wall cell.
///
/// Scans the whole grid column-major and stops at the first overlap. Linear
/// in the cell count, which is fine for the editor-sized grids this engine
/// targets.
pub fn colliding_with_walls(pos: Vector2, size: Vector2, grid: &TileGrid) -> bool {
    let tile = Vector2 {
        x: grid.tile_size(),
        y: grid.tile_size(),
    };
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.is_wall(x, y) && check_aabb_collision(pos, size, grid.cell_origin(x, y), tile) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn overlapping_rectangles_collide() {
        assert!(check_aabb_collision(
            v(0.0, 0.0),
            v(10.0, 10.0),
            v(9.0, 9.0),
            v(10.0, 10.0)
        ));
    }

    #[test]
    fn adjacent_rectangles_do_not_collide() {
        // shared vertical edge
        assert!(!check_aabb_collision(
            v(0.0, 0.0),
            v(10.0, 10.0),
            v(10.0, 0.0),
            v(10.0, 10.0)
        ));
        // shared horizontal edge
        assert!(!check_aabb_collision(
            v(0.0, 0.0),
            v(10.0, 10.0),
            v(0.0, 10.0),
            v(10.0, 10.0)
        ));
    }

    #[test]
    fn containment_counts_as_collision() {
        assert!(check_aabb_collision(
            v(0.0, 0.0),
            v(100.0, 100.0),
            v(40.0, 40.0),
            v(10.0, 10.0)
        ));
    }

    #[test]
    fn query_inside_wall_cell_hits() {
        let mut grid = TileGrid::new(4, 4, 20.0);
        grid.place_wall(30.0, 30.0); // cell (1, 1) spans [20,40)x[20,40)
        assert!(colliding_with_walls(v(25.0, 25.0), v(5.0, 5.0), &grid));
    }

    #[test]
    fn query_in_adjacent_empty_cell_misses() {
        let mut grid = TileGrid::new(4, 4, 20.0);
        grid.place_wall(30.0, 30.0);
        // fully inside the empty cell (2, 1)
        assert!(!colliding_with_walls(v(45.0, 25.0), v(10.0, 10.0), &grid));
        // flush against the wall's right edge: strict inequality, no hit
        assert!(!colliding_with_walls(v(40.0, 20.0), v(10.0, 10.0), &grid));
    }

    #[test]
    fn empty_grid_never_collides() {
        let grid = TileGrid::new(4, 4, 20.0);
        assert!(!colliding_with_walls(v(0.0, 0.0), v(80.0, 80.0), &grid));
    }
}
