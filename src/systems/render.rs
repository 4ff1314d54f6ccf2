//! Draw the world and HUD with raylib.
//!
//! Exclusive system: it temporarily takes the raylib handle and thread out
//! of the world, renders inside the drawing scopes, and puts them back.
//! Everything inside `begin_mode2D` is drawn in camera space using the
//! [`Camera`] resource's raylib bridge; the HUD is drawn in screen space.
//!
//! Missing textures degrade to flat-colored shapes so a failed asset load
//! never draws garbage.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::camera::Camera;
use crate::resources::mode::Mode;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilegrid::TileGrid;

/// Texture key the tile pass looks up for wall cells.
pub const WALL_TEX_KEY: &str = "wall";

const BACKGROUND: Color = Color::new(51, 77, 77, 255);
const GRID_LINE: Color = Color::new(204, 204, 204, 255);
const WALL_FALLBACK: Color = Color::GRAY;
const SPRITE_FALLBACK: Color = Color::MAROON;

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let camera = *world.resource::<Camera>();
    let mode = *world.resource::<Mode>();

    // collect sprites first, the texture store is borrowed during drawing
    let sprites: Vec<(Sprite, MapPosition)> = {
        let mut query = world.query::<(&Sprite, &MapPosition)>();
        query
            .iter(world)
            .map(|(sprite, position)| (sprite.clone(), *position))
            .collect()
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);

        {
            let mut d2 = d.begin_mode2D(camera.to_camera2d());
            let grid = world.resource::<TileGrid>();
            let textures = world.resource::<TextureStore>();

            draw_walls(&mut d2, grid, textures);
            if mode.is_edit() {
                draw_grid_lines(&mut d2, grid);
            }
            for (sprite, position) in &sprites {
                draw_sprite(&mut d2, textures, sprite, position);
            }
        }

        let label = match mode {
            Mode::Edit => "EDIT (P to play)",
            Mode::Play => "PLAY (E to edit)",
        };
        d.draw_text(label, 10, 10, 20, Color::RAYWHITE);
        let zoom = format!("zoom {:.2}", camera.zoom());
        d.draw_text(&zoom, 10, 34, 10, Color::RAYWHITE);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw every wall cell, textured when the wall texture loaded.
fn draw_walls(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    grid: &TileGrid,
    textures: &TextureStore,
) {
    let tile_size = grid.tile_size();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if !grid.is_wall(x, y) {
                continue;
            }
            let origin = grid.cell_origin(x, y);
            match textures.get(WALL_TEX_KEY) {
                Some(tex) => {
                    let src = Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: tex.width as f32,
                        height: tex.height as f32,
                    };
                    let dest = Rectangle {
                        x: origin.x,
                        y: origin.y,
                        width: tile_size,
                        height: tile_size,
                    };
                    d2.draw_texture_pro(
                        tex,
                        src,
                        dest,
                        Vector2 { x: 0.0, y: 0.0 },
                        0.0,
                        Color::WHITE,
                    );
                }
                None => {
                    d2.draw_rectangle(
                        origin.x as i32,
                        origin.y as i32,
                        tile_size as i32,
                        tile_size as i32,
                        WALL_FALLBACK,
                    );
                }
            }
        }
    }
}

/// Draw the cell boundaries, edit mode only.
fn draw_grid_lines(d2: &mut RaylibMode2D<RaylibDrawHandle>, grid: &TileGrid) {
    let tile_size = grid.tile_size();
    let span_x = grid.width() as f32 * tile_size;
    let span_y = grid.height() as f32 * tile_size;
    for x in 0..=grid.width() {
        let wx = x as f32 * tile_size;
        d2.draw_line_v(
            Vector2 { x: wx, y: 0.0 },
            Vector2 { x: wx, y: span_y },
            GRID_LINE,
        );
    }
    for y in 0..=grid.height() {
        let wy = y as f32 * tile_size;
        d2.draw_line_v(
            Vector2 { x: 0.0, y: wy },
            Vector2 { x: span_x, y: wy },
            GRID_LINE,
        );
    }
}

/// Draw one sprite with its pivot at the entity position.
fn draw_sprite(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    textures: &TextureStore,
    sprite: &Sprite,
    position: &MapPosition,
) {
    match textures.get(&sprite.tex_key) {
        Some(tex) => {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
        }
        None => {
            d2.draw_rectangle(
                (position.pos.x - sprite.origin.x) as i32,
                (position.pos.y - sprite.origin.y) as i32,
                sprite.width as i32,
                sprite.height as i32,
                SPRITE_FALLBACK,
            );
        }
    }
}
