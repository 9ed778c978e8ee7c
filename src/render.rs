//! Canvas renderer.
//!
//! The whole surface is repainted every tick: background fill, then the food
//! and every snake segment as a faux-3D cube. Each cube is a front square
//! plus two sheared faces suggesting a light source to the upper right.

use crate::game::{Game, TILE_COUNT};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub const CANVAS_PX: f64 = 400.0;
pub const TILE_PX: f64 = CANVAS_PX / TILE_COUNT as f64;
const CUBE_DEPTH: f64 = 5.0;

const BACKGROUND: &str = "#1d2021";

/// Colors for the three visible faces of one cube.
pub struct CubePalette {
    pub front: &'static str,
    pub top: &'static str,
    pub side: &'static str,
}

pub const HEAD: CubePalette = CubePalette {
    front: "#689d6a",
    top: "#8ec07c",
    side: "#427b58",
};

pub const BODY: CubePalette = CubePalette {
    front: "#98971a",
    top: "#b8bb26",
    side: "#79740e",
};

pub const FOOD: CubePalette = CubePalette {
    front: "#cc241d",
    top: "#fb4934",
    side: "#9d0006",
};

/// Draws one cube with its front face's top-left corner at `(px, py)`.
/// Stateless; callable per cube in any order.
pub fn draw_cube(ctx: &CanvasRenderingContext2d, px: f64, py: f64, palette: &CubePalette) {
    // Front face.
    ctx.set_fill_style(&JsValue::from_str(palette.front));
    ctx.fill_rect(px, py, TILE_PX, TILE_PX);

    // Top face, sheared up-right by the cube depth.
    ctx.set_fill_style(&JsValue::from_str(palette.top));
    ctx.begin_path();
    ctx.move_to(px, py);
    ctx.line_to(px + CUBE_DEPTH, py - CUBE_DEPTH);
    ctx.line_to(px + TILE_PX + CUBE_DEPTH, py - CUBE_DEPTH);
    ctx.line_to(px + TILE_PX, py);
    ctx.close_path();
    ctx.fill();

    // Right side face.
    ctx.set_fill_style(&JsValue::from_str(palette.side));
    ctx.begin_path();
    ctx.move_to(px + TILE_PX, py);
    ctx.line_to(px + TILE_PX + CUBE_DEPTH, py - CUBE_DEPTH);
    ctx.line_to(px + TILE_PX + CUBE_DEPTH, py + TILE_PX - CUBE_DEPTH);
    ctx.line_to(px + TILE_PX, py + TILE_PX);
    ctx.close_path();
    ctx.fill();
}

/// Full repaint of the current state. No dirty-rect tracking; the grid is
/// small enough that clearing and redrawing everything per tick is cheap.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, game: &Game) {
    ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
    ctx.fill_rect(0.0, 0.0, CANVAS_PX, CANVAS_PX);

    draw_cube(
        ctx,
        game.food.x as f64 * TILE_PX,
        game.food.y as f64 * TILE_PX,
        &FOOD,
    );

    for (i, cell) in game.snake.iter().enumerate() {
        let palette = if i == 0 { &HEAD } else { &BODY };
        draw_cube(ctx, cell.x as f64 * TILE_PX, cell.y as f64 * TILE_PX, palette);
    }
}
