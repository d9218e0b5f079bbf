//! Herringbone pattern.
//!
//! The repeating unit is an L-shaped pair: one tile upright, one rotated
//! 90 degrees beside it. The unit cell spans `tile_length + tile_width +
//! 2 * spacing` in each axis. The unit grid runs from -1 through the cell
//! count inclusive so the boundary rows are covered; tiles entirely outside
//! the surface are discarded before classification.

use super::{classify_by_position, LayoutFrame, PlacedTile};

pub(crate) fn generate(frame: &LayoutFrame) -> Vec<PlacedTile> {
    let unit = frame.tile_length + frame.tile_width + 2.0 * frame.spacing;
    let units_x = (frame.width / unit).ceil() as i32;
    let units_y = (frame.height / unit).ceil() as i32;

    let mut tiles = Vec::new();
    for i in -1..=units_x {
        for j in -1..=units_y {
            let base_x = i as f64 * unit;
            let base_y = j as f64 * unit;

            // Upright tile at the unit origin
            push_tile(
                &mut tiles,
                frame,
                i,
                j,
                base_x,
                base_y,
                frame.tile_width,
                frame.tile_length,
            );

            // Rotated tile beside it
            push_tile(
                &mut tiles,
                frame,
                i,
                j,
                base_x + frame.tile_width + frame.spacing,
                base_y,
                frame.tile_length,
                frame.tile_width,
            );
        }
    }
    tiles
}

#[allow(clippy::too_many_arguments)]
fn push_tile(
    tiles: &mut Vec<PlacedTile>,
    frame: &LayoutFrame,
    col: i32,
    row: i32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    // Skip tiles completely outside the surface
    if x + width < 0.0 || x > frame.width || y + height < 0.0 || y > frame.height {
        return;
    }

    tiles.push(PlacedTile {
        col,
        row,
        x,
        y,
        width,
        height,
        class: classify_by_position(x, y, width, height, frame),
    });
}
