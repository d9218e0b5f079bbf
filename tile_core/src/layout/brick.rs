//! Brick (running bond) pattern.
//!
//! Every other row is offset by half the length pitch. The column index
//! starts at -1 so offset rows still reach the left boundary; tiles whose
//! rectangle falls entirely outside the surface are discarded.
//! Classification is position-based on all four boundaries, since the row
//! offset breaks the index-to-position mapping the grid rule uses.

use super::{classify_by_position, LayoutFrame, PlacedTile};

pub(crate) fn generate(frame: &LayoutFrame) -> Vec<PlacedTile> {
    let pitch_x = frame.tile_length + frame.spacing;
    let pitch_y = frame.tile_width + frame.spacing;

    let mut tiles = Vec::new();
    for j in 0..frame.rows {
        let row_offset = if j % 2 == 0 { 0.0 } else { pitch_x / 2.0 };
        let y = j as f64 * pitch_y;

        for i in -1..frame.cols as i32 {
            let x = row_offset + i as f64 * pitch_x;

            // Skip tiles completely outside the surface
            if x + frame.tile_length < 0.0 || x > frame.width {
                continue;
            }

            tiles.push(PlacedTile {
                col: i,
                row: j as i32,
                x,
                y,
                width: frame.tile_length,
                height: frame.tile_width,
                class: classify_by_position(x, y, frame.tile_length, frame.tile_width, frame),
            });
        }
    }
    tiles
}
