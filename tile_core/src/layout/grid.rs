//! Axis-aligned grid pattern.
//!
//! Tile (i, j) sits at `(i * pitch_x, j * pitch_y)` where pitch is the tile
//! dimension plus the grout spacing. Classification is index-based: tiles
//! in the first/last column or row meet the room boundary, so they are
//! tallied as cut even when the room is an exact multiple of the pitch.

use super::{class_from_edges, LayoutFrame, PlacedTile};

/// Lay out `frame.cols x frame.rows` tiles on the grid.
///
/// Every generated tile starts inside the surface (the column count is the
/// ceiling of surface extent over pitch), so nothing is discarded here.
pub(crate) fn generate(frame: &LayoutFrame) -> Vec<PlacedTile> {
    let pitch_x = frame.tile_length + frame.spacing;
    let pitch_y = frame.tile_width + frame.spacing;

    let mut tiles = Vec::with_capacity(frame.cols as usize * frame.rows as usize);
    for i in 0..frame.cols {
        for j in 0..frame.rows {
            let left = i == 0;
            let right = i == frame.cols - 1;
            let top = j == 0;
            let bottom = j == frame.rows - 1;

            tiles.push(PlacedTile {
                col: i as i32,
                row: j as i32,
                x: i as f64 * pitch_x,
                y: j as f64 * pitch_y,
                width: frame.tile_length,
                height: frame.tile_width,
                class: class_from_edges(left, right, top, bottom),
            });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TileClass;

    fn frame(cols: u32, rows: u32) -> LayoutFrame {
        LayoutFrame {
            tile_length: 30.0,
            tile_width: 30.0,
            spacing: 0.2,
            width: cols as f64 * 30.2,
            height: rows as f64 * 30.2,
            cols,
            rows,
        }
    }

    #[test]
    fn test_tile_positions_step_by_pitch() {
        let tiles = generate(&frame(4, 3));
        assert_eq!(tiles.len(), 12);
        for tile in &tiles {
            assert_eq!(tile.x, tile.col as f64 * 30.2);
            assert_eq!(tile.y, tile.row as f64 * 30.2);
            assert_eq!(tile.width, 30.0);
            assert_eq!(tile.height, 30.0);
        }
    }

    #[test]
    fn test_interior_tiles_are_whole() {
        let tiles = generate(&frame(4, 4));
        let interior: Vec<_> = tiles
            .iter()
            .filter(|t| t.col == 1 && t.row == 2)
            .collect();
        assert_eq!(interior[0].class, TileClass::Whole);
    }

    #[test]
    fn test_boundary_classification() {
        let tiles = generate(&frame(3, 3));
        let class_at = |col, row| {
            tiles
                .iter()
                .find(|t| t.col == col && t.row == row)
                .unwrap()
                .class
        };
        assert_eq!(class_at(0, 0), TileClass::Corner);
        assert_eq!(class_at(2, 2), TileClass::Corner);
        assert_eq!(class_at(1, 0), TileClass::Edge);
        assert_eq!(class_at(0, 1), TileClass::Edge);
        assert_eq!(class_at(1, 1), TileClass::Whole);
    }

    #[test]
    fn test_single_column_is_all_corner() {
        // a tile that spans the room is both left and right edge at once
        let tiles = generate(&frame(1, 1));
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].class, TileClass::Corner);
    }

    #[test]
    fn test_single_row_classification() {
        let tiles = generate(&frame(3, 1));
        // every tile touches top and bottom; the ends touch a side too
        let class_at = |col| tiles.iter().find(|t| t.col == col).unwrap().class;
        assert_eq!(class_at(0), TileClass::Corner);
        assert_eq!(class_at(1), TileClass::Edge);
        assert_eq!(class_at(2), TileClass::Corner);
    }
}
