//! Diagonal pattern.
//!
//! A grid rotated 45 degrees about the surface center. The generator
//! reuses the grid layout with oversized counts and doubled extents, then
//! attaches the rotation as an explicit [`Transform2D`] instead of mutating
//! a drawing context. Tiles whose transformed bounding box misses the
//! surface are discarded.

use std::f64::consts::FRAC_PI_4;

use super::{grid, LayoutFrame, PlacedTile, Transform2D};

/// Shrink factor applied with the rotation so the rotated grid still covers
/// the surface corners. Visually tuned, not derived from the geometry.
pub const DIAGONAL_SCALE: f64 = 0.7;

/// Extra tile columns/rows generated per axis so the rotation has material
/// to crop from. Visually tuned alongside [`DIAGONAL_SCALE`].
pub const DIAGONAL_OVERSAMPLE: f64 = 1.5;

pub(crate) fn generate(frame: &LayoutFrame) -> (Vec<PlacedTile>, Transform2D) {
    let expanded = LayoutFrame {
        width: frame.width * 2.0,
        height: frame.height * 2.0,
        cols: (frame.cols as f64 * DIAGONAL_OVERSAMPLE).ceil() as u32,
        rows: (frame.rows as f64 * DIAGONAL_OVERSAMPLE).ceil() as u32,
        ..*frame
    };

    let center_x = frame.width / 2.0;
    let center_y = frame.height / 2.0;
    let transform = Transform2D::translation(-center_x, -center_y)
        .then(Transform2D::scaling(DIAGONAL_SCALE, DIAGONAL_SCALE))
        .then(Transform2D::rotation(FRAC_PI_4))
        .then(Transform2D::translation(center_x, center_y));

    let tiles = grid::generate(&expanded)
        .into_iter()
        .filter(|tile| intersects_surface(tile, &transform, frame.width, frame.height))
        .collect();

    (tiles, transform)
}

/// Whether the tile's transformed bounding box overlaps the surface
fn intersects_surface(
    tile: &PlacedTile,
    transform: &Transform2D,
    width: f64,
    height: f64,
) -> bool {
    let corners = [
        transform.apply(tile.x, tile.y),
        transform.apply(tile.right(), tile.y),
        transform.apply(tile.x, tile.bottom()),
        transform.apply(tile.right(), tile.bottom()),
    ];
    let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

    max_x >= 0.0 && min_x <= width && max_y >= 0.0 && min_y <= height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> LayoutFrame {
        LayoutFrame {
            tile_length: 30.0,
            tile_width: 30.0,
            spacing: 0.2,
            width: 500.0,
            height: 400.0,
            cols: 17,
            rows: 14,
        }
    }

    #[test]
    fn test_transform_fixes_the_center() {
        let (_, transform) = generate(&frame());
        let (x, y) = transform.apply(250.0, 200.0);
        assert!((x - 250.0).abs() < 1e-9);
        assert!((y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_rotates_and_shrinks() {
        let (_, transform) = generate(&frame());
        // a point 10 cm right of center lands rotated 45 degrees at 0.7x distance
        let (x, y) = transform.apply(260.0, 200.0);
        let expected = 10.0 * DIAGONAL_SCALE * FRAC_PI_4.cos();
        assert!((x - (250.0 + expected)).abs() < 1e-9);
        assert!((y - (200.0 + expected)).abs() < 1e-9);
    }

    #[test]
    fn test_oversampled_grid_is_cropped_to_surface() {
        let f = frame();
        let (tiles, transform) = generate(&f);
        let expanded_count = (17.0_f64 * DIAGONAL_OVERSAMPLE).ceil() as usize
            * (14.0_f64 * DIAGONAL_OVERSAMPLE).ceil() as usize;

        assert!(!tiles.is_empty());
        assert!(tiles.len() < expanded_count);
        for tile in &tiles {
            assert!(intersects_surface(tile, &transform, f.width, f.height));
        }
    }

    #[test]
    fn test_far_corner_tiles_are_discarded() {
        let f = frame();
        let (tiles, _) = generate(&f);
        // the expanded grid reaches col 25; its far corner rotates well off
        // the surface
        let max_col = tiles.iter().map(|t| t.col).max().unwrap();
        let expanded_cols = (17.0_f64 * DIAGONAL_OVERSAMPLE).ceil() as i32;
        assert!(max_col < expanded_cols - 1);
    }
}
