//! # Placement Geometry
//!
//! Turns a validated [`CalculationInput`] into the 2-D tile placement a
//! renderer draws. Generators return data only (a sequence of
//! [`PlacedTile`] rectangles plus an affine [`Transform2D`]) and never
//! touch a drawing surface; color, stroke, and export concerns belong to
//! the rendering collaborator.
//!
//! All geometry is computed in centimeter room coordinates and mapped onto
//! the caller's canvas with a per-axis scale at the end, so the same
//! generators also back the whole-tile tally in [`crate::calculations`].
//!
//! ## Example
//!
//! ```rust
//! use tile_core::calculations::{CalculationInput, Pattern};
//! use tile_core::layout::generate_placement;
//!
//! let input = CalculationInput {
//!     room_length_m: 5.0,
//!     room_width_m: 4.0,
//!     tile_length_cm: 30.0,
//!     tile_width_cm: 30.0,
//!     spacing_mm: 2.0,
//!     pattern: Pattern::Grid,
//! };
//!
//! let placement = generate_placement(&input, 800.0, 640.0).unwrap();
//! assert_eq!(placement.tiles.len(), 17 * 14);
//! ```

mod brick;
mod diagonal;
mod grid;
mod herringbone;
pub mod transform;

use serde::{Deserialize, Serialize};

use crate::calculations::tiles::{self, Derived};
use crate::calculations::{CalculationInput, Pattern};
use crate::errors::{TileError, TileResult};

pub use diagonal::{DIAGONAL_OVERSAMPLE, DIAGONAL_SCALE};
pub use transform::Transform2D;

/// Tolerance for containment checks at float boundaries (centimeters)
const CONTAINMENT_EPS: f64 = 1e-6;

/// How a placed tile relates to the room boundary.
///
/// Edge and corner tiles are the ones assumed cut to fit during
/// installation; renderers conventionally tint them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileClass {
    /// Fully interior, laid uncut
    Whole,
    /// Touches exactly one room boundary
    Edge,
    /// Touches both a length-edge and a width-edge
    Corner,
}

/// One tile rectangle in layout units.
///
/// `col`/`row` are the pattern-specific cell index (brick and herringbone
/// iterate from -1 to cover offset rows). Positions are pre-transform: a
/// renderer applies the owning [`Placement::transform`] to every rectangle.
/// Derived data: regenerated for every render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub col: i32,
    pub row: i32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: TileClass,
}

impl PlacedTile {
    /// Right edge (`x + width`)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the rectangle lies entirely within `[0, width] x [0, height]`
    pub fn contained_in(&self, width: f64, height: f64) -> bool {
        self.x >= -CONTAINMENT_EPS
            && self.y >= -CONTAINMENT_EPS
            && self.right() <= width + CONTAINMENT_EPS
            && self.bottom() <= height + CONTAINMENT_EPS
    }

    /// Whether two rectangles share interior area
    pub fn overlaps(&self, other: &PlacedTile) -> bool {
        self.x + CONTAINMENT_EPS < other.right()
            && other.x + CONTAINMENT_EPS < self.right()
            && self.y + CONTAINMENT_EPS < other.bottom()
            && other.y + CONTAINMENT_EPS < self.bottom()
    }
}

/// Tile counts by boundary classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassCounts {
    pub whole: usize,
    pub edge: usize,
    pub corner: usize,
}

/// A full placement: tile rectangles plus the transform a renderer applies
/// to each of them (identity for every pattern except diagonal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub tiles: Vec<PlacedTile>,
    pub transform: Transform2D,
}

impl Placement {
    /// Tally tiles by classification
    pub fn class_counts(&self) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for tile in &self.tiles {
            match tile.class {
                TileClass::Whole => counts.whole += 1,
                TileClass::Edge => counts.edge += 1,
                TileClass::Corner => counts.corner += 1,
            }
        }
        counts
    }
}

/// Layout surface and tile dimensions in one unit system (centimeters when
/// counting, since the surface is the room itself).
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutFrame {
    /// Tile extent along x
    pub tile_length: f64,
    /// Tile extent along y
    pub tile_width: f64,
    /// Grout spacing
    pub spacing: f64,
    /// Surface extent along x
    pub width: f64,
    /// Surface extent along y
    pub height: f64,
    /// Pitch-based column count
    pub cols: u32,
    /// Pitch-based row count
    pub rows: u32,
}

impl LayoutFrame {
    fn from_derived(derived: &Derived) -> Self {
        LayoutFrame {
            tile_length: derived.tile_length_cm,
            tile_width: derived.tile_width_cm,
            spacing: derived.spacing_cm,
            width: derived.room_length_cm,
            height: derived.room_width_cm,
            cols: derived.tiles_along_length,
            rows: derived.tiles_along_width,
        }
    }
}

/// Classify a tile by where its rectangle sits relative to the surface
/// bounds. Used by the offset patterns (brick, herringbone), whose row
/// shifts break the index-to-position mapping the grid rule relies on.
pub(crate) fn classify_by_position(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    frame: &LayoutFrame,
) -> TileClass {
    let left = x < frame.spacing;
    let right = x + width > frame.width - frame.spacing;
    let top = y < frame.spacing;
    let bottom = y + height > frame.height - frame.spacing;
    class_from_edges(left, right, top, bottom)
}

pub(crate) fn class_from_edges(left: bool, right: bool, top: bool, bottom: bool) -> TileClass {
    if (left || right) && (top || bottom) {
        TileClass::Corner
    } else if left || right || top || bottom {
        TileClass::Edge
    } else {
        TileClass::Whole
    }
}

/// Generate the tile placement for a canvas of the given pixel size.
///
/// Validates the input and canvas extents, derives the pitch-based counts,
/// lays the pattern out in centimeter room coordinates, and maps the result
/// onto the canvas with a per-axis scale. Every returned tile is at least
/// partially within the canvas (after applying [`Placement::transform`] for
/// the diagonal pattern); fully out-of-bounds tiles are discarded.
///
/// # Errors
///
/// * `TileError::InvalidInput` - invalid dimensions or non-positive canvas
/// * `TileError::TooManyTiles` - derived count exceeds the safety ceiling
pub fn generate_placement(
    input: &CalculationInput,
    canvas_width: f64,
    canvas_height: f64,
) -> TileResult<Placement> {
    input.validate()?;
    if !canvas_width.is_finite() || canvas_width <= 0.0 {
        return Err(TileError::invalid_input(
            "canvas_width",
            canvas_width.to_string(),
            "Canvas width must be a positive number of pixels",
        ));
    }
    if !canvas_height.is_finite() || canvas_height <= 0.0 {
        return Err(TileError::invalid_input(
            "canvas_height",
            canvas_height.to_string(),
            "Canvas height must be a positive number of pixels",
        ));
    }

    let derived = tiles::derive(input)?;
    let frame = LayoutFrame::from_derived(&derived);

    let (room_tiles, room_transform) = match input.pattern {
        Pattern::Grid => (grid::generate(&frame), Transform2D::IDENTITY),
        Pattern::Brick => (brick::generate(&frame), Transform2D::IDENTITY),
        Pattern::Herringbone => (herringbone::generate(&frame), Transform2D::IDENTITY),
        Pattern::Diagonal => diagonal::generate(&frame),
    };

    // Map centimeter room coordinates onto the canvas.
    let sx = canvas_width / frame.width;
    let sy = canvas_height / frame.height;
    let tiles = room_tiles
        .into_iter()
        .map(|mut tile| {
            tile.x *= sx;
            tile.y *= sy;
            tile.width *= sx;
            tile.height *= sy;
            tile
        })
        .collect();

    // Conjugate the room-space transform by the scale so it acts on canvas
    // coordinates: T_canvas = S . T_room . S^-1.
    let transform = if room_transform.is_identity() {
        Transform2D::IDENTITY
    } else {
        Transform2D::scaling(1.0 / sx, 1.0 / sy)
            .then(room_transform)
            .then(Transform2D::scaling(sx, sy))
    };

    Ok(Placement { tiles, transform })
}

/// Count tiles whose rectangle lies entirely within the room boundary.
///
/// Runs the pattern's generator over the room extents in centimeters. The
/// diagonal pattern uses the grid tally: its rotation is presentation-only
/// and does not change how many tiles must be cut.
pub(crate) fn whole_tile_count(derived: &Derived, pattern: Pattern) -> u32 {
    let frame = LayoutFrame::from_derived(derived);
    let room_tiles = match pattern {
        Pattern::Grid | Pattern::Diagonal => grid::generate(&frame),
        Pattern::Brick => brick::generate(&frame),
        Pattern::Herringbone => herringbone::generate(&frame),
    };
    room_tiles
        .iter()
        .filter(|tile| tile.contained_in(frame.width, frame.height))
        .count() as u32
}

/// Fit a canvas to the room's aspect ratio within the given maximum size.
/// Layout views use this so the preview is never distorted.
pub fn fit_canvas(
    room_length_m: f64,
    room_width_m: f64,
    max_width: f64,
    max_height: f64,
) -> (f64, f64) {
    let aspect = room_length_m / room_width_m;
    if aspect > max_width / max_height {
        (max_width, max_width / aspect)
    } else {
        (max_height * aspect, max_height)
    }
}
