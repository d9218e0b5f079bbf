//! # Tile Count Calculation
//!
//! Converts room, tile, and grout-spacing dimensions into the integer tile
//! counts an installer orders: whole tiles, cut tiles, and the total with a
//! fixed 10% waste allowance.
//!
//! ## Units
//!
//! Rooms are measured in meters, tiles in centimeters, grout spacing in
//! millimeters; everything is converted to centimeters internally. The
//! repeat distance between adjacent tile origins (the *pitch*) is the tile
//! dimension plus the spacing.
//!
//! ## Example
//!
//! ```rust
//! use tile_core::calculations::{calculate, CalculationInput, Pattern};
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
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.tiles_needed, 238);
//! assert_eq!(result.total_tiles_with_waste, 262);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TileError, TileResult};
use crate::units::{Centimeters, Meters, Millimeters};

use super::Pattern;

/// Safety ceiling on any derived tile count.
///
/// Degenerate input (a near-zero tile in a large room) would otherwise send
/// the placement loops into the millions; the counter rejects it up front
/// with [`TileError::TooManyTiles`].
pub const MAX_TILE_COUNT: u64 = 100_000;

/// Input parameters for a tile calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "room_length_m": 5.0,
///   "room_width_m": 4.0,
///   "tile_length_cm": 30.0,
///   "tile_width_cm": 30.0,
///   "spacing_mm": 2.0,
///   "pattern": "grid"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Room length in meters
    pub room_length_m: f64,

    /// Room width in meters
    pub room_width_m: f64,

    /// Tile length in centimeters
    pub tile_length_cm: f64,

    /// Tile width in centimeters
    pub tile_width_cm: f64,

    /// Grout spacing between tiles in millimeters (zero for butt joints)
    pub spacing_mm: f64,

    /// Laying pattern
    pub pattern: Pattern,
}

impl CalculationInput {
    /// Validate input parameters.
    ///
    /// Every dimension must be a finite, strictly positive number except
    /// the grout spacing, which may be zero. Rejection happens before any
    /// computation; no partial results are ever produced.
    pub fn validate(&self) -> TileResult<()> {
        if !self.room_length_m.is_finite() || self.room_length_m <= 0.0 {
            return Err(TileError::invalid_input(
                "room_length_m",
                self.room_length_m.to_string(),
                "Room length must be a positive number of meters",
            ));
        }
        if !self.room_width_m.is_finite() || self.room_width_m <= 0.0 {
            return Err(TileError::invalid_input(
                "room_width_m",
                self.room_width_m.to_string(),
                "Room width must be a positive number of meters",
            ));
        }
        if !self.tile_length_cm.is_finite() || self.tile_length_cm <= 0.0 {
            return Err(TileError::invalid_input(
                "tile_length_cm",
                self.tile_length_cm.to_string(),
                "Tile length must be a positive number of centimeters",
            ));
        }
        if !self.tile_width_cm.is_finite() || self.tile_width_cm <= 0.0 {
            return Err(TileError::invalid_input(
                "tile_width_cm",
                self.tile_width_cm.to_string(),
                "Tile width must be a positive number of centimeters",
            ));
        }
        if !self.spacing_mm.is_finite() || self.spacing_mm < 0.0 {
            return Err(TileError::invalid_input(
                "spacing_mm",
                self.spacing_mm.to_string(),
                "Spacing cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Dimensions and counts derived from a validated input, all in centimeters.
///
/// Shared between the counter and the placement generators so both sides
/// agree on pitch and axis counts.
#[derive(Debug, Clone)]
pub(crate) struct Derived {
    pub room_length_cm: f64,
    pub room_width_cm: f64,
    pub tile_length_cm: f64,
    pub tile_width_cm: f64,
    pub spacing_cm: f64,
    pub pitch_length_cm: f64,
    pub pitch_width_cm: f64,
    pub tiles_along_length: u32,
    pub tiles_along_width: u32,
    pub tiles_needed: u32,
}

/// Derive centimeter dimensions and tile counts from a validated input.
///
/// Enforces [`MAX_TILE_COUNT`] on every count a placement loop could
/// iterate over, regardless of pattern.
pub(crate) fn derive(input: &CalculationInput) -> TileResult<Derived> {
    let room_length_cm = Centimeters::from(Meters(input.room_length_m)).value();
    let room_width_cm = Centimeters::from(Meters(input.room_width_m)).value();
    let spacing_cm = Centimeters::from(Millimeters(input.spacing_mm)).value();
    let tile_length_cm = input.tile_length_cm;
    let tile_width_cm = input.tile_width_cm;

    let pitch_length_cm = tile_length_cm + spacing_cm;
    let pitch_width_cm = tile_width_cm + spacing_cm;

    let along_length = (room_length_cm / pitch_length_cm).ceil();
    let along_width = (room_width_cm / pitch_width_cm).ceil();
    ensure_under_cap(along_length * along_width)?;

    let tiles_needed = match input.pattern {
        Pattern::Herringbone => {
            // Each unit cell covers an (L + W + 2s) square and lays two tiles.
            let unit_cm = tile_length_cm + tile_width_cm + 2.0 * spacing_cm;
            let units_along_length = (room_length_cm / unit_cm).ceil();
            let units_along_width = (room_width_cm / unit_cm).ceil();
            let count = 2.0 * units_along_length * units_along_width;
            ensure_under_cap(count)?;
            count as u32
        }
        _ => (along_length * along_width) as u32,
    };

    Ok(Derived {
        room_length_cm,
        room_width_cm,
        tile_length_cm,
        tile_width_cm,
        spacing_cm,
        pitch_length_cm,
        pitch_width_cm,
        tiles_along_length: along_length as u32,
        tiles_along_width: along_width as u32,
        tiles_needed,
    })
}

fn ensure_under_cap(count: f64) -> TileResult<()> {
    if !count.is_finite() || count > MAX_TILE_COUNT as f64 {
        return Err(TileError::too_many_tiles(count as u64, MAX_TILE_COUNT));
    }
    Ok(())
}

/// Results from a tile calculation.
///
/// `tiles_needed == whole_tiles + cut_tiles` always holds, and for
/// non-overlapping patterns `tiles_along_length * tiles_along_width >=
/// tiles_needed`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tiles_needed": 238,
///   "whole_tiles": 208,
///   "cut_tiles": 30,
///   "total_tiles_with_waste": 262,
///   "tiles_along_length": 17,
///   "tiles_along_width": 14,
///   "room_area_m2": 20.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total tiles required to cover the room (before waste allowance)
    pub tiles_needed: u32,

    /// Tiles that fit entirely within the room boundary, uncut
    pub whole_tiles: u32,

    /// Tiles that intersect a room boundary and must be cut to fit
    pub cut_tiles: u32,

    /// Tiles to order: `ceil(tiles_needed * 1.1)`, a fixed 10% allowance
    /// for breakage and miscuts
    pub total_tiles_with_waste: u32,

    /// Tile columns along the room length (pitch-based)
    pub tiles_along_length: u32,

    /// Tile rows across the room width (pitch-based)
    pub tiles_along_width: u32,

    /// Room floor area in square meters
    pub room_area_m2: f64,

    /// Material cost, present only when pricing parameters were supplied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub estimated_cost: Option<f64>,

    /// Labor estimate in hours, present only when pricing parameters were supplied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub installation_hours: Option<f64>,

    /// Markdown walkthrough of how the counts were reached
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub calculation_explanation: Option<String>,
}

impl CalculationResult {
    /// Tiles added by the waste allowance
    pub fn waste_tiles(&self) -> u32 {
        self.total_tiles_with_waste - self.tiles_needed
    }

    /// Fraction of tiles that need cutting (0.0 when every tile fits whole)
    pub fn cut_fraction(&self) -> f64 {
        self.cut_tiles as f64 / self.tiles_needed as f64
    }
}

/// Optional pricing collaborator parameters.
///
/// The base engine carries no prices; a caller that knows the unit cost and
/// crew speed passes these to [`calculate_with_pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParams {
    /// Material cost per tile
    pub cost_per_tile: f64,

    /// Tiles a crew lays per hour
    pub tiles_per_hour: f64,
}

impl PricingParams {
    /// Validate pricing parameters.
    pub fn validate(&self) -> TileResult<()> {
        if !self.cost_per_tile.is_finite() || self.cost_per_tile <= 0.0 {
            return Err(TileError::invalid_input(
                "cost_per_tile",
                self.cost_per_tile.to_string(),
                "Cost per tile must be a positive number",
            ));
        }
        if !self.tiles_per_hour.is_finite() || self.tiles_per_hour <= 0.0 {
            return Err(TileError::invalid_input(
                "tiles_per_hour",
                self.tiles_per_hour.to_string(),
                "Tiles per hour must be a positive number",
            ));
        }
        Ok(())
    }
}

/// Calculate tile counts for a room.
///
/// This is a pure function: deterministic, no side effects, no I/O.
/// Calling it twice with identical input yields bit-identical output.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - counts plus a markdown explanation
/// * `Err(TileError::InvalidInput)` - a dimension is non-positive,
///   non-finite, or the spacing is negative
/// * `Err(TileError::TooManyTiles)` - the derived count exceeds
///   [`MAX_TILE_COUNT`]
///
/// # Example
///
/// ```rust
/// use tile_core::calculations::{calculate, CalculationInput, Pattern};
///
/// let input = CalculationInput {
///     room_length_m: 5.0,
///     room_width_m: 4.0,
///     tile_length_cm: 30.0,
///     tile_width_cm: 30.0,
///     spacing_mm: 2.0,
///     pattern: Pattern::Grid,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.tiles_needed, result.whole_tiles + result.cut_tiles);
/// ```
pub fn calculate(input: &CalculationInput) -> TileResult<CalculationResult> {
    input.validate()?;
    let derived = derive(input)?;

    // Whole tiles are counted geometrically: run the pattern's placement
    // over the room extents in centimeters and count fully contained
    // rectangles. Clamp keeps the whole + cut partition intact even at
    // float boundaries.
    let whole_tiles =
        crate::layout::whole_tile_count(&derived, input.pattern).min(derived.tiles_needed);
    let cut_tiles = derived.tiles_needed - whole_tiles;

    let total_tiles_with_waste = waste_total(derived.tiles_needed);
    let room_area_m2 = Meters(input.room_length_m)
        .area(Meters(input.room_width_m))
        .value();

    let mut result = CalculationResult {
        tiles_needed: derived.tiles_needed,
        whole_tiles,
        cut_tiles,
        total_tiles_with_waste,
        tiles_along_length: derived.tiles_along_length,
        tiles_along_width: derived.tiles_along_width,
        room_area_m2,
        estimated_cost: None,
        installation_hours: None,
        calculation_explanation: None,
    };
    result.calculation_explanation = Some(build_explanation(input, &derived, &result));

    Ok(result)
}

/// Calculate tile counts and fill in the cost and labor estimates.
///
/// Identical to [`calculate`] except `estimated_cost` and
/// `installation_hours` are populated from the supplied [`PricingParams`].
pub fn calculate_with_pricing(
    input: &CalculationInput,
    pricing: &PricingParams,
) -> TileResult<CalculationResult> {
    pricing.validate()?;
    let mut result = calculate(input)?;
    result.estimated_cost = Some(result.tiles_needed as f64 * pricing.cost_per_tile);
    result.installation_hours = Some(result.tiles_needed as f64 / pricing.tiles_per_hour);
    Ok(result)
}

/// Exact `ceil(n * 1.1)` via integer ceiling division.
///
/// Float multiplication drifts on exact multiples of ten
/// (`240.0 * 1.1 == 264.00000000000006`, whose ceiling is 265).
fn waste_total(tiles_needed: u32) -> u32 {
    (tiles_needed * 11).div_ceil(10)
}

fn build_explanation(
    input: &CalculationInput,
    derived: &Derived,
    result: &CalculationResult,
) -> String {
    let mut text = String::new();

    text.push_str("## Room\n");
    text.push_str(&format!(
        "{:.2} m × {:.2} m gives {:.2} m² of floor to cover.\n\n",
        input.room_length_m, input.room_width_m, result.room_area_m2
    ));

    text.push_str("## Tile Pitch\n");
    text.push_str(&format!(
        "Each tile is {:.1} cm × {:.1} cm; with {:.1} mm grout joints the repeat \
         distance is {:.2} cm × {:.2} cm.\n\n",
        input.tile_length_cm,
        input.tile_width_cm,
        input.spacing_mm,
        derived.pitch_length_cm,
        derived.pitch_width_cm
    ));

    text.push_str(&format!("## Tile Count ({})\n", input.pattern.label()));
    match input.pattern {
        Pattern::Herringbone => {
            let unit_cm =
                derived.tile_length_cm + derived.tile_width_cm + 2.0 * derived.spacing_cm;
            text.push_str(&format!(
                "The herringbone unit is an L-shaped pair of tiles spanning {:.2} cm; \
                 covering the {:.0} cm × {:.0} cm room takes {} units of 2 tiles each: \
                 {} tiles.\n\n",
                unit_cm,
                derived.room_length_cm,
                derived.room_width_cm,
                result.tiles_needed / 2,
                result.tiles_needed
            ));
        }
        _ => {
            text.push_str(&format!(
                "{} tiles fit along the {:.0} cm length and {} across the {:.0} cm \
                 width: {} tiles in total.\n\n",
                result.tiles_along_length,
                derived.room_length_cm,
                result.tiles_along_width,
                derived.room_width_cm,
                result.tiles_needed
            ));
        }
    }

    text.push_str("## Cut Tiles\n");
    text.push_str(&format!(
        "{} tiles fit whole; {} meet a room boundary and must be cut.\n\n",
        result.whole_tiles, result.cut_tiles
    ));

    text.push_str("## Waste Allowance\n");
    text.push_str(&format!(
        "A fixed 10% allowance for breakage and miscuts brings the order to {} tiles.\n",
        result.total_tiles_with_waste
    ));

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(pattern: Pattern) -> CalculationInput {
        CalculationInput {
            room_length_m: 5.0,
            room_width_m: 4.0,
            tile_length_cm: 30.0,
            tile_width_cm: 30.0,
            spacing_mm: 2.0,
            pattern,
        }
    }

    #[test]
    fn test_grid_scenario_5m_by_4m() {
        // pitch = 30.2 cm; ceil(500/30.2) = 17; ceil(400/30.2) = 14
        let result = calculate(&sample_input(Pattern::Grid)).unwrap();
        assert_eq!(result.tiles_along_length, 17);
        assert_eq!(result.tiles_along_width, 14);
        assert_eq!(result.tiles_needed, 238);
        assert_eq!(result.total_tiles_with_waste, 262);
        assert_eq!(result.whole_tiles, 208);
        assert_eq!(result.cut_tiles, 30);
        assert!((result.room_area_m2 - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_partition_for_every_pattern() {
        for pattern in Pattern::ALL {
            let result = calculate(&sample_input(pattern)).unwrap();
            assert_eq!(
                result.tiles_needed,
                result.whole_tiles + result.cut_tiles,
                "partition violated for {pattern}"
            );
            assert!(
                result.tiles_along_length * result.tiles_along_width >= result.tiles_needed,
                "axis-count bound violated for {pattern}"
            );
        }
    }

    #[test]
    fn test_waste_is_exact_integer_ceiling() {
        // 16 x 15 = 240 tiles; 240 * 1.1 in floats is 264.00000000000006,
        // which must still round to 264, not 265
        let input = CalculationInput {
            room_length_m: 4.8,
            room_width_m: 4.5,
            ..sample_input(Pattern::Grid)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tiles_needed, 240);
        assert_eq!(result.total_tiles_with_waste, 264);
        assert_eq!(result.waste_tiles(), 24);
    }

    #[test]
    fn test_exact_fit_has_no_cut_tiles() {
        // 3 m room, 30 cm tiles, no grout: 10 x 10 tiles fit exactly
        let input = CalculationInput {
            room_length_m: 3.0,
            room_width_m: 3.0,
            spacing_mm: 0.0,
            ..sample_input(Pattern::Grid)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tiles_needed, 100);
        assert_eq!(result.whole_tiles, 100);
        assert_eq!(result.cut_tiles, 0);
        assert_eq!(result.cut_fraction(), 0.0);
    }

    #[test]
    fn test_single_tile_room() {
        let input = CalculationInput {
            room_length_m: 0.3,
            room_width_m: 0.3,
            ..sample_input(Pattern::Grid)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tiles_along_length, 1);
        assert_eq!(result.tiles_along_width, 1);
        assert_eq!(result.tiles_needed, 1);
        assert_eq!(result.whole_tiles, 1);
    }

    #[test]
    fn test_herringbone_unit_count() {
        // unit = 30 + 15 + 2*0.2 = 45.4 cm; ceil(500/45.4) = 12, ceil(400/45.4) = 9
        let input = CalculationInput {
            tile_width_cm: 15.0,
            ..sample_input(Pattern::Herringbone)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tiles_needed, 2 * 12 * 9);
        assert_eq!(result.whole_tiles, 198);
        assert_eq!(result.cut_tiles, 18);
    }

    #[test]
    fn test_brick_matches_grid_axis_counts() {
        let grid = calculate(&sample_input(Pattern::Grid)).unwrap();
        let brick = calculate(&sample_input(Pattern::Brick)).unwrap();
        assert_eq!(brick.tiles_needed, grid.tiles_needed);
        assert_eq!(brick.tiles_along_length, grid.tiles_along_length);
        assert_eq!(brick.tiles_along_width, grid.tiles_along_width);
    }

    #[test]
    fn test_invalid_room_length() {
        let input = CalculationInput {
            room_length_m: 0.0,
            ..sample_input(Pattern::Grid)
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_negative_spacing() {
        let input = CalculationInput {
            spacing_mm: -1.0,
            ..sample_input(Pattern::Grid)
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_invalid_non_finite_dimension() {
        let input = CalculationInput {
            tile_length_cm: f64::NAN,
            ..sample_input(Pattern::Grid)
        };
        assert!(calculate(&input).is_err());

        let input = CalculationInput {
            room_width_m: f64::INFINITY,
            ..sample_input(Pattern::Grid)
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_degenerate_tile_size_rejected() {
        // 1 cm tiles in a 100 m x 100 m hall: 10^8 tiles, far past the ceiling
        let input = CalculationInput {
            room_length_m: 100.0,
            room_width_m: 100.0,
            tile_length_cm: 1.0,
            tile_width_cm: 1.0,
            spacing_mm: 0.0,
            pattern: Pattern::Grid,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "TOO_MANY_TILES");
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let input = sample_input(Pattern::Herringbone);
        let a = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        let b = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pricing_fills_estimates() {
        let pricing = PricingParams {
            cost_per_tile: 2.5,
            tiles_per_hour: 20.0,
        };
        let result = calculate_with_pricing(&sample_input(Pattern::Grid), &pricing).unwrap();
        assert_eq!(result.estimated_cost, Some(595.0));
        assert_eq!(result.installation_hours, Some(11.9));
    }

    #[test]
    fn test_pricing_validation() {
        let pricing = PricingParams {
            cost_per_tile: 0.0,
            tiles_per_hour: 20.0,
        };
        assert!(calculate_with_pricing(&sample_input(Pattern::Grid), &pricing).is_err());
    }

    #[test]
    fn test_base_calculate_leaves_pricing_empty() {
        let result = calculate(&sample_input(Pattern::Grid)).unwrap();
        assert!(result.estimated_cost.is_none());
        assert!(result.installation_hours.is_none());
    }

    #[test]
    fn test_explanation_walkthrough() {
        let result = calculate(&sample_input(Pattern::Grid)).unwrap();
        let explanation = result.calculation_explanation.as_deref().unwrap();
        assert!(explanation.contains("## Room"));
        assert!(explanation.contains("## Waste Allowance"));
        assert!(explanation.contains("262"));
    }

    #[test]
    fn test_result_serialization_roundtrip() {
        let result = calculate(&sample_input(Pattern::Brick)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("tiles_needed"));
        // Optional fields stay out of the wire format until supplied
        assert!(!json.contains("estimated_cost"));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
