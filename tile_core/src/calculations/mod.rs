//! # Tile Calculations
//!
//! The counting side of the engine. Follows the pattern used throughout
//! the crate:
//!
//! - `CalculationInput` - Input parameters (JSON-serializable)
//! - `CalculationResult` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<CalculationResult, TileError>` - Pure calculation function
//!
//! Placement geometry for rendering lives in [`crate::layout`]; the counter
//! here owns all input validation, so generators never see invalid input.

pub mod tiles;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TileError;

// Re-export commonly used types
pub use tiles::{
    calculate, calculate_with_pricing, CalculationInput, CalculationResult, PricingParams,
};

/// Tile laying pattern.
///
/// Serializes to the lowercase wire strings `"grid"`, `"brick"`,
/// `"herringbone"`, and `"diagonal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Axis-aligned rows and columns
    Grid,
    /// Running bond: every other row offset by half a tile pitch
    Brick,
    /// L-shaped pairs of perpendicular tiles
    Herringbone,
    /// Grid rotated 45 degrees about the room center
    Diagonal,
}

impl Pattern {
    /// All recognized patterns, in display order
    pub const ALL: [Pattern; 4] = [
        Pattern::Grid,
        Pattern::Brick,
        Pattern::Herringbone,
        Pattern::Diagonal,
    ];

    /// Wire/API name for this pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Grid => "grid",
            Pattern::Brick => "brick",
            Pattern::Herringbone => "herringbone",
            Pattern::Diagonal => "diagonal",
        }
    }

    /// Human-readable label (e.g. for selection menus)
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Grid => "Grid Pattern",
            Pattern::Brick => "Brick Pattern",
            Pattern::Herringbone => "Herringbone Pattern",
            Pattern::Diagonal => "Diagonal Pattern",
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Grid
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Pattern::Grid),
            "brick" => Ok(Pattern::Brick),
            "herringbone" => Ok(Pattern::Herringbone),
            "diagonal" => Ok(Pattern::Diagonal),
            _ => Err(TileError::invalid_input(
                "pattern",
                s,
                "Pattern must be one of: grid, brick, herringbone, diagonal",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_serialization() {
        let json = serde_json::to_string(&Pattern::Herringbone).unwrap();
        assert_eq!(json, "\"herringbone\"");

        let roundtrip: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Pattern::Herringbone);
    }

    #[test]
    fn test_pattern_from_str() {
        assert_eq!("grid".parse::<Pattern>().unwrap(), Pattern::Grid);
        assert_eq!("  Brick ".parse::<Pattern>().unwrap(), Pattern::Brick);
        assert!("chevron".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_unrecognized_pattern_error_code() {
        let err = "chevron".parse::<Pattern>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
