//! # tile_core - Tile Layout Calculation Engine
//!
//! `tile_core` is the computational heart of TileCalc: given room
//! dimensions, tile dimensions, grout spacing, and a laying pattern, it
//! computes how many tiles the job needs and where each tile sits in a 2-D
//! preview. All inputs and outputs are JSON-serializable plain records, so
//! persistence and rendering layers consume the engine without it knowing
//! about storage, HTTP, or any drawing API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Data, not paint**: Placement generators return tile rectangles and
//!   an affine transform; renderers own all drawing concerns
//!
//! ## Quick Start
//!
//! ```rust
//! use tile_core::calculations::{calculate, CalculationInput, Pattern};
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
//! // How many tiles to order
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_tiles_with_waste, 262);
//!
//! // Where they go on an 800 x 640 canvas
//! let placement = generate_placement(&input, 800.0, 640.0).unwrap();
//! assert_eq!(placement.tiles.len() as u32, result.tiles_needed);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Tile counting: whole/cut/waste totals
//! - [`layout`] - Placement geometry for the four laying patterns
//! - [`project`] - Saved-calculation container and settings
//! - [`file_io`] - File operations with atomic saves and locking
//! - [`units`] - Type-safe length unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod layout;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, calculate_with_pricing, CalculationInput, CalculationResult, Pattern, PricingParams,
};
pub use errors::{TileError, TileResult};
pub use file_io::{load_project, save_project, FileLock};
pub use layout::{generate_placement, PlacedTile, Placement, TileClass, Transform2D};
pub use project::{CalculationStatus, Project, SavedCalculation};
