//! # Project Data Structures
//!
//! The `Project` struct is the root container for saved tile calculations.
//! Projects serialize to `.tcf` (TileCalc) files as human-readable JSON and
//! round-trip every field unchanged.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, owner, timestamps)
//! ├── settings: GlobalSettings (default spacing and pattern)
//! └── items: HashMap<Uuid, SavedCalculation> (all saved calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tile_core::calculations::{CalculationInput, Pattern};
//! use tile_core::project::Project;
//!
//! let mut project = Project::new("jane@tiling.example");
//! let id = project
//!     .add_calculation("Kitchen Renovation", CalculationInput {
//!         room_length_m: 5.0,
//!         room_width_m: 4.0,
//!         tile_length_cm: 30.0,
//!         tile_width_cm: 30.0,
//!         spacing_mm: 2.0,
//!         pattern: Pattern::Grid,
//!     })
//!     .unwrap();
//!
//! assert_eq!(project.get_calculation(&id).unwrap().results.tiles_needed, 238);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{calculate, CalculationInput, CalculationResult, Pattern};
use crate::errors::{TileError, TileResult};

/// Current schema version for .tcf files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.tcf` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, owner, timestamps)
    pub meta: ProjectMetadata,

    /// Defaults applied to new calculations
    pub settings: GlobalSettings,

    /// All saved calculations, keyed by UUID
    pub items: HashMap<Uuid, SavedCalculation>,
}

impl Project {
    /// Create a new empty project for the given owner.
    pub fn new(owner: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                owner: owner.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Run the calculation and store it under a fresh UUID.
    ///
    /// New calculations start in [`CalculationStatus::Draft`].
    ///
    /// # Errors
    ///
    /// Propagates any [`TileError`] from [`calculate`]; nothing is stored
    /// on failure.
    pub fn add_calculation(
        &mut self,
        name: impl Into<String>,
        input: CalculationInput,
    ) -> TileResult<Uuid> {
        let results = calculate(&input)?;
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.items.insert(
            id,
            SavedCalculation {
                name: name.into(),
                input,
                results,
                status: CalculationStatus::Draft,
                created: now,
                modified: now,
            },
        );
        self.touch();
        Ok(id)
    }

    /// Replace a saved calculation's input and recalculate its results.
    ///
    /// Dimensions or pattern changing invalidates the stored results, so
    /// they are always recomputed together with the input swap.
    pub fn update_calculation(&mut self, id: &Uuid, input: CalculationInput) -> TileResult<()> {
        let results = calculate(&input)?;
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| TileError::calculation_not_found(id.to_string()))?;
        item.input = input;
        item.results = results;
        item.modified = Utc::now();
        self.touch();
        Ok(())
    }

    /// Move a saved calculation through the draft / in-progress / completed
    /// workflow.
    pub fn set_status(&mut self, id: &Uuid, status: CalculationStatus) -> TileResult<()> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| TileError::calculation_not_found(id.to_string()))?;
        item.status = status;
        item.modified = Utc::now();
        self.touch();
        Ok(())
    }

    /// Get a saved calculation by UUID.
    pub fn get_calculation(&self, id: &Uuid) -> Option<&SavedCalculation> {
        self.items.get(id)
    }

    /// Remove a saved calculation by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_calculation(&mut self, id: &Uuid) -> Option<SavedCalculation> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Number of saved calculations
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Owner identifier (name or email)
    pub owner: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Defaults applied when the front-end seeds a new calculation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default grout spacing in millimeters
    pub default_spacing_mm: f64,

    /// Default laying pattern
    pub default_pattern: Pattern,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            default_spacing_mm: 2.0,
            default_pattern: Pattern::Grid,
        }
    }
}

/// Workflow status of a saved calculation.
///
/// Serializes to the wire values `"draft"`, `"in-progress"`, and
/// `"completed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationStatus {
    Draft,
    InProgress,
    Completed,
}

impl Default for CalculationStatus {
    fn default() -> Self {
        CalculationStatus::Draft
    }
}

/// One stored calculation: the user's input, the computed results, and
/// where the job stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// User label (e.g., "Kitchen Renovation")
    pub name: String,

    /// The input the results were computed from
    pub input: CalculationInput,

    /// Computed counts; always consistent with `input`
    pub results: CalculationResult,

    /// Workflow status
    pub status: CalculationStatus,

    /// When this calculation was first saved
    pub created: DateTime<Utc>,

    /// When this calculation last changed
    pub modified: DateTime<Utc>,
}
