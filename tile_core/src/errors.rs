//! # Error Types
//!
//! Structured error types for tile_core. Every failure carries enough
//! context (field, value, reason) that callers can surface the message to
//! an end user unchanged, or handle it programmatically via [`TileError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use tile_core::errors::{TileError, TileResult};
//!
//! fn validate_spacing(spacing_mm: f64) -> TileResult<()> {
//!     if spacing_mm < 0.0 {
//!         return Err(TileError::invalid_input(
//!             "spacing_mm",
//!             spacing_mm.to_string(),
//!             "Spacing cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tile_core operations
pub type TileResult<T> = Result<T, TileError>;

/// Structured error type for the tile engine.
///
/// The engine never retries: it is pure and deterministic, so a retry would
/// reproduce the same error. No partial results are ever returned alongside
/// an error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TileError {
    /// An input value is invalid (non-positive, non-finite, negative spacing, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Derived tile count exceeds the safety ceiling.
    ///
    /// Guards against degenerate input (e.g. near-zero tile size) producing
    /// unbounded placement loops.
    #[error("Too many tiles: {tile_count} exceeds the limit of {limit}")]
    TooManyTiles { tile_count: u64, limit: u64 },

    /// A saved calculation was not found in the project
    #[error("Calculation not found: {id}")]
    CalculationNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl TileError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TileError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a TooManyTiles error
    pub fn too_many_tiles(tile_count: u64, limit: u64) -> Self {
        TileError::TooManyTiles { tile_count, limit }
    }

    /// Create a CalculationNotFound error
    pub fn calculation_not_found(id: impl Into<String>) -> Self {
        TileError::CalculationNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TileError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        TileError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry after the lock clears)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TileError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TileError::InvalidInput { .. } => "INVALID_INPUT",
            TileError::TooManyTiles { .. } => "TOO_MANY_TILES",
            TileError::CalculationNotFound { .. } => "CALCULATION_NOT_FOUND",
            TileError::FileError { .. } => "FILE_ERROR",
            TileError::FileLocked { .. } => "FILE_LOCKED",
            TileError::SerializationError { .. } => "SERIALIZATION_ERROR",
            TileError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
