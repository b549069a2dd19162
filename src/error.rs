//! Error types for the simulation engine and snapshot store

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Grids must be at least 1x1; zero-sized grids cannot hold cells
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },
}

/// Errors raised by snapshot persistence
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The storage root could not be created, read, or written
    #[error("snapshot storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No snapshot exists under the requested name
    #[error("snapshot '{name}' not found")]
    NotFound { name: String },

    /// The snapshot exists but does not decode to a rectangular grid
    #[error("snapshot '{name}' is corrupt: {reason}")]
    CorruptData { name: String, reason: String },

    /// A loaded grid's shape differs from the live simulation's
    #[error(
        "snapshot grid is {found_width}x{found_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },
}
