//! Toroidal Game of Life simulation engine
//!
//! This library provides a fixed-size cellular-automaton simulation with
//! wrap-around neighbor topology, pluggable noise-based randomization, and
//! named JSON snapshot persistence. It has no dependency on any display or
//! event loop; drivers observe the grid through `GridSimulation` and pace
//! it with `StepClock`.

pub mod config;
pub mod engine;
pub mod error;
pub mod noise;
pub mod snapshot;
pub mod utils;

pub use config::{EdgeBehavior, Settings};
pub use engine::{Grid, GridSimulation, MismatchPolicy, StepClock};
pub use error::{SimulationError, SnapshotError};
pub use noise::{GradientNoise, NoiseSource, WhiteNoise};
pub use snapshot::{SnapshotRecord, SnapshotStore};

/// Build an all-dead simulation from configuration
pub fn simulation_from_settings(settings: &Settings) -> Result<GridSimulation, SimulationError> {
    GridSimulation::new(
        settings.grid.width,
        settings.grid.height,
        settings.grid.edge_behavior,
    )
}
