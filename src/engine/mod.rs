//! Simulation core: grid, rules, and the generation state machine

pub mod clock;
pub mod grid;
pub mod rules;
pub mod simulation;

pub use clock::StepClock;
pub use grid::Grid;
pub use simulation::{GridSimulation, MismatchPolicy};
