//! Configuration management for the simulation engine

pub mod settings;

pub use settings::{
    CliOverrides, EdgeBehavior, GridConfig, RandomizeConfig, Settings, SimulationConfig,
    StorageConfig,
};
