//! Configuration settings for the Game of Life simulation engine

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub randomize: RandomizeConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub edge_behavior: EdgeBehavior,
}

/// How neighbor lookups treat coordinates past the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Toroidal topology: edges connect to the opposite edge
    Wrap,
    /// Out-of-range neighbors are simply absent (counted as dead)
    Dead,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds between generation advances when pacing in real time
    pub step_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomizeConfig {
    /// A cell becomes alive when |noise sample| falls below this value
    pub threshold: f64,
    /// Lattice frequency of the gradient noise field
    pub frequency: f64,
    /// Fixed seed; when absent each randomize draws a fresh seed
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub snapshot_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        // 1920x1080 display at 16px cells, the dimensions the simulation
        // was originally tuned for
        Self {
            grid: GridConfig {
                width: 120,
                height: 67,
                edge_behavior: EdgeBehavior::Wrap,
            },
            simulation: SimulationConfig {
                step_interval_ms: 100,
            },
            randomize: RandomizeConfig {
                threshold: 0.1,
                frequency: 0.05,
                seed: None,
            },
            storage: StorageConfig {
                snapshot_directory: PathBuf::from("saves"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be at least 1x1, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.simulation.step_interval_ms == 0 {
            anyhow::bail!("Step interval must be positive");
        }

        if self.randomize.threshold <= 0.0 || self.randomize.threshold > 1.0 {
            anyhow::bail!(
                "Randomize threshold must be in (0, 1], got {}",
                self.randomize.threshold
            );
        }

        if self.randomize.frequency <= 0.0 {
            anyhow::bail!("Noise frequency must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(interval) = cli_overrides.step_interval_ms {
            self.simulation.step_interval_ms = interval;
        }
        if let Some(threshold) = cli_overrides.threshold {
            self.randomize.threshold = threshold;
        }
        if let Some(seed) = cli_overrides.seed {
            self.randomize.seed = Some(seed);
        }
        if let Some(ref dir) = cli_overrides.snapshot_dir {
            self.storage.snapshot_directory = dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub step_interval_ms: Option<u64>,
    pub threshold: Option<f64>,
    pub seed: Option<u64>,
    pub snapshot_dir: Option<PathBuf>,
}
