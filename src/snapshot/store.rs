//! Named snapshot persistence

use super::SnapshotRecord;
use crate::config::EdgeBehavior;
use crate::engine::{Grid, GridSimulation};
use crate::error::SnapshotError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Saves, loads, and enumerates grid snapshots under a storage root
///
/// Snapshots are keyed by bare names; the store owns the `.json` suffix
/// and creates the root directory on first save. Saving under an existing
/// name overwrites it.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    /// Persist the simulation's live grid under `name`
    pub fn save(
        &self,
        simulation: &GridSimulation,
        name: &str,
    ) -> Result<PathBuf, SnapshotError> {
        self.save_grid(simulation.grid(), name)
    }

    /// Persist a grid under `name`, creating the storage root if absent
    pub fn save_grid(&self, grid: &Grid, name: &str) -> Result<PathBuf, SnapshotError> {
        fs::create_dir_all(&self.root).map_err(|source| SnapshotError::StorageUnavailable {
            path: self.root.clone(),
            source,
        })?;

        let record = SnapshotRecord::from_grid(grid);
        let content = serde_json::to_string_pretty(&record).map_err(|e| {
            SnapshotError::StorageUnavailable {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            }
        })?;

        let path = self.path_for(name);
        fs::write(&path, content).map_err(|source| SnapshotError::StorageUnavailable {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Load the named snapshot into a grid
    ///
    /// The returned grid carries its own dimensions; whether a shape
    /// mismatch with the live simulation rejects or resizes is the
    /// caller's decision (see `GridSimulation::restore`).
    pub fn load(&self, name: &str, edge_behavior: EdgeBehavior) -> Result<Grid, SnapshotError> {
        let path = self.path_for(name);

        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SnapshotError::NotFound {
                    name: name.to_string(),
                }
            } else {
                SnapshotError::StorageUnavailable {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let record: SnapshotRecord =
            serde_json::from_str(&content).map_err(|e| SnapshotError::CorruptData {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        record.into_grid(edge_behavior, name)
    }

    /// Enumerate snapshot names in the storage root
    ///
    /// Sub-directories and non-snapshot files are skipped. A root that
    /// does not exist yet lists as empty. Order follows directory
    /// enumeration and is not guaranteed stable.
    pub fn list(&self) -> Result<Vec<String>, SnapshotError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(SnapshotError::StorageUnavailable {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SnapshotError::StorageUnavailable {
                path: self.root.clone(),
                source,
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        Ok(names)
    }
}

/// Seed a store with well-known starter patterns
///
/// Writes the gliders/blinker/block/beacon set, including the paired
/// gliders snapshot the simulation historically booted from.
pub fn create_example_snapshots(store: &SnapshotStore) -> anyhow::Result<()> {
    use anyhow::Context;

    let patterns: [(&str, &[&str]); 5] = [
        ("glider", &["00100", "10100", "01100", "00000", "00000"]),
        ("blinker", &["000", "111", "000"]),
        ("block", &["0000", "0110", "0110", "0000"]),
        ("beacon", &["110000", "110000", "001100", "001100"]),
        (
            "double_gliders",
            &[
                "000000000000",
                "001000000000",
                "000100000000",
                "011100000000",
                "000000000000",
                "000000001000",
                "000000000100",
                "000000011100",
                "000000000000",
                "000000000000",
            ],
        ),
    ];

    for (name, rows) in patterns {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '1').collect())
            .collect();
        let grid = Grid::from_cells(cells, EdgeBehavior::Wrap)
            .with_context(|| format!("Invalid example pattern '{}'", name))?;

        store
            .save_grid(&grid, name)
            .with_context(|| format!("Failed to save example snapshot '{}'", name))?;
    }

    Ok(())
}
