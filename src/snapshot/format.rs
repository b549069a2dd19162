//! On-disk snapshot record

use crate::config::EdgeBehavior;
use crate::engine::Grid;
use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};

/// The persisted shape of a grid: dimensions plus the cell matrix,
/// flattened row-major
///
/// This is the whole compatibility surface of the snapshot format; a grid
/// saved and reloaded must come back cell-for-cell identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl SnapshotRecord {
    /// Capture a grid's current state
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells.clone(),
        }
    }

    /// Validate the record and convert it into a live grid
    ///
    /// `name` identifies the snapshot in error reports.
    pub fn into_grid(
        self,
        edge_behavior: EdgeBehavior,
        name: &str,
    ) -> Result<Grid, SnapshotError> {
        if self.width == 0 || self.height == 0 {
            return Err(SnapshotError::CorruptData {
                name: name.to_string(),
                reason: format!("invalid dimensions {}x{}", self.width, self.height),
            });
        }

        let expected = self.width * self.height;
        if self.cells.len() != expected {
            return Err(SnapshotError::CorruptData {
                name: name.to_string(),
                reason: format!(
                    "cell count {} does not match {}x{} grid (expected {})",
                    self.cells.len(),
                    self.width,
                    self.height,
                    expected
                ),
            });
        }

        Ok(Grid {
            width: self.width,
            height: self.height,
            cells: self.cells,
            edge_behavior,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let mut grid = Grid::new(4, 3, EdgeBehavior::Wrap).unwrap();
        grid.set(0, 0, true);
        grid.set(3, 2, true);
        grid.set(1, 1, true);

        let record = SnapshotRecord::from_grid(&grid);
        let restored = record.into_grid(EdgeBehavior::Wrap, "t").unwrap();

        assert_eq!(restored, grid);
    }

    #[test]
    fn test_cell_count_mismatch_is_corrupt() {
        let record = SnapshotRecord {
            width: 3,
            height: 3,
            cells: vec![false; 8],
        };
        let err = record.into_grid(EdgeBehavior::Wrap, "bad").unwrap_err();
        assert!(matches!(err, SnapshotError::CorruptData { .. }));
    }

    #[test]
    fn test_zero_dimension_is_corrupt() {
        let record = SnapshotRecord {
            width: 0,
            height: 3,
            cells: vec![],
        };
        assert!(record.into_grid(EdgeBehavior::Wrap, "bad").is_err());
    }

    #[test]
    fn test_json_field_shape() {
        // The wire format is stable: width, height, row-major cells
        let record = SnapshotRecord {
            width: 2,
            height: 1,
            cells: vec![true, false],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"width\":2"));
        assert!(json.contains("\"height\":1"));
        assert!(json.contains("\"cells\":[true,false]"));
    }
}
