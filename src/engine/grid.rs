//! Grid representation and neighbor counting

use crate::config::EdgeBehavior;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular matrix of boolean cell states
///
/// Cells are addressed by `(x, y)` with `x` running along a row. Public
/// accessors take signed coordinates and normalize them onto the grid, so
/// no input is ever out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
    pub edge_behavior: EdgeBehavior,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(
        width: usize,
        height: usize,
        edge_behavior: EdgeBehavior,
    ) -> Result<Self, SimulationError> {
        if width == 0 || height == 0 {
            return Err(SimulationError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
            edge_behavior,
        })
    }

    /// Create a grid from rows of boolean cell states
    pub fn from_cells(
        cells: Vec<Vec<bool>>,
        edge_behavior: EdgeBehavior,
    ) -> Result<Self, SimulationError> {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());

        if width == 0 || height == 0 {
            return Err(SimulationError::InvalidDimension { width, height });
        }

        // All rows must have the same length
        for row in &cells {
            if row.len() != width {
                return Err(SimulationError::InvalidDimension {
                    width: row.len(),
                    height,
                });
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
            edge_behavior,
        })
    }

    /// Convert 2D coordinates to 1D index, row-major
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Wrap signed coordinates into `[0, width) x [0, height)`
    ///
    /// Negative inputs wrap to the high end, per toroidal topology.
    #[inline]
    fn normalize(&self, x: i32, y: i32) -> (usize, usize) {
        let nx = (x as i64).rem_euclid(self.width as i64) as usize;
        let ny = (y as i64).rem_euclid(self.height as i64) as usize;
        (nx, ny)
    }

    /// Get the cell state at `(x, y)`, wrapping coordinates into range
    pub fn get(&self, x: i32, y: i32) -> bool {
        let (nx, ny) = self.normalize(x, y);
        self.cells[self.index(nx, ny)]
    }

    /// Set the cell state at `(x, y)`, wrapping coordinates into range
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        let (nx, ny) = self.normalize(x, y);
        let idx = self.index(nx, ny);
        self.cells[idx] = alive;
    }

    /// Count living neighbors among the 8 cells surrounding `(x, y)`
    pub fn living_neighbors(&self, x: i32, y: i32) -> u8 {
        let (bx, by) = self.normalize(x, y);
        let mut count = 0;

        for dy in [-1i64, 0, 1] {
            for dx in [-1i64, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue; // Skip the cell itself
                }

                let nx = bx as i64 + dx;
                let ny = by as i64 + dy;

                if self.is_neighbor_alive(nx, ny) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Check whether the neighbor at raw coordinates is alive, resolving
    /// the grid's edge behavior. Wrap is applied per offset, so opposite
    /// corners see each other as diagonal neighbors.
    fn is_neighbor_alive(&self, x: i64, y: i64) -> bool {
        match self.edge_behavior {
            EdgeBehavior::Wrap => {
                let wx = x.rem_euclid(self.width as i64) as usize;
                let wy = y.rem_euclid(self.height as i64) as usize;
                self.cells[self.index(wx, wy)]
            }
            EdgeBehavior::Dead => {
                if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
                    self.cells[self.index(x as usize, y as usize)]
                } else {
                    false
                }
            }
        }
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[self.index(x, y)] {
                    living.push((x, y));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.cells[self.index(x, y)] {
                    "⬛"
                } else {
                    "⬜"
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4, EdgeBehavior::Wrap).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 4);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Grid::new(0, 5, EdgeBehavior::Wrap),
            Err(SimulationError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(Grid::new(5, 0, EdgeBehavior::Wrap).is_err());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells, EdgeBehavior::Wrap).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_ragged_rows() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells, EdgeBehavior::Wrap).is_err());
        assert!(Grid::from_cells(vec![], EdgeBehavior::Wrap).is_err());
    }

    #[test]
    fn test_coordinate_wrap() {
        let mut grid = Grid::new(5, 4, EdgeBehavior::Wrap).unwrap();

        // Negative coordinates wrap to the high end
        grid.set(-1, 0, true);
        assert!(grid.get(4, 0));

        // Coordinates past the edge wrap to the low end
        grid.set(5, 4, true);
        assert!(grid.get(0, 0));

        // Reads normalize the same way
        assert!(grid.get(-6, -4));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells, EdgeBehavior::Dead).unwrap();

        // Center cell is surrounded by 8 living neighbors
        assert_eq!(grid.living_neighbors(1, 1), 8);

        // Corner sees only its 3 in-range neighbors, one of which (the
        // center) is dead
        assert_eq!(grid.living_neighbors(0, 0), 2);
    }

    #[test]
    fn test_toroidal_corner_neighbors() {
        let mut grid = Grid::new(6, 5, EdgeBehavior::Wrap).unwrap();
        grid.set(5, 4, true);

        // The far corner is a diagonal neighbor of the origin on a torus
        assert_eq!(grid.living_neighbors(0, 0), 1);

        // Under dead edges it is not
        let mut dead_grid = Grid::new(6, 5, EdgeBehavior::Dead).unwrap();
        dead_grid.set(5, 4, true);
        assert_eq!(dead_grid.living_neighbors(0, 0), 0);
    }

    #[test]
    fn test_center_cell_excluded_from_count() {
        let mut grid = Grid::new(3, 3, EdgeBehavior::Dead).unwrap();
        grid.set(1, 1, true);

        // A living cell is not its own neighbor
        assert_eq!(grid.living_neighbors(1, 1), 0);
    }

    #[test]
    fn test_single_row_wrap() {
        // A 1-high grid wraps a cell onto its own row; the offsets above
        // and below both resolve to the same row
        let mut grid = Grid::new(3, 1, EdgeBehavior::Wrap).unwrap();
        grid.set(0, 0, true);

        // (1,0) sees (0,0) via dx=-1 at dy in {-1,0,1}
        assert_eq!(grid.living_neighbors(1, 0), 3);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4, 4, EdgeBehavior::Wrap).unwrap();
        grid.set(2, 2, true);
        grid.set(0, 3, true);
        grid.clear();
        assert!(grid.is_empty());
    }
}
