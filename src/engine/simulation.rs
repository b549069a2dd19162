//! Double-buffered Game of Life simulation

use super::{rules, Grid};
use crate::config::EdgeBehavior;
use crate::error::{SimulationError, SnapshotError};
use crate::noise::NoiseSource;
use rayon::prelude::*;

/// What to do when a restored grid's shape differs from the live one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Refuse the restore and leave the live grid untouched
    Reject,
    /// Adopt the restored grid's dimensions
    Resize,
}

/// A Game of Life simulation over a fixed-size grid
///
/// Holds two equally-sized grids: `current` is the authoritative state,
/// `next` is the scratch buffer an advance writes into. Neighbor counts
/// for generation N are read exclusively from generation N's cells; the
/// buffers then trade places by swap, never by element copy.
#[derive(Debug, Clone)]
pub struct GridSimulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl GridSimulation {
    /// Create an all-dead simulation
    pub fn new(
        width: usize,
        height: usize,
        edge_behavior: EdgeBehavior,
    ) -> Result<Self, SimulationError> {
        let current = Grid::new(width, height, edge_behavior)?;
        let next = current.clone();

        Ok(Self {
            current,
            next,
            generation: 0,
        })
    }

    /// Create a simulation seeded with an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        let next = Grid {
            width: grid.width,
            height: grid.height,
            cells: vec![false; grid.cells.len()],
            edge_behavior: grid.edge_behavior,
        };

        Self {
            current: grid,
            next,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.current.width
    }

    pub fn height(&self) -> usize {
        self.current.height
    }

    /// Generations advanced since construction or the last restore
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The live grid, for rendering and persistence
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Set a single cell, wrapping out-of-range coordinates
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        self.current.set(x, y, alive);
    }

    /// Read a single cell, wrapping out-of-range coordinates
    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.current.get(x, y)
    }

    /// Count living neighbors of a cell in the live grid
    pub fn living_neighbors(&self, x: i32, y: i32) -> u8 {
        self.current.living_neighbors(x, y)
    }

    /// Count living cells in the live grid
    pub fn living_count(&self) -> usize {
        self.current.living_count()
    }

    /// Advance the simulation one generation
    ///
    /// Every cell's next state is computed from the current buffer, written
    /// into the scratch buffer, and the two are swapped at the end of the
    /// pass. Rows are processed in parallel.
    pub fn advance(&mut self) {
        let current = &self.current;
        let next = &mut self.next;

        next.cells
            .par_chunks_mut(current.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let neighbors = current.living_neighbors(x as i32, y as i32);
                    let alive = current.cells[current.index(x, y)];
                    *cell = rules::next_state(alive, neighbors);
                }
            });

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Advance the simulation several generations
    pub fn advance_generations(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Repopulate the grid from a noise field
    ///
    /// A cell becomes alive when the absolute value of the source's sample
    /// at its coordinates falls below `threshold`. With a coherent source
    /// this produces organic clusters rather than uniform static.
    pub fn randomize_with_threshold(&mut self, noise: &dyn NoiseSource, threshold: f64) {
        for y in 0..self.current.height {
            for x in 0..self.current.width {
                let sample = noise.sample(x as i32, y as i32);
                let idx = self.current.index(x, y);
                self.current.cells[idx] = sample.abs() < threshold;
            }
        }
    }

    /// Replace the live grid with a restored one
    ///
    /// All-or-nothing: when the shapes differ and `policy` is `Reject`,
    /// the live grid is left exactly as it was. On success the scratch
    /// buffer is re-derived at the incoming shape, so stale contents can
    /// never leak into the following advance.
    pub fn restore(&mut self, grid: Grid, policy: MismatchPolicy) -> Result<(), SnapshotError> {
        let shape_differs =
            grid.width != self.current.width || grid.height != self.current.height;
        if shape_differs && policy == MismatchPolicy::Reject {
            return Err(SnapshotError::DimensionMismatch {
                expected_width: self.current.width,
                expected_height: self.current.height,
                found_width: grid.width,
                found_height: grid.height,
            });
        }

        self.next = Grid {
            width: grid.width,
            height: grid.height,
            cells: vec![false; grid.cells.len()],
            edge_behavior: grid.edge_behavior,
        };
        self.current = grid;
        self.generation = 0;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_from_rows(rows: Vec<Vec<bool>>) -> GridSimulation {
        GridSimulation::from_grid(Grid::from_cells(rows, EdgeBehavior::Wrap).unwrap())
    }

    /// Noise stub: alternating columns sample 0.0 and 1.0
    struct StripeNoise;

    impl NoiseSource for StripeNoise {
        fn sample(&self, x: i32, _y: i32) -> f64 {
            (x.rem_euclid(2)) as f64
        }
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut sim = GridSimulation::new(8, 8, EdgeBehavior::Wrap).unwrap();
        sim.advance();
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut sim = GridSimulation::new(5, 5, EdgeBehavior::Wrap).unwrap();
        sim.set_cell(2, 2, true);
        sim.advance();
        assert!(!sim.get_cell(2, 2));
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let mut sim = sim_from_rows(vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ]);
        let before = sim.grid().clone();
        sim.advance();
        assert_eq!(sim.grid().cells, before.cells);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = sim_from_rows(vec![
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
            vec![false, true, true, true, false],
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
        ]);
        let horizontal = sim.grid().clone();

        sim.advance();
        // Horizontal line becomes vertical
        assert!(sim.get_cell(2, 1));
        assert!(sim.get_cell(2, 2));
        assert!(sim.get_cell(2, 3));
        assert!(!sim.get_cell(1, 2));
        assert!(!sim.get_cell(3, 2));
        assert_eq!(sim.living_count(), 3);

        sim.advance();
        // And back again: period 2
        assert_eq!(sim.grid().cells, horizontal.cells);
    }

    #[test]
    fn test_advance_swaps_buffers() {
        let mut sim = GridSimulation::new(4, 4, EdgeBehavior::Wrap).unwrap();
        let scratch_ptr = sim.next.cells.as_ptr();

        sim.advance();

        // The old scratch buffer became the live one, no copy happened
        assert_eq!(sim.current.cells.as_ptr(), scratch_ptr);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_updates_are_simultaneous() {
        // A toad: its step depends on reading only generation N state.
        // A cell-by-cell in-place update would corrupt it.
        let mut sim = sim_from_rows(vec![
            vec![false, false, false, false, false, false],
            vec![false, false, false, false, false, false],
            vec![false, false, true, true, true, false],
            vec![false, true, true, true, false, false],
            vec![false, false, false, false, false, false],
            vec![false, false, false, false, false, false],
        ]);
        let phase_a = sim.grid().clone();

        sim.advance();
        sim.advance();
        assert_eq!(sim.grid().cells, phase_a.cells);
    }

    #[test]
    fn test_wrapped_block_is_still_life() {
        // A block split across all four corners is still a block on a torus
        let mut sim = GridSimulation::new(6, 6, EdgeBehavior::Wrap).unwrap();
        sim.set_cell(0, 0, true);
        sim.set_cell(5, 0, true);
        sim.set_cell(0, 5, true);
        sim.set_cell(5, 5, true);

        let before = sim.grid().clone();
        sim.advance();
        assert_eq!(sim.grid().cells, before.cells);
    }

    #[test]
    fn test_clear() {
        let mut sim = GridSimulation::new(4, 4, EdgeBehavior::Wrap).unwrap();
        sim.set_cell(1, 1, true);
        sim.set_cell(2, 2, true);
        sim.clear();
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_randomize_with_threshold() {
        let mut sim = GridSimulation::new(6, 3, EdgeBehavior::Wrap).unwrap();

        // Threshold 0.5: alive exactly where the stripe sample is 0.0
        sim.randomize_with_threshold(&StripeNoise, 0.5);
        for y in 0..3 {
            for x in 0..6 {
                assert_eq!(sim.get_cell(x, y), x % 2 == 0);
            }
        }

        // Threshold above the whole range: everything lives
        sim.randomize_with_threshold(&StripeNoise, 1.5);
        assert_eq!(sim.living_count(), 18);
    }

    #[test]
    fn test_restore_reject_on_mismatch() {
        let mut sim = GridSimulation::new(4, 4, EdgeBehavior::Wrap).unwrap();
        sim.set_cell(1, 1, true);

        let incoming = Grid::new(5, 5, EdgeBehavior::Wrap).unwrap();
        let err = sim.restore(incoming, MismatchPolicy::Reject).unwrap_err();
        assert!(matches!(err, SnapshotError::DimensionMismatch { .. }));

        // The live grid survived the failed restore untouched
        assert_eq!(sim.width(), 4);
        assert!(sim.get_cell(1, 1));
    }

    #[test]
    fn test_restore_resize_adopts_dimensions() {
        let mut sim = GridSimulation::new(4, 4, EdgeBehavior::Wrap).unwrap();
        sim.advance_generations(3);

        let mut incoming = Grid::new(7, 2, EdgeBehavior::Wrap).unwrap();
        incoming.set(6, 1, true);

        sim.restore(incoming, MismatchPolicy::Resize).unwrap();
        assert_eq!(sim.width(), 7);
        assert_eq!(sim.height(), 2);
        assert!(sim.get_cell(6, 1));
        assert_eq!(sim.generation(), 0);

        // The re-derived scratch buffer matches the new shape
        sim.advance();
        assert_eq!(sim.width(), 7);
    }

    #[test]
    fn test_restore_matching_dimensions() {
        let mut sim = GridSimulation::new(3, 3, EdgeBehavior::Wrap).unwrap();
        let mut incoming = Grid::new(3, 3, EdgeBehavior::Wrap).unwrap();
        incoming.set(0, 0, true);

        sim.restore(incoming, MismatchPolicy::Reject).unwrap();
        assert!(sim.get_cell(0, 0));
    }
}
