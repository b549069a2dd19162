//! Uncorrelated per-cell noise

use super::NoiseSource;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform white noise: every cell draws an independent sample in [-1, 1]
///
/// Each coordinate pair is mixed with the seed into its own stream, so
/// sampling is deterministic and order-independent.
#[derive(Debug, Clone, Copy)]
pub struct WhiteNoise {
    seed: u64,
}

impl WhiteNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn cell_stream(&self, x: i32, y: i32) -> u64 {
        let key = ((x as u32 as u64) << 32) | (y as u32 as u64);
        self.seed ^ key
    }
}

impl NoiseSource for WhiteNoise {
    fn sample(&self, x: i32, y: i32) -> f64 {
        let mut rng = StdRng::seed_from_u64(self.cell_stream(x, y));
        rng.gen_range(-1.0..1.0)
    }
}
