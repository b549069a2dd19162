//! Seeded coherent gradient noise

use super::NoiseSource;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Two-dimensional gradient (Perlin-style) noise over a seeded
/// permutation table
///
/// Cell coordinates are scaled by `frequency` before lattice lookup, so
/// neighboring cells sample nearby field values and thresholding yields
/// organic clusters. Integer lattice points themselves evaluate to zero,
/// which is why the frequency must not be 1.0.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    perm: Vec<u8>,
    frequency: f64,
}

impl GradientNoise {
    const DEFAULT_FREQUENCY: f64 = 0.05;

    /// Create a source with the default lattice frequency
    pub fn new(seed: u64) -> Self {
        Self::with_frequency(seed, Self::DEFAULT_FREQUENCY)
    }

    /// Create a source sampling the lattice at the given frequency
    pub fn with_frequency(seed: u64, frequency: f64) -> Self {
        let mut perm: Vec<u8> = (0..=255).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        perm.shuffle(&mut rng);

        Self { perm, frequency }
    }

    fn hash(&self, xi: i64, yi: i64) -> u8 {
        let x = xi.rem_euclid(256) as usize;
        let y = yi.rem_euclid(256) as usize;
        let a = self.perm[x] as usize;
        self.perm[(a + y) & 255]
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of the four diagonal lattice gradients
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 3 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        _ => -x - y,
    }
}

impl NoiseSource for GradientNoise {
    fn sample(&self, x: i32, y: i32) -> f64 {
        let fx = x as f64 * self.frequency;
        let fy = y as f64 * self.frequency;

        let xi = fx.floor() as i64;
        let yi = fy.floor() as i64;
        let xf = fx - fx.floor();
        let yf = fy - fy.floor();

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.hash(xi, yi);
        let ab = self.hash(xi, yi + 1);
        let ba = self.hash(xi + 1, yi);
        let bb = self.hash(xi + 1, yi + 1);

        let value = lerp(
            lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u),
            lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u),
            v,
        );

        value.clamp(-1.0, 1.0)
    }
}
