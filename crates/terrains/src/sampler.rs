//! Seeded fractal Perlin noise for rugged ground.
//!
//! **Determinism:** a sampler is fully described by its seed and octave
//! count, so two samplers built with the same values return bit-identical
//! samples. [`NoiseSampler::default`] uses [`DEFAULT_SEED`], which keeps every
//! terrain reproducible across runs unless a caller opts into another seed.

use noise::{NoiseFn, Perlin};
use rand::Rng;

/// Seed used when none is given.
pub const DEFAULT_SEED: u32 = 0;

/// Octaves summed per sample.
pub const DEFAULT_OCTAVES: u32 = 10;

/// Frequency multiplier per octave.
pub const LACUNARITY: f64 = 2.0;

/// Amplitude multiplier per octave.
pub const PERSISTENCE: f64 = 0.5;

/// Empirical bound on `|sample|`. The fractal sum is normalized by its total
/// amplitude, so the bound holds for every seed.
pub const RUGGED_NOISE_BOUND: f64 = 1.0;

/// Multi-octave gradient noise behind an explicit seed.
#[derive(Debug, Clone)]
pub struct NoiseSampler {
    seed: u32,
    octaves: u32,
    perlin: Perlin,
}

impl Default for NoiseSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseSampler {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            octaves: DEFAULT_OCTAVES,
            perlin: Perlin::new(seed),
        }
    }

    /// Sampler with a seed drawn from `rng`.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }

    /// Override the octave count (at least one octave is always sampled).
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Fractal noise at `(x, y)`, in `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            value += self.perlin.get([x * frequency, y * frequency]) * amplitude;
            max_value += amplitude;

            amplitude *= PERSISTENCE;
            frequency *= LACUNARITY;
        }

        value / max_value
    }
}
