//! Terrain generation settings.

use serde::{Deserialize, Serialize};

use crate::sampler::DEFAULT_SEED;

/// The standard terrains a [`TerrainGenerator`](crate::TerrainGenerator) can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Flat,
    Sand,
    FlatRugged,
    MixedTerrain,
    MixedFlatRugged,
    MixedFlatRuggedOneThirds,
    Crater,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 7] = [
        TerrainKind::Flat,
        TerrainKind::Sand,
        TerrainKind::FlatRugged,
        TerrainKind::MixedTerrain,
        TerrainKind::MixedFlatRugged,
        TerrainKind::MixedFlatRuggedOneThirds,
        TerrainKind::Crater,
    ];

    /// Snake-case name, used for logs and preview file names.
    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Flat => "flat",
            TerrainKind::Sand => "sand",
            TerrainKind::FlatRugged => "flat_rugged",
            TerrainKind::MixedTerrain => "mixed_terrain",
            TerrainKind::MixedFlatRugged => "mixed_flat_rugged",
            TerrainKind::MixedFlatRuggedOneThirds => "mixed_flat_rugged_one_thirds",
            TerrainKind::Crater => "crater",
        }
    }
}

/// Shaping parameters shared by the terrain builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Noise seed.
    #[serde(default = "default_seed")]
    pub seed: u32,
    /// Height variation of rugged terrains.
    #[serde(default = "default_ruggedness")]
    pub ruggedness: f64,
    /// Rim height of the crater bowl.
    #[serde(default = "default_curviness")]
    pub curviness: f64,
    /// Multiplier on cells per world unit.
    #[serde(default = "default_granularity")]
    pub granularity_multiplier: f64,
    /// Solid slab under each heightmap.
    #[serde(default = "default_base_thickness")]
    pub base_thickness: f64,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}
fn default_ruggedness() -> f64 {
    0.1
}
fn default_curviness() -> f64 {
    1.0
}
fn default_granularity() -> f64 {
    1.0
}
fn default_base_thickness() -> f64 {
    0.1
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            ruggedness: default_ruggedness(),
            curviness: default_curviness(),
            granularity_multiplier: default_granularity(),
            base_thickness: default_base_thickness(),
        }
    }
}
