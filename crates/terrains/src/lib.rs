//! Procedural terrains for the simulator: flat, rugged, mixed and crater
//! ground built from seeded noise and radial heightmaps, plus texture presets.

pub mod config;
pub mod error;
pub mod heightmap;
pub mod sampler;
pub mod terrain;
pub mod textures;

pub use config::*;
pub use error::{Result, TerrainError};
pub use heightmap::*;
pub use sampler::*;
pub use terrain::*;
