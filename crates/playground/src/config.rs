//! Playground configuration. Loaded from playground.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use terrains::{TerrainConfig, TerrainKind};

/// Settings for a playground run. Loaded from `playground.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Width and depth of plane terrains (flat, sand).
    #[serde(default = "default_plane_size")]
    pub plane_size: [f64; 2],
    /// Width and depth of heightmap terrains.
    #[serde(default = "default_heightmap_size")]
    pub heightmap_size: [f64; 2],
    /// Shaping parameters and noise seed.
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Ignore `terrain.seed` and draw a fresh one.
    #[serde(default)]
    pub random_seed: bool,
    /// Terrains to build, in order.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<TerrainKind>,
    /// Directory for grayscale heightmap previews. None = no previews.
    #[serde(default)]
    pub preview_dir: Option<PathBuf>,
}

fn default_plane_size() -> [f64; 2] {
    [20.0, 20.0]
}
fn default_heightmap_size() -> [f64; 2] {
    [5.0, 5.0]
}
fn default_kinds() -> Vec<TerrainKind> {
    TerrainKind::ALL.to_vec()
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            plane_size: default_plane_size(),
            heightmap_size: default_heightmap_size(),
            terrain: TerrainConfig::default(),
            random_seed: false,
            kinds: default_kinds(),
            preview_dir: None,
        }
    }
}

impl PlaygroundConfig {
    /// Load config from `playground.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("playground.ron")
}
