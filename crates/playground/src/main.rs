//! `sand-terrain` driver: builds the standard terrains (including the sand-textured
//! plane), logs what the simulator would receive, and optionally writes
//! heightmap previews.

mod config;
mod preview;

use anyhow::{Context, Result};
use glam::DVec2;
use scene::{Geometry, Terrain};
use terrains::{NoiseSampler, TerrainGenerator, TerrainKind};

use crate::config::PlaygroundConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlaygroundConfig::load();
    log::info!("Starting terrain playground ({} terrains)", config.kinds.len());

    let generator = if config.random_seed {
        let sampler = NoiseSampler::from_rng(&mut rand::thread_rng());
        log::info!("Using random noise seed {}", sampler.seed());
        TerrainGenerator::with_sampler(sampler, config.terrain.clone())
    } else {
        TerrainGenerator::new(config.terrain.clone())
    };

    if let Some(dir) = &config.preview_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating preview directory {}", dir.display()))?;
    }

    for &kind in &config.kinds {
        let size = terrain_size(&config, kind);
        let terrain = generator
            .build(kind, size)
            .with_context(|| format!("building {} terrain", kind.name()))?;
        report(kind, &terrain);

        if let Some(dir) = &config.preview_dir {
            for (i, heightmap) in terrain.heightmaps().enumerate() {
                let path = dir.join(format!("{}_{}.png", kind.name(), i));
                preview::write_heightmap_png(&path, &heightmap.heights)?;
                log::info!("Wrote preview {}", path.display());
            }
        }
    }

    Ok(())
}

/// Planes use the large plane size, heightmaps the (denser) heightmap size.
fn terrain_size(config: &PlaygroundConfig, kind: TerrainKind) -> DVec2 {
    match kind {
        TerrainKind::Flat | TerrainKind::Sand => DVec2::from_array(config.plane_size),
        _ => DVec2::from_array(config.heightmap_size),
    }
}

fn report(kind: TerrainKind, terrain: &Terrain) {
    log::info!(
        "{}: {} static geometry entries",
        kind.name(),
        terrain.static_geometry.len()
    );
    for geometry in &terrain.static_geometry {
        let texture = geometry
            .texture()
            .map(|t| format!("{:?}", t.kind))
            .unwrap_or_else(|| "none".to_string());
        match geometry {
            Geometry::Plane(plane) => log::info!(
                "  plane {:.2}x{:.2} at {:?}, texture {}",
                plane.size.x,
                plane.size.y,
                plane.pose.position,
                texture
            ),
            Geometry::Heightmap(h) => {
                log::info!(
                    "  heightmap {} cells ({} bytes), heights [{:.4}, {:.4}], extent {:.3}, base {:.3}, texture {}",
                    h.heights.grid(),
                    h.heights.as_bytes().len(),
                    h.heights.min(),
                    h.heights.max(),
                    h.max_height(),
                    h.base_thickness,
                    texture
                );
                if !h.is_within_extent() {
                    log::warn!(
                        "  {} heights exceed declared extent {:.3} (max |h| = {:.4})",
                        kind.name(),
                        h.max_height(),
                        h.heights.max_abs()
                    );
                }
            }
        }
    }
}
