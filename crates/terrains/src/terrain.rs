//! Standard terrains built from the heightmap primitives.
//!
//! **Seed-based determinism:** every rugged surface is sampled from the
//! generator's [`NoiseSampler`], so the same seed and arguments always yield
//! the same heights. The free functions at the bottom of this module use
//! [`TerrainGenerator::default`] (seed 0).
//!
//! Each builder derives its grid once from `size` and the granularity
//! multiplier and feeds that same grid to every primitive it combines, so the
//! heightmaps it blends always share a shape.

use glam::{DVec2, DVec3};
use scene::{GeometryHeightmap, GeometryPlane, Heightmap, MapType, Pose, Terrain};

use crate::config::{TerrainConfig, TerrainKind};
use crate::error::{check_dimension, check_parameter, Result, TerrainError};
use crate::heightmap::{
    bowl_heightmap, derive_grid, flatten_columns_before, rugged_heightmap, weighted_blend,
};
use crate::sampler::NoiseSampler;
use crate::textures;

/// Noise density for gently rugged ground.
const FLAT_RUGGED_DENSITY: f64 = 1.0;
/// Noise density for the crater floor.
const CRATER_DENSITY: f64 = 1.5;

/// Builds [`Terrain`] records from a seeded noise sampler and shared settings.
#[derive(Debug, Clone, Default)]
pub struct TerrainGenerator {
    sampler: NoiseSampler,
    config: TerrainConfig,
}

impl TerrainGenerator {
    /// Generator seeded from `config.seed`.
    pub fn new(config: TerrainConfig) -> Self {
        Self {
            sampler: NoiseSampler::new(config.seed),
            config,
        }
    }

    /// Generator with an explicit sampler; `config.seed` is ignored.
    pub fn with_sampler(sampler: NoiseSampler, config: TerrainConfig) -> Self {
        Self { sampler, config }
    }

    pub fn sampler(&self) -> &NoiseSampler {
        &self.sampler
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Build `kind` using the shaping parameters from the config.
    pub fn build(&self, kind: TerrainKind, size: DVec2) -> Result<Terrain> {
        let c = &self.config;
        let terrain = match kind {
            TerrainKind::Flat => self.flat(size)?,
            TerrainKind::Sand => self.sand(size)?,
            TerrainKind::FlatRugged => {
                self.flat_rugged(size, c.ruggedness, c.granularity_multiplier)?
            }
            TerrainKind::MixedTerrain => {
                self.mixed_terrain(size, c.ruggedness, c.granularity_multiplier)?
            }
            TerrainKind::MixedFlatRugged => {
                self.mixed_flat_rugged(size, c.ruggedness, c.granularity_multiplier)?
            }
            TerrainKind::MixedFlatRuggedOneThirds => {
                self.mixed_flat_rugged_one_thirds(size, c.ruggedness, c.granularity_multiplier)?
            }
            TerrainKind::Crater => {
                self.crater(size, c.ruggedness, c.curviness, c.granularity_multiplier)?
            }
        };
        log::debug!(
            "Built {} terrain ({} geometry entries)",
            kind.name(),
            terrain.static_geometry.len()
        );
        Ok(terrain)
    }

    /// A single massless plane, no heightmap.
    pub fn flat(&self, size: DVec2) -> Result<Terrain> {
        check_dimension("size.x", size.x)?;
        check_dimension("size.y", size.y)?;
        Ok(Terrain::new(vec![
            GeometryPlane::new(Pose::default(), 0.0, size).into()
        ]))
    }

    /// A plane covered with the sand image texture.
    pub fn sand(&self, size: DVec2) -> Result<Terrain> {
        check_dimension("size.x", size.x)?;
        check_dimension("size.y", size.y)?;
        let plane = GeometryPlane::new(Pose::default(), 0.0, size)
            .with_texture(textures::sand(MapType::Map2d));
        Ok(Terrain::new(vec![plane.into()]))
    }

    /// Slightly rugged ground: noise scaled by `ruggedness`, which is also
    /// the declared vertical extent.
    pub fn flat_rugged(
        &self,
        size: DVec2,
        ruggedness: f64,
        granularity_multiplier: f64,
    ) -> Result<Terrain> {
        let heights = self.scaled_rugged(size, ruggedness, granularity_multiplier)?;
        Ok(Terrain::new(vec![
            self.heightmap_geometry(Pose::default(), size, ruggedness, heights).into(),
        ]))
    }

    /// Three patches side by side at x = 0, 2·width and 4·width: flat, flat
    /// with a checker texture, and rugged. Patches are not blended.
    pub fn mixed_terrain(
        &self,
        size: DVec2,
        ruggedness: f64,
        granularity_multiplier: f64,
    ) -> Result<Terrain> {
        let rugged = self.scaled_rugged(size, ruggedness, granularity_multiplier)?;
        let flat = Heightmap::zeros(rugged.grid());
        let at = |offset: f64| Pose::from_position(DVec3::new(offset * size.x, 0.0, 0.0));

        let checker = textures::checker(
            textures::CHECKER_LIGHT,
            textures::CHECKER_DARK,
            MapType::Map2d,
        );

        Ok(Terrain::new(vec![
            self.heightmap_geometry(at(0.0), size, ruggedness, flat.clone()).into(),
            self.heightmap_geometry(at(2.0), size, ruggedness, flat)
                .with_texture(checker)
                .into(),
            self.heightmap_geometry(at(4.0), size, ruggedness, rugged).into(),
        ]))
    }

    /// Rugged ground whose first half of columns is perfectly flat.
    pub fn mixed_flat_rugged(
        &self,
        size: DVec2,
        ruggedness: f64,
        granularity_multiplier: f64,
    ) -> Result<Terrain> {
        let heights = self.scaled_rugged(size, ruggedness, granularity_multiplier)?;
        let midpoint = heights.rows() / 2;
        let heights = flatten_columns_before(heights, midpoint);
        Ok(Terrain::new(vec![
            self.heightmap_geometry(Pose::default(), size, ruggedness, heights).into(),
        ]))
    }

    /// Rugged ground whose first two thirds of columns are perfectly flat.
    pub fn mixed_flat_rugged_one_thirds(
        &self,
        size: DVec2,
        ruggedness: f64,
        granularity_multiplier: f64,
    ) -> Result<Terrain> {
        let heights = self.scaled_rugged(size, ruggedness, granularity_multiplier)?;
        let rugged_start = heights.rows() * 2 / 3;
        let heights = flatten_columns_before(heights, rugged_start);
        Ok(Terrain::new(vec![
            self.heightmap_geometry(Pose::default(), size, ruggedness, heights).into(),
        ]))
    }

    /// Crater with a rugged floor: rugged noise and a bowl averaged with
    /// weights `ruggedness` and `curviness`.
    ///
    /// The vertical extent is `ruggedness + curviness` and the base is
    /// `ruggedness` thicker than usual. When both weights are zero the
    /// heightmap is all zeros and the extent is forced to 1.0.
    pub fn crater(
        &self,
        size: DVec2,
        ruggedness: f64,
        curviness: f64,
        granularity_multiplier: f64,
    ) -> Result<Terrain> {
        check_parameter("ruggedness", ruggedness)?;
        check_parameter("curviness", curviness)?;
        let grid = derive_grid(size, granularity_multiplier)?;

        let rugged = rugged_heightmap(&self.sampler, size, grid, CRATER_DENSITY)?;
        let bowl = bowl_heightmap(grid);

        let (heights, max_height) = match weighted_blend(&rugged, ruggedness, &bowl, curviness) {
            Ok(heights) => (heights, ruggedness + curviness),
            Err(TerrainError::DegenerateExtent { .. }) => {
                log::debug!("Crater with zero ruggedness and curviness, using a flat heightmap");
                (Heightmap::zeros(grid), 1.0)
            }
            Err(e) => return Err(e),
        };

        let geometry = GeometryHeightmap::new(
            Pose::default(),
            0.0,
            DVec3::new(size.x, size.y, max_height),
            self.config.base_thickness + ruggedness,
            heights,
        );
        log::debug!("Crater grid {grid}, extent {max_height}");
        Ok(Terrain::new(vec![geometry.into()]))
    }

    /// Rugged noise at density 1.0, multiplied by `ruggedness`.
    fn scaled_rugged(
        &self,
        size: DVec2,
        ruggedness: f64,
        granularity_multiplier: f64,
    ) -> Result<Heightmap> {
        check_parameter("ruggedness", ruggedness)?;
        let grid = derive_grid(size, granularity_multiplier)?;
        let heights = rugged_heightmap(&self.sampler, size, grid, FLAT_RUGGED_DENSITY)?;
        log::debug!("Rugged grid {grid}, ruggedness {ruggedness}");
        Ok(heights.scaled(ruggedness))
    }

    fn heightmap_geometry(
        &self,
        pose: Pose,
        size: DVec2,
        max_height: f64,
        heights: Heightmap,
    ) -> GeometryHeightmap {
        GeometryHeightmap::new(
            pose,
            0.0,
            DVec3::new(size.x, size.y, max_height),
            self.config.base_thickness,
            heights,
        )
    }
}

/// [`TerrainGenerator::flat`] with the default generator.
pub fn flat(size: DVec2) -> Result<Terrain> {
    TerrainGenerator::default().flat(size)
}

/// [`TerrainGenerator::flat_rugged`] with the default generator.
pub fn flat_rugged(size: DVec2, ruggedness: f64, granularity_multiplier: f64) -> Result<Terrain> {
    TerrainGenerator::default().flat_rugged(size, ruggedness, granularity_multiplier)
}

/// [`TerrainGenerator::mixed_terrain`] with the default generator.
pub fn mixed_terrain(size: DVec2, ruggedness: f64, granularity_multiplier: f64) -> Result<Terrain> {
    TerrainGenerator::default().mixed_terrain(size, ruggedness, granularity_multiplier)
}

/// [`TerrainGenerator::mixed_flat_rugged`] with the default generator.
pub fn mixed_flat_rugged(
    size: DVec2,
    ruggedness: f64,
    granularity_multiplier: f64,
) -> Result<Terrain> {
    TerrainGenerator::default().mixed_flat_rugged(size, ruggedness, granularity_multiplier)
}

/// [`TerrainGenerator::mixed_flat_rugged_one_thirds`] with the default generator.
pub fn mixed_flat_rugged_one_thirds(
    size: DVec2,
    ruggedness: f64,
    granularity_multiplier: f64,
) -> Result<Terrain> {
    TerrainGenerator::default().mixed_flat_rugged_one_thirds(
        size,
        ruggedness,
        granularity_multiplier,
    )
}

/// [`TerrainGenerator::crater`] with the default generator.
pub fn crater(
    size: DVec2,
    ruggedness: f64,
    curviness: f64,
    granularity_multiplier: f64,
) -> Result<Terrain> {
    TerrainGenerator::default().crater(size, ruggedness, curviness, granularity_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RUGGED_NOISE_BOUND;
    use scene::{Geometry, GridSize, TextureKind};

    fn only_heightmap(terrain: &Terrain) -> &GeometryHeightmap {
        assert_eq!(terrain.static_geometry.len(), 1);
        terrain.static_geometry[0].as_heightmap().unwrap()
    }

    fn rugged_reference(size: DVec2, density: f64) -> Heightmap {
        let grid = derive_grid(size, 1.0).unwrap();
        rugged_heightmap(&NoiseSampler::default(), size, grid, density).unwrap()
    }

    #[test]
    fn flat_is_a_single_massless_plane() {
        let terrain = flat(DVec2::new(20.0, 20.0)).unwrap();
        assert_eq!(terrain.static_geometry.len(), 1);
        let plane = terrain.static_geometry[0].as_plane().unwrap();
        assert_eq!(plane.mass, 0.0);
        assert_eq!(plane.size, DVec2::new(20.0, 20.0));
        assert_eq!(plane.pose, Pose::default());
        assert!(plane.texture.is_none());
        assert_eq!(terrain.heightmaps().count(), 0);
    }

    #[test]
    fn sand_plane_has_sand_texture() {
        let terrain = TerrainGenerator::default()
            .sand(DVec2::new(20.0, 20.0))
            .unwrap();
        let plane = terrain.planes().next().unwrap();
        let texture = plane.texture.as_ref().unwrap();
        assert_eq!(texture.kind, TextureKind::Image);
        assert_eq!(texture.repeat, (100, 100));
        assert_eq!(texture, &textures::sand(MapType::Map2d));
    }

    #[test]
    fn flat_rugged_scales_noise_linearly() {
        let size = DVec2::new(1.0, 0.8);
        let reference = rugged_reference(size, 1.0);
        let terrain = flat_rugged(size, 0.3, 1.0).unwrap();
        let geom = only_heightmap(&terrain);

        assert_eq!(geom.heights.grid(), GridSize::new(100, 80).unwrap());
        assert_eq!(geom.heights, reference.scaled(0.3));
        assert_eq!(geom.size, DVec3::new(1.0, 0.8, 0.3));
        assert_eq!(geom.base_thickness, 0.1);
        assert_eq!(geom.mass, 0.0);
        assert!(geom.heights.fits_within(0.3 * RUGGED_NOISE_BOUND));
        assert!(geom.is_within_extent());

        let doubled = flat_rugged(size, 0.6, 1.0).unwrap();
        let a = only_heightmap(&terrain).heights.values();
        let b = only_heightmap(&doubled).heights.values();
        for (x, y) in a.iter().zip(b) {
            assert!((2.0 * x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn flat_rugged_zero_ruggedness_is_flat() {
        let terrain = flat_rugged(DVec2::new(0.5, 0.5), 0.0, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        assert_eq!(geom.heights.max_abs(), 0.0);
        assert!(geom.is_within_extent());
    }

    #[test]
    fn granularity_changes_resolution() {
        let terrain = flat_rugged(DVec2::new(1.0, 1.0), 0.1, 0.5).unwrap();
        let grid = only_heightmap(&terrain).heights.grid();
        assert_eq!((grid.rows(), grid.cols()), (50, 50));
    }

    #[test]
    fn mixed_terrain_lays_out_three_patches() {
        let size = DVec2::new(0.6, 0.4);
        let terrain = mixed_terrain(size, 0.2, 1.0).unwrap();
        let patches: Vec<_> = terrain.heightmaps().collect();
        assert_eq!(patches.len(), 3);

        let xs: Vec<f64> = patches.iter().map(|p| p.pose.position.x).collect();
        assert_eq!(xs, vec![0.0, 1.2, 2.4]);

        assert!(patches[0].texture.is_none());
        assert_eq!(patches[0].heights.max_abs(), 0.0);

        let checker = patches[1].texture.as_ref().unwrap();
        assert_eq!(checker.kind, TextureKind::Checker);
        assert_eq!(checker.map_type, MapType::Map2d);
        assert_eq!(patches[1].heights.max_abs(), 0.0);

        assert!(patches[2].texture.is_none());
        assert_eq!(patches[2].heights, rugged_reference(size, 1.0).scaled(0.2));

        for p in &patches {
            assert_eq!(p.size, DVec3::new(0.6, 0.4, 0.2));
            assert_eq!(p.heights.grid(), patches[2].heights.grid());
            assert!(p.is_within_extent());
        }
    }

    #[test]
    fn mixed_flat_rugged_flattens_first_half() {
        let size = DVec2::new(0.9, 0.9);
        let reference = rugged_reference(size, 1.0).scaled(0.25);
        let terrain = mixed_flat_rugged(size, 0.25, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        let midpoint = 90 / 2;

        for row in 0..geom.heights.rows() {
            for col in 0..geom.heights.cols() {
                let v = geom.heights.get(row, col).unwrap();
                if col < midpoint {
                    assert_eq!(v, 0.0, "cell ({row}, {col}) should be flat");
                } else {
                    assert_eq!(Some(v), reference.get(row, col));
                }
            }
        }
        assert_eq!(geom.size.z, 0.25);
        assert!(geom.is_within_extent());
    }

    #[test]
    fn mixed_flat_rugged_one_thirds_flattens_two_thirds() {
        let size = DVec2::new(0.9, 0.9);
        let reference = rugged_reference(size, 1.0).scaled(0.25);
        let terrain = mixed_flat_rugged_one_thirds(size, 0.25, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        let rugged_start = 90 * 2 / 3;

        for row in 0..geom.heights.rows() {
            for col in 0..geom.heights.cols() {
                let v = geom.heights.get(row, col).unwrap();
                if col < rugged_start {
                    assert_eq!(v, 0.0);
                } else {
                    assert_eq!(Some(v), reference.get(row, col));
                }
            }
        }
        // The trailing third is not all flat.
        assert!(geom.heights.max_abs() > 0.0);
        assert!(geom.is_within_extent());
    }

    #[test]
    fn crater_zero_weights_falls_back_to_flat() {
        let size = DVec2::new(0.5, 0.5);
        let terrain = crater(size, 0.0, 0.0, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        assert_eq!(geom.heights, Heightmap::zeros(GridSize::new(50, 50).unwrap()));
        assert_eq!(geom.size, DVec3::new(0.5, 0.5, 1.0));
        assert_eq!(geom.base_thickness, 0.1);
    }

    #[test]
    fn crater_equal_weights_average_primitives() {
        let size = DVec2::new(0.7, 0.7);
        let grid = derive_grid(size, 1.0).unwrap();
        let rugged = rugged_reference(size, 1.5);
        let bowl = bowl_heightmap(grid);

        let terrain = crater(size, 1.0, 1.0, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        for ((&h, &r), &b) in geom
            .heights
            .values()
            .iter()
            .zip(rugged.values())
            .zip(bowl.values())
        {
            assert_eq!(h, (r + b) / 2.0);
        }
        assert_eq!(geom.size.z, 2.0);
        assert_eq!(geom.base_thickness, 0.1 + 1.0);
        assert!(geom.is_within_extent());
    }

    #[test]
    fn crater_pure_bowl() {
        let size = DVec2::new(0.4, 0.4);
        let terrain = crater(size, 0.0, 1.0, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        assert_eq!(geom.heights, bowl_heightmap(geom.heights.grid()));
        assert_eq!(geom.size.z, 1.0);
        assert!(geom.is_within_extent());
    }

    #[test]
    fn crater_small_weights_keep_average_beyond_extent() {
        // Heights stay a weighted average in [-1, 1] while the declared
        // extent is ruggedness + curviness, so small weights overshoot it.
        let size = DVec2::new(1.0, 1.0);
        let grid = derive_grid(size, 1.0).unwrap();
        let rugged = rugged_reference(size, 1.5);
        let bowl = bowl_heightmap(grid);

        let terrain = crater(size, 0.1, 0.1, 1.0).unwrap();
        let geom = only_heightmap(&terrain);
        assert_eq!(geom.size.z, 0.1 + 0.1);
        assert_eq!(geom.base_thickness, 0.1 + 0.1);
        assert_eq!(
            geom.heights,
            weighted_blend(&rugged, 0.1, &bowl, 0.1).unwrap()
        );
        assert!(geom.heights.fits_within(1.0));
        assert!(geom.heights.max_abs() > geom.max_height());
        assert!(!geom.is_within_extent());
    }

    #[test]
    fn builders_are_deterministic() {
        let size = DVec2::new(0.5, 0.6);
        assert_eq!(flat(size).unwrap(), flat(size).unwrap());
        assert_eq!(
            flat_rugged(size, 0.1, 1.0).unwrap(),
            flat_rugged(size, 0.1, 1.0).unwrap()
        );
        assert_eq!(
            mixed_terrain(size, 0.1, 1.0).unwrap(),
            mixed_terrain(size, 0.1, 1.0).unwrap()
        );
        assert_eq!(
            mixed_flat_rugged(size, 0.1, 1.0).unwrap(),
            mixed_flat_rugged(size, 0.1, 1.0).unwrap()
        );
        assert_eq!(
            mixed_flat_rugged_one_thirds(size, 0.1, 1.0).unwrap(),
            mixed_flat_rugged_one_thirds(size, 0.1, 1.0).unwrap()
        );
        assert_eq!(
            crater(size, 0.3, 0.7, 1.0).unwrap(),
            crater(size, 0.3, 0.7, 1.0).unwrap()
        );
    }

    #[test]
    fn seed_selects_surface() {
        let size = DVec2::new(0.5, 0.5);
        let a = TerrainGenerator::new(TerrainConfig {
            seed: 11,
            ..Default::default()
        });
        let b = TerrainGenerator::new(TerrainConfig {
            seed: 22,
            ..Default::default()
        });
        assert_ne!(
            a.flat_rugged(size, 0.1, 1.0).unwrap(),
            b.flat_rugged(size, 0.1, 1.0).unwrap()
        );
        assert_eq!(a.sampler().seed(), 11);
    }

    #[test]
    fn invalid_arguments_fail_fast() {
        assert!(matches!(
            flat(DVec2::new(0.0, 1.0)),
            Err(TerrainError::InvalidDimension { .. })
        ));
        assert!(matches!(
            flat_rugged(DVec2::new(-1.0, 1.0), 0.1, 1.0),
            Err(TerrainError::InvalidDimension { .. })
        ));
        assert!(matches!(
            mixed_terrain(DVec2::ONE, -0.1, 1.0),
            Err(TerrainError::InvalidParameter { .. })
        ));
        assert!(matches!(
            mixed_flat_rugged(DVec2::ONE, 0.1, f64::NAN),
            Err(TerrainError::InvalidDimension { .. })
        ));
        assert!(matches!(
            crater(DVec2::ONE, 0.1, -1.0, 1.0),
            Err(TerrainError::InvalidParameter { name: "curviness", .. })
        ));
        assert!(matches!(
            crater(DVec2::new(0.001, 0.001), 0.1, 0.1, 1.0),
            Err(TerrainError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn build_dispatches_every_kind() {
        let generator = TerrainGenerator::new(TerrainConfig {
            ruggedness: 0.2,
            curviness: 1.0,
            ..Default::default()
        });
        let size = DVec2::new(0.3, 0.3);
        for kind in TerrainKind::ALL {
            let terrain = generator.build(kind, size).unwrap();
            assert!(!terrain.static_geometry.is_empty(), "{}", kind.name());
            for geom in &terrain.static_geometry {
                assert_eq!(geom.mass(), 0.0);
                if let Geometry::Heightmap(h) = geom {
                    assert!(h.is_within_extent(), "{} exceeds extent", kind.name());
                }
            }
        }
        assert_eq!(
            generator.build(TerrainKind::FlatRugged, size).unwrap(),
            generator.flat_rugged(size, 0.2, 1.0).unwrap()
        );
    }
}
