//! Heightmap primitives: rugged noise, radial bowl, and the elementwise
//! combinators composite terrains are built from.
//!
//! Grids are indexed `(row, col)` with `rows = num_edges.0` (derived from the
//! world width) and `cols = num_edges.1` (derived from the depth). Sample
//! coordinates are normalized by the *opposite* axis count, so square terrains
//! map cleanly onto `[0, 1)` in both directions.

use glam::DVec2;
use scene::{GridSize, Heightmap};

use crate::error::{check_dimension, check_parameter, Result, TerrainError};
use crate::sampler::NoiseSampler;

/// Cells per world unit at granularity 1.0.
pub const NUM_EDGES: f64 = 100.0;

/// Scales sample coordinates so the noise has a pleasant frequency.
pub const RUGGED_FREQUENCY: f64 = 4.0;

/// Resolution for a terrain of `size` world units:
/// `floor(NUM_EDGES * size * granularity)` per axis.
pub fn derive_grid(size: DVec2, granularity_multiplier: f64) -> Result<GridSize> {
    check_dimension("size.x", size.x)?;
    check_dimension("size.y", size.y)?;
    check_dimension("granularity_multiplier", granularity_multiplier)?;

    let rows = (NUM_EDGES * size.x * granularity_multiplier).floor();
    let cols = (NUM_EDGES * size.y * granularity_multiplier).floor();
    if rows < 1.0 {
        return Err(TerrainError::InvalidDimension {
            name: "num_edges.0",
            value: rows,
        });
    }
    if cols < 1.0 {
        return Err(TerrainError::InvalidDimension {
            name: "num_edges.1",
            value: cols,
        });
    }
    Ok(GridSize::new(rows as usize, cols as usize)?)
}

/// Coherent noise over the grid; values lie roughly in `[-1, 1]`.
///
/// `density` scales the sample coordinates, so larger values give a
/// coarser-looking, higher-frequency surface.
pub fn rugged_heightmap(
    sampler: &NoiseSampler,
    size: DVec2,
    num_edges: GridSize,
    density: f64,
) -> Result<Heightmap> {
    check_dimension("size.x", size.x)?;
    check_dimension("size.y", size.y)?;
    check_parameter("density", density)?;

    let nx = num_edges.rows() as f64;
    let ny = num_edges.cols() as f64;
    let fx = RUGGED_FREQUENCY * size.x * density;
    let fy = RUGGED_FREQUENCY * size.y * density;

    Ok(Heightmap::from_fn(num_edges, |row, col| {
        sampler.sample(col as f64 / nx * fx, row as f64 / ny * fy)
    }))
}

/// Radial paraboloid: squared distance from the center in `[-1, 1]`
/// normalized coordinates, and exactly `0.0` outside the unit disk.
///
/// The rim is a hard cutoff: a cell at radius exactly 1.0 keeps its value 1.0,
/// the next cell out drops to 0.0. Rim cells whose squared radius rounds one
/// ulp above 1.0 still pass the `sqrt` test, so inside values are capped at 1.0.
pub fn bowl_heightmap(num_edges: GridSize) -> Heightmap {
    let nx = num_edges.rows() as f64;
    let ny = num_edges.cols() as f64;

    Heightmap::from_fn(num_edges, |row, col| {
        let u = col as f64 / nx * 2.0 - 1.0;
        let v = row as f64 / ny * 2.0 - 1.0;
        let r2 = u * u + v * v;
        if r2.sqrt() <= 1.0 {
            r2.min(1.0)
        } else {
            0.0
        }
    })
}

/// Zero every column with index `< col`. Columns past the grid are ignored.
pub fn flatten_columns_before(heights: Heightmap, col: usize) -> Heightmap {
    heights.map_cells(|_, c, v| if c < col { 0.0 } else { v })
}

/// `(a * wa + b * wb) / (wa + wb)`, cell by cell.
pub fn weighted_blend(a: &Heightmap, wa: f64, b: &Heightmap, wb: f64) -> Result<Heightmap> {
    if a.grid() != b.grid() {
        return Err(TerrainError::ShapeMismatch {
            left: a.grid(),
            right: b.grid(),
        });
    }
    let total = wa + wb;
    if total == 0.0 {
        return Err(TerrainError::DegenerateExtent {
            first: wa,
            second: wb,
        });
    }

    let values = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(&x, &y)| (wa * x + wb * y) / total)
        .collect();
    Ok(Heightmap::from_values(a.grid(), values)?)
}
