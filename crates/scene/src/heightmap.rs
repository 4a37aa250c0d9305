//! Height field data handed to the simulator as terrain geometry.
//!
//! A [`Heightmap`] is a row-major grid of `f64` elevations whose shape always
//! equals the [`GridSize`] it was created with. Values are unconstrained; the
//! owning [`GeometryHeightmap`](crate::GeometryHeightmap) declares the vertical
//! extent they are expected to fit in.

use std::fmt;

use thiserror::Error;

/// Errors raised while constructing grid-shaped data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    #[error("expected {expected} values for a {grid} grid, got {found}")]
    ShapeMismatch {
        grid: GridSize,
        expected: usize,
        found: usize,
    },
}

/// Resolution of a heightmap: `rows x cols`, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// A constructed grid is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// 2D grid of elevation values.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    grid: GridSize,
    values: Vec<f64>,
}

impl Heightmap {
    /// All-zero heightmap.
    pub fn zeros(grid: GridSize) -> Self {
        Self {
            grid,
            values: vec![0.0; grid.len()],
        }
    }

    /// Evaluate `f(row, col)` for every cell.
    pub fn from_fn(grid: GridSize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(grid.len());
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                values.push(f(row, col));
            }
        }
        Self { grid, values }
    }

    /// Wrap row-major values; the length must match the grid exactly.
    pub fn from_values(grid: GridSize, values: Vec<f64>) -> Result<Self, GridError> {
        if values.len() != grid.len() {
            return Err(GridError::ShapeMismatch {
                grid,
                expected: grid.len(),
                found: values.len(),
            });
        }
        Ok(Self { grid, values })
    }

    #[inline]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols
    }

    /// Height at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.grid.rows && col < self.grid.cols {
            Some(self.values[self.grid.index(row, col)])
        } else {
            None
        }
    }

    /// Row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.grid.index(row, 0);
        &self.values[start..start + self.grid.cols]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest absolute height.
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    /// True when every value lies in `[-extent, extent]`.
    pub fn fits_within(&self, extent: f64) -> bool {
        self.values.iter().all(|v| v.abs() <= extent)
    }

    /// Apply `f` to every value, keeping the shape.
    pub fn map(mut self, mut f: impl FnMut(f64) -> f64) -> Self {
        for v in &mut self.values {
            *v = f(*v);
        }
        self
    }

    /// Apply `f(row, col, value)` to every value, keeping the shape.
    pub fn map_cells(mut self, mut f: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let cols = self.grid.cols;
        for (i, v) in self.values.iter_mut().enumerate() {
            *v = f(i / cols, i % cols, *v);
        }
        self
    }

    /// Multiply every value by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Raw native-endian bytes of the row-major values.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}
