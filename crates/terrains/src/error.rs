//! Errors raised while building terrains.

use scene::{GridError, GridSize};
use thiserror::Error;

/// Construction-time failure of a terrain builder or heightmap primitive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    /// A world size axis, or the resolution derived from it, is not positive.
    #[error("invalid dimension `{name}`: {value} (must be finite and > 0)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A shaping parameter is negative or not finite.
    #[error("invalid parameter `{name}`: {value} (must be finite and >= 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Blend weights sum to zero, so there is no height extent to normalize by.
    #[error("blend weights {first} and {second} sum to zero")]
    DegenerateExtent { first: f64, second: f64 },

    /// Two heightmaps that must be combined have different grids.
    #[error("heightmap grids differ: {left} vs {right}")]
    ShapeMismatch { left: GridSize, right: GridSize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, TerrainError>;

/// Require a finite, strictly positive dimension.
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TerrainError::InvalidDimension { name, value })
    }
}

/// Require a finite, non-negative parameter.
pub(crate) fn check_parameter(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TerrainError::InvalidParameter { name, value })
    }
}
