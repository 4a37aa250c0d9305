//! Scene description types consumed by the simulator.
//!
//! This crate provides the value types a terrain is assembled from:
//! - Poses for placing geometry
//! - Plane and heightmap geometry with optional textures
//! - The terrain record itself

pub mod geometry;
pub mod heightmap;
pub mod pose;
pub mod texture;

pub use geometry::*;
pub use heightmap::*;
pub use pose::*;
pub use texture::*;

// Re-export commonly used types
pub use glam::{DQuat, DVec2, DVec3};
