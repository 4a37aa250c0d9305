//! Static geometry shapes that make up a terrain.

use glam::{DVec2, DVec3};

use crate::heightmap::Heightmap;
use crate::pose::Pose;
use crate::texture::Texture;

/// Infinite-looking flat ground, bounded by `size` for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryPlane {
    pub pose: Pose,
    pub mass: f64,
    /// Width and depth of the plane.
    pub size: DVec2,
    pub texture: Option<Texture>,
}

impl GeometryPlane {
    pub fn new(pose: Pose, mass: f64, size: DVec2) -> Self {
        Self {
            pose,
            mass,
            size,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Height field geometry.
///
/// `size` is `(width, depth, max_height)`: the heights are expected to lie in
/// `[-max_height, max_height]` and `base_thickness` is the solid slab below
/// the lowest point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryHeightmap {
    pub pose: Pose,
    pub mass: f64,
    pub size: DVec3,
    pub base_thickness: f64,
    pub heights: Heightmap,
    pub texture: Option<Texture>,
}

impl GeometryHeightmap {
    pub fn new(pose: Pose, mass: f64, size: DVec3, base_thickness: f64, heights: Heightmap) -> Self {
        Self {
            pose,
            mass,
            size,
            base_thickness,
            heights,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Declared vertical extent.
    #[inline]
    pub fn max_height(&self) -> f64 {
        self.size.z
    }

    /// True when the heights fit the declared vertical extent.
    pub fn is_within_extent(&self) -> bool {
        self.heights.fits_within(self.max_height())
    }
}

/// One entry in a terrain's static geometry list.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Plane(GeometryPlane),
    Heightmap(GeometryHeightmap),
}

impl Geometry {
    pub fn mass(&self) -> f64 {
        match self {
            Geometry::Plane(p) => p.mass,
            Geometry::Heightmap(h) => h.mass,
        }
    }

    pub fn texture(&self) -> Option<&Texture> {
        match self {
            Geometry::Plane(p) => p.texture.as_ref(),
            Geometry::Heightmap(h) => h.texture.as_ref(),
        }
    }

    pub fn as_plane(&self) -> Option<&GeometryPlane> {
        match self {
            Geometry::Plane(p) => Some(p),
            Geometry::Heightmap(_) => None,
        }
    }

    pub fn as_heightmap(&self) -> Option<&GeometryHeightmap> {
        match self {
            Geometry::Heightmap(h) => Some(h),
            Geometry::Plane(_) => None,
        }
    }
}

impl From<GeometryPlane> for Geometry {
    fn from(plane: GeometryPlane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<GeometryHeightmap> for Geometry {
    fn from(heightmap: GeometryHeightmap) -> Self {
        Geometry::Heightmap(heightmap)
    }
}

/// Bag of static geometry that the simulator loads as the ground.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Terrain {
    pub static_geometry: Vec<Geometry>,
}

impl Terrain {
    pub fn new(static_geometry: Vec<Geometry>) -> Self {
        Self { static_geometry }
    }

    /// Every heightmap entry, in order.
    pub fn heightmaps(&self) -> impl Iterator<Item = &GeometryHeightmap> {
        self.static_geometry.iter().filter_map(Geometry::as_heightmap)
    }

    /// Every plane entry, in order.
    pub fn planes(&self) -> impl Iterator<Item = &GeometryPlane> {
        self.static_geometry.iter().filter_map(Geometry::as_plane)
    }
}
