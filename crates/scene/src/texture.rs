//! Surface texture descriptors.
//!
//! These are plain values: the simulator resolves the referenced image file
//! lazily when it loads the scene, nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const GRAY: Self = Self::new(128, 128, 128, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// How a texture is projected onto geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapType {
    #[default]
    Cube,
    Map2d,
    Skybox,
}

/// An external bitmap resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureReference {
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    /// Path relative to the simulator's working directory.
    pub file: String,
}

impl TextureReference {
    pub fn new(content_type: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            file: file.into(),
        }
    }

    /// PNG image at `file`.
    pub fn png(file: impl Into<String>) -> Self {
        Self::new("image/png", file)
    }
}

/// Procedural pattern the simulator draws when no image is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextureKind {
    #[default]
    Flat,
    Checker,
    Gradient,
    Image,
}

/// Immutable texture description attached to a geometry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Texture {
    pub kind: TextureKind,
    pub base_color: Color,
    pub primary_color: Color,
    pub secondary_color: Color,
    pub map_type: MapType,
    /// Tiling repeat along the two surface axes.
    pub repeat: (u32, u32),
    pub reference: Option<TextureReference>,
}

impl Default for Texture {
    fn default() -> Self {
        Self {
            kind: TextureKind::Flat,
            base_color: Color::WHITE,
            primary_color: Color::WHITE,
            secondary_color: Color::BLACK,
            map_type: MapType::Cube,
            repeat: (1, 1),
            reference: None,
        }
    }
}

impl Texture {
    /// Whether the simulator has to load an image for this texture.
    pub fn is_image(&self) -> bool {
        self.reference.is_some()
    }
}
