//! Texture presets understood by the simulator.
//!
//! Each preset is a plain [`Texture`] value; two presets built from the same
//! arguments compare and hash equal.

use scene::{Color, MapType, Texture, TextureKind, TextureReference};

/// Image shipped next to the simulator binary for sandy ground.
pub const SAND_TEXTURE_FILE: &str = "./sand.png";

/// Sand is tiled densely so individual grains stay small.
pub const SAND_REPEAT: (u32, u32) = (100, 100);

/// Light checker squares on the textured patch of the mixed terrain.
pub const CHECKER_LIGHT: Color = Color::new(170, 170, 180, 255);

/// Dark checker squares on the textured patch of the mixed terrain.
pub const CHECKER_DARK: Color = Color::new(150, 150, 150, 255);

/// Sand image texture with the default reference.
pub fn sand(map_type: MapType) -> Texture {
    sand_with_reference(map_type, TextureReference::png(SAND_TEXTURE_FILE))
}

/// Sand texture backed by a custom image.
pub fn sand_with_reference(map_type: MapType, reference: TextureReference) -> Texture {
    Texture {
        kind: TextureKind::Image,
        map_type,
        repeat: SAND_REPEAT,
        reference: Some(reference),
        ..Default::default()
    }
}

/// Two-color checkerboard.
pub fn checker(primary: Color, secondary: Color, map_type: MapType) -> Texture {
    Texture {
        kind: TextureKind::Checker,
        primary_color: primary,
        secondary_color: secondary,
        map_type,
        ..Default::default()
    }
}

/// Single solid color.
pub fn flat(color: Color) -> Texture {
    Texture {
        kind: TextureKind::Flat,
        base_color: color,
        primary_color: color,
        ..Default::default()
    }
}

/// Vertical gradient from `primary` to `secondary`.
pub fn gradient(primary: Color, secondary: Color, map_type: MapType) -> Texture {
    Texture {
        kind: TextureKind::Gradient,
        primary_color: primary,
        secondary_color: secondary,
        map_type,
        ..Default::default()
    }
}
