//! Grayscale PNG previews of heightmaps.

use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use scene::Heightmap;
use std::path::Path;

/// Map heights onto `[0, 255]`, lowest cell black, highest white.
/// Columns run along x and rows along y; a perfectly flat map is all black.
pub fn heightmap_image(heights: &Heightmap) -> GrayImage {
    let minv = heights.min();
    let span = (heights.max() - minv).max(1e-12);

    let mut img = GrayImage::new(heights.cols() as u32, heights.rows() as u32);
    for row in 0..heights.rows() {
        for (col, &h) in heights.row(row).iter().enumerate() {
            let v = (h - minv) / span;
            let g = (v * 255.0).round().clamp(0.0, 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([g]));
        }
    }
    img
}

pub fn write_heightmap_png(path: &Path, heights: &Heightmap) -> Result<()> {
    heightmap_image(heights)
        .save(path)
        .with_context(|| format!("writing heightmap preview {}", path.display()))
}
