use bevy::render::{
    render_asset::RenderAssetUsages,
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::{Image, ImageSampler},
};

use crate::{config::PaletteConfig, grid::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilter {
    /// Point sampling: one texel per grid cell, no blending.
    #[default]
    Nearest,
    Linear,
}

/// Row-major RGBA8 texture, one texel per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub size: u32,
    pub pixels: Vec<[u8; 4]>,
    pub filter: TextureFilter,
}

impl TextureData {
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.size && y < self.size);
        self.pixels[(y * self.size + x) as usize]
    }

    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert into a Bevy image for the material-binding host.
    pub fn to_bevy_image(&self) -> Image {
        let mut image = Image::new(
            Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.to_rgba_bytes(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        image.sampler = match self.filter {
            TextureFilter::Nearest => ImageSampler::nearest(),
            TextureFilter::Linear => ImageSampler::linear(),
        };
        image
    }
}

/// Paint water and land texels from the palette.
pub fn build_texture(grid: &Grid, palette: &PaletteConfig) -> TextureData {
    let pixels = grid
        .cells()
        .iter()
        .map(|cell| {
            if cell.is_water() {
                palette.water
            } else {
                palette.land
            }
        })
        .collect();

    TextureData {
        size: grid.size(),
        pixels,
        filter: TextureFilter::Nearest,
    }
}
