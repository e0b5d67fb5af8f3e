//! Vegetation scatter over land cells.
//!
//! Each prop layer samples its own noise field at an independently drawn
//! offset and compares it against a per-cell random threshold in
//! `[0, density]`. Troughs in the noise collect props, peaks stay sparse.

use std::ops::RangeInclusive;

use bevy::math::Vec3;
use rand::Rng;

use crate::{
    config::PropLayerConfig,
    grid::Grid,
    noise_field::{NoiseField, NoiseOffset},
};

pub const YAW_RANGE_DEGREES: f32 = 360.0;
pub const SCALE_RANGE: RangeInclusive<f32> = 0.8..=1.2;

/// One prop instance for the host to spawn under the generation root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    pub position: Vec3,
    pub rotation_y_degrees: f32,
    pub uniform_scale: f32,
    pub variant_index: usize,
}

/// Placements produced by one prop layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PropScatter {
    pub layer: String,
    pub offset: NoiseOffset,
    pub placements: Vec<PlacementRecord>,
}

impl PropScatter {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Scatter `layer` across the land cells of `grid`.
///
/// Draw order is fixed: the noise offset, then per land cell (row order) the
/// threshold and, for placed props, variant, yaw and scale. Water cells
/// consume no draws.
pub fn scatter_layer<R: Rng>(grid: &Grid, layer: &PropLayerConfig, rng: &mut R) -> PropScatter {
    let offset = NoiseOffset::random(rng);
    let noise = NoiseField::new(layer.scale, offset).build(grid.size());
    let variant_count = layer.variants.len();

    let mut placements = Vec::new();
    for (x, y) in grid.land_cells() {
        let threshold = rng.gen_range(0.0..=layer.density);
        if noise.sample(x, y) >= threshold {
            continue;
        }
        placements.push(PlacementRecord {
            position: Vec3::new(x as f32, 0.0, y as f32),
            variant_index: rng.gen_range(0..variant_count),
            rotation_y_degrees: rng.gen_range(0.0..YAW_RANGE_DEGREES),
            uniform_scale: rng.gen_range(SCALE_RANGE),
        });
    }

    tracing::debug!(
        target: "island::scatter",
        layer = %layer.name,
        placed = placements.len(),
        density = layer.density,
        "scatter.layer.placed"
    );

    PropScatter {
        layer: layer.name.clone(),
        offset,
        placements,
    }
}
