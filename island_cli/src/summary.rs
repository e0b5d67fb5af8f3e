use island_core::{GenerationResult, PlacementRecord};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IslandSummary {
    pub size: u32,
    pub terrain_offset: [f32; 2],
    pub land_cells: usize,
    pub water_cells: usize,
    pub land_ratio: f32,
    pub terrain_triangles: usize,
    pub wall_quads: usize,
    pub layers: Vec<LayerSummary>,
}

#[derive(Debug, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub count: usize,
    pub placements: Vec<PlacementEntry>,
}

#[derive(Debug, Serialize)]
pub struct PlacementEntry {
    pub position: [f32; 3],
    pub rotation_y_degrees: f32,
    pub uniform_scale: f32,
    pub variant: String,
}

impl IslandSummary {
    /// `variants` resolves a layer name and variant index to its prefab handle.
    pub fn from_result(
        result: &GenerationResult,
        variants: impl Fn(&str, usize) -> String,
        include_placements: bool,
    ) -> Self {
        let stats = &result.stats;
        let layers = result
            .props
            .iter()
            .map(|scatter| LayerSummary {
                name: scatter.layer.clone(),
                count: scatter.len(),
                placements: if include_placements {
                    scatter
                        .placements
                        .iter()
                        .map(|p| PlacementEntry::new(p, variants(&scatter.layer, p.variant_index)))
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Self {
            size: stats.size,
            terrain_offset: [result.terrain_offset.x, result.terrain_offset.y],
            land_cells: stats.land_cells,
            water_cells: stats.water_cells,
            land_ratio: stats.land_ratio(),
            terrain_triangles: stats.terrain_triangles,
            wall_quads: stats.wall_quads,
            layers,
        }
    }
}

impl PlacementEntry {
    fn new(record: &PlacementRecord, variant: String) -> Self {
        Self {
            position: record.position.to_array(),
            rotation_y_degrees: record.rotation_y_degrees,
            uniform_scale: record.uniform_scale,
            variant,
        }
    }
}
