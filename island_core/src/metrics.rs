use crate::{grid::Grid, mesh::MeshData, scatter::PropScatter};

/// Summary counts for one generation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IslandStats {
    pub size: u32,
    pub land_cells: usize,
    pub water_cells: usize,
    pub terrain_triangles: usize,
    pub wall_quads: usize,
    pub props: Vec<(String, usize)>,
}

impl IslandStats {
    pub fn collect(
        grid: &Grid,
        terrain: &MeshData,
        edges: &MeshData,
        props: &[PropScatter],
    ) -> Self {
        let land_cells = grid.land_count();
        Self {
            size: grid.size(),
            land_cells,
            water_cells: grid.cells().len() - land_cells,
            terrain_triangles: terrain.triangle_count(),
            wall_quads: edges.quad_count(),
            props: props
                .iter()
                .map(|scatter| (scatter.layer.clone(), scatter.len()))
                .collect(),
        }
    }

    pub fn land_ratio(&self) -> f32 {
        let total = self.land_cells + self.water_cells;
        if total == 0 {
            0.0
        } else {
            self.land_cells as f32 / total as f32
        }
    }

    pub fn total_props(&self) -> usize {
        self.props.iter().map(|(_, count)| count).sum()
    }
}
