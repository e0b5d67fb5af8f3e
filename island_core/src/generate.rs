use rand::{rngs::SmallRng, Rng, SeedableRng};
use thiserror::Error;

use crate::{
    config::IslandConfig,
    edge_mesh::build_edge_mesh,
    falloff::build_falloff_field,
    grid::{classify, Grid},
    mesh::MeshData,
    metrics::IslandStats,
    noise_field::{NoiseField, NoiseOffset},
    scatter::{scatter_layer, PropScatter},
    terrain_mesh::build_terrain_mesh,
    texture::{build_texture, TextureData},
};

/// Precondition violations reported before any generation work runs.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("grid size must be greater than zero")]
    EmptyGrid,
    #[error("noise scale for {layer} must be finite and positive, got {scale}")]
    InvalidScale { layer: String, scale: f32 },
    #[error("water level must be finite, got {0}")]
    InvalidWaterLevel(f32),
    #[error("density for prop layer {layer} must be finite and non-negative, got {density}")]
    InvalidDensity { layer: String, density: f32 },
    #[error("prop layer {0} has no variants")]
    NoVariants(String),
    #[error("prop layer {0} is configured more than once")]
    DuplicateLayer(String),
    #[error("noise field is {noise}x{noise} but falloff field is {falloff}x{falloff}")]
    FieldSizeMismatch { noise: u32, falloff: u32 },
}

/// Everything one generation pass hands back to the host.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub terrain_offset: NoiseOffset,
    pub grid: Grid,
    /// Top surface, textured with [`GenerationResult::texture`].
    pub terrain_mesh: MeshData,
    /// Cliff walls, meant to sit under the terrain with their own material.
    pub edge_mesh: MeshData,
    pub texture: TextureData,
    /// One entry per configured prop layer, in configuration order.
    pub props: Vec<PropScatter>,
    pub stats: IslandStats,
}

impl GenerationResult {
    pub fn props_for(&self, layer: &str) -> Option<&PropScatter> {
        self.props.iter().find(|scatter| scatter.layer == layer)
    }
}

/// Run the full pipeline: noise, falloff, classification, meshes, texture and
/// scatter, drawing every random value from `rng`.
pub fn generate<R: Rng>(
    config: &IslandConfig,
    rng: &mut R,
) -> Result<GenerationResult, GenerationError> {
    config.validate()?;
    let size = config.size;

    let terrain_offset = NoiseOffset::random(rng);
    let noise = NoiseField::new(config.scale, terrain_offset).build(size);
    let falloff = build_falloff_field(size);
    let grid = classify(&noise, &falloff, config.water_level)?;

    let terrain_mesh = build_terrain_mesh(&grid);
    let edge_mesh = build_edge_mesh(&grid);
    let texture = build_texture(&grid, &config.palette);

    let props: Vec<PropScatter> = config
        .props
        .iter()
        .map(|layer| scatter_layer(&grid, layer, rng))
        .collect();

    let stats = IslandStats::collect(&grid, &terrain_mesh, &edge_mesh, &props);
    tracing::info!(
        target: "island::mapgen",
        size,
        land_cells = stats.land_cells,
        water_cells = stats.water_cells,
        land_ratio = stats.land_ratio(),
        terrain_triangles = stats.terrain_triangles,
        wall_quads = stats.wall_quads,
        props = stats.total_props(),
        "mapgen.island.generated"
    );

    Ok(GenerationResult {
        terrain_offset,
        grid,
        terrain_mesh,
        edge_mesh,
        texture,
        props,
        stats,
    })
}

/// Generate with a `SmallRng` seeded from `config.seed`, or from entropy when
/// no seed is configured.
pub fn generate_seeded(config: &IslandConfig) -> Result<GenerationResult, GenerationError> {
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    tracing::debug!(target: "island::mapgen", seed = ?config.seed, "mapgen.rng.seeded");
    generate(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> IslandConfig {
        IslandConfig {
            size: 32,
            seed: Some(seed),
            ..IslandConfig::default()
        }
    }

    #[test]
    fn outputs_are_consistent_with_grid() {
        let result = generate_seeded(&small_config(42)).unwrap();
        let land = result.grid.land_count();

        assert_eq!(result.terrain_mesh.vertices.len(), 6 * land);
        assert_eq!(result.terrain_mesh.triangles.len(), 6 * land);
        assert_eq!(result.texture.pixels.len(), 32 * 32);
        assert_eq!(result.stats.land_cells, land);
        assert_eq!(result.props.len(), 2);
        assert!(result.props_for("trees").is_some());
        assert!(result.props_for("plants").is_some());
    }

    #[test]
    fn border_ring_is_water() {
        // Falloff saturates at 1 on the low border, so noise in [0, 1] can never
        // clear a non-negative water level there.
        let result = generate_seeded(&small_config(7)).unwrap();
        for i in 0..32 {
            assert!(result.grid.cell(i, 0).is_water());
            assert!(result.grid.cell(0, i).is_water());
        }
    }

    #[test]
    fn same_seed_reproduces_island() {
        let a = generate_seeded(&small_config(1234)).unwrap();
        let b = generate_seeded(&small_config(1234)).unwrap();
        assert_eq!(a.terrain_offset, b.terrain_offset);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.terrain_mesh, b.terrain_mesh);
        assert_eq!(a.edge_mesh, b.edge_mesh);
        assert_eq!(a.props, b.props);
    }

    #[test]
    fn layer_offsets_are_independent() {
        let result = generate_seeded(&small_config(99)).unwrap();
        let trees = result.props_for("trees").unwrap().offset;
        let plants = result.props_for("plants").unwrap().offset;
        assert_ne!(trees, plants);
        assert_ne!(trees, result.terrain_offset);
    }

    #[test]
    fn invalid_config_fails_before_generation() {
        let config = IslandConfig {
            size: 0,
            ..IslandConfig::default()
        };
        assert_eq!(
            generate_seeded(&config).unwrap_err(),
            GenerationError::EmptyGrid
        );
    }

    #[test]
    fn single_cell_map_is_all_water() {
        let config = IslandConfig {
            size: 1,
            seed: Some(3),
            ..IslandConfig::default()
        };
        let result = generate_seeded(&config).unwrap();
        assert!(result.grid.cell(0, 0).is_water());
        assert!(result.terrain_mesh.is_empty());
        assert!(result.edge_mesh.is_empty());
        assert_eq!(result.stats.total_props(), 0);
    }
}
