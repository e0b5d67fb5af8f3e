//! Procedural island generation core.
//!
//! Builds a land/water grid from Perlin noise and a square falloff, then turns
//! it into a top-surface mesh, cliff walls, a one-texel-per-cell texture and
//! vegetation placements. [`generate()`] is the engine-agnostic entry point;
//! [`build_headless_app`] wires it into a Bevy `Startup` schedule.

pub mod config;
mod edge_mesh;
mod falloff;
mod field;
mod generate;
mod grid;
mod mesh;
pub mod metrics;
mod noise_field;
mod scatter;
mod terrain_mesh;
mod texture;

use std::sync::Arc;

use bevy::prelude::*;

pub use config::{
    load_island_config_from_env, IslandConfig, IslandConfigError, IslandConfigHandle,
    PaletteConfig, PropLayerConfig,
};
pub use edge_mesh::{build_edge_mesh, wall_corners, WALL_DEPTH};
pub use falloff::{build_falloff_field, falloff_value};
pub use field::ScalarField;
pub use generate::{generate, generate_seeded, GenerationError, GenerationResult};
pub use grid::{classify, Cell, Direction, Grid};
pub use mesh::MeshData;
pub use metrics::IslandStats;
pub use noise_field::{NoiseField, NoiseOffset, OFFSET_RANGE};
pub use scatter::{scatter_layer, PlacementRecord, PropScatter, SCALE_RANGE};
pub use terrain_mesh::build_terrain_mesh;
pub use texture::{build_texture, TextureData, TextureFilter};

/// Output of the startup generation pass, shared with host systems.
#[derive(Resource, Debug, Clone)]
pub struct GeneratedIsland(pub Arc<GenerationResult>);

impl GeneratedIsland {
    pub fn get(&self) -> Arc<GenerationResult> {
        Arc::clone(&self.0)
    }
}

/// Construct a Bevy [`App`] that generates one island on startup.
///
/// After the first `update`, the world holds a [`GeneratedIsland`] resource
/// unless the configuration was rejected.
pub fn build_headless_app(config: Arc<IslandConfig>) -> App {
    let mut app = App::new();
    app.insert_resource(IslandConfigHandle::new(config))
        .add_plugins(MinimalPlugins)
        .add_systems(Startup, generate_island_on_startup);
    app
}

pub fn generate_island_on_startup(mut commands: Commands, config: Res<IslandConfigHandle>) {
    match generate_seeded(&config.get()) {
        Ok(result) => {
            commands.insert_resource(GeneratedIsland(Arc::new(result)));
        }
        Err(err) => {
            tracing::error!(
                target: "island::mapgen",
                error = %err,
                "mapgen.island.rejected"
            );
        }
    }
}
